mod medida;

pub use medida::{Medida, TipoMedida};
