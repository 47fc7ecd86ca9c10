pub mod adjuntos;
pub mod auth;
pub mod catalogos;
pub mod intervenciones;
pub mod medidas;
