use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for validating case-file record numbers (expediente)
    /// Format: uppercase area code, four-digit year, sequence number
    /// - Valid: "MPE-2024-00123", "MPJ-2025-7", "MPI-2023-004511"
    /// - Invalid: "mpe-2024-1", "MPE-24-1", "MPE-2024-", "2024-MPE-1"
    pub static ref EXPEDIENTE_REGEX: Regex =
        Regex::new(r"^[A-Z]{2,5}-\d{4}-\d{1,6}$").unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expediente_regex_valid() {
        assert!(EXPEDIENTE_REGEX.is_match("MPE-2024-00123"));
        assert!(EXPEDIENTE_REGEX.is_match("MPJ-2025-7"));
        assert!(EXPEDIENTE_REGEX.is_match("MPI-2023-004511"));
        assert!(EXPEDIENTE_REGEX.is_match("SENAF-2024-1"));
    }

    #[test]
    fn test_expediente_regex_invalid() {
        assert!(!EXPEDIENTE_REGEX.is_match("mpe-2024-1")); // lowercase
        assert!(!EXPEDIENTE_REGEX.is_match("MPE-24-1")); // short year
        assert!(!EXPEDIENTE_REGEX.is_match("MPE-2024-")); // missing sequence
        assert!(!EXPEDIENTE_REGEX.is_match("2024-MPE-1")); // wrong order
        assert!(!EXPEDIENTE_REGEX.is_match("")); // empty
        assert!(!EXPEDIENTE_REGEX.is_match("MPE 2024 1")); // spaces
    }
}
