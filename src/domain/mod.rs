pub mod error;

// Summary feed record types
pub mod csv;
