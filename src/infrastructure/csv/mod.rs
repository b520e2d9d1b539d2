// ============================================================
// CSV INFRASTRUCTURE LAYER
// ============================================================
// CSV parsing and serialization for the summary feed

mod csv_parser;
mod csv_writer;

pub use csv_parser::CsvParser;
pub use csv_writer::write_summary;
