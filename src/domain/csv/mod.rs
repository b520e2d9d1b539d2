// ============================================================
// CSV DOMAIN LAYER
// ============================================================
// Record types for the reshaped summary feed
// No I/O, no async

mod summary_row;

pub use summary_row::{SummaryRow, SUMMARY_HEADER};
