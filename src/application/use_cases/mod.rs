pub mod daily_summary;
pub mod summary_feed;
