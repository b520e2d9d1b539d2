pub mod use_cases;

pub use use_cases::daily_summary::DailySummaryUseCase;
pub use use_cases::summary_feed::SummaryFeedUseCase;
