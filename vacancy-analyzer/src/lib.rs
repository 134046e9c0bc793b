pub mod collector;
pub mod models;
pub mod report;

pub use collector::collect_language_statistics;
pub use models::{LanguageStats, StatsTable};
pub use report::format_table;
