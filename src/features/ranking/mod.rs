pub mod badge;
pub mod job;
pub mod period;
pub mod reranker;
pub mod scheduler;

pub use badge::Badge;
pub use job::WeeklyRankingJob;
pub use period::{RankingPeriod, WeeklyLabel};
pub use reranker::RankingEngine;
