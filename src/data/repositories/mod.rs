pub mod comment;
pub mod interview;
pub mod question;
pub mod scrap;
pub mod user;
pub mod weekly_ranking;

pub use comment::CommentRepository;
pub use interview::InterviewRepository;
pub use question::QuestionRepository;
pub use scrap::ScrapRepository;
pub use user::UserRepository;
pub use weekly_ranking::WeeklyRankingRepository;
