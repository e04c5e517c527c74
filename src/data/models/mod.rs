pub mod comment_models;
pub mod error_models;
pub mod interview_models;
pub mod question_models;
pub mod ranking_models;
pub mod scrap_models;
pub mod user_models;

pub use comment_models::{
    Comment, CommentBody, CommentResponse, CreateCommentRequest, NewComment,
    UpdateCommentRequest,
};
pub use error_models::{ApiError, AuthError, RankingError};
pub use interview_models::{
    Interview, InterviewInfo, InterviewList, ListParams, Pagination,
    UpdateInterviewRequest, WeeklyStanding,
};
pub use question_models::{Category, Question, QuestionBody};
pub use ranking_models::{NewWeeklyRanking, RankingBoardEntry, WeeklyRanking};
pub use scrap_models::{NewScrap, ScrapResponse};
pub use user_models::{
    LoginRequest, NewUser, ProfileChanges, RegisterRequest, UpdateProfileRequest, User, UserBody,
};
