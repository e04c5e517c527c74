use chrono::NaiveDateTime;
use diesel::{Identifiable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::data::models::{QuestionBody, UserBody};
use crate::schema::interviews;

/// A recorded answer to an interview question
#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = interviews)]
#[diesel(primary_key(interview_id))]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Interview {
    pub interview_id: i32,
    pub user_id: i32,
    pub question_id: i32,
    pub video_key: String,
    pub thumbnail_key: String,
    pub is_video_converted: bool,
    pub is_thumbnail_converted: bool,
    pub note: String,
    pub badge: String, // Mirror of the weekly ranking badge, "NONE" when unranked
    pub is_public: bool,
    pub is_done: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Request payload for editing an interview
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateInterviewRequest {
    #[validate(length(max = 1000, message = "Note must be at most 1000 characters"))]
    pub note: String,
    pub is_public: bool,
}

/// Query string of the interview list
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub sort: Option<String>,   // "new" (default) or "scrap"
    pub filter: Option<String>, // "ALL" (default) or a category
    pub page: Option<i64>,      // 1-based
    pub per_page: Option<i64>,
}

/// Where an interview placed in the weekly ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyStanding {
    pub month: u32,
    pub week: u32,
    pub ranking: u32,
}

#[derive(Debug, Serialize)]
pub struct InterviewInfo {
    pub id: i32,
    pub video: Option<String>,
    pub thumbnail: Option<String>,
    pub question: QuestionBody,
    pub user: UserBody,
    pub badge: String,
    pub note: String,
    pub scraps_me: Option<bool>, // None for anonymous viewers
    pub scraps_count: i64,
    pub comments_count: i64,
    pub is_public: bool,
    pub is_mine: Option<bool>, // None for anonymous viewers
    pub created_at: String,
    pub updated_at: String,
    pub weekly: Option<WeeklyStanding>,
}

#[derive(Debug, Serialize)]
pub struct Pagination {
    pub per_page: i64,
    pub total: i64,
    pub current_page: i64,
}

#[derive(Debug, Serialize)]
pub struct InterviewList {
    pub interviews: Vec<InterviewInfo>,
    pub pagination: Pagination,
}
