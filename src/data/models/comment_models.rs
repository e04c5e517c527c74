use chrono::NaiveDateTime;
use diesel::{Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::data::models::UserBody;
use crate::schema::comments;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = comments)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Comment {
    pub comment_id: i32,
    pub user_id: i32,
    pub interview_id: i32,
    pub parent_id: Option<i32>,
    pub contents: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub user_id: i32,
    pub interview_id: i32,
    pub parent_id: Option<i32>,
    pub contents: &'a str,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1 to 500 characters"))]
    pub contents: String,
    pub parent_id: Option<i32>, // Root comment this one replies to
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1, max = 500, message = "Comment must be 1 to 500 characters"))]
    pub contents: String,
}

#[derive(Debug, Serialize)]
pub struct CommentBody {
    pub id: i32,
    pub user: UserBody,
    pub contents: String,
    pub is_mine: Option<bool>,
    pub parent_id: Option<i32>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Serialize)]
pub struct CommentResponse {
    pub comment: CommentBody,
}
