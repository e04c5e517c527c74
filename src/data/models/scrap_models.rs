use chrono::NaiveDateTime;
use diesel::Insertable;
use serde::Serialize;

use crate::schema::scraps;

#[derive(Insertable)]
#[diesel(table_name = scraps)]
pub struct NewScrap {
    pub user_id: i32,
    pub interview_id: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Serialize)]
pub struct ScrapResponse {
    pub interview_id: i32,
    pub scraps_me: bool,
    pub scraps_count: i64,
}
