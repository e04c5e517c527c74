use diesel::SqliteConnection;

use crate::data::models::{ApiError, ScrapResponse};
use crate::data::repositories::{InterviewRepository, ScrapRepository, UserRepository};

/// Bookmarking other users' answers
pub struct ScrapService<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> ScrapService<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        ScrapService { conn }
    }

    pub fn add(&mut self, user_id: i32, interview_id: i32) -> Result<ScrapResponse, ApiError> {
        self.ensure_visible(user_id, interview_id)?;

        let now = chrono::Utc::now().naive_utc();
        if !ScrapRepository::insert(self.conn, user_id, interview_id, now)? {
            return Err(ApiError::AlreadyScrapped);
        }

        self.response(user_id, interview_id)
    }

    /// Drops the user's own scrap. Works even after the interview went private.
    pub fn remove(&mut self, user_id: i32, interview_id: i32) -> Result<ScrapResponse, ApiError> {
        self.ensure_user(user_id)?;

        if ScrapRepository::delete(self.conn, user_id, interview_id)? == 0 {
            return Err(ApiError::ScrapNotFound);
        }

        self.response(user_id, interview_id)
    }

    fn ensure_user(&mut self, user_id: i32) -> Result<(), ApiError> {
        UserRepository::find_by_id(self.conn, user_id)?.ok_or(ApiError::UserNotFound)?;
        Ok(())
    }

    fn ensure_visible(&mut self, user_id: i32, interview_id: i32) -> Result<(), ApiError> {
        self.ensure_user(user_id)?;
        let interview = InterviewRepository::find_by_id(self.conn, interview_id)?
            .ok_or(ApiError::InterviewNotFound)?;

        if !interview.is_public && interview.user_id != user_id {
            return Err(ApiError::Forbidden("scrap this interview"));
        }
        Ok(())
    }

    fn response(&mut self, user_id: i32, interview_id: i32) -> Result<ScrapResponse, ApiError> {
        Ok(ScrapResponse {
            interview_id,
            scraps_me: ScrapRepository::exists(self.conn, user_id, interview_id)?,
            scraps_count: ScrapRepository::count_by_interview(self.conn, interview_id)?,
        })
    }
}
