use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sql_types::Integer;

use crate::data::models::{Comment, NewComment};
use crate::schema::comments;

pub struct CommentRepository;

impl CommentRepository {
    pub fn create_comment(
        conn: &mut SqliteConnection,
        new_comment: &NewComment,
    ) -> Result<i32, diesel::result::Error> {
        diesel::insert_into(comments::table)
            .values(new_comment)
            .execute(conn)?;

        diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()")).get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut SqliteConnection,
        comment_id: i32,
    ) -> Result<Option<Comment>, diesel::result::Error> {
        comments::table
            .find(comment_id)
            .select(Comment::as_select())
            .first(conn)
            .optional()
    }

    pub fn list_by_interview(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<Vec<Comment>, diesel::result::Error> {
        comments::table
            .filter(comments::interview_id.eq(interview_id))
            .order((comments::created_at.asc(), comments::comment_id.asc()))
            .select(Comment::as_select())
            .load(conn)
    }

    pub fn count_by_interview(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<i64, diesel::result::Error> {
        comments::table
            .filter(comments::interview_id.eq(interview_id))
            .count()
            .get_result(conn)
    }

    pub fn update_contents(
        conn: &mut SqliteConnection,
        comment_id: i32,
        contents: &str,
        now: NaiveDateTime,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(comments::table.find(comment_id))
            .set((comments::contents.eq(contents), comments::updated_at.eq(now)))
            .execute(conn)
    }

    /// Deletes a comment together with the replies hanging off it
    pub fn delete_with_replies(
        conn: &mut SqliteConnection,
        comment_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        conn.transaction(|conn| {
            let replies =
                diesel::delete(comments::table.filter(comments::parent_id.eq(comment_id)))
                    .execute(conn)?;
            let own = diesel::delete(comments::table.find(comment_id)).execute(conn)?;
            Ok(replies + own)
        })
    }

    pub fn delete_by_interview_id(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(comments::table.filter(comments::interview_id.eq(interview_id)))
            .execute(conn)
    }
}
