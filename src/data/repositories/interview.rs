use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::data::models::{Category, Interview};
use crate::schema::{interviews, questions};

pub struct InterviewRepository;

impl InterviewRepository {
    pub fn find_by_id(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<Option<Interview>, diesel::result::Error> {
        interviews::table
            .find(interview_id)
            .select(Interview::as_select())
            .first(conn)
            .optional()
    }

    pub fn update_note(
        conn: &mut SqliteConnection,
        interview_id: i32,
        note: &str,
        is_public: bool,
        now: NaiveDateTime,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(interviews::table.find(interview_id))
            .set((
                interviews::note.eq(note),
                interviews::is_public.eq(is_public),
                interviews::updated_at.eq(now),
            ))
            .execute(conn)
    }

    /// Overwrites the mirrored ranking badge. Returns the number of rows touched.
    pub fn update_badge(
        conn: &mut SqliteConnection,
        interview_id: i32,
        badge: &str,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(interviews::table.find(interview_id))
            .set(interviews::badge.eq(badge))
            .execute(conn)
    }

    pub fn mark_thumbnail_converted(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(interviews::table.find(interview_id))
            .set(interviews::is_thumbnail_converted.eq(true))
            .execute(conn)
    }

    pub fn delete_by_id(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(interviews::table.find(interview_id)).execute(conn)
    }

    /// Public, finished interviews newest first
    pub fn list_public(
        conn: &mut SqliteConnection,
        category: Option<Category>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Interview>, diesel::result::Error> {
        Self::public_query(category)
            .select(Interview::as_select())
            .order((interviews::created_at.desc(), interviews::interview_id.desc()))
            .offset(offset)
            .limit(limit)
            .load(conn)
    }

    /// Every public, finished interview, for orderings computed outside SQL
    pub fn list_all_public(
        conn: &mut SqliteConnection,
        category: Option<Category>,
    ) -> Result<Vec<Interview>, diesel::result::Error> {
        Self::public_query(category)
            .select(Interview::as_select())
            .order((interviews::created_at.desc(), interviews::interview_id.desc()))
            .load(conn)
    }

    pub fn count_public(
        conn: &mut SqliteConnection,
        category: Option<Category>,
    ) -> Result<i64, diesel::result::Error> {
        Self::public_query(category).count().get_result(conn)
    }

    pub fn find_public_by_ids(
        conn: &mut SqliteConnection,
        ids: &[i32],
    ) -> Result<Vec<Interview>, diesel::result::Error> {
        Self::public_query(None)
            .filter(interviews::interview_id.eq_any(ids.to_vec()))
            .select(Interview::as_select())
            .load(conn)
    }

    fn public_query(category: Option<Category>) -> interviews::BoxedQuery<'static, Sqlite> {
        let mut query = interviews::table
            .filter(interviews::is_public.eq(true))
            .filter(interviews::is_done.eq(true))
            .into_boxed();

        if let Some(category) = category {
            query = query.filter(
                interviews::question_id.eq_any(
                    questions::table
                        .filter(questions::category.eq(category.as_str()))
                        .select(questions::question_id),
                ),
            );
        }

        query
    }
}
