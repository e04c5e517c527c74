use std::collections::HashMap;

use chrono::NaiveDateTime;
use diesel::dsl::{count_star, exists};
use diesel::prelude::*;

use crate::data::models::NewScrap;
use crate::schema::scraps;

pub struct ScrapRepository;

impl ScrapRepository {
    /// Returns false when the user had already scrapped the interview
    pub fn insert(
        conn: &mut SqliteConnection,
        user_id: i32,
        interview_id: i32,
        now: NaiveDateTime,
    ) -> Result<bool, diesel::result::Error> {
        let inserted = diesel::insert_into(scraps::table)
            .values(&NewScrap {
                user_id,
                interview_id,
                created_at: now,
            })
            .on_conflict((scraps::user_id, scraps::interview_id))
            .do_nothing()
            .execute(conn)?;

        Ok(inserted > 0)
    }

    pub fn delete(
        conn: &mut SqliteConnection,
        user_id: i32,
        interview_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(
            scraps::table
                .filter(scraps::user_id.eq(user_id))
                .filter(scraps::interview_id.eq(interview_id)),
        )
        .execute(conn)
    }

    pub fn exists(
        conn: &mut SqliteConnection,
        user_id: i32,
        interview_id: i32,
    ) -> Result<bool, diesel::result::Error> {
        diesel::select(exists(
            scraps::table
                .filter(scraps::user_id.eq(user_id))
                .filter(scraps::interview_id.eq(interview_id)),
        ))
        .get_result(conn)
    }

    pub fn count_by_interview(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<i64, diesel::result::Error> {
        scraps::table
            .filter(scraps::interview_id.eq(interview_id))
            .count()
            .get_result(conn)
    }

    /// Scrap totals keyed by interview id. Interviews without scraps are absent.
    pub fn counts_by_interview(
        conn: &mut SqliteConnection,
        ids: &[i32],
    ) -> Result<HashMap<i32, i64>, diesel::result::Error> {
        let rows = scraps::table
            .filter(scraps::interview_id.eq_any(ids.to_vec()))
            .group_by(scraps::interview_id)
            .select((scraps::interview_id, count_star()))
            .load::<(i32, i64)>(conn)?;

        Ok(rows.into_iter().collect())
    }

    /// Scraps per interview created in `[start, end)`
    pub fn counts_in_window(
        conn: &mut SqliteConnection,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Vec<(i32, i64)>, diesel::result::Error> {
        scraps::table
            .filter(scraps::created_at.ge(start))
            .filter(scraps::created_at.lt(end))
            .group_by(scraps::interview_id)
            .select((scraps::interview_id, count_star()))
            .load(conn)
    }

    pub fn delete_by_interview_id(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(scraps::table.filter(scraps::interview_id.eq(interview_id))).execute(conn)
    }
}
