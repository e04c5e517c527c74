use diesel::prelude::*;

use crate::data::models::{NewWeeklyRanking, WeeklyRanking};
use crate::features::ranking::{Badge, RankingPeriod};
use crate::schema::weekly_rankings;

pub struct WeeklyRankingRepository;

impl WeeklyRankingRepository {
    pub fn find_by_interview_id(
        conn: &mut SqliteConnection,
        interview_id: i32,
    ) -> Result<Option<WeeklyRanking>, diesel::result::Error> {
        weekly_rankings::table
            .filter(weekly_rankings::interview_id.eq(interview_id))
            .select(WeeklyRanking::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_by_period_rank(
        conn: &mut SqliteConnection,
        period: RankingPeriod,
        rank: u32,
    ) -> Result<Option<WeeklyRanking>, diesel::result::Error> {
        weekly_rankings::table
            .filter(weekly_rankings::period_year.eq(period.year))
            .filter(weekly_rankings::period_month.eq(period.month as i32))
            .filter(weekly_rankings::period_week.eq(period.week as i32))
            .filter(weekly_rankings::ranking.eq(rank as i32))
            .select(WeeklyRanking::as_select())
            .first(conn)
            .optional()
    }

    pub fn count_in_period(
        conn: &mut SqliteConnection,
        period: RankingPeriod,
    ) -> Result<i64, diesel::result::Error> {
        weekly_rankings::table
            .filter(weekly_rankings::period_year.eq(period.year))
            .filter(weekly_rankings::period_month.eq(period.month as i32))
            .filter(weekly_rankings::period_week.eq(period.week as i32))
            .count()
            .get_result(conn)
    }

    pub fn list_in_period(
        conn: &mut SqliteConnection,
        period: RankingPeriod,
    ) -> Result<Vec<WeeklyRanking>, diesel::result::Error> {
        weekly_rankings::table
            .filter(weekly_rankings::period_year.eq(period.year))
            .filter(weekly_rankings::period_month.eq(period.month as i32))
            .filter(weekly_rankings::period_week.eq(period.week as i32))
            .order(weekly_rankings::ranking.asc())
            .select(WeeklyRanking::as_select())
            .load(conn)
    }

    /// Whole board, latest period first and best rank first within it
    pub fn list_all(
        conn: &mut SqliteConnection,
    ) -> Result<Vec<WeeklyRanking>, diesel::result::Error> {
        weekly_rankings::table
            .order((
                weekly_rankings::period_year.desc(),
                weekly_rankings::period_month.desc(),
                weekly_rankings::period_week.desc(),
                weekly_rankings::ranking.asc(),
            ))
            .select(WeeklyRanking::as_select())
            .load(conn)
    }

    pub fn update_position(
        conn: &mut SqliteConnection,
        ranking_id: i32,
        rank: u32,
        badge: Badge,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(weekly_rankings::table.find(ranking_id))
            .set((
                weekly_rankings::ranking.eq(rank as i32),
                weekly_rankings::badge.eq(badge.as_str()),
            ))
            .execute(conn)
    }

    pub fn insert(
        conn: &mut SqliteConnection,
        entry: &NewWeeklyRanking,
    ) -> Result<usize, diesel::result::Error> {
        diesel::insert_into(weekly_rankings::table)
            .values(entry)
            .execute(conn)
    }

    pub fn delete(
        conn: &mut SqliteConnection,
        ranking_id: i32,
    ) -> Result<usize, diesel::result::Error> {
        diesel::delete(weekly_rankings::table.find(ranking_id)).execute(conn)
    }

    pub fn delete_all(conn: &mut SqliteConnection) -> Result<usize, diesel::result::Error> {
        diesel::delete(weekly_rankings::table).execute(conn)
    }
}
