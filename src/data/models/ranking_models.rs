use diesel::{Insertable, Queryable, Selectable};
use serde::Serialize;

use crate::features::ranking::{Badge, RankingPeriod, WeeklyLabel};
use crate::schema::weekly_rankings;

/// A persisted weekly winner: one interview placed at `ranking` in a period
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = weekly_rankings)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WeeklyRanking {
    pub ranking_id: i32,
    pub interview_id: i32,
    pub user_id: i32,
    pub question_id: i32,
    pub scrap_count: i64,
    pub badge: String,
    pub period_year: i32,
    pub period_month: i32,
    pub period_week: i32,
    pub ranking: i32,
}

impl WeeklyRanking {
    pub fn period(&self) -> RankingPeriod {
        RankingPeriod {
            year: self.period_year,
            month: self.period_month as u32,
            week: self.period_week as u32,
        }
    }

    pub fn rank(&self) -> u32 {
        self.ranking as u32
    }

    pub fn label(&self) -> WeeklyLabel {
        WeeklyLabel::new(self.period(), self.rank())
    }

    /// Badge as persisted. Unreadable values fall back to the rank's badge.
    pub fn stored_badge(&self) -> Badge {
        self.badge.parse().unwrap_or_else(|e| {
            log::warn!("Ranking {} has {}, using rank badge", self.ranking_id, e);
            Badge::for_rank(self.rank())
        })
    }
}

#[derive(Debug, Insertable)]
#[diesel(table_name = weekly_rankings)]
pub struct NewWeeklyRanking<'a> {
    pub interview_id: i32,
    pub user_id: i32,
    pub question_id: i32,
    pub scrap_count: i64,
    pub badge: &'a str,
    pub period_year: i32,
    pub period_month: i32,
    pub period_week: i32,
    pub ranking: i32,
}

/// One row of the champion board
#[derive(Debug, Serialize)]
pub struct RankingBoardEntry {
    pub interview_id: i32,
    pub user_id: i32,
    pub question_id: i32,
    pub ranking: u32,
    pub badge: Badge,
    pub scrap_count: i64,
    pub label: String,
}

impl From<&WeeklyRanking> for RankingBoardEntry {
    fn from(entry: &WeeklyRanking) -> Self {
        RankingBoardEntry {
            interview_id: entry.interview_id,
            user_id: entry.user_id,
            question_id: entry.question_id,
            ranking: entry.rank(),
            badge: entry.stored_badge(),
            scrap_count: entry.scrap_count,
            label: entry.label().to_string(),
        }
    }
}
