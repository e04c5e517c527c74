use diesel::SqliteConnection;

use crate::data::models::{RankingError, WeeklyRanking};
use crate::data::repositories::{InterviewRepository, WeeklyRankingRepository};
use crate::features::ranking::{Badge, WeeklyLabel};

/// One entry moved up the board after a higher-ranked sibling left it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankShift {
    pub interview_id: i32,
    pub from: u32,
    pub to: u32,
    pub badge: Badge,
}

/// Keeps the weekly ranking dense when ranked interviews disappear
pub struct RankingEngine<'a> {
    conn: &'a mut SqliteConnection,
}

impl<'a> RankingEngine<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        RankingEngine { conn }
    }

    /// Removes `removed` from its period and moves every entry below it up one
    /// place, rewriting both the ranking badge and the interview's mirror.
    ///
    /// The remaining count is taken after the removed row is gone, so the
    /// entries to shift are exactly ranks `rank + 1 ..= remaining + 1`. Ranks
    /// are walked in ascending order so each target slot is already free.
    pub fn remove_and_shift(
        &mut self,
        removed: &WeeklyRanking,
    ) -> Result<Vec<RankShift>, RankingError> {
        let period = removed.period();
        let rank = removed.rank();

        WeeklyRankingRepository::delete(self.conn, removed.ranking_id)?;
        let remaining = WeeklyRankingRepository::count_in_period(self.conn, period)? as u32;

        let mut shifts = Vec::new();
        for old_rank in (rank + 1)..=(remaining + 1) {
            let entry = WeeklyRankingRepository::find_by_period_rank(self.conn, period, old_rank)?
                .ok_or(RankingError::InconsistentRankingState {
                    interview_id: removed.interview_id,
                    period,
                    expected_rank: old_rank,
                })?;

            let new_rank = old_rank - 1;
            let badge = Badge::for_rank(new_rank);

            WeeklyRankingRepository::update_position(self.conn, entry.ranking_id, new_rank, badge)?;
            if InterviewRepository::update_badge(self.conn, entry.interview_id, badge.as_str())? == 0 {
                return Err(RankingError::MissingInterview(entry.interview_id));
            }

            log::info!(
                "Interview {} moved from {} to {}",
                entry.interview_id,
                entry.label(),
                WeeklyLabel::new(period, new_rank)
            );

            shifts.push(RankShift {
                interview_id: entry.interview_id,
                from: old_rank,
                to: new_rank,
                badge,
            });
        }

        Ok(shifts)
    }
}
