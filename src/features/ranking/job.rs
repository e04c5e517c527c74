use std::collections::HashMap;

use diesel::prelude::*;

use crate::data::models::{Interview, NewWeeklyRanking, RankingError, WeeklyRanking};
use crate::data::repositories::{InterviewRepository, ScrapRepository, WeeklyRankingRepository};
use crate::features::ranking::{Badge, RankingPeriod};

/// Rebuilds the champion board from the scraps collected during a period
#[derive(Debug, Clone)]
pub struct WeeklyRankingJob {
    size: usize,
}

impl WeeklyRankingJob {
    pub fn new(size: usize) -> Self {
        WeeklyRankingJob { size }
    }

    /// Replaces the board with the period's top interviews by scrap count.
    ///
    /// Only public, finished interviews compete. Ties go to the older
    /// interview, so running twice over the same data yields the same board.
    pub fn run(
        &self,
        conn: &mut SqliteConnection,
        period: RankingPeriod,
    ) -> Result<Vec<WeeklyRanking>, RankingError> {
        let (start, end) = period.window().ok_or(RankingError::InvalidPeriod(period))?;

        let board = conn.transaction::<_, RankingError, _>(|conn| {
            let counts = ScrapRepository::counts_in_window(conn, start, end)?;
            let ids: Vec<i32> = counts.iter().map(|(id, _)| *id).collect();

            let mut eligible: HashMap<i32, Interview> =
                InterviewRepository::find_public_by_ids(conn, &ids)?
                    .into_iter()
                    .map(|interview| (interview.interview_id, interview))
                    .collect();

            let mut standings: Vec<(Interview, i64)> = counts
                .into_iter()
                .filter_map(|(id, scraps)| eligible.remove(&id).map(|interview| (interview, scraps)))
                .collect();
            standings.sort_by(|a, b| {
                b.1.cmp(&a.1)
                    .then_with(|| a.0.interview_id.cmp(&b.0.interview_id))
            });
            standings.truncate(self.size);

            for previous in WeeklyRankingRepository::list_all(conn)? {
                InterviewRepository::update_badge(conn, previous.interview_id, Badge::Unranked.as_str())?;
            }
            WeeklyRankingRepository::delete_all(conn)?;

            for (position, (interview, scrap_count)) in standings.iter().enumerate() {
                let rank = position as u32 + 1;
                let badge = Badge::for_rank(rank);

                WeeklyRankingRepository::insert(
                    conn,
                    &NewWeeklyRanking {
                        interview_id: interview.interview_id,
                        user_id: interview.user_id,
                        question_id: interview.question_id,
                        scrap_count: *scrap_count,
                        badge: badge.as_str(),
                        period_year: period.year,
                        period_month: period.month as i32,
                        period_week: period.week as i32,
                        ranking: rank as i32,
                    },
                )?;
                InterviewRepository::update_badge(conn, interview.interview_id, badge.as_str())?;
            }

            Ok(WeeklyRankingRepository::list_in_period(conn, period)?)
        })?;

        log::info!("Weekly ranking for {} rebuilt with {} entries", period, board.len());
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{self, Fixture, at};

    // 2022-05-09 (Mon) .. 2022-05-16 (Mon)
    const PERIOD: RankingPeriod = RankingPeriod { year: 2022, month: 5, week: 3 };

    fn scrapped(fixture: &mut Fixture, interview_id: i32, times: usize) {
        for n in 0..times {
            let fan = fixture.user(&format!("fan{}-{}@example.com", interview_id, n));
            test_support::scrap(&mut fixture.conn, fan, interview_id, at(2022, 5, 10, 12));
        }
    }

    fn badge_of(fixture: &mut Fixture, interview_id: i32) -> String {
        InterviewRepository::find_by_id(&mut fixture.conn, interview_id)
            .unwrap()
            .unwrap()
            .badge
    }

    #[test]
    fn ranks_by_scrap_count_and_mirrors_badges() {
        let mut fixture = Fixture::new();
        let low = fixture.interview(true, true);
        let high = fixture.interview(true, true);
        let mid = fixture.interview(true, true);
        scrapped(&mut fixture, low, 1);
        scrapped(&mut fixture, high, 3);
        scrapped(&mut fixture, mid, 2);

        let board = WeeklyRankingJob::new(5).run(&mut fixture.conn, PERIOD).unwrap();

        let order: Vec<(i32, i32, &str, i64)> = board
            .iter()
            .map(|e| (e.interview_id, e.ranking, e.badge.as_str(), e.scrap_count))
            .collect();
        assert_eq!(
            order,
            vec![(high, 1, "Gold", 3), (mid, 2, "Silver", 2), (low, 3, "Bronze", 1)]
        );
        assert_eq!(badge_of(&mut fixture, high), "Gold");
        assert_eq!(badge_of(&mut fixture, low), "Bronze");
        assert!(board.iter().all(|e| e.period() == PERIOD));
    }

    #[test]
    fn keeps_only_the_configured_number_of_places() {
        let mut fixture = Fixture::new();
        let ids: Vec<i32> = (0..6).map(|_| fixture.interview(true, true)).collect();
        for (n, id) in ids.iter().enumerate() {
            scrapped(&mut fixture, *id, n + 1);
        }

        let board = WeeklyRankingJob::new(5).run(&mut fixture.conn, PERIOD).unwrap();

        assert_eq!(board.len(), 5);
        assert_eq!(board[0].interview_id, ids[5]);
        assert_eq!(board[4].badge, "NONE");
        assert!(!board.iter().any(|e| e.interview_id == ids[0]));
    }

    #[test]
    fn ties_go_to_the_older_interview() {
        let mut fixture = Fixture::new();
        let older = fixture.interview(true, true);
        let newer = fixture.interview(true, true);
        scrapped(&mut fixture, newer, 2);
        scrapped(&mut fixture, older, 2);

        let board = WeeklyRankingJob::new(5).run(&mut fixture.conn, PERIOD).unwrap();

        assert_eq!(board[0].interview_id, older);
        assert_eq!(board[1].interview_id, newer);
    }

    #[test]
    fn private_unfinished_and_out_of_window_scraps_do_not_count() {
        let mut fixture = Fixture::new();
        let private = fixture.interview(false, true);
        let unfinished = fixture.interview(true, false);
        let late = fixture.interview(true, true);
        let counted = fixture.interview(true, true);
        scrapped(&mut fixture, private, 4);
        scrapped(&mut fixture, unfinished, 4);
        scrapped(&mut fixture, counted, 1);
        let fan = fixture.user("late@example.com");
        test_support::scrap(&mut fixture.conn, fan, late, at(2022, 5, 16, 0));

        let board = WeeklyRankingJob::new(5).run(&mut fixture.conn, PERIOD).unwrap();

        assert_eq!(board.len(), 1);
        assert_eq!(board[0].interview_id, counted);
    }

    #[test]
    fn rerunning_is_idempotent_and_clears_previous_winners() {
        let mut fixture = Fixture::new();
        let stale = fixture.interview(true, true);
        test_support::rank(
            &mut fixture.conn,
            stale,
            RankingPeriod { year: 2022, month: 5, week: 2 },
            1,
        );
        let winner = fixture.interview(true, true);
        scrapped(&mut fixture, winner, 2);

        let job = WeeklyRankingJob::new(5);
        let first: Vec<_> = job
            .run(&mut fixture.conn, PERIOD)
            .unwrap()
            .into_iter()
            .map(|e| (e.interview_id, e.ranking, e.badge))
            .collect();
        let second: Vec<_> = job
            .run(&mut fixture.conn, PERIOD)
            .unwrap()
            .into_iter()
            .map(|e| (e.interview_id, e.ranking, e.badge))
            .collect();

        assert_eq!(first, second);
        assert_eq!(first, vec![(winner, 1, "Gold".to_string())]);
        assert_eq!(badge_of(&mut fixture, stale), "NONE");
        assert_eq!(test_support::count(&mut fixture.conn, "weekly_rankings"), 1);
    }

    #[test]
    fn invalid_period_is_rejected() {
        let mut fixture = Fixture::new();
        let period = RankingPeriod { year: 2022, month: 0, week: 1 };

        let err = WeeklyRankingJob::new(5).run(&mut fixture.conn, period).unwrap_err();
        assert!(matches!(err, RankingError::InvalidPeriod(p) if p == period));
    }
}
