use std::time::Duration;

use chrono::{NaiveDate, Utc};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::data::models::{RankingError, WeeklyRanking};
use crate::db::DbPool;
use crate::features::ranking::{RankingPeriod, WeeklyRankingJob};

/// Rebuilds the board for the last completed week on a fixed interval.
/// The first run happens immediately.
pub fn spawn(pool: DbPool, job: WeeklyRankingJob, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let today = Utc::now().date_naive();
            let pool = pool.clone();
            let job = job.clone();

            match tokio::task::spawn_blocking(move || run_for_day(&pool, &job, today)).await {
                Ok(Ok(board)) => {
                    log::info!("Scheduled ranking on {} produced {} entries", today, board.len())
                }
                Ok(Err(e)) => log::error!("Scheduled ranking on {} failed: {}", today, e),
                Err(e) => log::error!("Ranking task panicked: {}", e),
            }
        }
    })
}

/// Ranks the week that ended before `today`
pub fn run_for_day(
    pool: &DbPool,
    job: &WeeklyRankingJob,
    today: NaiveDate,
) -> Result<Vec<WeeklyRanking>, RankingError> {
    let period = RankingPeriod::last_completed(today).ok_or(RankingError::NoCompletedWeek(today))?;
    run_once(pool, job, period)
}

pub fn run_once(
    pool: &DbPool,
    job: &WeeklyRankingJob,
    period: RankingPeriod,
) -> Result<Vec<WeeklyRanking>, RankingError> {
    let mut conn = pool.get()?;
    job.run(&mut conn, period)
}
