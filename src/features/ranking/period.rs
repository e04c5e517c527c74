use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use lazy_static::lazy_static;
use regex::Regex;

use crate::data::models::WeeklyStanding;

lazy_static! {
    static ref LABEL_RE: Regex = Regex::new(r"^(\d{1,2})월 (\d)째주 (\d+)등$").unwrap();
}

/// A calendar week-of-month. Weeks start on Monday and week 1 holds the 1st.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RankingPeriod {
    pub year: i32,
    pub month: u32,
    pub week: u32,
}

impl RankingPeriod {
    pub fn containing(date: NaiveDate) -> RankingPeriod {
        let first = date - Days::new(u64::from(date.day() - 1));
        let offset = first.weekday().num_days_from_monday();

        RankingPeriod {
            year: date.year(),
            month: date.month(),
            week: (date.day() - 1 + offset) / 7 + 1,
        }
    }

    /// The most recent week that has fully ended before `today`. Daily runs
    /// through a week all land on the same period.
    pub fn last_completed(today: NaiveDate) -> Option<RankingPeriod> {
        let since_monday = u64::from(today.weekday().num_days_from_monday());
        today
            .checked_sub_days(Days::new(since_monday + 1))
            .map(RankingPeriod::containing)
    }

    /// Monday opening this period's week, which may fall in the previous month
    pub fn start_date(&self) -> Option<NaiveDate> {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1)?;
        let offset = first.weekday().num_days_from_monday();
        let week_one = first - Days::new(u64::from(offset));
        week_one.checked_add_days(Days::new(u64::from(self.week.checked_sub(1)?) * 7))
    }

    /// Half-open `[start, end)` window scraps are counted in
    pub fn window(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        let start = self.start_date()?;
        let end = start.checked_add_days(Days::new(7))?;
        Some((start.and_time(NaiveTime::MIN), end.and_time(NaiveTime::MIN)))
    }
}

impl fmt::Display for RankingPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02} week {}", self.year, self.month, self.week)
    }
}

/// Human readable placing such as `5월 2째주 1등` (May, week 2, rank 1)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyLabel {
    pub month: u32,
    pub week: u32,
    pub rank: u32,
}

impl WeeklyLabel {
    pub fn new(period: RankingPeriod, rank: u32) -> WeeklyLabel {
        WeeklyLabel {
            month: period.month,
            week: period.week,
            rank,
        }
    }

    pub fn standing(&self) -> WeeklyStanding {
        WeeklyStanding {
            month: self.month,
            week: self.week,
            ranking: self.rank,
        }
    }
}

impl fmt::Display for WeeklyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}월 {}째주 {}등", self.month, self.week, self.rank)
    }
}

impl FromStr for WeeklyLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = LABEL_RE
            .captures(s.trim())
            .ok_or_else(|| format!("Malformed weekly label: {}", s))?;

        let number = |i: usize| -> Result<u32, String> {
            caps[i]
                .parse::<u32>()
                .map_err(|e| format!("Malformed weekly label {}: {}", s, e))
        };

        let label = WeeklyLabel {
            month: number(1)?,
            week: number(2)?,
            rank: number(3)?,
        };

        if !(1..=12).contains(&label.month) || label.week == 0 || label.rank == 0 {
            return Err(format!("Weekly label out of range: {}", s));
        }

        Ok(label)
    }
}
