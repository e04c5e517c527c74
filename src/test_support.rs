use chrono::{NaiveDate, NaiveDateTime};
use diesel::connection::SimpleConnection;
use diesel::prelude::*;

use crate::data::models::{NewUser, NewWeeklyRanking};
use crate::data::repositories::{
    InterviewRepository, ScrapRepository, UserRepository, WeeklyRankingRepository,
};
use crate::db;
use crate::features::ranking::{Badge, RankingPeriod};
use crate::schema::{interviews, questions};

pub fn conn() -> SqliteConnection {
    let mut conn = SqliteConnection::establish(":memory:").expect("in-memory sqlite");
    db::init_schema(&mut conn).expect("schema");
    conn
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, 0, 0))
        .expect("valid timestamp")
}

/// A database with one user and one question to hang interviews on
pub struct Fixture {
    pub conn: SqliteConnection,
    pub user_id: i32,
    pub question_id: i32,
}

impl Fixture {
    pub fn new() -> Self {
        let mut conn = conn();
        let user_id = user(&mut conn, "owner@example.com");
        let question_id = question(&mut conn, "BACKEND");
        Fixture { conn, user_id, question_id }
    }

    pub fn user(&mut self, email: &str) -> i32 {
        user(&mut self.conn, email)
    }

    pub fn interview(&mut self, is_public: bool, is_done: bool) -> i32 {
        interview_for(&mut self.conn, self.user_id, self.question_id, is_public, is_done)
    }
}

pub fn user(conn: &mut SqliteConnection, email: &str) -> i32 {
    let nickname = email.split('@').next().unwrap_or(email);
    UserRepository::create_user(
        conn,
        &NewUser {
            email,
            password: "!",
            nickname,
            github_link: None,
            introduce: None,
            profile_image_url: None,
        },
    )
    .expect("insert user")
}

pub fn question(conn: &mut SqliteConnection, category: &str) -> i32 {
    diesel::insert_into(questions::table)
        .values((
            questions::category.eq(category),
            questions::contents.eq("What happens when you type a URL?"),
        ))
        .execute(conn)
        .expect("insert question");
    last_id(conn)
}

pub fn interview_for(
    conn: &mut SqliteConnection,
    user_id: i32,
    question_id: i32,
    is_public: bool,
    is_done: bool,
) -> i32 {
    let now = chrono::Utc::now().naive_utc();
    diesel::insert_into(interviews::table)
        .values((
            interviews::user_id.eq(user_id),
            interviews::question_id.eq(question_id),
            interviews::video_key.eq("videos/answer.webm"),
            interviews::thumbnail_key.eq("thumbnails/answer.png"),
            interviews::badge.eq(Badge::Unranked.as_str()),
            interviews::is_public.eq(is_public),
            interviews::is_done.eq(is_done),
            interviews::created_at.eq(now),
            interviews::updated_at.eq(now),
        ))
        .execute(conn)
        .expect("insert interview");
    last_id(conn)
}

fn last_id(conn: &mut SqliteConnection) -> i32 {
    diesel::select(diesel::dsl::sql::<diesel::sql_types::Integer>("last_insert_rowid()"))
        .get_result(conn)
        .expect("last insert id")
}

/// Places an interview on the board and mirrors the badge onto it
pub fn rank(conn: &mut SqliteConnection, interview_id: i32, period: RankingPeriod, rank: u32) {
    let interview = InterviewRepository::find_by_id(conn, interview_id)
        .expect("load interview")
        .expect("interview exists");
    let badge = Badge::for_rank(rank);

    WeeklyRankingRepository::insert(
        conn,
        &NewWeeklyRanking {
            interview_id,
            user_id: interview.user_id,
            question_id: interview.question_id,
            scrap_count: 0,
            badge: badge.as_str(),
            period_year: period.year,
            period_month: period.month as i32,
            period_week: period.week as i32,
            ranking: rank as i32,
        },
    )
    .expect("insert ranking");
    InterviewRepository::update_badge(conn, interview_id, badge.as_str()).expect("mirror badge");
}

pub fn scrap(conn: &mut SqliteConnection, user_id: i32, interview_id: i32, when: NaiveDateTime) {
    assert!(ScrapRepository::insert(conn, user_id, interview_id, when).expect("insert scrap"));
}

pub fn count(conn: &mut SqliteConnection, table: &str) -> i64 {
    #[derive(QueryableByName)]
    struct Count {
        #[diesel(sql_type = diesel::sql_types::BigInt)]
        n: i64,
    }

    diesel::sql_query(format!("SELECT COUNT(*) AS n FROM {}", table))
        .get_result::<Count>(conn)
        .expect("count rows")
        .n
}

pub fn exec(conn: &mut SqliteConnection, sql: &str) {
    conn.batch_execute(sql).expect("execute sql");
}
