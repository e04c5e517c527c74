use std::path::Path;

use axum::{
    Json, Router,
    routing::{get, get_service, post, put},
};
use serde_json::{Value, json};
use time::Duration;
use tower_http::services::ServeDir;
use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::handlers::{auth, comments, interviews, rankings, scraps, users};
use crate::state::AppState;

pub fn session_layer() -> SessionManagerLayer<MemoryStore> {
    SessionManagerLayer::new(MemoryStore::default())
        .with_expiry(Expiry::OnInactivity(Duration::days(1)))
        .with_secure(false)
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/logout", post(auth::logout))
        .route("/users/me", get(users::get_me).put(users::update_me))
        .route("/interviews", get(interviews::list_interviews))
        .route(
            "/interviews/{id}",
            get(interviews::get_interview)
                .put(interviews::update_interview)
                .delete(interviews::delete_interview),
        )
        .route(
            "/interviews/{id}/scrap",
            post(scraps::add_scrap).delete(scraps::remove_scrap),
        )
        .route(
            "/interviews/{id}/comments",
            get(comments::list_comments).post(comments::create_comment),
        )
        .route(
            "/comments/{id}",
            put(comments::update_comment).delete(comments::delete_comment),
        )
        .route("/rankings", get(rankings::list_rankings))
        .with_state(state)
}

pub fn app(state: AppState, media_dir: &Path) -> Router {
    Router::new()
        .nest("/api", api_router(state))
        .nest_service("/media", get_service(ServeDir::new(media_dir)))
        .layer(session_layer())
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
        response::Response,
    };
    use chrono::Utc;
    use tower::ServiceExt;

    use super::*;
    use crate::data::repositories::WeeklyRankingRepository;
    use crate::db::{self, DbPool};
    use crate::features::media::LocalObjectStorage;
    use crate::features::ranking::RankingPeriod;
    use crate::test_support;

    struct TestApp {
        router: Router,
        pool: DbPool,
        _dir: tempfile::TempDir,
    }

    fn test_app() -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let pool = db::create_pool(dir.path().join("api.db").to_str().unwrap()).unwrap();
        db::init_schema(&mut pool.get().unwrap()).unwrap();

        let storage = Arc::new(LocalObjectStorage::new(
            dir.path().join("media"),
            "http://localhost:5000/media",
            std::time::Duration::from_secs(60),
        ));
        let state = AppState {
            pool: pool.clone(),
            storage,
            bcrypt_cost: 4,
        };
        let router = app(state, &dir.path().join("media"));

        TestApp { router, pool, _dir: dir }
    }

    fn json_request(method: &str, uri: &str, cookie: Option<&str>, body: Value) -> Request<Body> {
        let mut builder = Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    fn empty_request(method: &str, uri: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    impl TestApp {
        async fn send(&self, request: Request<Body>) -> Response {
            self.router.clone().oneshot(request).await.unwrap()
        }

        /// Registers an account and returns its session cookie and user id
        async fn sign_up(&self, email: &str) -> (String, i32) {
            let response = self
                .send(json_request(
                    "POST",
                    "/api/auth/register",
                    None,
                    json!({ "email": email, "password": "correct horse", "nickname": "tester" }),
                ))
                .await;
            assert_eq!(response.status(), StatusCode::OK);
            let cookie = session_cookie(&response);

            let me = self.send(empty_request("GET", "/api/users/me", Some(&cookie))).await;
            let id = json_body(me).await["id"].as_i64().unwrap() as i32;
            (cookie, id)
        }
    }

    fn session_cookie(response: &Response) -> String {
        let cookie = response
            .headers()
            .get(header::SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        cookie.split(';').next().unwrap().to_string()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let app = test_app();

        let response = app.send(empty_request("GET", "/api/health", None)).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["status"], "ok");
    }

    #[tokio::test]
    async fn missing_interview_is_a_json_404() {
        let app = test_app();

        let response = app.send(empty_request("GET", "/api/interviews/999", None)).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body = json_body(response).await;
        assert_eq!(body["status"], 404);
        assert_eq!(body["error"], "Interview not found");
    }

    #[tokio::test]
    async fn deleting_requires_a_session() {
        let app = test_app();

        let response = app.send(empty_request("DELETE", "/api/interviews/1", None)).await;

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn login_issues_a_session_and_logout_ends_it() {
        let app = test_app();
        app.sign_up("jisoo@example.com").await;

        let wrong = app
            .send(json_request(
                "POST",
                "/api/auth/login",
                None,
                json!({ "email": "jisoo@example.com", "password": "battery staple" }),
            ))
            .await;
        assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

        let response = app
            .send(json_request(
                "POST",
                "/api/auth/login",
                None,
                json!({ "email": "jisoo@example.com", "password": "correct horse" }),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        let cookie = session_cookie(&response);

        let me = app.send(empty_request("GET", "/api/users/me", Some(&cookie))).await;
        assert_eq!(me.status(), StatusCode::OK);
        assert_eq!(json_body(me).await["nickname"], "tester");

        let logout = app.send(empty_request("POST", "/api/auth/logout", Some(&cookie))).await;
        assert_eq!(logout.status(), StatusCode::OK);

        let me = app.send(empty_request("GET", "/api/users/me", Some(&cookie))).await;
        assert_eq!(me.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn profile_update_keeps_nickname_when_blank() {
        let app = test_app();
        let (cookie, _) = app.sign_up("minji@example.com").await;

        let response = app
            .send(json_request(
                "PUT",
                "/api/users/me",
                Some(&cookie),
                json!({ "nickname": " ", "github_link": "https://github.com/minji", "introduce": "Hi" }),
            ))
            .await;

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["nickname"], "tester");
        assert_eq!(body["github_link"], "https://github.com/minji");
        assert_eq!(body["introduce"], "Hi");
    }

    #[tokio::test]
    async fn delete_through_the_api_closes_the_ranking_gap() {
        let app = test_app();
        let (cookie, owner) = app.sign_up("owner@example.com").await;
        let period = RankingPeriod::containing(Utc::now().date_naive());
        let (second, third) = {
            let mut conn = app.pool.get().unwrap();
            let question = test_support::question(&mut conn, "NETWORK");
            let ids: Vec<i32> = (0..3)
                .map(|_| test_support::interview_for(&mut conn, owner, question, true, true))
                .collect();
            for (index, id) in ids.iter().enumerate() {
                test_support::rank(&mut conn, *id, period, index as u32 + 1);
            }
            (ids[1], ids[2])
        };

        let response = app
            .send(empty_request("DELETE", &format!("/api/interviews/{}", second), Some(&cookie)))
            .await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["id"], second);

        let response = app.send(empty_request("GET", "/api/rankings", None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let board = json_body(response).await;
        let board = board.as_array().unwrap();
        assert_eq!(board.len(), 2);
        assert_eq!(board[1]["interview_id"], third);
        assert_eq!(board[1]["ranking"], 2);
        assert_eq!(board[1]["badge"], "Silver");

        let mut conn = app.pool.get().unwrap();
        let moved = WeeklyRankingRepository::find_by_interview_id(&mut conn, third)
            .unwrap()
            .unwrap();
        assert_eq!(moved.rank(), 2);
    }

    #[tokio::test]
    async fn rankings_can_be_looked_up_by_label() {
        let app = test_app();
        let period = RankingPeriod { year: 2022, month: 5, week: 2 };
        let (first, second) = {
            let mut conn = app.pool.get().unwrap();
            let owner = test_support::user(&mut conn, "owner@example.com");
            let question = test_support::question(&mut conn, "CS");
            let first = test_support::interview_for(&mut conn, owner, question, true, true);
            let second = test_support::interview_for(&mut conn, owner, question, true, true);
            test_support::rank(&mut conn, first, period, 1);
            test_support::rank(&mut conn, second, period, 2);
            (first, second)
        };

        let uri = "/api/rankings?label=5%EC%9B%94%202%EC%A7%B8%EC%A3%BC%202%EB%93%B1";
        let response = app.send(empty_request("GET", uri, None)).await;
        assert_eq!(response.status(), StatusCode::OK);
        let board = json_body(response).await;
        assert_eq!(board.as_array().unwrap().len(), 1);
        assert_eq!(board[0]["interview_id"], second);
        assert_eq!(board[0]["label"], "5월 2째주 2등");

        let response = app.send(empty_request("GET", "/api/rankings", None)).await;
        assert_eq!(json_body(response).await[0]["interview_id"], first);

        let response = app
            .send(empty_request("GET", "/api/rankings?label=Gold", None))
            .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn scrap_and_comment_round_trip() {
        let app = test_app();
        let (cookie, _) = app.sign_up("fan@example.com").await;
        let interview = {
            let mut conn = app.pool.get().unwrap();
            let owner = test_support::user(&mut conn, "owner@example.com");
            let question = test_support::question(&mut conn, "CS");
            test_support::interview_for(&mut conn, owner, question, true, true)
        };
        let scrap_uri = format!("/api/interviews/{}/scrap", interview);

        let response = app.send(empty_request("POST", &scrap_uri, Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let scrap = json_body(response).await;
        assert_eq!(scrap["scraps_me"], true);
        assert_eq!(scrap["scraps_count"], 1);

        let response = app.send(empty_request("POST", &scrap_uri, Some(&cookie))).await;
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let comments_uri = format!("/api/interviews/{}/comments", interview);
        let response = app
            .send(json_request(
                "POST",
                &comments_uri,
                Some(&cookie),
                json!({ "contents": "Clear answer" }),
            ))
            .await;
        assert_eq!(response.status(), StatusCode::OK);

        let response = app.send(empty_request("GET", &comments_uri, None)).await;
        let comments = json_body(response).await;
        assert_eq!(comments.as_array().unwrap().len(), 1);
        assert_eq!(comments[0]["contents"], "Clear answer");
        assert!(comments[0]["is_mine"].is_null());
    }
}
