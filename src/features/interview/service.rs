use std::str::FromStr;

use diesel::prelude::*;
use validator::Validate;

use crate::data::models::{
    ApiError, Category, Interview, InterviewInfo, InterviewList, ListParams, Pagination,
    QuestionBody, RankingError, UpdateInterviewRequest, User, UserBody,
};
use crate::data::repositories::{
    CommentRepository, InterviewRepository, QuestionRepository, ScrapRepository, UserRepository,
    WeeklyRankingRepository,
};
use crate::features::media::{ObjectStorage, urls};
use crate::features::ranking::RankingEngine;

const DEFAULT_PER_PAGE: i64 = 10;
const MAX_PER_PAGE: i64 = 50;
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewSort {
    Newest,
    MostScrapped,
}

impl FromStr for InterviewSort {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new" => Ok(InterviewSort::Newest),
            "scrap" => Ok(InterviewSort::MostScrapped),
            other => Err(ApiError::Validation(format!("Unknown sort: {}", other))),
        }
    }
}

pub struct InterviewService<'a> {
    conn: &'a mut SqliteConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> InterviewService<'a> {
    pub fn new(conn: &'a mut SqliteConnection, storage: &'a dyn ObjectStorage) -> Self {
        InterviewService { conn, storage }
    }

    pub fn read_one(
        &mut self,
        interview_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<InterviewInfo, ApiError> {
        if let Some(viewer_id) = viewer_id {
            self.load_user(viewer_id)?;
        }
        let interview = self.load_interview(interview_id)?;

        if !interview.is_public && viewer_id != Some(interview.user_id) {
            return Err(ApiError::Forbidden("view this interview"));
        }

        self.info(viewer_id, interview)
    }

    pub fn list(
        &mut self,
        viewer_id: Option<i32>,
        params: &ListParams,
    ) -> Result<InterviewList, ApiError> {
        if let Some(viewer_id) = viewer_id {
            self.load_user(viewer_id)?;
        }

        let sort = params.sort.as_deref().unwrap_or("new").parse::<InterviewSort>()?;
        let category = match params.filter.as_deref() {
            None | Some("ALL") => None,
            Some(filter) => Some(filter.parse::<Category>().map_err(ApiError::Validation)?),
        };
        let page = params.page.unwrap_or(1);
        let per_page = params.per_page.unwrap_or(DEFAULT_PER_PAGE);
        if page < 1 || !(1..=MAX_PER_PAGE).contains(&per_page) {
            return Err(ApiError::Validation(format!(
                "page must be at least 1 and per_page between 1 and {}",
                MAX_PER_PAGE
            )));
        }
        let offset = (page - 1) * per_page;

        let total = InterviewRepository::count_public(self.conn, category)?;
        let interviews = match sort {
            InterviewSort::Newest => {
                InterviewRepository::list_public(self.conn, category, offset, per_page)?
            }
            InterviewSort::MostScrapped => {
                let mut all = InterviewRepository::list_all_public(self.conn, category)?;
                let ids: Vec<i32> = all.iter().map(|i| i.interview_id).collect();
                let counts = ScrapRepository::counts_by_interview(self.conn, &ids)?;

                // Stable sort keeps newest first among equal counts
                all.sort_by_key(|i| std::cmp::Reverse(counts.get(&i.interview_id).copied().unwrap_or(0)));
                all.into_iter()
                    .skip(offset as usize)
                    .take(per_page as usize)
                    .collect()
            }
        };

        let interviews = interviews
            .into_iter()
            .map(|interview| self.info(viewer_id, interview))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(InterviewList {
            interviews,
            pagination: Pagination {
                per_page,
                total,
                current_page: page,
            },
        })
    }

    pub fn update(
        &mut self,
        user_id: i32,
        interview_id: i32,
        request: &UpdateInterviewRequest,
    ) -> Result<InterviewInfo, ApiError> {
        request.validate()?;
        self.load_user(user_id)?;
        let interview = self.load_interview(interview_id)?;

        if interview.user_id != user_id {
            return Err(ApiError::Forbidden("update this interview"));
        }

        let now = chrono::Utc::now().naive_utc();
        InterviewRepository::update_note(self.conn, interview_id, &request.note, request.is_public, now)?;

        let interview = self.load_interview(interview_id)?;
        self.info(Some(user_id), interview)
    }

    /// Deletes an interview with its scraps and comments. A ranked interview
    /// first leaves the weekly board, moving every lower entry up one place.
    /// Everything happens in one transaction; on failure nothing changes.
    pub fn delete(&mut self, user_id: i32, interview_id: i32) -> Result<InterviewInfo, ApiError> {
        self.load_user(user_id)?;
        let interview = self.load_interview(interview_id)?;

        if interview.user_id != user_id {
            return Err(ApiError::Forbidden("delete this interview"));
        }

        let snapshot = self.info(Some(user_id), interview)?;

        self.conn
            .transaction::<_, RankingError, _>(|conn| {
                if let Some(entry) = WeeklyRankingRepository::find_by_interview_id(conn, interview_id)? {
                    let shifts = RankingEngine::new(conn).remove_and_shift(&entry)?;
                    log::info!(
                        "Ranked interview {} ({}) removed, {} entries moved up",
                        interview_id,
                        entry.label(),
                        shifts.len()
                    );
                }

                ScrapRepository::delete_by_interview_id(conn, interview_id)?;
                CommentRepository::delete_by_interview_id(conn, interview_id)?;
                InterviewRepository::delete_by_id(conn, interview_id)?;
                Ok(())
            })
            .map_err(|e| {
                log::error!("Failed to delete interview {}: {}", interview_id, e);
                ApiError::FailedToDeleteInterview
            })?;

        log::info!("Interview {} deleted by user {}", interview_id, user_id);
        Ok(snapshot)
    }

    fn load_user(&mut self, user_id: i32) -> Result<User, ApiError> {
        UserRepository::find_by_id(self.conn, user_id)?.ok_or(ApiError::UserNotFound)
    }

    fn load_interview(&mut self, interview_id: i32) -> Result<Interview, ApiError> {
        InterviewRepository::find_by_id(self.conn, interview_id)?.ok_or(ApiError::InterviewNotFound)
    }

    fn info(
        &mut self,
        viewer_id: Option<i32>,
        mut interview: Interview,
    ) -> Result<InterviewInfo, ApiError> {
        let id = interview.interview_id;

        let author = self.load_user(interview.user_id)?;
        let question = QuestionRepository::find_by_id(self.conn, interview.question_id)?
            .ok_or(ApiError::DatabaseError(diesel::result::Error::NotFound))?;

        let scraps_count = ScrapRepository::count_by_interview(self.conn, id)?;
        let comments_count = CommentRepository::count_by_interview(self.conn, id)?;
        let scraps_me = match viewer_id {
            Some(viewer_id) => Some(ScrapRepository::exists(self.conn, viewer_id, id)?),
            None => None,
        };
        let weekly = WeeklyRankingRepository::find_by_interview_id(self.conn, id)?
            .map(|entry| entry.label().standing());

        let video = urls::video_url(self.storage, &interview);
        let thumbnail = urls::thumbnail_url(self.storage, self.conn, &mut interview);
        let profile = urls::profile_image_url(self.storage, author.profile_image_url.as_deref());

        Ok(InterviewInfo {
            id,
            video,
            thumbnail,
            question: QuestionBody::from(question),
            user: UserBody::new(author, profile),
            is_mine: viewer_id.map(|viewer_id| viewer_id == interview.user_id),
            badge: interview.badge,
            note: interview.note,
            scraps_me,
            scraps_count,
            comments_count,
            is_public: interview.is_public,
            created_at: interview.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: interview.updated_at.format(TIMESTAMP_FORMAT).to_string(),
            weekly,
        })
    }
}
