use diesel::SqliteConnection;
use validator::Validate;

use crate::data::models::{
    ApiError, Comment, CommentBody, CommentResponse, CreateCommentRequest, NewComment,
    UpdateCommentRequest, UserBody,
};
use crate::data::repositories::{CommentRepository, InterviewRepository, UserRepository};
use crate::features::media::{ObjectStorage, urls};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub struct CommentService<'a> {
    conn: &'a mut SqliteConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> CommentService<'a> {
    pub fn new(conn: &'a mut SqliteConnection, storage: &'a dyn ObjectStorage) -> Self {
        CommentService { conn, storage }
    }

    /// Replies always hang off the root of a thread, so answering a reply
    /// attaches to that reply's root.
    pub fn create(
        &mut self,
        user_id: i32,
        interview_id: i32,
        request: &CreateCommentRequest,
    ) -> Result<CommentResponse, ApiError> {
        request.validate()?;
        self.ensure_user(user_id)?;
        self.ensure_visible(Some(user_id), interview_id)?;

        let parent_id = match request.parent_id {
            Some(parent_id) => {
                let parent = CommentRepository::find_by_id(self.conn, parent_id)?
                    .ok_or(ApiError::CommentNotFound)?;
                if parent.interview_id != interview_id {
                    return Err(ApiError::Validation(
                        "Parent comment belongs to another interview".to_string(),
                    ));
                }
                Some(parent.parent_id.unwrap_or(parent.comment_id))
            }
            None => None,
        };

        let now = chrono::Utc::now().naive_utc();
        let comment_id = CommentRepository::create_comment(
            self.conn,
            &NewComment {
                user_id,
                interview_id,
                parent_id,
                contents: &request.contents,
                created_at: now,
                updated_at: now,
            },
        )?;

        let comment = self.load_comment(comment_id)?;
        Ok(CommentResponse {
            comment: self.body(Some(user_id), comment)?,
        })
    }

    pub fn list(
        &mut self,
        interview_id: i32,
        viewer_id: Option<i32>,
    ) -> Result<Vec<CommentBody>, ApiError> {
        self.ensure_visible(viewer_id, interview_id)?;

        CommentRepository::list_by_interview(self.conn, interview_id)?
            .into_iter()
            .map(|comment| self.body(viewer_id, comment))
            .collect()
    }

    pub fn update(
        &mut self,
        user_id: i32,
        comment_id: i32,
        request: &UpdateCommentRequest,
    ) -> Result<CommentResponse, ApiError> {
        request.validate()?;
        let comment = self.owned_comment(user_id, comment_id, "edit this comment")?;

        let now = chrono::Utc::now().naive_utc();
        CommentRepository::update_contents(self.conn, comment.comment_id, &request.contents, now)?;

        let comment = self.load_comment(comment_id)?;
        Ok(CommentResponse {
            comment: self.body(Some(user_id), comment)?,
        })
    }

    pub fn delete(&mut self, user_id: i32, comment_id: i32) -> Result<(), ApiError> {
        let comment = self.owned_comment(user_id, comment_id, "delete this comment")?;
        let removed = CommentRepository::delete_with_replies(self.conn, comment.comment_id)?;
        log::info!("Comment {} deleted with {} row(s)", comment_id, removed);
        Ok(())
    }

    fn ensure_user(&mut self, user_id: i32) -> Result<(), ApiError> {
        UserRepository::find_by_id(self.conn, user_id)?.ok_or(ApiError::UserNotFound)?;
        Ok(())
    }

    fn ensure_visible(&mut self, viewer_id: Option<i32>, interview_id: i32) -> Result<(), ApiError> {
        let interview = InterviewRepository::find_by_id(self.conn, interview_id)?
            .ok_or(ApiError::InterviewNotFound)?;

        if !interview.is_public && viewer_id != Some(interview.user_id) {
            return Err(ApiError::Forbidden("view this interview"));
        }
        Ok(())
    }

    fn load_comment(&mut self, comment_id: i32) -> Result<Comment, ApiError> {
        CommentRepository::find_by_id(self.conn, comment_id)?.ok_or(ApiError::CommentNotFound)
    }

    fn owned_comment(
        &mut self,
        user_id: i32,
        comment_id: i32,
        action: &'static str,
    ) -> Result<Comment, ApiError> {
        self.ensure_user(user_id)?;
        let comment = self.load_comment(comment_id)?;
        if comment.user_id != user_id {
            return Err(ApiError::Forbidden(action));
        }
        Ok(comment)
    }

    fn body(&mut self, viewer_id: Option<i32>, comment: Comment) -> Result<CommentBody, ApiError> {
        let author = UserRepository::find_by_id(self.conn, comment.user_id)?
            .ok_or(ApiError::UserNotFound)?;
        let profile = urls::profile_image_url(self.storage, author.profile_image_url.as_deref());

        Ok(CommentBody {
            id: comment.comment_id,
            is_mine: viewer_id.map(|viewer_id| viewer_id == comment.user_id),
            user: UserBody::new(author, profile),
            contents: comment.contents,
            parent_id: comment.parent_id,
            created_at: comment.created_at.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: comment.updated_at.format(TIMESTAMP_FORMAT).to_string(),
        })
    }
}
