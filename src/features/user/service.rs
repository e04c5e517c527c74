use diesel::SqliteConnection;
use validator::Validate;

use crate::data::models::{ApiError, ProfileChanges, UpdateProfileRequest, User, UserBody};
use crate::data::repositories::UserRepository;
use crate::features::media::{ObjectStorage, urls};

/// The signed-in user's own profile
pub struct ProfileService<'a> {
    conn: &'a mut SqliteConnection,
    storage: &'a dyn ObjectStorage,
}

impl<'a> ProfileService<'a> {
    pub fn new(conn: &'a mut SqliteConnection, storage: &'a dyn ObjectStorage) -> Self {
        ProfileService { conn, storage }
    }

    pub fn me(&mut self, user_id: i32) -> Result<UserBody, ApiError> {
        let user = self.load_user(user_id)?;
        Ok(self.body(user))
    }

    /// Overwrites the GitHub link and introduction. A blank nickname keeps
    /// the current one.
    pub fn update(
        &mut self,
        user_id: i32,
        request: &UpdateProfileRequest,
    ) -> Result<UserBody, ApiError> {
        request.validate()?;
        let user = self.load_user(user_id)?;

        let nickname = match request.nickname.trim() {
            "" => user.nickname.as_str(),
            trimmed => trimmed,
        };
        UserRepository::update_profile(
            self.conn,
            user_id,
            &ProfileChanges {
                nickname,
                github_link: request.github_link.as_deref(),
                introduce: request.introduce.as_deref(),
            },
        )?;

        log::info!("User {} updated their profile", user_id);
        let user = self.load_user(user_id)?;
        Ok(self.body(user))
    }

    fn load_user(&mut self, user_id: i32) -> Result<User, ApiError> {
        UserRepository::find_by_id(self.conn, user_id)?.ok_or(ApiError::UserNotFound)
    }

    fn body(&self, user: User) -> UserBody {
        let profile = urls::profile_image_url(self.storage, user.profile_image_url.as_deref());
        UserBody::new(user, profile)
    }
}
