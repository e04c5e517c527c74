use diesel::{AsChangeset, Insertable, Queryable, Selectable};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::schema::users;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub password: String,
    pub nickname: String,
    pub github_link: Option<String>,
    pub introduce: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub nickname: &'a str,
    pub github_link: Option<&'a str>,
    pub introduce: Option<&'a str>,
    pub profile_image_url: Option<&'a str>,
}

/// Text columns a user can edit on their own profile. `None` clears the field.
#[derive(AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct ProfileChanges<'a> {
    pub nickname: &'a str,
    pub github_link: Option<&'a str>,
    pub introduce: Option<&'a str>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    #[validate(length(min = 1, max = 20, message = "Nickname must be 1 to 20 characters"))]
    pub nickname: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    // Blank keeps the current nickname
    #[serde(default)]
    #[validate(length(max = 20, message = "Nickname must be at most 20 characters"))]
    pub nickname: String,
    #[validate(url(message = "GitHub link must be a URL"))]
    pub github_link: Option<String>,
    #[validate(length(max = 300, message = "Introduction must be at most 300 characters"))]
    pub introduce: Option<String>,
}

/// Public author card embedded in interview and comment responses
#[derive(Debug, Serialize)]
pub struct UserBody {
    pub id: i32,
    pub nickname: String,
    pub github_link: Option<String>,
    pub profile_image_url: Option<String>, // Already resolved to a fetchable URL
    pub introduce: Option<String>,
}

impl UserBody {
    pub fn new(user: User, profile_image_url: Option<String>) -> Self {
        UserBody {
            id: user.user_id,
            nickname: user.nickname,
            github_link: user.github_link,
            profile_image_url,
            introduce: user.introduce,
        }
    }
}
