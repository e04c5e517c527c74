use diesel::SqliteConnection;
use validator::Validate;

use crate::data::models::{AuthError, LoginRequest, NewUser, RegisterRequest, User};
use crate::data::repositories::UserRepository;

/// Password accounts backing the session cookie
pub struct AuthService<'a> {
    conn: &'a mut SqliteConnection,
    cost: u32,
}

impl<'a> AuthService<'a> {
    pub fn new(conn: &'a mut SqliteConnection, cost: u32) -> Self {
        AuthService { conn, cost }
    }

    pub fn register(&mut self, request: &RegisterRequest) -> Result<User, AuthError> {
        request.validate()?;

        let nickname = request.nickname.trim();
        if nickname.is_empty() {
            return Err(AuthError::Validation("Nickname must not be blank".into()));
        }

        if UserRepository::email_exists(self.conn, &request.email)? {
            log::warn!("Registration attempt with existing email: {}", request.email);
            return Err(AuthError::EmailTaken);
        }

        let hashed_password = bcrypt::hash(&request.password, self.cost)?;
        let user_id = UserRepository::create_user(
            self.conn,
            &NewUser {
                email: &request.email,
                password: &hashed_password,
                nickname,
                github_link: None,
                introduce: None,
                profile_image_url: None,
            },
        )?;

        log::info!("New user registered: {}", request.email);
        UserRepository::find_by_id(self.conn, user_id)?
            .ok_or(AuthError::DatabaseError(diesel::result::Error::NotFound))
    }

    pub fn login(&mut self, request: &LoginRequest) -> Result<User, AuthError> {
        let Some(user) = UserRepository::find_by_email(self.conn, &request.email)? else {
            log::warn!("User not found: {}", request.email);
            return Err(AuthError::InvalidCredentials);
        };

        if bcrypt::verify(&request.password, &user.password)? {
            Ok(user)
        } else {
            log::warn!("Invalid password for user: {}", request.email);
            Err(AuthError::InvalidCredentials)
        }
    }
}
