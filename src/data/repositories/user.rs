use crate::data::models::{NewUser, ProfileChanges, User};
use crate::schema::users;
use diesel::prelude::*;
use diesel::sql_types::Integer;

pub struct UserRepository;

impl UserRepository {
    pub fn find_by_id(
        conn: &mut SqliteConnection,
        user_id: i32,
    ) -> Result<Option<User>, diesel::result::Error> {
        users::table
            .find(user_id)
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn find_by_email(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<Option<User>, diesel::result::Error> {
        users::table
            .filter(users::email.eq(email))
            .select(User::as_select())
            .first(conn)
            .optional()
    }

    pub fn email_exists(
        conn: &mut SqliteConnection,
        email: &str,
    ) -> Result<bool, diesel::result::Error> {
        use diesel::dsl::exists;
        use diesel::select;

        select(exists(users::table.filter(users::email.eq(email)))).get_result(conn)
    }

    pub fn create_user(
        conn: &mut SqliteConnection,
        new_user: &NewUser,
    ) -> Result<i32, diesel::result::Error> {
        diesel::insert_into(users::table)
            .values(new_user)
            .execute(conn)?;

        diesel::select(diesel::dsl::sql::<Integer>("last_insert_rowid()")).get_result(conn)
    }

    pub fn update_profile(
        conn: &mut SqliteConnection,
        user_id: i32,
        changes: &ProfileChanges,
    ) -> Result<usize, diesel::result::Error> {
        diesel::update(users::table.find(user_id))
            .set(changes)
            .execute(conn)
    }
}
