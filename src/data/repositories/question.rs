use crate::data::models::Question;
use crate::schema::questions;
use diesel::prelude::*;

pub struct QuestionRepository;

impl QuestionRepository {
    pub fn find_by_id(
        conn: &mut SqliteConnection,
        question_id: i32,
    ) -> Result<Option<Question>, diesel::result::Error> {
        questions::table
            .find(question_id)
            .select(Question::as_select())
            .first(conn)
            .optional()
    }
}
