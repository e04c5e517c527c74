use std::fmt;
use std::str::FromStr;

use diesel::{Queryable, Selectable};
use serde::Serialize;

use crate::schema::questions;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = questions)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Question {
    pub question_id: i32,
    pub category: String,
    pub contents: String,
    pub reference: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionBody {
    pub id: i32,
    pub category: String,
    pub contents: String,
    pub reference: Option<String>,
}

impl From<Question> for QuestionBody {
    fn from(question: Question) -> Self {
        QuestionBody {
            id: question.question_id,
            category: question.category,
            contents: question.contents,
            reference: question.reference,
        }
    }
}

/// Question categories an interview list can be filtered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Cs,
    Network,
    Database,
    Backend,
    Frontend,
    Personality,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cs => "CS",
            Category::Network => "NETWORK",
            Category::Database => "DATABASE",
            Category::Backend => "BACKEND",
            Category::Frontend => "FRONTEND",
            Category::Personality => "PERSONALITY",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "CS" => Ok(Category::Cs),
            "NETWORK" => Ok(Category::Network),
            "DATABASE" => Ok(Category::Database),
            "BACKEND" => Ok(Category::Backend),
            "FRONTEND" => Ok(Category::Frontend),
            "PERSONALITY" => Ok(Category::Personality),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("backend".parse::<Category>().unwrap(), Category::Backend);
        assert_eq!("CS".parse::<Category>().unwrap(), Category::Cs);
        assert!("cooking".parse::<Category>().is_err());
    }
}
