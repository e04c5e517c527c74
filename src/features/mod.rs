pub mod auth;
pub mod comment;
pub mod errors;
pub mod interview;
pub mod media;
pub mod ranking;
pub mod scrap;
pub mod user;
