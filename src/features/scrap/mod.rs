pub mod service;

pub use service::ScrapService;
