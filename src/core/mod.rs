pub mod cleaner;
pub mod client;

pub use crate::domain::ports::FreshRssApi;
pub use crate::utils::error::Result;
