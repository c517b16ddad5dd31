pub mod config;
pub mod core;
pub mod domain;
pub mod utils;
pub mod version;

#[cfg(feature = "cli")]
pub use config::cli::{Cli, Commands};

pub use config::{FeedConfig, RootConfig};
pub use self::core::{
    cleaner::{CleanSummary, Cleaner, CleanerBuilder},
    client::{ClientOptions, FreshRssClient},
};
pub use domain::ports::FreshRssApi;
pub use utils::error::{CleanerError, Result};
