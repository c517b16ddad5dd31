pub const VERSION: &str = env!("APP_VERSION");
pub const GIT_COMMIT: &str = env!("GIT_COMMIT");
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Text printed by the `version` command.
pub fn version_info() -> String {
    format!(
        "Version: {}\nGit commit: {}\nBuild date: {}",
        VERSION, GIT_COMMIT, BUILD_DATE
    )
}
