/// Error types for portfolio content and filter inputs.
///
/// The filter/sort computation itself is total and never produces these; they
/// come from loading content or from parsing user-facing selector values.
/// Server crates wrap `PortfolioError` via `#[from]`.
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid portfolio json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("duplicate project title: {0}")]
    DuplicateTitle(String),

    #[error("project '{title}' has rating {rating}, expected 0..=5")]
    RatingOutOfRange { title: String, rating: u8 },

    #[error("project '{title}' lists tag '{tag}' more than once")]
    DuplicateTag { title: String, tag: String },

    #[error("skill '{name}' has level {level}, expected 0..=100")]
    SkillLevelOutOfRange { name: String, level: u8 },

    #[error("unknown sort mode: '{0}' (expected 'relevance' or 'alpha')")]
    UnknownSortMode(String),

    #[error("unknown tab: '{0}' (expected 'projets', 'experience' or 'plus')")]
    UnknownTab(String),
}
