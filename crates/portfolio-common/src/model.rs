use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MAX_RATING: u8 = 5;
pub const MAX_SKILL_LEVEL: u8 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectLinks {
    pub code: String,
    pub demo: String,
}

/// One project entry. `title` is the identity key within a portfolio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ProjectRecord {
    pub title: String,
    pub summary: String,
    pub impact: String,
    pub links: ProjectLinks,
    pub tags: Vec<String>,
    /// Star count, 0..=5.
    pub rating: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Profile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub pitch: String,
    pub email: String,
    pub github: String,
    pub linkedin: String,
    pub cv_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Skill {
    pub name: String,
    /// Percentage, 0..=100.
    pub level: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub location: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Publication {
    pub title: String,
    pub link: String,
    pub year: u16,
}

/// Everything the portfolio page displays. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    /// Headline tags shown under the skills chart; not derived from projects.
    pub featured_tags: Vec<String>,
    pub projects: Vec<ProjectRecord>,
    pub experiences: Vec<Experience>,
    pub education: Vec<Education>,
    pub publications: Vec<Publication>,
}
