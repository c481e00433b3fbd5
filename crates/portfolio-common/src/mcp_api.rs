use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::filter::FilterState;
use crate::model::{Education, Experience, Profile, ProjectRecord, Publication, Skill};
use crate::tab::Tab;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchProjectsParams {
    /// Free-text query matched case-insensitively against title, summary and tags.
    pub query: Option<String>,
    /// Exact tag to filter by. Empty or omitted means no tag filter.
    pub tag: Option<String>,
    /// "relevance" (default) or "alpha".
    pub sort: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetQueryParams {
    /// New search text. An empty string matches every project.
    pub query: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetSortModeParams {
    /// "relevance" or "alpha".
    pub sort_mode: String,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetTagFilterParams {
    /// Tag to filter by, as returned by list_tags. Empty or omitted clears the filter.
    pub tag: Option<String>,
}

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SelectTabParams {
    /// "projets", "experience" or "plus".
    pub tab: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProjectListResponse {
    pub filter: FilterState,
    /// Size of the full collection, before filtering.
    pub total: usize,
    pub projects: Vec<ProjectRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TagListResponse {
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ProfileResponse {
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub featured_tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TabResponse {
    pub tab: Tab,
    pub label: String,
    /// Set for the "projets" tab.
    pub projects: Option<ProjectListResponse>,
    /// Set for the "experience" tab.
    pub experiences: Option<Vec<Experience>>,
    /// Set for the "plus" tab.
    pub publications: Option<Vec<Publication>>,
    /// Set for the "plus" tab.
    pub education: Option<Vec<Education>>,
}
