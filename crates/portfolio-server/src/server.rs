/// MCP server implementation for the portfolio page.
///
/// Each tool stands in for one control or section of the page:
/// - `get_profile`: header, hero and skills chart data
/// - `list_tags`: options of the tag selector
/// - `search_projects`: one-off filtered project list, session untouched
/// - `set_query` / `set_sort_mode` / `set_tag_filter` / `reset_filters`:
///   the search box, sort selector, tag selector and reset button
/// - `get_filter_state`: current filter and project list
/// - `select_tab` / `get_current_tab`: the tab bar and the section it shows
use std::sync::Arc;

use rmcp::{
    Json, ServerHandler,
    handler::server::router::tool::ToolRouter,
    handler::server::wrapper::Parameters,
    model::*,
    tool, tool_handler, tool_router,
};
use tokio::sync::RwLock;
use tracing::info;

use portfolio_common::filter::{
    compute_visible_projects, list_available_tags, tag_selection, FilterState, SortMode,
};
use portfolio_common::mcp_api::{
    ProfileResponse, ProjectListResponse, SearchProjectsParams, SelectTabParams, SetQueryParams,
    SetSortModeParams, SetTagFilterParams, TabResponse, TagListResponse,
};
use portfolio_common::model::{Portfolio, ProjectRecord};
use portfolio_common::tab::Tab;

use crate::session::Session;

#[derive(Clone)]
pub struct PortfolioServer {
    portfolio: Arc<Portfolio>,
    records: Arc<[ProjectRecord]>,
    session: Arc<RwLock<Session>>,
    tool_router: ToolRouter<PortfolioServer>,
}

impl PortfolioServer {
    pub fn new(portfolio: Portfolio) -> Self {
        let records: Arc<[ProjectRecord]> = portfolio.projects.clone().into();
        let session = Arc::new(RwLock::new(Session::new(Arc::clone(&records))));
        Self {
            portfolio: Arc::new(portfolio),
            records,
            session,
            tool_router: Self::tool_router(),
        }
    }

    /// A server sharing this one's content but with its own default session.
    pub fn fresh_session(&self) -> Self {
        Self {
            portfolio: Arc::clone(&self.portfolio),
            records: Arc::clone(&self.records),
            session: Arc::new(RwLock::new(Session::new(Arc::clone(&self.records)))),
            tool_router: Self::tool_router(),
        }
    }

    async fn tab_content(&self, tab: Tab) -> TabResponse {
        let mut response = TabResponse {
            tab,
            label: tab.label().to_string(),
            projects: None,
            experiences: None,
            publications: None,
            education: None,
        };
        match tab {
            Tab::Projects => {
                response.projects = Some(self.session.write().await.visible());
            }
            Tab::Experience => {
                response.experiences = Some(self.portfolio.experiences.clone());
            }
            Tab::More => {
                response.publications = Some(self.portfolio.publications.clone());
                response.education = Some(self.portfolio.education.clone());
            }
        }
        response
    }
}

#[tool_router]
impl PortfolioServer {
    #[tool(description = "Get the portfolio owner's profile (name, headline, location, pitch, contact links), skill levels for the skills chart and the featured tags.")]
    async fn get_profile(&self) -> Result<Json<ProfileResponse>, String> {
        Ok(Json(ProfileResponse {
            profile: self.portfolio.profile.clone(),
            skills: self.portfolio.skills.clone(),
            featured_tags: self.portfolio.featured_tags.clone(),
        }))
    }

    #[tool(description = "List every distinct project tag. Use these values with set_tag_filter or search_projects.")]
    async fn list_tags(&self) -> Result<Json<TagListResponse>, String> {
        Ok(Json(TagListResponse {
            tags: list_available_tags(&self.records),
        }))
    }

    #[tool(description = "Filter and sort projects without changing the session's filters. Query matches title, summary and tags case-insensitively; tag is an exact match; sort is 'relevance' (by rating) or 'alpha'.")]
    async fn search_projects(
        &self,
        Parameters(params): Parameters<SearchProjectsParams>,
    ) -> Result<Json<ProjectListResponse>, String> {
        let sort_mode = match params.sort.as_deref().map(str::trim) {
            None | Some("") => SortMode::default(),
            Some(s) => s.parse::<SortMode>().map_err(|e| e.to_string())?,
        };
        let state = FilterState {
            query: params.query.unwrap_or_default(),
            tag_filter: tag_selection(params.tag.as_deref()),
            sort_mode,
        };

        let projects: Vec<ProjectRecord> = compute_visible_projects(&self.records, &state)
            .into_iter()
            .cloned()
            .collect();

        Ok(Json(ProjectListResponse {
            filter: state,
            total: self.records.len(),
            projects,
        }))
    }

    #[tool(description = "Set the session's search text and return the updated project list. An empty string matches every project.")]
    async fn set_query(
        &self,
        Parameters(params): Parameters<SetQueryParams>,
    ) -> Result<Json<ProjectListResponse>, String> {
        let mut session = self.session.write().await;
        Ok(Json(session.set_query(params.query)))
    }

    #[tool(description = "Set the session's sort mode ('relevance' or 'alpha') and return the updated project list.")]
    async fn set_sort_mode(
        &self,
        Parameters(params): Parameters<SetSortModeParams>,
    ) -> Result<Json<ProjectListResponse>, String> {
        let sort_mode = params
            .sort_mode
            .parse::<SortMode>()
            .map_err(|e| e.to_string())?;
        let mut session = self.session.write().await;
        Ok(Json(session.set_sort_mode(sort_mode)))
    }

    #[tool(description = "Set the session's tag filter and return the updated project list. Omit the tag or pass an empty string to clear the filter.")]
    async fn set_tag_filter(
        &self,
        Parameters(params): Parameters<SetTagFilterParams>,
    ) -> Result<Json<ProjectListResponse>, String> {
        let mut session = self.session.write().await;
        Ok(Json(session.set_tag_filter(params.tag.as_deref())))
    }

    #[tool(description = "Reset the session's filters (empty query, no tag, relevance sort) and return the project list.")]
    async fn reset_filters(&self) -> Result<Json<ProjectListResponse>, String> {
        let mut session = self.session.write().await;
        Ok(Json(session.reset()))
    }

    #[tool(description = "Get the session's current filters and the project list they produce.")]
    async fn get_filter_state(&self) -> Result<Json<ProjectListResponse>, String> {
        let mut session = self.session.write().await;
        Ok(Json(session.visible()))
    }

    #[tool(description = "Switch to a page tab and return its content: 'projets' (filtered projects), 'experience' (work history) or 'plus' (publications and education).")]
    async fn select_tab(
        &self,
        Parameters(params): Parameters<SelectTabParams>,
    ) -> Result<Json<TabResponse>, String> {
        let tab = params.tab.parse::<Tab>().map_err(|e| e.to_string())?;
        self.session.write().await.select_tab(tab);
        info!(tab = %tab, "tab selected");
        Ok(Json(self.tab_content(tab).await))
    }

    #[tool(description = "Return the content of the session's currently selected tab (initially 'projets').")]
    async fn get_current_tab(&self) -> Result<Json<TabResponse>, String> {
        let tab = self.session.read().await.tab();
        Ok(Json(self.tab_content(tab).await))
    }
}

#[tool_handler]
impl ServerHandler for PortfolioServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_06_18,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation {
                name: "portfolio-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Personal portfolio MCP server. Use get_profile for the owner's details and \
                 skills, list_tags to discover project tags, and search_projects for one-off \
                 queries. set_query, set_sort_mode, set_tag_filter and reset_filters drive a \
                 per-connection filter the way the page's controls do; select_tab switches \
                 between projects, experience and publications/education."
                    .to_string(),
            ),
        }
    }
}
