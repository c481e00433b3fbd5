/// Per-client view state.
///
/// A session is the server-side counterpart of a mounted portfolio page: it
/// starts from the default filter and the "projets" tab, changes only through
/// the operations below, and is dropped with the client connection. Every
/// mutation recomputes the visible project list before returning.
use std::sync::Arc;

use tracing::debug;

use portfolio_common::filter::{
    reset_filter_state, tag_selection, FilterState, ProjectFilterView, SortMode,
};
use portfolio_common::mcp_api::ProjectListResponse;
use portfolio_common::model::ProjectRecord;
use portfolio_common::tab::Tab;

pub struct Session {
    view: ProjectFilterView,
    filter: FilterState,
    tab: Tab,
}

impl Session {
    pub fn new(records: Arc<[ProjectRecord]>) -> Self {
        Self {
            view: ProjectFilterView::new(records),
            filter: reset_filter_state(),
            tab: Tab::default(),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn set_query(&mut self, query: String) -> ProjectListResponse {
        debug!(query = %query, "query updated");
        self.filter.query = query;
        self.visible()
    }

    pub fn set_sort_mode(&mut self, sort_mode: SortMode) -> ProjectListResponse {
        debug!(sort_mode = %sort_mode, "sort mode updated");
        self.filter.sort_mode = sort_mode;
        self.visible()
    }

    /// An empty selection clears the tag filter.
    pub fn set_tag_filter(&mut self, tag: Option<&str>) -> ProjectListResponse {
        self.filter.tag_filter = tag_selection(tag);
        debug!(tag = ?self.filter.tag_filter, "tag filter updated");
        self.visible()
    }

    pub fn reset(&mut self) -> ProjectListResponse {
        debug!("filters reset");
        self.filter = reset_filter_state();
        self.visible()
    }

    pub fn select_tab(&mut self, tab: Tab) {
        debug!(tab = %tab, "tab selected");
        self.tab = tab;
    }

    pub fn visible(&mut self) -> ProjectListResponse {
        let total = self.view.records().len();
        let projects = self
            .view
            .visible(&self.filter)
            .into_iter()
            .cloned()
            .collect();
        ProjectListResponse {
            filter: self.filter.clone(),
            total,
            projects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portfolio_common::model::Portfolio;

    fn session() -> Session {
        let portfolio = Portfolio::builtin().unwrap();
        Session::new(portfolio.projects.into())
    }

    fn titles(response: &ProjectListResponse) -> Vec<&str> {
        response.projects.iter().map(|p| p.title.as_str()).collect()
    }

    #[test]
    fn test_new_session_shows_all_by_relevance() {
        let mut s = session();
        let response = s.visible();
        assert_eq!(response.total, 4);
        assert_eq!(
            titles(&response),
            vec![
                "Prédiction de churn telco",
                "Recommandation e-commerce",
                "NLP – Analyse de sentiment",
                "Vision – Détection d'objets",
            ]
        );
        assert_eq!(s.tab(), Tab::Projects);
    }

    #[test]
    fn test_query_matches_tag_text() {
        let mut s = session();
        let response = s.set_query("sql".to_string());
        assert_eq!(titles(&response), vec!["Prédiction de churn telco"]);
        assert_eq!(response.filter.query, "sql");
    }

    #[test]
    fn test_alphabetical_sort_folds_accents() {
        let mut s = session();
        let response = s.set_sort_mode(SortMode::Alphabetical);
        assert_eq!(
            titles(&response),
            vec![
                "NLP – Analyse de sentiment",
                "Prédiction de churn telco",
                "Recommandation e-commerce",
                "Vision – Détection d'objets",
            ]
        );
    }

    #[test]
    fn test_tag_filter_and_clear() {
        let mut s = session();
        let response = s.set_tag_filter(Some("PyTorch"));
        assert_eq!(titles(&response), vec!["Recommandation e-commerce"]);

        let response = s.set_tag_filter(Some(""));
        assert_eq!(response.filter.tag_filter, None);
        assert_eq!(response.projects.len(), 4);
    }

    #[test]
    fn test_unknown_tag_is_empty_not_error() {
        let mut s = session();
        let response = s.set_tag_filter(Some("Nonexistent"));
        assert!(response.projects.is_empty());
        assert_eq!(response.total, 4);
    }

    #[test]
    fn test_reset_restores_default_view() {
        let mut s = session();
        let baseline = titles(&s.visible())
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>();

        s.set_query("vision".to_string());
        s.set_sort_mode(SortMode::Alphabetical);
        s.set_tag_filter(Some("Deep Learning"));
        let response = s.reset();

        assert_eq!(response.filter.query, "");
        assert_eq!(response.filter.tag_filter, None);
        assert_eq!(response.filter.sort_mode, SortMode::Relevance);
        assert_eq!(titles(&response), baseline);
    }

    #[test]
    fn test_tab_selection_keeps_filter() {
        let mut s = session();
        s.set_query("nlp".to_string());
        s.select_tab(Tab::Experience);
        s.select_tab(Tab::Projects);
        assert_eq!(titles(&s.visible()), vec!["NLP – Analyse de sentiment"]);
    }
}
