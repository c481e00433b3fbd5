/// Portfolio content loading.
///
/// Content is plain JSON with the shape of [`Portfolio`]. The built-in page is
/// embedded at compile time; a replacement can be loaded from disk. Both paths
/// go through the same validation, and any violation aborts the load instead
/// of dropping the offending entry.
use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::PortfolioError;
use crate::model::{Portfolio, MAX_RATING, MAX_SKILL_LEVEL};

const BUILTIN_JSON: &str = include_str!("data/portfolio.json");

impl Portfolio {
    /// The portfolio shipped with the crate.
    pub fn builtin() -> Result<Self, PortfolioError> {
        parse_portfolio(BUILTIN_JSON)
    }
}

/// Read and validate a portfolio JSON file.
pub fn load_portfolio(path: &Path) -> Result<Portfolio, PortfolioError> {
    let json = std::fs::read_to_string(path).map_err(|source| PortfolioError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let portfolio = parse_portfolio(&json)?;
    info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        "loaded portfolio content"
    );
    Ok(portfolio)
}

/// Deserialize and validate portfolio JSON.
pub fn parse_portfolio(json: &str) -> Result<Portfolio, PortfolioError> {
    let portfolio: Portfolio = serde_json::from_str(json)?;
    validate(&portfolio)?;
    debug!(
        projects = portfolio.projects.len(),
        skills = portfolio.skills.len(),
        experiences = portfolio.experiences.len(),
        "portfolio content validated"
    );
    Ok(portfolio)
}

fn validate(portfolio: &Portfolio) -> Result<(), PortfolioError> {
    let mut titles: HashSet<&str> = HashSet::new();
    for project in &portfolio.projects {
        if !titles.insert(project.title.as_str()) {
            return Err(PortfolioError::DuplicateTitle(project.title.clone()));
        }
        if project.rating > MAX_RATING {
            return Err(PortfolioError::RatingOutOfRange {
                title: project.title.clone(),
                rating: project.rating,
            });
        }
        let mut tags: HashSet<&str> = HashSet::new();
        for tag in &project.tags {
            if !tags.insert(tag.as_str()) {
                return Err(PortfolioError::DuplicateTag {
                    title: project.title.clone(),
                    tag: tag.clone(),
                });
            }
        }
    }

    if let Some(skill) = portfolio.skills.iter().find(|s| s.level > MAX_SKILL_LEVEL) {
        return Err(PortfolioError::SkillLevelOutOfRange {
            name: skill.name.clone(),
            level: skill.level,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn portfolio_json(projects: &str, skills: &str) -> String {
        format!(
            r##"{{
  "profile": {{
    "name": "Test", "headline": "h", "location": "l", "pitch": "p",
    "email": "t@example.com", "github": "https://github.com/t",
    "linkedin": "https://linkedin.com/in/t", "cv_url": "#"
  }},
  "skills": {skills},
  "featured_tags": [],
  "projects": {projects},
  "experiences": [],
  "education": [],
  "publications": []
}}"##
        )
    }

    fn project(title: &str, rating: u8, tags: &[&str]) -> String {
        let tags: Vec<String> = tags.iter().map(|t| format!("\"{t}\"")).collect();
        format!(
            r##"{{"title": "{title}", "summary": "s", "impact": "i",
"links": {{"code": "c", "demo": "#"}}, "tags": [{}], "rating": {rating}}}"##,
            tags.join(", ")
        )
    }

    #[test]
    fn test_builtin_content_is_valid() {
        let portfolio = Portfolio::builtin().expect("builtin content parses");
        assert_eq!(portfolio.projects.len(), 4);
        assert_eq!(portfolio.skills.len(), 9);
        assert_eq!(portfolio.featured_tags.len(), 8);
        assert_eq!(portfolio.experiences.len(), 2);
        assert_eq!(portfolio.education.len(), 2);
        assert_eq!(portfolio.publications.len(), 2);
        assert_eq!(portfolio.projects[0].title, "Prédiction de churn telco");
        assert_eq!(portfolio.projects[0].rating, 5);
        assert_eq!(portfolio.profile.name, "Emmanuel BONKOUNGOU");
    }

    #[test]
    fn test_parse_minimal_portfolio() {
        let json = portfolio_json(&format!("[{}]", project("A", 3, &["x", "y"])), "[]");
        let portfolio = parse_portfolio(&json).unwrap();
        assert_eq!(portfolio.projects.len(), 1);
        assert_eq!(portfolio.projects[0].tags, vec!["x", "y"]);
        assert_eq!(portfolio.projects[0].links.demo, "#");
    }

    #[test]
    fn test_duplicate_title_rejected() {
        let projects = format!("[{}, {}]", project("A", 3, &[]), project("A", 2, &[]));
        let err = parse_portfolio(&portfolio_json(&projects, "[]")).unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateTitle(ref t) if t == "A"));
    }

    #[test]
    fn test_rating_out_of_range_rejected() {
        let projects = format!("[{}]", project("A", 6, &[]));
        let err = parse_portfolio(&portfolio_json(&projects, "[]")).unwrap_err();
        assert!(matches!(err, PortfolioError::RatingOutOfRange { rating: 6, .. }));
    }

    #[test]
    fn test_duplicate_tag_within_project_rejected() {
        let projects = format!("[{}]", project("A", 1, &["NLP", "NLP"]));
        let err = parse_portfolio(&portfolio_json(&projects, "[]")).unwrap_err();
        assert!(matches!(err, PortfolioError::DuplicateTag { ref tag, .. } if tag == "NLP"));
    }

    #[test]
    fn test_same_tag_across_projects_allowed() {
        let projects = format!(
            "[{}, {}]",
            project("A", 1, &["NLP"]),
            project("B", 1, &["NLP"])
        );
        assert!(parse_portfolio(&portfolio_json(&projects, "[]")).is_ok());
    }

    #[test]
    fn test_skill_level_out_of_range_rejected() {
        let skills = r#"[{"name": "Rust", "level": 101}]"#;
        let err = parse_portfolio(&portfolio_json("[]", skills)).unwrap_err();
        assert!(matches!(err, PortfolioError::SkillLevelOutOfRange { level: 101, .. }));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = parse_portfolio("{ not json").unwrap_err();
        assert!(matches!(err, PortfolioError::Json(_)));
    }

    #[test]
    fn test_load_missing_file_reports_path() {
        let path = Path::new("/nonexistent/portfolio.json");
        let err = load_portfolio(path).unwrap_err();
        match err {
            PortfolioError::Io { path: p, .. } => assert_eq!(p, path),
            other => panic!("expected io error, got {other}"),
        }
    }
}
