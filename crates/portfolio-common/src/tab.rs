use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::PortfolioError;

/// Section selector of the portfolio page. Any tab may follow any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Tab {
    #[default]
    #[serde(rename = "projets")]
    Projects,
    #[serde(rename = "experience")]
    Experience,
    /// Publications followed by education.
    #[serde(rename = "plus")]
    More,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Projects, Tab::Experience, Tab::More];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Projects => "projets",
            Tab::Experience => "experience",
            Tab::More => "plus",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Projects => "Projets",
            Tab::Experience => "Expérience",
            Tab::More => "Publications & Formation",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Tab {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Tab::ALL
            .into_iter()
            .find(|tab| tab.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| PortfolioError::UnknownTab(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tab_keys() {
        assert_eq!("projets".parse::<Tab>().unwrap(), Tab::Projects);
        assert_eq!("Experience".parse::<Tab>().unwrap(), Tab::Experience);
        assert_eq!(" plus ".parse::<Tab>().unwrap(), Tab::More);
        assert!(matches!(
            "contact".parse::<Tab>(),
            Err(PortfolioError::UnknownTab(ref k)) if k == "contact"
        ));
    }

    #[test]
    fn test_default_tab_is_projects() {
        assert_eq!(Tab::default(), Tab::Projects);
    }

    #[test]
    fn test_keys_round_trip_through_serde() {
        for tab in Tab::ALL {
            let json = serde_json::to_string(&tab).unwrap();
            assert_eq!(json, format!("\"{}\"", tab.key()));
        }
        assert_eq!(Tab::More.label(), "Publications & Formation");
    }
}
