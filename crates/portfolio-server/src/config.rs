use std::path::PathBuf;

use portfolio_common::content::load_portfolio;
use portfolio_common::model::Portfolio;

use crate::error::AppError;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub content_path: Option<PathBuf>,
    pub listen_addr: Option<String>,
}

impl Config {
    /// Optional:
    /// - `PORTFOLIO_CONTENT_PATH` (JSON file replacing the built-in portfolio)
    /// - `MCP_TCP_LISTEN_ADDR` (serve over TCP instead of stdio)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_vars(
            std::env::var("PORTFOLIO_CONTENT_PATH").ok(),
            std::env::var("MCP_TCP_LISTEN_ADDR").ok(),
        )
    }

    fn from_vars(
        content_path: Option<String>,
        listen_addr: Option<String>,
    ) -> Result<Self, AppError> {
        let content_path = content_path
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        if let Some(path) = &content_path {
            if !path.is_file() {
                return Err(AppError::Config(format!(
                    "PORTFOLIO_CONTENT_PATH does not point to a file: {}",
                    path.display()
                )));
            }
        }

        Ok(Self {
            content_path,
            listen_addr: listen_addr.filter(|a| !a.trim().is_empty()),
        })
    }

    pub fn load_portfolio(&self) -> Result<Portfolio, AppError> {
        let portfolio = match &self.content_path {
            Some(path) => load_portfolio(path)?,
            None => Portfolio::builtin()?,
        };
        Ok(portfolio)
    }
}
