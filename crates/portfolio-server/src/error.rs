use portfolio_common::error::PortfolioError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    #[error("config error: {0}")]
    Config(String),
}
