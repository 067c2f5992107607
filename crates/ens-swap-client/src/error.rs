use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid amount: {message}")]
    InvalidAmount { message: String },

    #[error("Invalid slippage: {value}")]
    InvalidSlippage { value: String },

    #[error("Invalid transaction transition: {from} -> {to}")]
    InvalidTransition { from: &'static str, to: &'static str },

    /// Passed through verbatim from the wallet library
    #[error("{message}")]
    Wallet { message: String },

    #[error("{message}")]
    Resolver { message: String },
}

pub type Result<T> = std::result::Result<T, ClientError>;
