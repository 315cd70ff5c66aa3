use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("wallet provided no accounts")]
    NoAccounts {},

    #[error("wallet error: {0}")]
    Wallet(#[from] anyhow::Error),
}
