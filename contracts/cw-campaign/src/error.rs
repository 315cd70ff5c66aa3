use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    PaymentError(#[from] PaymentError),

    #[error("Unauthorized")]
    Unauthorized {},

    #[error("Campaign denom cannot be an empty string")]
    EmptyDenom {},

    #[error("Contribution too low. Minimum is ({minimum}), got ({sent})")]
    ContributionTooLow { minimum: Uint128, sent: Uint128 },

    #[error("Request description cannot be an empty string")]
    EmptyDescription {},

    #[error("Request value must be greater than zero")]
    ZeroValue {},

    #[error("Request ({id}) does not exist")]
    RequestNotFound { id: u64 },

    #[error("Only approvers may approve requests")]
    NotApprover {},

    #[error("Request ({id}) has already been approved by this address")]
    AlreadyApproved { id: u64 },

    #[error("Request ({id}) has already been finalized")]
    AlreadyFinalized { id: u64 },

    #[error("Request needs approval from more than half of approvers. Has ({approvals}) of ({approvers})")]
    NotEnoughApprovals { approvals: u64, approvers: u64 },

    #[error("Campaign balance ({available}) cannot cover request value ({requested})")]
    InsufficientFunds {
        available: Uint128,
        requested: Uint128,
    },
}
