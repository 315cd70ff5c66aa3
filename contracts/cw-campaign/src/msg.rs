use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

use crate::state::Request;

#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to create and finalize requests. Must be a
    /// valid account address.
    pub manager: String,
    /// The smallest contribution that makes the sender an approver.
    pub minimum_contribution: Uint128,
    /// The native denom contributions are accepted in.
    pub denom: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Contributes the attached funds to the campaign. Contributions of
    /// at least the minimum make the sender an approver.
    Contribute {},
    /// Proposes sending `value` to `recipient` (only manager)
    CreateRequest {
        /// What the funds will be spent on
        description: String,
        /// The amount to send, in the campaign denom
        value: Uint128,
        /// Recipient address of the funds
        recipient: String,
    },
    /// Signs off on a request (only approvers, once per request)
    ApproveRequest {
        /// The ID of the request to approve
        id: u64,
    },
    /// Pays out a request approved by a majority of approvers (only
    /// manager)
    FinalizeRequest {
        /// The ID of the request to finalize
        id: u64,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the campaign manager
    #[returns(::cosmwasm_std::Addr)]
    Manager {},
    /// Returns whether the address is an approver
    #[returns(bool)]
    Approver { address: String },
    /// Returns the number of approvers
    #[returns(u64)]
    ApproversCount {},
    /// Returns a single request by ID
    #[returns(crate::state::Request)]
    Request { id: u64 },
    /// List requests in creation order
    #[returns(Vec<RequestResponse>)]
    Requests {
        /// Used for pagination
        start_after: Option<u64>,
        /// The number of requests to return
        limit: Option<u32>,
    },
    /// Returns the number of requests
    #[returns(u64)]
    RequestsCount {},
    /// Returns whether the address has approved the request
    #[returns(bool)]
    HasApproved { id: u64, address: String },
    /// Returns an overview of the campaign
    #[returns(SummaryResponse)]
    Summary {},
}

#[cw_serde]
pub struct RequestResponse {
    pub id: u64,
    pub request: Request,
}

#[cw_serde]
pub struct SummaryResponse {
    pub manager: Addr,
    pub minimum_contribution: Uint128,
    pub denom: String,
    /// Funds currently held by the campaign
    pub balance: Uint128,
    pub requests_count: u64,
    pub approvers_count: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
