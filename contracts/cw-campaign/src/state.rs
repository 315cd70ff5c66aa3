use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    /// The account allowed to create and finalize requests.
    pub manager: Addr,
    /// The smallest contribution that makes the sender an approver.
    pub minimum_contribution: Uint128,
    /// The native denom contributions and payouts are made in.
    pub denom: String,
}

/// A manager-proposed disbursement of campaign funds.
#[cw_serde]
pub struct Request {
    /// What the funds will be spent on
    pub description: String,
    /// The amount to send to the recipient, in the campaign denom
    pub value: Uint128,
    /// The account that receives the funds once finalized
    pub recipient: Addr,
    /// Whether the request has been finalized and paid out
    pub complete: bool,
    /// The number of approvers who signed off on the request
    pub approval_count: u64,
}

impl Request {
    /// True when more than half of `approvers_count` approved this
    /// request.
    pub fn has_majority(&self, approvers_count: u64) -> bool {
        u128::from(self.approval_count) * 2 > u128::from(approvers_count)
    }
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Addresses that contributed at least the minimum.
pub const APPROVERS: Map<&Addr, Empty> = Map::new("approvers");
pub const APPROVERS_COUNT: Item<u64> = Item::new("approvers_count");

/// Requests keyed by a zero-based id in creation order.
pub const REQUESTS: Map<u64, Request> = Map::new("requests");
pub const REQUEST_COUNT: Item<u64> = Item::new("request_count");

/// (request id, approver) pairs that have already been counted.
pub const VOTES: Map<(u64, &Addr), Empty> = Map::new("votes");
