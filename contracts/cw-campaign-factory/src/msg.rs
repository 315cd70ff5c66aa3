use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;
use cw_ownable::cw_ownable_execute;

#[cw_serde]
pub struct InstantiateMsg {
    /// The account allowed to update the campaign code ID. If no owner,
    /// the code ID can never change.
    pub owner: Option<String>,
    /// The code ID of `cw-campaign` used for new campaigns.
    pub campaign_code_id: u64,
}

#[cw_ownable_execute]
#[cw_serde]
pub enum ExecuteMsg {
    /// Instantiates a new campaign managed by the sender.
    CreateCampaign {
        /// The smallest contribution that makes a contributor an approver
        minimum_contribution: Uint128,
        /// The native denom the campaign accepts
        denom: String,
        /// Label for the instantiated contract. Defaults to
        /// `campaign-{id}`.
        label: Option<String>,
    },

    /// Callable only by the current owner. Updates the code ID used
    /// while instantiating campaigns.
    UpdateCodeId { campaign_code_id: u64 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns list of all deployed campaigns in creation order
    #[returns(Vec<crate::state::CampaignInfo>)]
    DeployedCampaigns {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Returns list of all campaigns managed by an address
    #[returns(Vec<crate::state::CampaignInfo>)]
    CampaignsByManager {
        manager: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Returns the number of deployed campaigns
    #[returns(u64)]
    CampaignCount {},
    /// Returns info about the contract ownership, if set
    #[returns(::cw_ownable::Ownership<::cosmwasm_std::Addr>)]
    Ownership {},

    /// Returns the code ID currently being used to instantiate campaigns.
    #[returns(::std::primitive::u64)]
    CodeId {},
}

#[cw_serde]
pub struct MigrateMsg {}
