#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Order, Reply, Response, StdResult,
    SubMsg, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw_campaign::msg::InstantiateMsg as CampaignInstantiateMsg;
use cw_storage_plus::Bound;
use cw_utils::{nonpayable, parse_reply_instantiate_data};

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::state::{campaigns, CampaignInfo, CAMPAIGN_CODE_ID, CAMPAIGN_COUNT, TMP_MANAGER};

pub(crate) const CONTRACT_NAME: &str = "crates.io:cw-campaign-factory";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const INSTANTIATE_CAMPAIGN_REPLY_ID: u64 = 0;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    cw_ownable::initialize_owner(deps.storage, deps.api, msg.owner.as_deref())?;
    CAMPAIGN_CODE_ID.save(deps.storage, &msg.campaign_code_id)?;
    CAMPAIGN_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("creator", info.sender)
        .add_attribute("campaign_code_id", msg.campaign_code_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreateCampaign {
            minimum_contribution,
            denom,
            label,
        } => create_campaign(deps, info, minimum_contribution, denom, label),
        ExecuteMsg::UpdateCodeId { campaign_code_id } => {
            execute_update_code_id(deps, info, campaign_code_id)
        }
        ExecuteMsg::UpdateOwnership(action) => {
            let ownership = cw_ownable::update_ownership(deps, &env.block, &info.sender, action)?;
            Ok(Response::default().add_attributes(ownership.into_attributes()))
        }
    }
}

pub fn create_campaign(
    deps: DepsMut,
    info: MessageInfo,
    minimum_contribution: Uint128,
    denom: String,
    label: Option<String>,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;

    // The manager is stashed until the reply so it can be recorded
    // alongside the new address.
    if TMP_MANAGER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::Reentrancy);
    }
    TMP_MANAGER.save(deps.storage, &info.sender)?;

    let code_id = CAMPAIGN_CODE_ID.load(deps.storage)?;
    let label = match label {
        Some(label) => label,
        None => format!("campaign-{}", CAMPAIGN_COUNT.load(deps.storage)?),
    };

    let instantiate_msg = CampaignInstantiateMsg {
        manager: info.sender.to_string(),
        minimum_contribution,
        denom,
    };

    // Instantiate the campaign with its manager as the admin.
    let instantiate = WasmMsg::Instantiate {
        admin: Some(info.sender.to_string()),
        code_id,
        msg: to_json_binary(&instantiate_msg)?,
        funds: vec![],
        label,
    };

    let msg = SubMsg::reply_on_success(instantiate, INSTANTIATE_CAMPAIGN_REPLY_ID);
    Ok(Response::default()
        .add_attribute("action", "create_campaign")
        .add_attribute("manager", info.sender)
        .add_submessage(msg))
}

pub fn execute_update_code_id(
    deps: DepsMut,
    info: MessageInfo,
    campaign_code_id: u64,
) -> Result<Response, ContractError> {
    cw_ownable::assert_owner(deps.storage, &info.sender)?;
    CAMPAIGN_CODE_ID.save(deps.storage, &campaign_code_id)?;
    Ok(Response::default()
        .add_attribute("action", "update_code_id")
        .add_attribute("campaign_code_id", campaign_code_id.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::DeployedCampaigns { start_after, limit } => {
            to_json_binary(&query_deployed_campaigns(deps, start_after, limit)?)
        }
        QueryMsg::CampaignsByManager {
            manager,
            start_after,
            limit,
        } => to_json_binary(&query_campaigns_by_manager(
            deps,
            manager,
            start_after,
            limit,
        )?),
        QueryMsg::CampaignCount {} => to_json_binary(&CAMPAIGN_COUNT.load(deps.storage)?),
        QueryMsg::Ownership {} => to_json_binary(&cw_ownable::get_ownership(deps.storage)?),
        QueryMsg::CodeId {} => to_json_binary(&CAMPAIGN_CODE_ID.load(deps.storage)?),
    }
}

pub fn query_deployed_campaigns(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<CampaignInfo>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let min = start_after.map(Bound::exclusive);

    campaigns()
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, campaign)| campaign))
        .collect()
}

pub fn query_campaigns_by_manager(
    deps: Deps,
    manager: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<CampaignInfo>> {
    let manager = deps.api.addr_validate(&manager)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let min = start_after.map(Bound::exclusive);

    campaigns()
        .idx
        .manager
        .prefix(manager.to_string())
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, campaign)| campaign))
        .collect()
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        INSTANTIATE_CAMPAIGN_REPLY_ID => {
            let res = parse_reply_instantiate_data(msg)?;
            let contract = deps.api.addr_validate(&res.contract_address)?;

            let manager = TMP_MANAGER.load(deps.storage)?;
            TMP_MANAGER.remove(deps.storage);

            let id = CAMPAIGN_COUNT.load(deps.storage)?;
            campaigns().save(
                deps.storage,
                id,
                &CampaignInfo {
                    id,
                    contract: contract.clone(),
                    manager: manager.clone(),
                },
            )?;
            CAMPAIGN_COUNT.save(deps.storage, &(id + 1))?;

            Ok(Response::default()
                .add_attribute("action", "record_campaign")
                .add_attribute("new_campaign", contract)
                .add_attribute("campaign_id", id.to_string())
                .add_attribute("manager", manager))
        }
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
