#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    coins, to_json_binary, Addr, BankMsg, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Order,
    Response, StdResult, Storage, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;
use cw_utils::{must_pay, nonpayable};

use crate::{
    error::ContractError,
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, RequestResponse, SummaryResponse},
    state::{
        Config, Request, APPROVERS, APPROVERS_COUNT, CONFIG, REQUESTS, REQUEST_COUNT, VOTES,
    },
};

pub(crate) const CONTRACT_NAME: &str = "crates.io:cw-campaign";
pub(crate) const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let manager = deps.api.addr_validate(&msg.manager)?;
    if msg.denom.is_empty() {
        return Err(ContractError::EmptyDenom {});
    }

    CONFIG.save(
        deps.storage,
        &Config {
            manager: manager.clone(),
            minimum_contribution: msg.minimum_contribution,
            denom: msg.denom.clone(),
        },
    )?;
    APPROVERS_COUNT.save(deps.storage, &0)?;
    REQUEST_COUNT.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("manager", manager)
        .add_attribute("minimum_contribution", msg.minimum_contribution.to_string())
        .add_attribute("denom", msg.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Contribute {} => contribute(deps, info),
        ExecuteMsg::CreateRequest {
            description,
            value,
            recipient,
        } => create_request(deps, info, description, value, recipient),
        ExecuteMsg::ApproveRequest { id } => approve_request(deps, info, id),
        ExecuteMsg::FinalizeRequest { id } => finalize_request(deps, env, info, id),
    }
}

pub fn contribute(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let amount = must_pay(&info, &config.denom)?;
    if amount < config.minimum_contribution {
        return Err(ContractError::ContributionTooLow {
            minimum: config.minimum_contribution,
            sent: amount,
        });
    }

    // Repeat contributors are already counted.
    let new_approver = !APPROVERS.has(deps.storage, &info.sender);
    if new_approver {
        APPROVERS.save(deps.storage, &info.sender, &Empty {})?;
        APPROVERS_COUNT.update(deps.storage, |count| -> StdResult<u64> { Ok(count + 1) })?;
    }

    Ok(Response::new()
        .add_attribute("action", "contribute")
        .add_attribute("contributor", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("new_approver", new_approver.to_string()))
}

pub fn create_request(
    deps: DepsMut,
    info: MessageInfo,
    description: String,
    value: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    assert_manager(&config, &info.sender)?;

    if description.trim().is_empty() {
        return Err(ContractError::EmptyDescription {});
    }
    if value.is_zero() {
        return Err(ContractError::ZeroValue {});
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let id = REQUEST_COUNT.load(deps.storage)?;
    REQUESTS.save(
        deps.storage,
        id,
        &Request {
            description,
            value,
            recipient: recipient.clone(),
            complete: false,
            approval_count: 0,
        },
    )?;
    REQUEST_COUNT.save(deps.storage, &(id + 1))?;

    Ok(Response::new()
        .add_attribute("action", "create_request")
        .add_attribute("request_id", id.to_string())
        .add_attribute("value", value.to_string())
        .add_attribute("recipient", recipient))
}

pub fn approve_request(
    deps: DepsMut,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    if !APPROVERS.has(deps.storage, &info.sender) {
        return Err(ContractError::NotApprover {});
    }

    let mut request = load_request(deps.storage, id)?;
    if request.complete {
        return Err(ContractError::AlreadyFinalized { id });
    }
    if VOTES.has(deps.storage, (id, &info.sender)) {
        return Err(ContractError::AlreadyApproved { id });
    }

    VOTES.save(deps.storage, (id, &info.sender), &Empty {})?;
    request.approval_count += 1;
    REQUESTS.save(deps.storage, id, &request)?;

    Ok(Response::new()
        .add_attribute("action", "approve_request")
        .add_attribute("request_id", id.to_string())
        .add_attribute("approver", info.sender)
        .add_attribute("approval_count", request.approval_count.to_string()))
}

pub fn finalize_request(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: u64,
) -> Result<Response, ContractError> {
    nonpayable(&info)?;
    let config = CONFIG.load(deps.storage)?;
    assert_manager(&config, &info.sender)?;

    let mut request = load_request(deps.storage, id)?;
    if request.complete {
        return Err(ContractError::AlreadyFinalized { id });
    }

    let approvers_count = APPROVERS_COUNT.load(deps.storage)?;
    if !request.has_majority(approvers_count) {
        return Err(ContractError::NotEnoughApprovals {
            approvals: request.approval_count,
            approvers: approvers_count,
        });
    }

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;
    if balance < request.value {
        return Err(ContractError::InsufficientFunds {
            available: balance,
            requested: request.value,
        });
    }

    request.complete = true;
    REQUESTS.save(deps.storage, id, &request)?;

    let msg = BankMsg::Send {
        to_address: request.recipient.to_string(),
        amount: coins(request.value.u128(), config.denom),
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "finalize_request")
        .add_attribute("request_id", id.to_string())
        .add_attribute("value", request.value.to_string())
        .add_attribute("recipient", request.recipient))
}

fn assert_manager(config: &Config, sender: &Addr) -> Result<(), ContractError> {
    if config.manager != *sender {
        return Err(ContractError::Unauthorized {});
    }
    Ok(())
}

fn load_request(storage: &dyn Storage, id: u64) -> Result<Request, ContractError> {
    REQUESTS
        .may_load(storage, id)?
        .ok_or(ContractError::RequestNotFound { id })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Manager {} => to_json_binary(&CONFIG.load(deps.storage)?.manager),
        QueryMsg::Approver { address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&APPROVERS.has(deps.storage, &address))
        }
        QueryMsg::ApproversCount {} => to_json_binary(&APPROVERS_COUNT.load(deps.storage)?),
        QueryMsg::Request { id } => to_json_binary(&REQUESTS.load(deps.storage, id)?),
        QueryMsg::Requests { start_after, limit } => {
            to_json_binary(&query_requests(deps, start_after, limit)?)
        }
        QueryMsg::RequestsCount {} => to_json_binary(&REQUEST_COUNT.load(deps.storage)?),
        QueryMsg::HasApproved { id, address } => {
            let address = deps.api.addr_validate(&address)?;
            to_json_binary(&VOTES.has(deps.storage, (id, &address)))
        }
        QueryMsg::Summary {} => to_json_binary(&query_summary(deps, env)?),
    }
}

pub fn query_requests(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Vec<RequestResponse>> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let min = start_after.map(Bound::exclusive);

    REQUESTS
        .range(deps.storage, min, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(id, request)| RequestResponse { id, request }))
        .collect()
}

pub fn query_summary(deps: Deps, env: Env) -> StdResult<SummaryResponse> {
    let config = CONFIG.load(deps.storage)?;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, &config.denom)?
        .amount;

    Ok(SummaryResponse {
        manager: config.manager,
        minimum_contribution: config.minimum_contribution,
        denom: config.denom,
        balance,
        requests_count: REQUEST_COUNT.load(deps.storage)?,
        approvers_count: APPROVERS_COUNT.load(deps.storage)?,
    })
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    // Set contract to version to latest
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::default())
}
