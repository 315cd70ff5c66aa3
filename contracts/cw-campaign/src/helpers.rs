use cosmwasm_std::{
    to_json_binary, Addr, Coin, CosmosMsg, CustomQuery, QuerierWrapper, StdResult, Uint128,
    WasmMsg,
};
use schemars::JsonSchema;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    msg::{ExecuteMsg, QueryMsg, RequestResponse, SummaryResponse},
    state::Request,
};

/// A handle to a deployed campaign. Builds execute messages and wraps
/// queries so callers don't need to assemble JSON themselves.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct CampaignContract(pub Addr);

impl CampaignContract {
    pub fn new(addr: Addr) -> Self {
        CampaignContract(addr)
    }

    pub fn addr(&self) -> Addr {
        self.0.clone()
    }

    pub fn call(&self, msg: ExecuteMsg, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        Ok(WasmMsg::Execute {
            contract_addr: self.0.clone().into_string(),
            msg: to_json_binary(&msg)?,
            funds,
        }
        .into())
    }

    pub fn contribute(&self, funds: Vec<Coin>) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::Contribute {}, funds)
    }

    pub fn create_request(
        &self,
        description: impl Into<String>,
        value: Uint128,
        recipient: impl Into<String>,
    ) -> StdResult<CosmosMsg> {
        self.call(
            ExecuteMsg::CreateRequest {
                description: description.into(),
                value,
                recipient: recipient.into(),
            },
            vec![],
        )
    }

    pub fn approve_request(&self, id: u64) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::ApproveRequest { id }, vec![])
    }

    pub fn finalize_request(&self, id: u64) -> StdResult<CosmosMsg> {
        self.call(ExecuteMsg::FinalizeRequest { id }, vec![])
    }

    fn query<C: CustomQuery, T: DeserializeOwned>(
        &self,
        querier: &QuerierWrapper<C>,
        msg: &QueryMsg,
    ) -> StdResult<T> {
        querier.query_wasm_smart(self.0.as_str(), msg)
    }

    pub fn manager<C: CustomQuery>(&self, querier: &QuerierWrapper<C>) -> StdResult<Addr> {
        self.query(querier, &QueryMsg::Manager {})
    }

    pub fn is_approver<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        address: impl Into<String>,
    ) -> StdResult<bool> {
        self.query(
            querier,
            &QueryMsg::Approver {
                address: address.into(),
            },
        )
    }

    pub fn approvers_count<C: CustomQuery>(&self, querier: &QuerierWrapper<C>) -> StdResult<u64> {
        self.query(querier, &QueryMsg::ApproversCount {})
    }

    pub fn request<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        id: u64,
    ) -> StdResult<Request> {
        self.query(querier, &QueryMsg::Request { id })
    }

    pub fn requests_count<C: CustomQuery>(&self, querier: &QuerierWrapper<C>) -> StdResult<u64> {
        self.query(querier, &QueryMsg::RequestsCount {})
    }

    pub fn has_approved<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        id: u64,
        address: impl Into<String>,
    ) -> StdResult<bool> {
        self.query(
            querier,
            &QueryMsg::HasApproved {
                id,
                address: address.into(),
            },
        )
    }

    pub fn requests<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> StdResult<Vec<RequestResponse>> {
        self.query(querier, &QueryMsg::Requests { start_after, limit })
    }

    pub fn summary<C: CustomQuery>(
        &self,
        querier: &QuerierWrapper<C>,
    ) -> StdResult<SummaryResponse> {
        self.query(querier, &QueryMsg::Summary {})
    }
}
