use cosmwasm_std::Empty;

use cw_multi_test::{Contract, ContractWrapper};

pub fn campaign_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw_campaign::contract::execute,
        cw_campaign::contract::instantiate,
        cw_campaign::contract::query,
    )
    .with_migrate(cw_campaign::contract::migrate);
    Box::new(contract)
}

pub fn campaign_factory_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        cw_campaign_factory::contract::execute,
        cw_campaign_factory::contract::instantiate,
        cw_campaign_factory::contract::query,
    )
    .with_reply(cw_campaign_factory::contract::reply)
    .with_migrate(cw_campaign_factory::contract::migrate);
    Box::new(contract)
}
