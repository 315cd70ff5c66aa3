use cosmwasm_std::{coins, Addr, CosmosMsg, QuerierWrapper, Uint128};
use cw_campaign::CampaignContract;
use cw_campaign_factory::{msg::QueryMsg as FactoryQueryMsg, state::CampaignInfo};
use cw_multi_test::{App, AppResponse, Executor};

use crate::contracts::{campaign_contract, campaign_factory_contract};

pub const DENOM: &str = "ujuno";
/// One whole token in the base denom.
pub const UNIT: u128 = 1_000_000;

pub struct CampaignSuiteBuilder {
    accounts: usize,
    initial_balance: u128,
    factory_owner: Option<String>,
}

impl Default for CampaignSuiteBuilder {
    fn default() -> Self {
        Self {
            accounts: 10,
            initial_balance: 100 * UNIT,
            factory_owner: None,
        }
    }
}

impl CampaignSuiteBuilder {
    /// Number of funded test accounts, named `account0`, `account1`, ...
    pub fn with_accounts(mut self, accounts: usize) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_initial_balance(mut self, initial_balance: u128) -> Self {
        self.initial_balance = initial_balance;
        self
    }

    pub fn with_factory_owner(mut self, owner: impl Into<String>) -> Self {
        self.factory_owner = Some(owner.into());
        self
    }

    pub fn build(self) -> CampaignSuite {
        let _ = env_logger::builder().is_test(true).try_init();

        let accounts: Vec<Addr> = (0..self.accounts)
            .map(|i| Addr::unchecked(format!("account{i}")))
            .collect();

        let initial_balance = self.initial_balance;
        let mut app = App::new(|router, _, storage| {
            for account in &accounts {
                router
                    .bank
                    .init_balance(storage, account, coins(initial_balance, DENOM))
                    .unwrap();
            }
        });

        let campaign_code_id = app.store_code(campaign_contract());
        let factory_code_id = app.store_code(campaign_factory_contract());

        let deployer = accounts
            .first()
            .cloned()
            .unwrap_or_else(|| Addr::unchecked("deployer"));
        let factory = app
            .instantiate_contract(
                factory_code_id,
                deployer,
                &cw_campaign_factory::msg::InstantiateMsg {
                    owner: self.factory_owner,
                    campaign_code_id,
                },
                &[],
                "campaign factory",
                None,
            )
            .unwrap();

        CampaignSuite {
            app,
            accounts,
            factory,
            campaign_code_id,
            factory_code_id,
        }
    }
}

pub struct CampaignSuite {
    pub app: App,
    pub accounts: Vec<Addr>,
    pub factory: Addr,
    pub campaign_code_id: u64,
    pub factory_code_id: u64,
}

impl Default for CampaignSuite {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignSuite {
    pub fn new() -> Self {
        CampaignSuiteBuilder::default().build()
    }

    pub fn builder() -> CampaignSuiteBuilder {
        CampaignSuiteBuilder::default()
    }

    /// get the app querier
    pub fn querier(&self) -> QuerierWrapper<'_> {
        self.app.wrap()
    }

    pub fn account(&self, index: usize) -> Addr {
        self.accounts[index].clone()
    }

    /// Creates a campaign through the factory and returns a handle to
    /// it.
    pub fn create_campaign(
        &mut self,
        manager: &Addr,
        minimum_contribution: u128,
    ) -> anyhow::Result<CampaignContract> {
        let res = self.app.execute_contract(
            manager.clone(),
            self.factory.clone(),
            &cw_campaign_factory::msg::ExecuteMsg::CreateCampaign {
                minimum_contribution: Uint128::new(minimum_contribution),
                denom: DENOM.to_string(),
                label: None,
            },
            &[],
        )?;

        // The factory's reply reports the instantiated address.
        let contract = res
            .events
            .iter()
            .filter(|event| event.ty == "wasm")
            .flat_map(|event| event.attributes.iter())
            .find(|attr| attr.key == "new_campaign")
            .map(|attr| attr.value.clone())
            .ok_or_else(|| anyhow::anyhow!("factory reported no new campaign"))?;
        Ok(CampaignContract::new(Addr::unchecked(contract)))
    }

    pub fn deployed_campaigns(&self) -> Vec<CampaignInfo> {
        self.querier()
            .query_wasm_smart(
                &self.factory,
                &FactoryQueryMsg::DeployedCampaigns {
                    start_after: None,
                    limit: None,
                },
            )
            .unwrap()
    }

    /// Executes a message built by a contract helper as `sender`.
    pub fn execute(&mut self, sender: &Addr, msg: CosmosMsg) -> anyhow::Result<AppResponse> {
        self.app.execute(sender.clone(), msg)
    }

    pub fn contribute(
        &mut self,
        campaign: &CampaignContract,
        sender: &Addr,
        amount: u128,
    ) -> anyhow::Result<AppResponse> {
        let msg = campaign.contribute(coins(amount, DENOM))?;
        self.execute(sender, msg)
    }

    pub fn create_request(
        &mut self,
        campaign: &CampaignContract,
        sender: &Addr,
        description: &str,
        value: u128,
        recipient: &Addr,
    ) -> anyhow::Result<AppResponse> {
        let msg = campaign.create_request(description, Uint128::new(value), recipient)?;
        self.execute(sender, msg)
    }

    pub fn approve_request(
        &mut self,
        campaign: &CampaignContract,
        sender: &Addr,
        id: u64,
    ) -> anyhow::Result<AppResponse> {
        let msg = campaign.approve_request(id)?;
        self.execute(sender, msg)
    }

    pub fn finalize_request(
        &mut self,
        campaign: &CampaignContract,
        sender: &Addr,
        id: u64,
    ) -> anyhow::Result<AppResponse> {
        let msg = campaign.finalize_request(id)?;
        self.execute(sender, msg)
    }

    pub fn balance(&self, address: impl Into<String>) -> u128 {
        self.querier()
            .query_balance(address, DENOM)
            .unwrap()
            .amount
            .u128()
    }
}
