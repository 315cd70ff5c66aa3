use cosmwasm_std::{
    coin, coins,
    testing::{mock_dependencies, mock_env, mock_info},
    Addr, Coin, Empty, Uint128,
};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use cw_utils::PaymentError;

use crate::{
    contract::{instantiate, migrate, CONTRACT_NAME, CONTRACT_VERSION},
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg},
    state::Request,
    CampaignContract, ContractError,
};

const DENOM: &str = "ujuno";
const MINIMUM: u128 = 100;

pub struct Test {
    pub app: App,
    pub campaign: CampaignContract,
    pub manager: Addr,
    pub recipient: Addr,
}

impl Test {
    pub fn new() -> Self {
        let manager = Addr::unchecked("manager");
        let recipient = Addr::unchecked("recipient");
        let mut app = App::new(|router, _, storage| {
            for who in ["manager", "alice", "bob", "carol"] {
                router
                    .bank
                    .init_balance(
                        storage,
                        &Addr::unchecked(who),
                        vec![coin(10000, DENOM), coin(10000, "uatom")],
                    )
                    .unwrap();
            }
        });
        let code_id = app.store_code(campaign_contract());
        let addr = app
            .instantiate_contract(
                code_id,
                manager.clone(),
                &InstantiateMsg {
                    manager: manager.to_string(),
                    minimum_contribution: Uint128::new(MINIMUM),
                    denom: DENOM.to_string(),
                },
                &[],
                "cw-campaign",
                None,
            )
            .unwrap();
        Self {
            app,
            campaign: CampaignContract::new(addr),
            manager,
            recipient,
        }
    }

    fn execute(
        &mut self,
        sender: &str,
        msg: &ExecuteMsg,
        funds: &[Coin],
    ) -> Result<AppResponse, anyhow::Error> {
        self.app.execute_contract(
            Addr::unchecked(sender),
            self.campaign.addr(),
            msg,
            funds,
        )
    }

    pub fn contribute(&mut self, sender: &str, amount: u128) -> Result<AppResponse, anyhow::Error> {
        self.execute(sender, &ExecuteMsg::Contribute {}, &coins(amount, DENOM))
    }

    pub fn create_request(
        &mut self,
        sender: &str,
        description: &str,
        value: u128,
    ) -> Result<AppResponse, anyhow::Error> {
        let msg = ExecuteMsg::CreateRequest {
            description: description.to_string(),
            value: Uint128::new(value),
            recipient: self.recipient.to_string(),
        };
        self.execute(sender, &msg, &[])
    }

    pub fn approve(&mut self, sender: &str, id: u64) -> Result<AppResponse, anyhow::Error> {
        self.execute(sender, &ExecuteMsg::ApproveRequest { id }, &[])
    }

    pub fn finalize(&mut self, sender: &str, id: u64) -> Result<AppResponse, anyhow::Error> {
        self.execute(sender, &ExecuteMsg::FinalizeRequest { id }, &[])
    }

    pub fn is_approver(&self, address: &str) -> bool {
        self.campaign
            .is_approver(&self.app.wrap(), address)
            .unwrap()
    }

    pub fn approvers_count(&self) -> u64 {
        self.campaign.approvers_count(&self.app.wrap()).unwrap()
    }

    pub fn request(&self, id: u64) -> Request {
        self.campaign.request(&self.app.wrap(), id).unwrap()
    }

    pub fn balance(&self, address: impl Into<String>) -> u128 {
        self.app
            .wrap()
            .query_balance(address, DENOM)
            .unwrap()
            .amount
            .u128()
    }
}

fn campaign_contract() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        crate::contract::execute,
        crate::contract::instantiate,
        crate::contract::query,
    );
    Box::new(contract)
}

#[test]
pub fn test_instantiate() {
    let test = Test::new();

    let manager = test.campaign.manager(&test.app.wrap()).unwrap();
    assert_eq!(manager, test.manager);

    let summary = test.campaign.summary(&test.app.wrap()).unwrap();
    assert_eq!(summary.minimum_contribution, Uint128::new(MINIMUM));
    assert_eq!(summary.denom, DENOM);
    assert_eq!(summary.balance, Uint128::zero());
    assert_eq!(summary.requests_count, 0);
    assert_eq!(summary.approvers_count, 0);
}

#[test]
pub fn test_instantiate_empty_denom() {
    let mut deps = mock_dependencies();
    let err = instantiate(
        deps.as_mut(),
        mock_env(),
        mock_info("creator", &[]),
        InstantiateMsg {
            manager: "manager".to_string(),
            minimum_contribution: Uint128::new(MINIMUM),
            denom: "".to_string(),
        },
    )
    .unwrap_err();
    assert_eq!(err, ContractError::EmptyDenom {});
}

#[test]
pub fn test_contribute_marks_approver() {
    let mut test = Test::new();

    test.contribute("alice", 200).unwrap();
    assert!(test.is_approver("alice"));
    assert!(!test.is_approver("bob"));
    assert_eq!(test.approvers_count(), 1);
    assert_eq!(test.balance(test.campaign.addr()), 200);

    // Exactly the minimum is enough.
    test.contribute("bob", MINIMUM).unwrap();
    assert!(test.is_approver("bob"));
    assert_eq!(test.approvers_count(), 2);
}

#[test]
pub fn test_contribute_requires_minimum() {
    let mut test = Test::new();

    let err: ContractError = test
        .contribute("carol", 1)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::ContributionTooLow {
            minimum: Uint128::new(MINIMUM),
            sent: Uint128::new(1),
        }
    );
    assert!(!test.is_approver("carol"));
    assert_eq!(test.balance("carol"), 10000);
}

#[test]
pub fn test_contribute_wrong_funds() {
    let mut test = Test::new();

    let err: ContractError = test
        .execute("alice", &ExecuteMsg::Contribute {}, &[])
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::PaymentError(PaymentError::NoFunds {}));

    let err: ContractError = test
        .execute("alice", &ExecuteMsg::Contribute {}, &coins(500, "uatom"))
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::PaymentError(PaymentError::MissingDenom(DENOM.to_string()))
    );
}

#[test]
pub fn test_repeat_contribution_counts_once() {
    let mut test = Test::new();

    test.contribute("alice", 200).unwrap();
    test.contribute("alice", 300).unwrap();

    assert_eq!(test.approvers_count(), 1);
    assert_eq!(test.balance(test.campaign.addr()), 500);
}

#[test]
pub fn test_create_request() {
    let mut test = Test::new();

    test.create_request("manager", "Buy batteries", 100).unwrap();
    let request = test.request(0);
    assert_eq!(
        request,
        Request {
            description: "Buy batteries".to_string(),
            value: Uint128::new(100),
            recipient: test.recipient.clone(),
            complete: false,
            approval_count: 0,
        }
    );

    let count = test
        .campaign
        .requests_count(&test.app.wrap())
        .unwrap();
    assert_eq!(count, 1);

    // Only the manager may create requests.
    let err: ContractError = test
        .create_request("alice", "Buy batteries", 100)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::Unauthorized {});

    let err: ContractError = test
        .create_request("manager", "   ", 100)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::EmptyDescription {});

    let err: ContractError = test
        .create_request("manager", "Buy batteries", 0)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::ZeroValue {});
}

#[test]
pub fn test_approve_request() {
    let mut test = Test::new();
    test.contribute("alice", 200).unwrap();
    test.create_request("manager", "Hire a designer", 100)
        .unwrap();

    // Bob never contributed.
    let err: ContractError = test.approve("bob", 0).unwrap_err().downcast().unwrap();
    assert_eq!(err, ContractError::NotApprover {});

    test.approve("alice", 0).unwrap();
    assert_eq!(test.request(0).approval_count, 1);

    let campaign = test.campaign.clone();
    assert!(campaign.has_approved(&test.app.wrap(), 0, "alice").unwrap());
    assert!(!campaign.has_approved(&test.app.wrap(), 0, "bob").unwrap());

    let err: ContractError = test.approve("alice", 0).unwrap_err().downcast().unwrap();
    assert_eq!(err, ContractError::AlreadyApproved { id: 0 });
    assert_eq!(test.request(0).approval_count, 1);

    let err: ContractError = test.approve("alice", 5).unwrap_err().downcast().unwrap();
    assert_eq!(err, ContractError::RequestNotFound { id: 5 });
}

#[test]
pub fn test_finalize_requires_majority() {
    let mut test = Test::new();
    test.contribute("alice", 1000).unwrap();
    test.contribute("bob", 1000).unwrap();
    test.create_request("manager", "Pay the printer", 1500)
        .unwrap();

    // Half is not a majority.
    test.approve("alice", 0).unwrap();
    let err: ContractError = test
        .finalize("manager", 0)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::NotEnoughApprovals {
            approvals: 1,
            approvers: 2,
        }
    );

    test.approve("bob", 0).unwrap();

    let err: ContractError = test.finalize("alice", 0).unwrap_err().downcast().unwrap();
    assert_eq!(err, ContractError::Unauthorized {});

    let before = test.balance(test.recipient.clone());
    test.finalize("manager", 0).unwrap();
    assert_eq!(test.balance(test.recipient.clone()), before + 1500);
    assert_eq!(test.balance(test.campaign.addr()), 500);
    assert!(test.request(0).complete);

    let err: ContractError = test
        .finalize("manager", 0)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(err, ContractError::AlreadyFinalized { id: 0 });

    test.contribute("carol", 100).unwrap();
    let err: ContractError = test.approve("carol", 0).unwrap_err().downcast().unwrap();
    assert_eq!(err, ContractError::AlreadyFinalized { id: 0 });
}

#[test]
pub fn test_finalize_insufficient_funds() {
    let mut test = Test::new();
    test.contribute("alice", 100).unwrap();
    test.create_request("manager", "Rent a studio", 500)
        .unwrap();
    test.approve("alice", 0).unwrap();

    let err: ContractError = test
        .finalize("manager", 0)
        .unwrap_err()
        .downcast()
        .unwrap();
    assert_eq!(
        err,
        ContractError::InsufficientFunds {
            available: Uint128::new(100),
            requested: Uint128::new(500),
        }
    );
    assert!(!test.request(0).complete);
}

#[test]
pub fn test_list_requests() {
    let mut test = Test::new();
    for description in ["one", "two", "three"] {
        test.create_request("manager", description, 10).unwrap();
    }

    let all = test
        .campaign
        .requests(&test.app.wrap(), None, None)
        .unwrap();
    assert_eq!(
        all.iter().map(|r| r.id).collect::<Vec<_>>(),
        vec![0, 1, 2]
    );

    let page = test
        .campaign
        .requests(&test.app.wrap(), Some(0), Some(1))
        .unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].id, 1);
    assert_eq!(page[0].request.description, "two");
}

#[test]
pub fn test_migrate_update_version() {
    let mut deps = mock_dependencies();
    cw2::set_contract_version(&mut deps.storage, "my-contract", "old-version").unwrap();
    migrate(deps.as_mut(), mock_env(), MigrateMsg {}).unwrap();
    let version = cw2::get_contract_version(&deps.storage).unwrap();
    assert_eq!(version.version, CONTRACT_VERSION);
    assert_eq!(version.contract, CONTRACT_NAME);
}
