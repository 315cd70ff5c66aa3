use cosmwasm_std::{Addr, CosmosMsg, StdResult};
use cw_campaign::CampaignContract;

use crate::{ClientError, Wallet};

/// The approve and finalize buttons of a request row.
#[derive(Clone, Debug, PartialEq)]
pub struct RequestActions {
    pub campaign: CampaignContract,
    pub id: u64,
}

impl RequestActions {
    pub fn new(campaign: CampaignContract, id: u64) -> Self {
        Self { campaign, id }
    }

    /// Approves the request from the wallet's active account.
    pub fn on_approve<W: Wallet>(&self, wallet: &mut W) -> Result<W::Response, ClientError> {
        log::debug!(
            "approving request {} on campaign {}",
            self.id,
            self.campaign.addr()
        );
        self.submit(wallet, |campaign, id| campaign.approve_request(id))
    }

    /// Finalizes the request from the wallet's active account.
    pub fn on_finalize<W: Wallet>(&self, wallet: &mut W) -> Result<W::Response, ClientError> {
        log::debug!(
            "finalizing request {} on campaign {}",
            self.id,
            self.campaign.addr()
        );
        self.submit(wallet, |campaign, id| campaign.finalize_request(id))
    }

    fn submit<W: Wallet>(
        &self,
        wallet: &mut W,
        build: impl FnOnce(&CampaignContract, u64) -> StdResult<CosmosMsg>,
    ) -> Result<W::Response, ClientError> {
        let sender = active_account(wallet)?;
        let msg = build(&self.campaign, self.id)?;
        let res = wallet.execute(&sender, msg).map_err(|err| {
            log::warn!("request {} transaction from {sender} failed: {err}", self.id);
            ClientError::Wallet(err)
        })?;
        Ok(res)
    }
}

fn active_account<W: Wallet>(wallet: &W) -> Result<Addr, ClientError> {
    wallet
        .accounts()?
        .into_iter()
        .next()
        .ok_or(ClientError::NoAccounts {})
}
