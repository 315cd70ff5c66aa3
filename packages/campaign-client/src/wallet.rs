use cosmwasm_std::{Addr, CosmosMsg};

/// An account and transaction provider, such as a browser extension or
/// a local signer.
pub trait Wallet {
    /// What the provider returns for a submitted transaction.
    type Response;

    /// The provider's accounts. The first one is the active account.
    fn accounts(&self) -> anyhow::Result<Vec<Addr>>;

    /// Signs and broadcasts `msg` on behalf of `sender`.
    fn execute(&mut self, sender: &Addr, msg: CosmosMsg) -> anyhow::Result<Self::Response>;
}
