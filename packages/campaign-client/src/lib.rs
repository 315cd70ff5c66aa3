#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

mod actions;
mod error;
mod row;
mod wallet;


pub use crate::actions::RequestActions;
pub use crate::error::ClientError;
pub use crate::row::{load_request_rows, RequestRow, DEFAULT_DECIMALS};
pub use crate::wallet::Wallet;
