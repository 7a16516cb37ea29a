#![no_std]

mod constants;
mod contract;
mod dependencies;
mod errors;
mod events;
pub mod storage;
mod vault;

pub use contract::*;
pub use dependencies::PoolInfo;
pub use errors::VaultError;
pub mod testutils;
