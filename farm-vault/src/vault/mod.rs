mod config;
pub use config::{execute_accept_owner, execute_initialize, execute_propose_owner, require_owner};
mod custody;
mod deposit;
pub use deposit::execute_deposit_and_stake;
mod stake;
mod withdraw;
pub use withdraw::{execute_withdraw_and_harvest, pending_reward};
