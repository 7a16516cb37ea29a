use crate::dependencies::FarmClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::custody;
use soroban_sdk::{panic_with_error, Address, Env};

/// Stake `amount` of `lp_token` held by the vault into `pool_id`
///
/// The pool must exist and accept `lp_token`; otherwise nothing is written, approved or
/// deposited. The ledger is credited before the farm is called.
///
/// ### Panics
/// `InvalidPool` if `pool_id` is out of range or registered for a different liquidity share
pub(crate) fn stake(e: &Env, lp_token: &Address, amount: i128, pool_id: u32) {
    let farm = FarmClient::new(e, &storage::get_farm(e));
    require_pool_accepts(e, &farm, pool_id, lp_token);

    let staked = storage::get_staked(e, pool_id);
    storage::set_staked(e, pool_id, &(staked + amount));

    custody::approve(e, lp_token, &farm.address, amount);
    farm.deposit(&e.current_contract_address(), &pool_id, &amount);

    VaultEvents::stake(e, pool_id, amount);
}

/// Load the pool registered under `pool_id` and check it accepts `lp_token`
fn require_pool_accepts(e: &Env, farm: &FarmClient, pool_id: u32, lp_token: &Address) {
    if pool_id >= farm.pool_length() {
        panic_with_error!(e, VaultError::InvalidPool);
    }
    if farm.pool_info(&pool_id).lp_token != *lp_token {
        panic_with_error!(e, VaultError::InvalidPool);
    }
}
