use crate::dependencies::FarmClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::custody;
use soroban_sdk::{log, panic_with_error, Address, Env};

/// Unstake `amount` from `pool_id` and forward the withdrawn share and the vault's whole reward
/// balance to the owner
///
/// The ledger is debited before the farm is called, so a nested call made by the farm sees the
/// reduced balance. A zero `amount` only harvests and leaves the ledger untouched.
///
/// ### Returns
/// The amount of reward forwarded to the owner
///
/// ### Panics
/// - `InvalidAmount` if `amount` is negative
/// - `InsufficientStakedAmount` if `amount` exceeds what the vault staked in `pool_id`
pub fn execute_withdraw_and_harvest(e: &Env, owner: &Address, pool_id: u32, amount: i128) -> i128 {
    if amount < 0 {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
    let staked = storage::get_staked(e, pool_id);
    if staked < amount {
        panic_with_error!(e, VaultError::InsufficientStakedAmount);
    }
    if amount > 0 {
        storage::set_staked(e, pool_id, &(staked - amount));
    }

    let vault = e.current_contract_address();
    let farm = FarmClient::new(e, &storage::get_farm(e));
    let lp_token = farm.pool_info(&pool_id).lp_token;
    let lp_before = custody::balance(e, &lp_token, &vault);
    farm.withdraw(&vault, &pool_id, &amount);

    // forward what the farm actually returned, which may be less than `amount`
    let returned = custody::balance(e, &lp_token, &vault) - lp_before;
    if returned > 0 {
        custody::push(e, &lp_token, owner, returned);
    }
    VaultEvents::withdraw(e, pool_id, amount);

    // the farm settles every pending reward of the vault, not only this pool's
    let reward_token = farm.reward_token();
    let reward = custody::balance(e, &reward_token, &vault);
    if reward > 0 {
        log!(e, "forwarding harvested reward", pool_id, reward);
        custody::push(e, &reward_token, owner, reward);
        VaultEvents::harvest(e, reward_token, reward);
    }
    reward
}

/// Reward the farm would settle to the vault for `pool_id`
pub fn pending_reward(e: &Env, pool_id: u32) -> i128 {
    let farm = FarmClient::new(e, &storage::get_farm(e));
    farm.pending_reward(&pool_id, &e.current_contract_address())
}
