use farm_vault::{FarmVaultClient, PoolInfo};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, vec, Address, Env, Vec};

use crate::SCALAR_7;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockFarmError {
    PoolNotFound = 1,
    InsufficientStake = 2,
}

#[derive(Clone)]
#[contracttype]
enum MockFarmKey {
    RewardToken,
    Pools,
    Reenter,
    WithdrawFee,
    Stake(u32, Address),
    Pending(u32, Address),
}

/// MasterChef style farm double
///
/// Reward accrual is driven by tests through `set_pending`; pending reward is paid
/// out of the farm's own reward balance on every deposit and withdraw.
#[contract]
pub struct MockFarm;

#[contractimpl]
impl MockFarm {
    pub fn __constructor(e: Env, reward_token: Address) {
        e.storage().instance().set(&MockFarmKey::RewardToken, &reward_token);
        e.storage().instance().set(&MockFarmKey::Pools, &Vec::<PoolInfo>::new(&e));
    }

    /// Register a pool for `lp_token` and return its id
    pub fn add_pool(e: Env, lp_token: Address) -> u32 {
        let mut pools = load_pools(&e);
        pools.push_back(PoolInfo { lp_token });
        e.storage().instance().set(&MockFarmKey::Pools, &pools);
        pools.len() - 1
    }

    /// Set the reward `user` will receive from `pool_id` on its next settlement
    pub fn set_pending(e: Env, pool_id: u32, user: Address, amount: i128) {
        e.storage()
            .persistent()
            .set(&MockFarmKey::Pending(pool_id, user), &amount);
    }

    /// Make `withdraw` call back into `vault` before it moves any funds
    pub fn set_reenter(e: Env, vault: Address) {
        e.storage().instance().set(&MockFarmKey::Reenter, &vault);
    }

    /// Keep a fraction (SCALAR_7) of every withdrawn amount
    pub fn set_withdraw_fee(e: Env, fee: i128) {
        e.storage().instance().set(&MockFarmKey::WithdrawFee, &fee);
    }

    /// Liquidity share `user` has staked in `pool_id`
    pub fn staked(e: Env, pool_id: u32, user: Address) -> i128 {
        load_stake(&e, pool_id, &user)
    }

    pub fn pool_length(e: Env) -> u32 {
        load_pools(&e).len()
    }

    pub fn pool_info(e: Env, pool_id: u32) -> PoolInfo {
        load_pool(&e, pool_id)
    }

    pub fn deposit(e: Env, from: Address, pool_id: u32, amount: i128) {
        from.require_auth();
        let pool = load_pool(&e, pool_id);

        let farm = e.current_contract_address();
        if amount > 0 {
            TokenClient::new(&e, &pool.lp_token).transfer_from(&farm, &from, &farm, &amount);
        }
        settle(&e, pool_id, &from);

        let stake = load_stake(&e, pool_id, &from);
        e.storage()
            .persistent()
            .set(&MockFarmKey::Stake(pool_id, from), &(stake + amount));
    }

    pub fn withdraw(e: Env, to: Address, pool_id: u32, amount: i128) {
        to.require_auth();
        if let Some(vault) = e.storage().instance().get::<MockFarmKey, Address>(&MockFarmKey::Reenter) {
            FarmVaultClient::new(&e, &vault).withdraw_and_harvest(&pool_id, &amount);
        }
        let pool = load_pool(&e, pool_id);

        let stake = load_stake(&e, pool_id, &to);
        if stake < amount {
            panic_with_error!(e, MockFarmError::InsufficientStake);
        }
        e.storage()
            .persistent()
            .set(&MockFarmKey::Stake(pool_id, to.clone()), &(stake - amount));

        let fee_rate: i128 = e.storage().instance().get(&MockFarmKey::WithdrawFee).unwrap_or(0);
        let returned = amount - amount.fixed_mul_floor(&e, &fee_rate, &SCALAR_7);
        if returned > 0 {
            TokenClient::new(&e, &pool.lp_token).transfer(&e.current_contract_address(), &to, &returned);
        }
        settle(&e, pool_id, &to);
    }

    pub fn pending_reward(e: Env, pool_id: u32, user: Address) -> i128 {
        e.storage()
            .persistent()
            .get(&MockFarmKey::Pending(pool_id, user))
            .unwrap_or(0)
    }

    pub fn reward_token(e: Env) -> Address {
        e.storage().instance().get(&MockFarmKey::RewardToken).unwrap()
    }
}

fn load_pools(e: &Env) -> Vec<PoolInfo> {
    e.storage()
        .instance()
        .get(&MockFarmKey::Pools)
        .unwrap_or(vec![e])
}

fn load_pool(e: &Env, pool_id: u32) -> PoolInfo {
    match load_pools(e).get(pool_id) {
        Some(pool) => pool,
        None => panic_with_error!(e, MockFarmError::PoolNotFound),
    }
}

fn load_stake(e: &Env, pool_id: u32, user: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&MockFarmKey::Stake(pool_id, user.clone()))
        .unwrap_or(0)
}

/// Pay out and clear `user`'s pending reward for `pool_id`
fn settle(e: &Env, pool_id: u32, user: &Address) {
    let key = MockFarmKey::Pending(pool_id, user.clone());
    let pending: i128 = e.storage().persistent().get(&key).unwrap_or(0);
    if pending > 0 {
        let reward_token: Address = e.storage().instance().get(&MockFarmKey::RewardToken).unwrap();
        TokenClient::new(e, &reward_token).transfer(&e.current_contract_address(), user, &pending);
        e.storage().persistent().set(&key, &0i128);
    }
}
