use soroban_sdk::{contractclient, contracttype, Address, Env};

/// Farming pool registration as reported by the farm
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct PoolInfo {
    pub lp_token: Address, // liquidity share accepted by the pool
}

/// Farm interface - MasterChef style staking of liquidity shares for a single reward token
#[contractclient(name = "Client")]
pub trait Farm {
    /// Returns the number of pools; valid pool ids are `0..pool_length`
    fn pool_length(e: Env) -> u32;

    /// Returns the registration of `pool_id`
    fn pool_info(e: Env, pool_id: u32) -> PoolInfo;

    /// Stakes `amount` of the pool's liquidity share from `from`, settling pending reward to `from`
    fn deposit(e: Env, from: Address, pool_id: u32, amount: i128);

    /// Unstakes `amount` to `to`, settling pending reward to `to`
    fn withdraw(e: Env, to: Address, pool_id: u32, amount: i128);

    /// Returns the reward `user` would receive from `pool_id` on the next settlement
    fn pending_reward(e: Env, pool_id: u32, user: Address) -> i128;

    /// Returns the address of the reward token
    fn reward_token(e: Env) -> Address;
}
