#![allow(clippy::too_many_arguments)]

use soroban_sdk::{contract, contractclient, contractimpl, Address, Env};

use crate::{storage, vault};

#[contract]
pub struct FarmVaultContract;

#[contractclient(name = "FarmVaultClient")]
pub trait FarmVault {
    /// Returns the address allowed to move funds through the vault
    fn owner(e: Env) -> Address;

    /// Returns the liquidity router the vault provides liquidity through
    fn router(e: Env) -> Address;

    /// Returns the farm the vault stakes liquidity share into
    fn farm(e: Env) -> Address;

    /// Returns the wrapped native token used by the router
    fn wrapped_native(e: Env) -> Address;

    /// Returns the amount of liquidity share the vault has staked in a pool
    ///
    /// ### Arguments
    /// * `pool_id` - The farming pool id
    ///
    /// ### Returns
    /// Staked amount, 0 for pools the vault never entered
    fn staked(e: Env, pool_id: u32) -> i128;

    /// Returns the reward the farm has accrued for the vault's position in a pool
    ///
    /// ### Arguments
    /// * `pool_id` - The farming pool id
    fn pending_reward(e: Env, pool_id: u32) -> i128;

    /// (Owner only) Propose a new owner. Takes effect once the new owner calls
    /// `accept_owner`.
    ///
    /// ### Arguments
    /// * `new_owner` - The proposed owner address
    fn propose_owner(e: Env, new_owner: Address);

    /// (Proposed owner only) Accept ownership of the vault
    ///
    /// ### Panics
    /// - `Unauthorized` if no owner has been proposed
    fn accept_owner(e: Env);

    /// (Owner only) Convert two assets into liquidity share and stake it into a farming pool
    ///
    /// Pulls the desired amounts from the owner, adds liquidity through the router with a
    /// 30 minute deadline, stakes the minted share into `pool_id` and returns whatever the
    /// router did not consume to the owner.
    ///
    /// # Arguments
    /// * `token_a` - First asset of the pair
    /// * `token_b` - Second asset of the pair
    /// * `amount_a_desired` - Amount of `token_a` to provide
    /// * `amount_b_desired` - Amount of `token_b` to provide
    /// * `amount_a_min` - Minimum `token_a` the router must consume
    /// * `amount_b_min` - Minimum `token_b` the router must consume
    /// * `lp_token` - Liquidity share the pair mints, must be the share registered for `pool_id`
    /// * `pool_id` - Farming pool to stake into
    ///
    /// # Returns
    /// `(amount_a, amount_b, liquidity)` consumed and minted by the router
    ///
    /// # Panics
    /// - `InvalidAmount` if a desired amount is not positive or a minimum is out of range
    /// - `InsufficientBalance` if the owner holds less than a desired amount
    /// - `InsufficientAllowance` if the owner has not approved the vault for a desired amount
    /// - `LiquidityProvisioningFailed` if the router rejects the request or misreports the result
    /// - `InvalidPool` if `pool_id` does not exist or does not accept `lp_token`
    /// - `CustodyTransferFailed` if a token transfer or approval fails
    fn deposit_and_stake(
        e: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        lp_token: Address,
        pool_id: u32,
    ) -> (i128, i128, i128);

    /// (Owner only) Unstake liquidity share from a pool and harvest rewards
    ///
    /// The withdrawn share and the vault's entire reward token balance are sent to the owner.
    /// An `amount` of zero harvests without unstaking.
    ///
    /// # Arguments
    /// * `pool_id` - Farming pool to withdraw from
    /// * `amount` - Liquidity share to unstake
    ///
    /// # Returns
    /// Amount of reward token forwarded to the owner
    ///
    /// # Panics
    /// - `InvalidAmount` if `amount` is negative
    /// - `InsufficientStakedAmount` if `amount` exceeds the vault's stake in `pool_id`
    fn withdraw_and_harvest(e: Env, pool_id: u32, amount: i128) -> i128;
}

#[contractimpl]
impl FarmVaultContract {
    /// Initializes the vault with its owner and fixed collaborators
    ///
    /// # Arguments
    /// * `owner` - Address allowed to deposit and withdraw
    /// * `router` - Liquidity router contract
    /// * `farm` - Farming contract
    /// * `wrapped_native` - Wrapped native token used by the router
    ///
    /// # Panics
    /// - `ConstructionError` if a collaborator is the vault, the owner, or duplicates another
    pub fn __constructor(e: Env, owner: Address, router: Address, farm: Address, wrapped_native: Address) {
        vault::execute_initialize(&e, &owner, &router, &farm, &wrapped_native);
        storage::extend_instance(&e);
    }
}

#[contractimpl]
impl FarmVault for FarmVaultContract {
    fn owner(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_owner(&e)
    }

    fn router(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_router(&e)
    }

    fn farm(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_farm(&e)
    }

    fn wrapped_native(e: Env) -> Address {
        storage::extend_instance(&e);
        storage::get_wrapped_native(&e)
    }

    fn staked(e: Env, pool_id: u32) -> i128 {
        storage::extend_instance(&e);
        storage::get_staked(&e, pool_id)
    }

    fn pending_reward(e: Env, pool_id: u32) -> i128 {
        storage::extend_instance(&e);
        vault::pending_reward(&e, pool_id)
    }

    fn propose_owner(e: Env, new_owner: Address) {
        storage::extend_instance(&e);
        let owner = vault::require_owner(&e);

        vault::execute_propose_owner(&e, &owner, &new_owner);
    }

    fn accept_owner(e: Env) {
        storage::extend_instance(&e);
        vault::execute_accept_owner(&e);
    }

    fn deposit_and_stake(
        e: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        lp_token: Address,
        pool_id: u32,
    ) -> (i128, i128, i128) {
        storage::extend_instance(&e);
        let owner = vault::require_owner(&e);

        vault::execute_deposit_and_stake(
            &e,
            &owner,
            &token_a,
            &token_b,
            amount_a_desired,
            amount_b_desired,
            amount_a_min,
            amount_b_min,
            &lp_token,
            pool_id,
        )
    }

    fn withdraw_and_harvest(e: Env, pool_id: u32, amount: i128) -> i128 {
        storage::extend_instance(&e);
        let owner = vault::require_owner(&e);

        vault::execute_withdraw_and_harvest(&e, &owner, pool_id, amount)
    }
}
