#![allow(clippy::too_many_arguments)]

use soroban_sdk::{contractclient, Address, Env};

/// Liquidity router interface - the subset of a constant-product AMM router
/// the vault relies on
#[contractclient(name = "Client")]
pub trait LiquidityRouter {
    /// Adds liquidity to the `token_a`/`token_b` pair and mints the liquidity share to `to`
    ///
    /// Pulls the consumed amounts from `to` through allowances granted to the router.
    ///
    /// ### Returns
    /// `(amount_a, amount_b, liquidity)` actually consumed and minted
    ///
    /// ### Panics
    /// If a minimum amount is not met or `deadline` has passed
    fn add_liquidity(
        e: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128);
}
