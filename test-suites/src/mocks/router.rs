#![allow(clippy::too_many_arguments)]

use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env};

use crate::SCALAR_7;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum MockRouterError {
    Rejected = 1,
    Expired = 2,
    InsufficientAAmount = 3,
    InsufficientBAmount = 4,
}

#[derive(Clone)]
#[contracttype]
enum MockRouterKey {
    LpToken,
    FillA,
    FillB,
    Reject,
    LastDeadline,
}

/// Liquidity router double
///
/// Consumes a configurable fraction (SCALAR_7) of each desired amount and mints
/// `(amount_a + amount_b) / 2` of its liquidity share out of a pre-funded balance.
#[contract]
pub struct MockRouter;

#[contractimpl]
impl MockRouter {
    pub fn __constructor(e: Env, lp_token: Address) {
        e.storage().instance().set(&MockRouterKey::LpToken, &lp_token);
        e.storage().instance().set(&MockRouterKey::FillA, &SCALAR_7);
        e.storage().instance().set(&MockRouterKey::FillB, &SCALAR_7);
        e.storage().instance().set(&MockRouterKey::Reject, &false);
    }

    /// Set the fraction of each desired amount the router consumes
    pub fn set_fill(e: Env, fill_a: i128, fill_b: i128) {
        e.storage().instance().set(&MockRouterKey::FillA, &fill_a);
        e.storage().instance().set(&MockRouterKey::FillB, &fill_b);
    }

    /// Make every following `add_liquidity` fail
    pub fn set_reject(e: Env, reject: bool) {
        e.storage().instance().set(&MockRouterKey::Reject, &reject);
    }

    /// Deadline passed on the last successful `add_liquidity`
    pub fn last_deadline(e: Env) -> u64 {
        e.storage()
            .instance()
            .get(&MockRouterKey::LastDeadline)
            .unwrap_or(0)
    }

    pub fn add_liquidity(
        e: Env,
        token_a: Address,
        token_b: Address,
        amount_a_desired: i128,
        amount_b_desired: i128,
        amount_a_min: i128,
        amount_b_min: i128,
        to: Address,
        deadline: u64,
    ) -> (i128, i128, i128) {
        let reject: bool = e.storage().instance().get(&MockRouterKey::Reject).unwrap_or(false);
        if reject {
            panic_with_error!(e, MockRouterError::Rejected);
        }
        if e.ledger().timestamp() > deadline {
            panic_with_error!(e, MockRouterError::Expired);
        }

        let fill_a: i128 = e.storage().instance().get(&MockRouterKey::FillA).unwrap_or(SCALAR_7);
        let fill_b: i128 = e.storage().instance().get(&MockRouterKey::FillB).unwrap_or(SCALAR_7);
        let amount_a = amount_a_desired.fixed_mul_floor(&e, &fill_a, &SCALAR_7);
        let amount_b = amount_b_desired.fixed_mul_floor(&e, &fill_b, &SCALAR_7);
        if amount_a < amount_a_min {
            panic_with_error!(e, MockRouterError::InsufficientAAmount);
        }
        if amount_b < amount_b_min {
            panic_with_error!(e, MockRouterError::InsufficientBAmount);
        }

        // the router's own balance stands in for the pair reserves
        let router = e.current_contract_address();
        TokenClient::new(&e, &token_a).transfer_from(&router, &to, &router, &amount_a);
        TokenClient::new(&e, &token_b).transfer_from(&router, &to, &router, &amount_b);

        let liquidity = (amount_a + amount_b) / 2;
        let lp_token: Address = e.storage().instance().get(&MockRouterKey::LpToken).unwrap();
        TokenClient::new(&e, &lp_token).transfer(&router, &to, &liquidity);

        e.storage().instance().set(&MockRouterKey::LastDeadline, &deadline);
        (amount_a, amount_b, liquidity)
    }
}
