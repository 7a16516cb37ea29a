use crate::constants::LIQUIDITY_DEADLINE_SECONDS;
use crate::dependencies::RouterClient;
use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use crate::vault::{custody, stake::stake};
use soroban_sdk::{log, panic_with_error, Address, Env};

/// Convert the owner's `token_a`/`token_b` into liquidity share and stake it into `pool_id`
///
/// Unused input is returned to the owner in the same call, so the vault ends with no
/// `token_a`/`token_b` from this deposit.
///
/// ### Returns
/// `(amount_a, amount_b, liquidity)` as reported by the router
#[allow(clippy::too_many_arguments)]
pub fn execute_deposit_and_stake(
    e: &Env,
    owner: &Address,
    token_a: &Address,
    token_b: &Address,
    amount_a_desired: i128,
    amount_b_desired: i128,
    amount_a_min: i128,
    amount_b_min: i128,
    lp_token: &Address,
    pool_id: u32,
) -> (i128, i128, i128) {
    if token_a == token_b {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
    require_valid_amounts(e, amount_a_desired, amount_a_min);
    require_valid_amounts(e, amount_b_desired, amount_b_min);

    let vault = e.current_contract_address();
    if custody::balance(e, token_a, owner) < amount_a_desired
        || custody::balance(e, token_b, owner) < amount_b_desired
    {
        panic_with_error!(e, VaultError::InsufficientBalance);
    }
    if custody::allowance(e, token_a, owner, &vault) < amount_a_desired
        || custody::allowance(e, token_b, owner, &vault) < amount_b_desired
    {
        panic_with_error!(e, VaultError::InsufficientAllowance);
    }

    custody::pull(e, token_a, owner, amount_a_desired);
    custody::pull(e, token_b, owner, amount_b_desired);

    let (amount_a, amount_b, liquidity) = provide_liquidity(
        e,
        token_a,
        token_b,
        amount_a_desired,
        amount_b_desired,
        amount_a_min,
        amount_b_min,
        lp_token,
    );

    stake(e, lp_token, liquidity, pool_id);

    refund(e, token_a, owner, amount_a_desired - amount_a);
    refund(e, token_b, owner, amount_b_desired - amount_b);

    VaultEvents::add_liquidity(
        e,
        token_a.clone(),
        token_b.clone(),
        amount_a,
        amount_b,
        liquidity,
    );
    (amount_a, amount_b, liquidity)
}

fn require_valid_amounts(e: &Env, desired: i128, min: i128) {
    if desired <= 0 || min < 0 || min > desired {
        panic_with_error!(e, VaultError::InvalidAmount);
    }
}

/// Hand the pulled assets to the router and reconcile what it reports against what the
/// vault actually received
#[allow(clippy::too_many_arguments)]
fn provide_liquidity(
    e: &Env,
    token_a: &Address,
    token_b: &Address,
    amount_a_desired: i128,
    amount_b_desired: i128,
    amount_a_min: i128,
    amount_b_min: i128,
    lp_token: &Address,
) -> (i128, i128, i128) {
    let vault = e.current_contract_address();
    let router = RouterClient::new(e, &storage::get_router(e));

    custody::approve(e, token_a, &router.address, amount_a_desired);
    custody::approve(e, token_b, &router.address, amount_b_desired);

    let lp_before = custody::balance(e, lp_token, &vault);
    let deadline = e.ledger().timestamp() + LIQUIDITY_DEADLINE_SECONDS;
    let (amount_a, amount_b, liquidity) = match router.try_add_liquidity(
        token_a,
        token_b,
        &amount_a_desired,
        &amount_b_desired,
        &amount_a_min,
        &amount_b_min,
        &vault,
        &deadline,
    ) {
        Ok(Ok(result)) => result,
        _ => panic_with_error!(e, VaultError::LiquidityProvisioningFailed),
    };

    if amount_a < 0
        || amount_a > amount_a_desired
        || amount_b < 0
        || amount_b > amount_b_desired
        || liquidity < 0
    {
        panic_with_error!(e, VaultError::LiquidityProvisioningFailed);
    }
    if custody::balance(e, lp_token, &vault) - lp_before < liquidity {
        panic_with_error!(e, VaultError::LiquidityProvisioningFailed);
    }

    // revoke whatever the router left unspent
    custody::approve(e, token_a, &router.address, 0);
    custody::approve(e, token_b, &router.address, 0);

    (amount_a, amount_b, liquidity)
}

fn refund(e: &Env, token: &Address, owner: &Address, leftover: i128) {
    if leftover > 0 {
        log!(e, "returning unused deposit", token.clone(), leftover);
        custody::push(e, token, owner, leftover);
    }
}
