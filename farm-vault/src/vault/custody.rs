use crate::errors::VaultError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{panic_with_error, Address, Env};

/// Moves `amount` of `token` from `from` into the vault, spending the allowance `from`
/// granted to the vault
///
/// ### Panics
/// `CustodyTransferFailed` if the token rejects the transfer
pub fn pull(e: &Env, token: &Address, from: &Address, amount: i128) {
    let vault = e.current_contract_address();
    match TokenClient::new(e, token).try_transfer_from(&vault, from, &vault, &amount) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(e, VaultError::CustodyTransferFailed),
    }
}

/// Sends `amount` of `token` held by the vault to `to`
///
/// ### Panics
/// `CustodyTransferFailed` if the token rejects the transfer
pub fn push(e: &Env, token: &Address, to: &Address, amount: i128) {
    let vault = e.current_contract_address();
    match TokenClient::new(e, token).try_transfer(&vault, to, &amount) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(e, VaultError::CustodyTransferFailed),
    }
}

/// Grants `spender` an allowance over the vault's `token` that lapses with the current ledger
///
/// ### Panics
/// `CustodyTransferFailed` if the token rejects the approval
pub fn approve(e: &Env, token: &Address, spender: &Address, amount: i128) {
    let vault = e.current_contract_address();
    let expiration_ledger = e.ledger().sequence();
    match TokenClient::new(e, token).try_approve(&vault, spender, &amount, &expiration_ledger) {
        Ok(Ok(())) => {}
        _ => panic_with_error!(e, VaultError::CustodyTransferFailed),
    }
}

pub fn balance(e: &Env, token: &Address, holder: &Address) -> i128 {
    TokenClient::new(e, token).balance(holder)
}

pub fn allowance(e: &Env, token: &Address, holder: &Address, spender: &Address) -> i128 {
    TokenClient::new(e, token).allowance(holder, spender)
}
