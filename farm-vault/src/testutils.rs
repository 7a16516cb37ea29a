#![cfg(any(test, feature = "testutils"))]

use crate::FarmVaultContract;
use soroban_sdk::{Address, Env};

pub fn create_farm_vault(e: &Env, owner: &Address, router: &Address, farm: &Address, wrapped_native: &Address) -> Address {
    e.register(
        FarmVaultContract {},
        (owner.clone(), router.clone(), farm.clone(), wrapped_native.clone()),
    )
}

/// Read a pool's staked ledger entry straight from the vault's storage
pub fn read_staked(e: &Env, vault: &Address, pool_id: u32) -> Option<i128> {
    e.as_contract(vault, || {
        e.storage()
            .persistent()
            .get(&crate::storage::VaultDataKey::Staked(pool_id))
    })
}
