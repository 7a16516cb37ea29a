use soroban_sdk::{contracttype, unwrap::UnwrapOptimized, Address, Env, Symbol};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days
const LEDGER_THRESHOLD_POSITION: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_POSITION: u32 = LEDGER_THRESHOLD_POSITION + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Types **********/

const OWNER_KEY: &str = "Owner";
const PROPOSED_OWNER_KEY: &str = "PropOwner";
const ROUTER_KEY: &str = "Router";
const FARM_KEY: &str = "Farm";
const WRAPPED_NATIVE_KEY: &str = "WNative";

#[derive(Clone)]
#[contracttype]
pub enum VaultDataKey {
    // Liquidity share staked by the vault in a farming pool
    Staked(u32),
}

/********** Storage **********/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/********** Owner **********/

pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

pub fn set_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&Symbol::new(e, OWNER_KEY), owner);
}

pub fn get_proposed_owner(e: &Env) -> Option<Address> {
    e.storage().instance().get(&Symbol::new(e, PROPOSED_OWNER_KEY))
}

pub fn set_proposed_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, PROPOSED_OWNER_KEY), owner);
}

pub fn del_proposed_owner(e: &Env) {
    e.storage()
        .instance()
        .remove(&Symbol::new(e, PROPOSED_OWNER_KEY));
}

/********** Collaborators **********/

pub fn get_router(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, ROUTER_KEY))
        .unwrap_optimized()
}

pub fn set_router(e: &Env, router: &Address) {
    e.storage().instance().set(&Symbol::new(e, ROUTER_KEY), router);
}

pub fn get_farm(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, FARM_KEY))
        .unwrap_optimized()
}

pub fn set_farm(e: &Env, farm: &Address) {
    e.storage().instance().set(&Symbol::new(e, FARM_KEY), farm);
}

pub fn get_wrapped_native(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&Symbol::new(e, WRAPPED_NATIVE_KEY))
        .unwrap_optimized()
}

pub fn set_wrapped_native(e: &Env, wrapped_native: &Address) {
    e.storage()
        .instance()
        .set(&Symbol::new(e, WRAPPED_NATIVE_KEY), wrapped_native);
}

/********** Staked Ledger **********/

/// Fetch the amount of liquidity share staked in a pool, or 0 if the pool was never entered
///
/// ### Arguments
/// * `pool_id` - The farming pool id
pub fn get_staked(e: &Env, pool_id: u32) -> i128 {
    let key = VaultDataKey::Staked(pool_id);
    if let Some(staked) = e.storage().persistent().get::<VaultDataKey, i128>(&key) {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_POSITION, LEDGER_BUMP_POSITION);
        staked
    } else {
        0
    }
}

/// Set the amount of liquidity share staked in a pool
///
/// ### Arguments
/// * `pool_id` - The farming pool id
/// * `staked` - The new staked amount
pub fn set_staked(e: &Env, pool_id: u32, staked: &i128) {
    let key = VaultDataKey::Staked(pool_id);
    e.storage()
        .persistent()
        .set::<VaultDataKey, i128>(&key, staked);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_POSITION, LEDGER_BUMP_POSITION);
}
