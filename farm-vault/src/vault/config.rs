use crate::errors::VaultError;
use crate::events::VaultEvents;
use crate::storage;
use soroban_sdk::{panic_with_error, Address, Env};

/// Store the vault's fixed collaborators
///
/// ### Panics
/// `ConstructionError` if a collaborator is the vault itself, the owner, or shares an address
/// with another collaborator
pub fn execute_initialize(e: &Env, owner: &Address, router: &Address, farm: &Address, wrapped_native: &Address) {
    require_valid_collaborators(e, owner, router, farm, wrapped_native);

    storage::set_owner(e, owner);
    storage::set_router(e, router);
    storage::set_farm(e, farm);
    storage::set_wrapped_native(e, wrapped_native);

    VaultEvents::vault_created(
        e,
        owner.clone(),
        router.clone(),
        farm.clone(),
        wrapped_native.clone(),
    );
}

fn require_valid_collaborators(
    e: &Env,
    owner: &Address,
    router: &Address,
    farm: &Address,
    wrapped_native: &Address,
) {
    let vault = e.current_contract_address();
    for collaborator in [router, farm, wrapped_native] {
        if *collaborator == vault || collaborator == owner {
            panic_with_error!(e, VaultError::ConstructionError);
        }
    }
    if router == farm || router == wrapped_native || farm == wrapped_native {
        panic_with_error!(e, VaultError::ConstructionError);
    }
}

/// Load the owner and require its authorization
pub fn require_owner(e: &Env) -> Address {
    let owner = storage::get_owner(e);
    owner.require_auth();
    owner
}

pub fn execute_propose_owner(e: &Env, owner: &Address, new_owner: &Address) {
    storage::set_proposed_owner(e, new_owner);
    VaultEvents::propose_owner(e, owner.clone(), new_owner.clone());
}

/// Promote the proposed owner once it authorizes the call
///
/// ### Panics
/// `Unauthorized` if no owner has been proposed
pub fn execute_accept_owner(e: &Env) -> Address {
    let Some(proposed_owner) = storage::get_proposed_owner(e) else {
        panic_with_error!(e, VaultError::Unauthorized);
    };
    proposed_owner.require_auth();

    storage::set_owner(e, &proposed_owner);
    storage::del_proposed_owner(e);
    VaultEvents::accept_owner(e, proposed_owner.clone());
    proposed_owner
}
