use soroban_sdk::{Address, Env, Symbol};

pub struct VaultEvents {}

impl VaultEvents {
    /// Emitted when the vault is deployed
    ///
    /// - topics - `["vault_created"]`
    /// - data - `[owner: Address, router: Address, farm: Address, wrapped_native: Address]`
    pub fn vault_created(e: &Env, owner: Address, router: Address, farm: Address, wrapped_native: Address) {
        let topics = (Symbol::new(e, "vault_created"),);
        e.events().publish(topics, (owner, router, farm, wrapped_native));
    }

    /// Emitted when the owner proposes a new owner
    ///
    /// - topics - `["propose_owner", owner: Address]`
    /// - data - `new_owner: Address`
    pub fn propose_owner(e: &Env, owner: Address, new_owner: Address) {
        let topics = (Symbol::new(e, "propose_owner"), owner);
        e.events().publish(topics, new_owner);
    }

    /// Emitted when a proposed owner accepts ownership
    ///
    /// - topics - `["accept_owner", new_owner: Address]`
    /// - data - `()`
    pub fn accept_owner(e: &Env, new_owner: Address) {
        let topics = (Symbol::new(e, "accept_owner"), new_owner);
        e.events().publish(topics, ());
    }

    /// Emitted when liquidity share is staked into a farming pool
    ///
    /// - topics - `["stake"]`
    /// - data - `[pool_id: u32, liquidity: i128]`
    ///
    /// ### Arguments
    /// * pool_id - The farming pool the share was staked into
    /// * liquidity - The amount of liquidity share staked
    pub fn stake(e: &Env, pool_id: u32, liquidity: i128) {
        let topics = (Symbol::new(e, "stake"),);
        e.events().publish(topics, (pool_id, liquidity));
    }

    /// Emitted when the router converts the owner's assets into liquidity share
    ///
    /// - topics - `["add_liquidity"]`
    /// - data - `[token_a: Address, token_b: Address, amount_a: i128, amount_b: i128, liquidity: i128]`
    ///
    /// ### Arguments
    /// * amount_a - The amount of `token_a` consumed by the router
    /// * amount_b - The amount of `token_b` consumed by the router
    /// * liquidity - The amount of liquidity share minted to the vault
    pub fn add_liquidity(
        e: &Env,
        token_a: Address,
        token_b: Address,
        amount_a: i128,
        amount_b: i128,
        liquidity: i128,
    ) {
        let topics = (Symbol::new(e, "add_liquidity"),);
        e.events()
            .publish(topics, (token_a, token_b, amount_a, amount_b, liquidity));
    }

    /// Emitted when liquidity share is unstaked from a farming pool
    ///
    /// - topics - `["withdraw"]`
    /// - data - `[pool_id: u32, amount: i128]`
    pub fn withdraw(e: &Env, pool_id: u32, amount: i128) {
        let topics = (Symbol::new(e, "withdraw"),);
        e.events().publish(topics, (pool_id, amount));
    }

    /// Emitted when the vault's reward balance is forwarded to the owner
    ///
    /// - topics - `["harvest"]`
    /// - data - `[reward_token: Address, amount: i128]`
    pub fn harvest(e: &Env, reward_token: Address, amount: i128) {
        let topics = (Symbol::new(e, "harvest"),);
        e.events().publish(topics, (reward_token, amount));
    }
}
