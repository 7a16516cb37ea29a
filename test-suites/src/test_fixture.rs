use std::ops::Index;

use farm_vault::testutils::{create_farm_vault, read_staked};
use farm_vault::FarmVaultClient;
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::StellarAssetClient;
use soroban_sdk::{Address, Env};

use crate::mocks::{MockFarm, MockFarmClient, MockRouter, MockRouterClient};
use crate::token::create_stellar_token;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum TokenIndex {
    A = 0,
    B = 1,
    Lp = 2,
    OtherLp = 3,
    Reward = 4,
    WrappedNative = 5,
}

impl<'a> Index<TokenIndex> for Vec<MockTokenClient<'a>> {
    type Output = MockTokenClient<'a>;

    fn index(&self, index: TokenIndex) -> &Self::Output {
        &self[index as usize]
    }
}

pub struct TestFixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub owner: Address,
    pub vault: FarmVaultClient<'a>,
    pub router: MockRouterClient<'a>,
    pub farm: MockFarmClient<'a>,
    pub tokens: Vec<MockTokenClient<'a>>, // indexed by TokenIndex
}

impl TestFixture<'_> {
    /// Deploy tokens, a router minting `TokenIndex::Lp`, a farm paying `TokenIndex::Reward`
    /// and a vault owned by a fresh address. No pools are registered.
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::default();
        e.cost_estimate().budget().reset_unlimited();
        e.mock_all_auths();

        let admin = Address::generate(&e);
        let owner = Address::generate(&e);

        // Create tokens in order matching TokenIndex
        let tokens: Vec<MockTokenClient<'a>> = (0..6)
            .map(|_| create_stellar_token(&e, &admin).1)
            .collect();

        let router_id = e.register(MockRouter {}, (tokens[TokenIndex::Lp].address.clone(),));
        let router = MockRouterClient::new(&e, &router_id);
        let farm_id = e.register(MockFarm {}, (tokens[TokenIndex::Reward].address.clone(),));
        let farm = MockFarmClient::new(&e, &farm_id);

        let vault_id = create_farm_vault(
            &e,
            &owner,
            &router_id,
            &farm_id,
            &tokens[TokenIndex::WrappedNative].address,
        );
        let vault = FarmVaultClient::new(&e, &vault_id);

        // liquidity share the router hands out, reward the farm pays
        tokens[TokenIndex::Lp].mint(&router_id, &(1_000_000_000 * crate::SCALAR_7));
        tokens[TokenIndex::Reward].mint(&farm_id, &(1_000_000_000 * crate::SCALAR_7));

        TestFixture {
            env: e,
            admin,
            owner,
            vault,
            router,
            farm,
            tokens,
        }
    }

    /// Mint `amount_a`/`amount_b` to the owner and approve the vault for them
    pub fn fund_owner(&self, amount_a: i128, amount_b: i128) {
        let expiration = self.env.ledger().sequence() + 10_000;
        self.tokens[TokenIndex::A].mint(&self.owner, &amount_a);
        self.tokens[TokenIndex::B].mint(&self.owner, &amount_b);
        self.tokens[TokenIndex::A].approve(&self.owner, &self.vault.address, &amount_a, &expiration);
        self.tokens[TokenIndex::B].approve(&self.owner, &self.vault.address, &amount_b, &expiration);
    }

    /// Register a farming pool for `token` and return its id
    pub fn add_pool(&self, token: TokenIndex) -> u32 {
        self.farm.add_pool(&self.tokens[token].address)
    }

    /// Deposit both assets in full into `pool_id` with no minimums
    pub fn deposit(&self, amount_a: i128, amount_b: i128, pool_id: u32) -> (i128, i128, i128) {
        self.vault.deposit_and_stake(
            &self.tokens[TokenIndex::A].address,
            &self.tokens[TokenIndex::B].address,
            &amount_a,
            &amount_b,
            &0,
            &0,
            &self.tokens[TokenIndex::Lp].address,
            &pool_id,
        )
    }

    pub fn balance(&self, token: TokenIndex, holder: &Address) -> i128 {
        self.tokens[token].balance(holder)
    }

    /// Freeze `holder`'s balance of `token`; transfers into or out of it fail
    pub fn freeze(&self, token: TokenIndex, holder: &Address) {
        StellarAssetClient::new(&self.env, &self.tokens[token].address).set_authorized(holder, &false);
    }

    /// Staked ledger entry as stored, `None` if the pool was never entered
    pub fn read_staked(&self, pool_id: u32) -> Option<i128> {
        read_staked(&self.env, &self.vault.address, pool_id)
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env
            .ledger()
            .set_timestamp(self.env.ledger().timestamp().saturating_add(time));
    }
}

/// The host error a vault failure surfaces as through a `try_` client call
pub fn vault_error(error: farm_vault::VaultError) -> soroban_sdk::Error {
    soroban_sdk::Error::from_contract_error(error as u32)
}
