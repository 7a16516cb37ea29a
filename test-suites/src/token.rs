use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::IssuerFlags;
use soroban_sdk::{Address, Env};

/// Deploy a Stellar asset contract administered by `admin`
///
/// The issuer is revocable, so `admin` can freeze any holder's balance.
pub fn create_stellar_token<'a>(e: &Env, admin: &Address) -> (Address, MockTokenClient<'a>) {
    let asset = e.register_stellar_asset_contract_v2(admin.clone());
    asset.issuer().set_flag(IssuerFlags::RevocableFlag);
    let contract_id = asset.address();
    let client = MockTokenClient::new(e, &contract_id);
    (contract_id, client)
}
