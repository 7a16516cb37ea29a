use farm_vault::VaultError;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::Address;
use test_suites::setup::{create_fixture_with_data, LP_POOL};
use test_suites::test_fixture::{vault_error, TestFixture, TokenIndex};
use test_suites::SCALAR_7;

/// Fixture with 500 liquidity share staked in `LP_POOL`
fn setup_staked_fixture() -> TestFixture<'static> {
    let fixture = create_fixture_with_data();
    fixture.deposit(500 * SCALAR_7, 500 * SCALAR_7, LP_POOL);
    assert_eq!(fixture.vault.staked(&LP_POOL), 500 * SCALAR_7);
    fixture
}

// ========== WITHDRAW ==========

#[test]
fn test_full_withdraw_forwards_share_and_reward() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    fixture.farm.set_pending(&LP_POOL, &vault, &(25 * SCALAR_7));
    assert_eq!(fixture.vault.pending_reward(&LP_POOL), 25 * SCALAR_7);

    let reward = fixture.vault.withdraw_and_harvest(&LP_POOL, &(500 * SCALAR_7));

    assert_eq!(reward, 25 * SCALAR_7);
    assert_eq!(fixture.vault.staked(&LP_POOL), 0);
    assert_eq!(fixture.read_staked(LP_POOL), Some(0));
    assert_eq!(fixture.farm.staked(&LP_POOL, &vault), 0);
    assert_eq!(fixture.vault.pending_reward(&LP_POOL), 0);

    assert_eq!(fixture.balance(TokenIndex::Reward, &fixture.owner), 25 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Lp, &fixture.owner), 500 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Reward, &vault), 0);
    assert_eq!(fixture.balance(TokenIndex::Lp, &vault), 0);
}

#[test]
fn test_partial_withdraw() {
    let fixture = setup_staked_fixture();

    let reward = fixture.vault.withdraw_and_harvest(&LP_POOL, &(200 * SCALAR_7));

    assert_eq!(reward, 0);
    assert_eq!(fixture.vault.staked(&LP_POOL), 300 * SCALAR_7);
    assert_eq!(fixture.farm.staked(&LP_POOL, &fixture.vault.address), 300 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Lp, &fixture.owner), 200 * SCALAR_7);
}

#[test]
fn test_zero_amount_only_harvests() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    fixture.farm.set_pending(&LP_POOL, &vault, &(7 * SCALAR_7));

    let reward = fixture.vault.withdraw_and_harvest(&LP_POOL, &0);

    assert_eq!(reward, 7 * SCALAR_7);
    assert_eq!(fixture.vault.staked(&LP_POOL), 500 * SCALAR_7);
    assert_eq!(fixture.farm.staked(&LP_POOL, &vault), 500 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Reward, &fixture.owner), 7 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Lp, &fixture.owner), 0);
}

#[test]
fn test_withdraw_above_stake_fails() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    fixture.farm.set_pending(&LP_POOL, &vault, &(7 * SCALAR_7));

    let result = fixture.vault.try_withdraw_and_harvest(&LP_POOL, &(500 * SCALAR_7 + 1));
    assert_eq!(result.err(), Some(Ok(vault_error(VaultError::InsufficientStakedAmount))));

    assert_eq!(fixture.vault.staked(&LP_POOL), 500 * SCALAR_7);
    assert_eq!(fixture.farm.staked(&LP_POOL, &vault), 500 * SCALAR_7);
    assert_eq!(fixture.vault.pending_reward(&LP_POOL), 7 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Reward, &fixture.owner), 0);
    assert_eq!(fixture.balance(TokenIndex::Lp, &fixture.owner), 0);
}

#[test]
fn test_withdraw_forwards_share_returned_after_farm_fee() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    // the farm keeps 1% of every withdrawal
    fixture.farm.set_withdraw_fee(&100_000);

    fixture.vault.withdraw_and_harvest(&LP_POOL, &(500 * SCALAR_7));

    assert_eq!(fixture.vault.staked(&LP_POOL), 0);
    assert_eq!(fixture.farm.staked(&LP_POOL, &vault), 0);
    assert_eq!(fixture.balance(TokenIndex::Lp, &fixture.owner), 495 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Lp, &vault), 0);
}

#[test]
fn test_harvest_on_unentered_pool_writes_no_ledger_entry() {
    let fixture = create_fixture_with_data();
    assert_eq!(fixture.read_staked(0), None);

    let reward = fixture.vault.withdraw_and_harvest(&0, &0);

    assert_eq!(reward, 0);
    assert_eq!(fixture.read_staked(0), None);
    assert_eq!(fixture.vault.staked(&0), 0);
}

#[test]
fn test_pool_can_be_reentered_after_exit() {
    let fixture = setup_staked_fixture();
    fixture.vault.withdraw_and_harvest(&LP_POOL, &(500 * SCALAR_7));
    assert_eq!(fixture.vault.staked(&LP_POOL), 0);

    fixture.deposit(300 * SCALAR_7, 300 * SCALAR_7, LP_POOL);
    assert_eq!(fixture.vault.staked(&LP_POOL), 300 * SCALAR_7);
    assert_eq!(fixture.farm.staked(&LP_POOL, &fixture.vault.address), 300 * SCALAR_7);
}

// ========== HARVEST ==========

#[test]
fn test_harvest_sweeps_entire_reward_balance() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    fixture.farm.set_pending(&LP_POOL, &vault, &(10 * SCALAR_7));
    // reward settled to the vault from elsewhere sits in custody until the next harvest
    fixture.tokens[TokenIndex::Reward].mint(&vault, &(3 * SCALAR_7));

    let reward = fixture.vault.withdraw_and_harvest(&LP_POOL, &(100 * SCALAR_7));

    assert_eq!(reward, 13 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Reward, &fixture.owner), 13 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Reward, &vault), 0);
}

#[test]
fn test_reward_settled_on_deposit_is_swept_by_next_harvest() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    fixture.farm.set_pending(&LP_POOL, &vault, &(4 * SCALAR_7));

    // the farm pays pending reward to the vault as part of the deposit
    fixture.fund_owner(100 * SCALAR_7, 100 * SCALAR_7);
    fixture.deposit(100 * SCALAR_7, 100 * SCALAR_7, LP_POOL);
    assert_eq!(fixture.balance(TokenIndex::Reward, &vault), 4 * SCALAR_7);

    let reward = fixture.vault.withdraw_and_harvest(&LP_POOL, &0);
    assert_eq!(reward, 4 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Reward, &vault), 0);
    assert_eq!(fixture.vault.staked(&LP_POOL), 600 * SCALAR_7);
}

#[test]
fn test_new_owner_receives_harvest() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    let new_owner = Address::generate(&fixture.env);
    fixture.vault.propose_owner(&new_owner);
    fixture.vault.accept_owner();

    fixture.farm.set_pending(&LP_POOL, &vault, &(2 * SCALAR_7));
    fixture.vault.withdraw_and_harvest(&LP_POOL, &(500 * SCALAR_7));

    assert_eq!(fixture.balance(TokenIndex::Reward, &new_owner), 2 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Lp, &new_owner), 500 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Reward, &fixture.owner), 0);
}

// ========== REENTRANCY ==========

#[test]
fn test_reentrant_farm_cannot_double_withdraw() {
    let fixture = setup_staked_fixture();
    let vault = fixture.vault.address.clone();
    fixture.farm.set_reenter(&vault);

    let result = fixture.vault.try_withdraw_and_harvest(&LP_POOL, &(300 * SCALAR_7));
    assert!(result.is_err());

    // the nested call aborted the whole withdraw
    assert_eq!(fixture.vault.staked(&LP_POOL), 500 * SCALAR_7);
    assert_eq!(fixture.farm.staked(&LP_POOL, &vault), 500 * SCALAR_7);
    assert_eq!(fixture.balance(TokenIndex::Lp, &fixture.owner), 0);
}
