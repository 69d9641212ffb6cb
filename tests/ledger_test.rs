mod governor_setup;

use governor_setup::*;
use multiversx_sc_scenario::imports::*;

use custody_governor::custody_governor_proxy::CustodyGovernorProxy;
use custody_governor::errors::*;
use custody_governor::types::ShareClass;

const ALICE: &str = "alice";
const BOB: &str = "bob";

#[test]
fn deposits_accumulate_per_class_and_account() {
    let mut state = GovernorTestState::deployed();
    state.issue(ShareClass::Utility, ALICE, 1_000);
    state.issue(ShareClass::Utility, BOB, 500);

    state.deposit(ShareClass::Utility, ALICE, 300);
    state.deposit(ShareClass::Utility, ALICE, 200);
    state.deposit(ShareClass::Utility, BOB, 500);

    state.check_deposit(ShareClass::Utility, ALICE, 500);
    state.check_deposit(ShareClass::Utility, BOB, 500);
    state.check_deposit(ShareClass::Security, ALICE, 0);
    state.check_registry_balance(ShareClass::Utility, GOVERNOR.to_address(), 1_000);

    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .get_total_deposited(ShareClass::Utility)
        .returns(ExpectValue(1_000u64))
        .run();
    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .get_total_deposited(ShareClass::Security)
        .returns(ExpectValue(0u64))
        .run();
}

#[test]
fn withdraw_returns_shares_through_the_registry() {
    let mut state = GovernorTestState::deployed();
    state.issue_and_deposit(ShareClass::Security, &[(ALICE, 18_000)]);

    state.withdraw(ShareClass::Security, ALICE, 7_200);

    state.check_deposit(ShareClass::Security, ALICE, 10_800);
    state.check_registry_balance(ShareClass::Security, GOVERNOR.to_address(), 10_800);
    state.check_registry_balance(
        ShareClass::Security,
        TestAddress::new(ALICE).to_address(),
        7_200,
    );
    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .get_total_deposited(ShareClass::Security)
        .returns(ExpectValue(10_800u64))
        .run();

    state.withdraw(ShareClass::Security, ALICE, 10_800);

    state.check_deposit(ShareClass::Security, ALICE, 0);
    state.check_registry_balance(
        ShareClass::Security,
        TestAddress::new(ALICE).to_address(),
        18_000,
    );
}

#[test]
fn withdraw_cannot_exceed_deposit() {
    let mut state = GovernorTestState::deployed();
    state.issue_and_deposit(ShareClass::Utility, &[(ALICE, 600)]);
    state.issue(ShareClass::Security, BOB, 400);

    state
        .world
        .tx()
        .from(TestAddress::new(ALICE))
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .withdraw(ShareClass::Utility, 601u64)
        .returns(ExpectError(4, ERR_INSUFFICIENT_BALANCE))
        .run();

    // Balances are tracked per class
    state
        .world
        .tx()
        .from(TestAddress::new(ALICE))
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .withdraw(ShareClass::Security, 1u64)
        .returns(ExpectError(4, ERR_INSUFFICIENT_BALANCE))
        .run();

    // Shares held outside the governor do not count
    state
        .world
        .tx()
        .from(TestAddress::new(BOB))
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .withdraw(ShareClass::Security, 1u64)
        .returns(ExpectError(4, ERR_INSUFFICIENT_BALANCE))
        .run();

    state
        .world
        .tx()
        .from(TestAddress::new(ALICE))
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .withdraw(ShareClass::Utility, 0u64)
        .returns(ExpectError(4, ERR_ZERO_AMOUNT))
        .run();

    state.check_deposit(ShareClass::Utility, ALICE, 600);
    state.check_registry_balance(ShareClass::Utility, GOVERNOR.to_address(), 600);
}

#[test]
fn voting_weight_follows_class_weights() {
    let mut state = GovernorTestState::deployed();
    state.issue_and_deposit(ShareClass::Security, &[(ALICE, 100)]);
    state.issue_and_deposit(ShareClass::Utility, &[(ALICE, 10)]);

    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .get_voting_weight(TestAddress::new(ALICE).to_address())
        .returns(ExpectValue(100 * SECURITY_WEIGHT + 10 * UTILITY_WEIGHT))
        .run();
    state
        .world
        .query()
        .to(GOVERNOR)
        .typed(CustodyGovernorProxy)
        .get_voting_weight(TestAddress::new(BOB).to_address())
        .returns(ExpectValue(0u64))
        .run();
}
