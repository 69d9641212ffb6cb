#![allow(dead_code)]

use std::collections::HashSet;

use multiversx_sc_scenario::imports::*;

use custody_governor::custody_governor_proxy::CustodyGovernorProxy;
use custody_governor::types::ShareClass;
use share_registry::share_registry_proxy::ShareRegistryProxy;

pub const OWNER: TestAddress = TestAddress::new("owner");
pub const FUNDING_SOURCE: TestAddress = TestAddress::new("funding-source");
pub const OUTSIDER: TestAddress = TestAddress::new("outsider");
pub const ACCEPTED: TestAddress = TestAddress::new("accepted-candidate");
pub const REJECTED: TestAddress = TestAddress::new("rejected-candidate");

pub const GOVERNOR: TestSCAddress = TestSCAddress::new("custody-governor");
pub const SECURITY_REGISTRY: TestSCAddress = TestSCAddress::new("security-registry");
pub const UTILITY_REGISTRY: TestSCAddress = TestSCAddress::new("utility-registry");

pub const GOVERNOR_CODE_PATH: MxscPath = MxscPath::new("output/custody-governor.mxsc.json");
pub const REGISTRY_CODE_PATH: MxscPath =
    MxscPath::new("test-contracts/share-registry/output/share-registry.mxsc.json");

pub const START_TIMESTAMP: u64 = 1_700_000_000;
pub const VOTING_DURATION: u64 = 7 * 24 * 60 * 60;
pub const SECURITY_WEIGHT: u64 = 2;
pub const UTILITY_WEIGHT: u64 = 3;
pub const RESERVE: u64 = 25_000_000_000;

fn world() -> ScenarioWorld {
    let mut blockchain = ScenarioWorld::new();

    blockchain.register_contract(GOVERNOR_CODE_PATH, custody_governor::ContractBuilder);
    blockchain.register_contract(REGISTRY_CODE_PATH, share_registry::ContractBuilder);
    blockchain
}

pub fn registry(class: ShareClass) -> TestSCAddress<'static> {
    match class {
        ShareClass::Security => SECURITY_REGISTRY,
        ShareClass::Utility => UTILITY_REGISTRY,
    }
}

pub struct GovernorTestState {
    pub world: ScenarioWorld,
    now: u64,
    holders: HashSet<&'static str>,
}

impl GovernorTestState {
    /// Both registries and the governor deployed, the governor registered as
    /// owner and deposit sink of each registry. Nothing funded yet.
    pub fn new() -> Self {
        let mut world = world();

        world.current_block().block_timestamp(START_TIMESTAMP);
        world.account(OWNER).nonce(1);
        world.account(FUNDING_SOURCE).nonce(1).balance(RESERVE * 2);
        world.account(OUTSIDER).nonce(1).balance(RESERVE);
        world.account(ACCEPTED).nonce(1).balance(0u64);
        world.account(REJECTED).nonce(1).balance(0u64);

        let mut state = Self {
            world,
            now: START_TIMESTAMP,
            holders: HashSet::new(),
        };
        state.deploy_registry(ShareClass::Security);
        state.deploy_registry(ShareClass::Utility);
        state.deploy_governor();
        state.attach_governor(ShareClass::Security);
        state.attach_governor(ShareClass::Utility);
        state
    }

    /// `new()` followed by funding from the configured source.
    pub fn deployed() -> Self {
        let mut state = Self::new();
        state.fund(FUNDING_SOURCE, RESERVE);
        state
    }

    fn deploy_registry(&mut self, class: ShareClass) {
        self.world
            .tx()
            .from(OWNER)
            .typed(ShareRegistryProxy)
            .init()
            .code(REGISTRY_CODE_PATH)
            .new_address(registry(class))
            .run();
    }

    fn deploy_governor(&mut self) {
        self.world
            .tx()
            .from(OWNER)
            .typed(CustodyGovernorProxy)
            .init(
                FUNDING_SOURCE.to_address(),
                SECURITY_REGISTRY.to_address(),
                UTILITY_REGISTRY.to_address(),
                VOTING_DURATION,
                SECURITY_WEIGHT,
                UTILITY_WEIGHT,
            )
            .code(GOVERNOR_CODE_PATH)
            .new_address(GOVERNOR)
            .run();
    }

    fn attach_governor(&mut self, class: ShareClass) {
        self.world
            .tx()
            .from(OWNER)
            .to(registry(class))
            .typed(ShareRegistryProxy)
            .add_owner(GOVERNOR.to_address())
            .run();
        self.world
            .tx()
            .from(OWNER)
            .to(registry(class))
            .typed(ShareRegistryProxy)
            .set_deposit_sink(GOVERNOR.to_address())
            .run();
    }

    // ── Time ──

    pub fn advance_time(&mut self, seconds: u64) {
        self.now += seconds;
        self.world.current_block().block_timestamp(self.now);
    }

    pub fn close_voting_window(&mut self) {
        self.advance_time(VOTING_DURATION);
    }

    // ── Funding ──

    pub fn fund(&mut self, from: TestAddress, amount: u64) {
        self.world
            .tx()
            .from(from)
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .fund()
            .egld(amount)
            .run();
    }

    pub fn fund_expect_err(&mut self, from: TestAddress, amount: u64, err_msg: &str) {
        self.world
            .tx()
            .from(from)
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .fund()
            .egld(amount)
            .returns(ExpectError(4, err_msg))
            .run();
    }

    // ── Shares ──

    /// Registers a holder account and issues it `amount` shares of `class`.
    pub fn issue(&mut self, class: ShareClass, holder: &'static str, amount: u64) {
        if self.holders.insert(holder) {
            self.world.account(TestAddress::new(holder)).nonce(1);
        }
        self.world
            .tx()
            .from(OWNER)
            .to(registry(class))
            .typed(ShareRegistryProxy)
            .issue(TestAddress::new(holder).to_address(), amount)
            .run();
    }

    /// Transfers shares to the governor through the registry, which notifies
    /// the governor first.
    pub fn deposit(&mut self, class: ShareClass, holder: &'static str, amount: u64) {
        self.world
            .tx()
            .from(TestAddress::new(holder))
            .to(registry(class))
            .typed(ShareRegistryProxy)
            .transfer(GOVERNOR.to_address(), amount)
            .run();
    }

    pub fn deposit_expect_err(
        &mut self,
        class: ShareClass,
        holder: &'static str,
        amount: u64,
        err_msg: &str,
    ) {
        self.world
            .tx()
            .from(TestAddress::new(holder))
            .to(registry(class))
            .typed(ShareRegistryProxy)
            .transfer(GOVERNOR.to_address(), amount)
            .returns(ExpectError(4, err_msg))
            .run();
    }

    /// Issues and deposits the full balance of every listed holder.
    pub fn issue_and_deposit(&mut self, class: ShareClass, holders: &[(&'static str, u64)]) {
        for &(holder, amount) in holders {
            self.issue(class, holder, amount);
            self.deposit(class, holder, amount);
        }
    }

    pub fn withdraw(&mut self, class: ShareClass, holder: &'static str, amount: u64) {
        self.world
            .tx()
            .from(TestAddress::new(holder))
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .withdraw(class, amount)
            .run();
    }

    pub fn check_deposit(&mut self, class: ShareClass, holder: &'static str, expected: u64) {
        self.world
            .query()
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .balance_of(class, TestAddress::new(holder).to_address())
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_registry_balance(&mut self, class: ShareClass, account: Address, expected: u64) {
        self.world
            .query()
            .to(registry(class))
            .typed(ShareRegistryProxy)
            .balance_of(account)
            .returns(ExpectValue(expected))
            .run();
    }

    pub fn check_registry_owner(&mut self, class: ShareClass, account: Address, expected: bool) {
        self.world
            .query()
            .to(registry(class))
            .typed(ShareRegistryProxy)
            .is_owner(account)
            .returns(ExpectValue(expected))
            .run();
    }

    // ── Voting ──

    pub fn propose(&mut self, candidate: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .propose(candidate.to_address())
            .run();
    }

    pub fn vote(&mut self, voter: &'static str, candidate: TestAddress, support: bool) {
        self.world
            .tx()
            .from(TestAddress::new(voter))
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .vote(candidate.to_address(), support)
            .run();
    }

    pub fn vote_all(
        &mut self,
        holders: &[(&'static str, u64)],
        candidate: TestAddress,
        support: bool,
    ) {
        let candidate = candidate.to_address();
        for &(holder, _) in holders {
            self.world
                .tx()
                .from(TestAddress::new(holder))
                .to(GOVERNOR)
                .typed(CustodyGovernorProxy)
                .vote(candidate.clone(), support)
                .run();
        }
    }

    pub fn is_supported(&mut self, candidate: TestAddress, require_closed: bool) -> bool {
        self.world
            .query()
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .is_supported(candidate.to_address(), require_closed)
            .returns(ReturnsResult)
            .run()
    }

    // ── Execution ──

    pub fn execute(&mut self, candidate: TestAddress) {
        self.world
            .tx()
            .from(OWNER)
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .execute(candidate.to_address())
            .run();
    }

    pub fn execute_expect_err(&mut self, candidate: TestAddress, err_msg: &str) {
        self.world
            .tx()
            .from(OWNER)
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .execute(candidate.to_address())
            .returns(ExpectError(4, err_msg))
            .run();
    }

    pub fn check_executed(&mut self, expected: bool) {
        self.world
            .query()
            .to(GOVERNOR)
            .typed(CustodyGovernorProxy)
            .is_executed()
            .returns(ExpectValue(expected))
            .run();
    }
}
