#![no_std]

multiversx_sc::imports!();

pub mod custody_governor_proxy;
pub mod errors;
pub mod events;
pub mod execution;
pub mod ledger;
pub mod lifecycle;
pub mod share_registry_proxy;
pub mod storage;
pub mod types;
pub mod voting;

use errors::{ERR_DURATION_TOO_LONG, ERR_INVALID_WEIGHTS, ERR_SAME_REGISTRY, ERR_ZERO_DURATION};
use types::ShareClass;
use voting::{MAX_VOTING_DURATION, QUORUM_PERCENTAGE};

// ============================================================
// Contract
// ============================================================

/// Escrows a reserve and two classes of shares, then hands custody of both
/// to whichever candidate the depositors elect.
#[multiversx_sc::contract]
pub trait CustodyGovernor:
    storage::StorageModule
    + events::EventsModule
    + lifecycle::LifecycleModule
    + ledger::LedgerModule
    + voting::VotingModule
    + execution::ExecutionModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(
        &self,
        funding_source: ManagedAddress,
        security_registry: ManagedAddress,
        utility_registry: ManagedAddress,
        voting_duration: u64,
        security_weight: u64,
        utility_weight: u64,
    ) {
        require!(security_registry != utility_registry, ERR_SAME_REGISTRY);
        require!(voting_duration > 0, ERR_ZERO_DURATION);
        require!(voting_duration <= MAX_VOTING_DURATION, ERR_DURATION_TOO_LONG);
        require!(
            security_weight > 0 && utility_weight > security_weight,
            ERR_INVALID_WEIGHTS
        );

        self.funding_source().set(&funding_source);
        self.registry_address(ShareClass::Security)
            .set(&security_registry);
        self.registry_address(ShareClass::Utility)
            .set(&utility_registry);
        self.voting_duration().set(voting_duration);
        self.class_weight(ShareClass::Security).set(security_weight);
        self.class_weight(ShareClass::Utility).set(utility_weight);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // VIEWS
    // ========================================================

    /// `(fundingSource, securityRegistry, utilityRegistry, votingDuration,
    /// securityWeight, utilityWeight, quorumPercentage)`
    #[view(getContractConfig)]
    fn get_contract_config(
        &self,
    ) -> MultiValue7<ManagedAddress, ManagedAddress, ManagedAddress, u64, u64, u64, u64> {
        (
            self.funding_source().get(),
            self.registry_address(ShareClass::Security).get(),
            self.registry_address(ShareClass::Utility).get(),
            self.voting_duration().get(),
            self.class_weight(ShareClass::Security).get(),
            self.class_weight(ShareClass::Utility).get(),
            QUORUM_PERCENTAGE,
        )
            .into()
    }
}
