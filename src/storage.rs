multiversx_sc::imports!();

use crate::types::{Ballot, Proposal, ShareClass, Stage};

#[multiversx_sc::module]
pub trait StorageModule {
    // ── Configuration ──

    #[storage_mapper("fundingSource")]
    fn funding_source(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("registryAddress")]
    fn registry_address(&self, class: ShareClass) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("votingDuration")]
    fn voting_duration(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("classWeight")]
    fn class_weight(&self, class: ShareClass) -> SingleValueMapper<u64>;

    // ── Lifecycle / custody ──

    #[storage_mapper("stage")]
    fn stage(&self) -> SingleValueMapper<Stage>;

    #[storage_mapper("reserve")]
    fn reserve(&self) -> SingleValueMapper<BigUint>;

    // ── Ledger ──

    #[storage_mapper("deposits")]
    fn deposits(&self, class: ShareClass, account: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalDeposited")]
    fn total_deposited(&self, class: ShareClass) -> SingleValueMapper<BigUint>;

    // ── Proposals ──

    #[storage_mapper("proposals")]
    fn proposals(&self, candidate: &ManagedAddress) -> SingleValueMapper<Proposal<Self::Api>>;

    /// Candidates in proposal order, 1-based like every `VecMapper`.
    #[storage_mapper("candidates")]
    fn candidates(&self) -> VecMapper<ManagedAddress>;

    #[storage_mapper("voters")]
    fn voters(&self, candidate: &ManagedAddress) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("ballots")]
    fn ballots(&self, candidate: &ManagedAddress, voter: &ManagedAddress) -> SingleValueMapper<Ballot>;
}
