multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_PROPOSED, ERR_NOT_DEPLOYED, ERR_NO_VOTING_POWER, ERR_PROPOSAL_NOT_FOUND,
    ERR_WINDOW_CLOSED,
};
use crate::types::{Ballot, Proposal, ShareClass, Stage};

/// 5% of the weighted supply must take part for a result to count
pub const QUORUM_PERCENTAGE: u64 = 5;

pub const PERCENTAGE_DENOMINATOR: u64 = 100;

/// Upper bound for the configured voting duration: 365 days
pub const MAX_VOTING_DURATION: u64 = 365 * 24 * 60 * 60;

/// Candidate proposals and weighted ballots.
///
/// Weights are never stored with a ballot. Every tally reads the voters'
/// current ledger balances, so deposits and withdrawals made after voting
/// move the result while the window is open.
#[multiversx_sc::module]
pub trait VotingModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::lifecycle::LifecycleModule
{
    // ========================================================
    // ENDPOINT: propose
    // ========================================================

    #[endpoint(propose)]
    fn propose(&self, candidate: ManagedAddress) {
        self.require_stage(Stage::Deployed, ERR_NOT_DEPLOYED);
        require!(self.proposals(&candidate).is_empty(), ERR_ALREADY_PROPOSED);

        let now = self.blockchain().get_block_timestamp();
        let proposal = Proposal {
            candidate: candidate.clone(),
            created_at: now,
            closes_at: now + self.voting_duration().get(),
        };

        self.proposals(&candidate).set(&proposal);
        self.candidates().push(&candidate);

        let caller = self.blockchain().get_caller();
        self.proposal_created_event(&candidate, &caller, proposal.closes_at);
    }

    // ========================================================
    // ENDPOINT: vote
    // Last ballot wins while the window is open.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, candidate: ManagedAddress, support: bool) {
        self.require_stage(Stage::Deployed, ERR_NOT_DEPLOYED);
        let proposal = self.require_proposal(&candidate);

        let now = self.blockchain().get_block_timestamp();
        require!(proposal.is_open(now), ERR_WINDOW_CLOSED);

        let caller = self.blockchain().get_caller();
        require!(self.voting_weight(&caller) > 0u64, ERR_NO_VOTING_POWER);

        self.voters(&candidate).insert(caller.clone());
        self.ballots(&candidate, &caller)
            .set(Ballot::from_support(support));

        self.vote_event(&candidate, &caller, support);
    }

    // ========================================================
    // INTERNAL: tally
    // ========================================================

    fn require_proposal(&self, candidate: &ManagedAddress) -> Proposal<Self::Api> {
        let mapper = self.proposals(candidate);
        require!(!mapper.is_empty(), ERR_PROPOSAL_NOT_FOUND);
        mapper.get()
    }

    fn voting_weight(&self, account: &ManagedAddress) -> BigUint {
        let security = self.deposits(ShareClass::Security, account).get()
            * self.class_weight(ShareClass::Security).get();
        let utility = self.deposits(ShareClass::Utility, account).get()
            * self.class_weight(ShareClass::Utility).get();
        security + utility
    }

    fn weighted_supply(&self) -> BigUint {
        let security = self.total_deposited(ShareClass::Security).get()
            * self.class_weight(ShareClass::Security).get();
        let utility = self.total_deposited(ShareClass::Utility).get()
            * self.class_weight(ShareClass::Utility).get();
        security + utility
    }

    /// Returns `(for, against)` using live balances.
    fn tally(&self, candidate: &ManagedAddress) -> (BigUint, BigUint) {
        let mut votes_for = BigUint::zero();
        let mut votes_against = BigUint::zero();

        for voter in self.voters(candidate).iter() {
            match self.ballots(candidate, &voter).get() {
                Ballot::For => votes_for += self.voting_weight(&voter),
                Ballot::Against => votes_against += self.voting_weight(&voter),
                Ballot::Absent => {}
            }
        }

        (votes_for, votes_against)
    }

    fn meets_quorum_and_majority(&self, votes_for: &BigUint, votes_against: &BigUint) -> bool {
        let cast = votes_for + votes_against;
        let quorum_reached = cast * PERCENTAGE_DENOMINATOR >= self.weighted_supply() * QUORUM_PERCENTAGE;
        quorum_reached && votes_for > votes_against
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// Live result when `require_closed` is false. When true, the result is
    /// only reported once the voting window has ended.
    #[view(isSupported)]
    fn is_supported(&self, candidate: ManagedAddress, require_closed: bool) -> bool {
        let mapper = self.proposals(&candidate);
        if mapper.is_empty() {
            return false;
        }

        if require_closed {
            let now = self.blockchain().get_block_timestamp();
            if mapper.get().is_open(now) {
                return false;
            }
        }

        let (votes_for, votes_against) = self.tally(&candidate);
        self.meets_quorum_and_majority(&votes_for, &votes_against)
    }

    #[view(getTally)]
    fn get_tally(&self, candidate: ManagedAddress) -> MultiValue3<BigUint, BigUint, BigUint> {
        let (votes_for, votes_against) = self.tally(&candidate);
        (votes_for, votes_against, self.weighted_supply()).into()
    }

    #[view(getVote)]
    fn get_vote(&self, candidate: ManagedAddress, account: ManagedAddress) -> Ballot {
        self.ballots(&candidate, &account).get()
    }

    #[view(getVoters)]
    fn get_voters(&self, candidate: ManagedAddress) -> MultiValueEncoded<ManagedAddress> {
        let mut result = MultiValueEncoded::new();
        for voter in self.voters(&candidate).iter() {
            result.push(voter);
        }
        result
    }

    #[view(getVotingWeight)]
    fn get_voting_weight(&self, account: ManagedAddress) -> BigUint {
        self.voting_weight(&account)
    }

    #[view(isProposed)]
    fn is_proposed(&self, candidate: ManagedAddress) -> bool {
        !self.proposals(&candidate).is_empty()
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self) -> u64 {
        self.candidates().len() as u64
    }

    #[view(getProposal)]
    fn get_proposal(&self, candidate: ManagedAddress) -> Proposal<Self::Api> {
        self.require_proposal(&candidate)
    }

    /// Pages through proposals in creation order. `from` is 1-based.
    #[view(getProposals)]
    fn get_proposals(&self, from: u64, count: u64) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.candidates().len() as u64;
        if count == 0 || total == 0 {
            return result;
        }
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for i in start..=end {
            let candidate = self.candidates().get(i as usize);
            result.push(self.proposals(&candidate).get());
        }
        result
    }

    #[view(getActiveProposals)]
    fn get_active_proposals(&self) -> MultiValueEncoded<Proposal<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let now = self.blockchain().get_block_timestamp();

        for candidate in self.candidates().iter() {
            let proposal = self.proposals(&candidate).get();
            if proposal.is_open(now) {
                result.push(proposal);
            }
        }
        result
    }

    #[view(getVotingDuration)]
    fn get_voting_duration(&self) -> u64 {
        self.voting_duration().get()
    }
}
