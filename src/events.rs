multiversx_sc::imports!();

use crate::types::ShareClass;

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("funded")]
    fn funded_event(&self, #[indexed] source: &ManagedAddress, amount: &BigUint);

    #[event("deployed")]
    fn deployed_event(&self, #[indexed] timestamp: u64, reserve: &BigUint);

    #[event("deposit")]
    fn deposit_event(
        &self,
        #[indexed] class: ShareClass,
        #[indexed] depositor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("withdraw")]
    fn withdraw_event(
        &self,
        #[indexed] class: ShareClass,
        #[indexed] depositor: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] candidate: &ManagedAddress,
        #[indexed] proposer: &ManagedAddress,
        closes_at: u64,
    );

    #[event("vote")]
    fn vote_event(
        &self,
        #[indexed] candidate: &ManagedAddress,
        #[indexed] voter: &ManagedAddress,
        support: bool,
    );

    #[event("executed")]
    fn executed_event(&self, #[indexed] candidate: &ManagedAddress, reserve: &BigUint);
}
