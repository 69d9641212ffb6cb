multiversx_sc::imports!();

use crate::errors::{
    ERR_ALREADY_EXECUTED, ERR_NOT_DEPLOYED, ERR_NOT_SUPPORTED, ERR_WINDOW_OPEN,
};
use crate::share_registry_proxy;
use crate::types::{ShareClass, Stage};

#[multiversx_sc::module]
pub trait ExecutionModule:
    crate::storage::StorageModule
    + crate::events::EventsModule
    + crate::lifecycle::LifecycleModule
    + crate::voting::VotingModule
{
    // ========================================================
    // ENDPOINT: execute
    // One-shot. Hands the reserve and registry ownership to the
    // winning candidate once its window has closed.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, candidate: ManagedAddress) {
        let stage = self.stage().get();
        require!(stage != Stage::Executed, ERR_ALREADY_EXECUTED);
        require!(stage == Stage::Deployed, ERR_NOT_DEPLOYED);

        let proposal = self.require_proposal(&candidate);
        let now = self.blockchain().get_block_timestamp();
        require!(!proposal.is_open(now), ERR_WINDOW_OPEN);
        require!(self.is_supported(candidate.clone(), true), ERR_NOT_SUPPORTED);

        // ── Internal state is final before any external call ──
        self.transition(Stage::Executed);
        let reserve = self.reserve().take();

        let own_address = self.blockchain().get_sc_address();
        for class in [ShareClass::Security, ShareClass::Utility] {
            let registry = self.registry_address(class).get();
            self.tx()
                .to(&registry)
                .typed(share_registry_proxy::ShareRegistryProxy)
                .add_owner(&candidate)
                .sync_call();
            self.tx()
                .to(&registry)
                .typed(share_registry_proxy::ShareRegistryProxy)
                .remove_owner(&own_address)
                .sync_call();
        }

        if reserve > 0u64 {
            self.send().direct_egld(&candidate, &reserve);
        }

        self.executed_event(&candidate, &reserve);
    }
}
