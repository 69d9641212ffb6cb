multiversx_sc::imports!();

use crate::errors::{
    ERR_ILLEGAL_TRANSITION, ERR_NOT_DEPLOYING, ERR_NOT_FUNDING_SOURCE, ERR_NO_RESERVE,
    ERR_ZERO_AMOUNT,
};
use crate::types::Stage;

/// Deploying → Deployed → Executed, and the funding entry point that drives
/// the first transition.
#[multiversx_sc::module]
pub trait LifecycleModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: fund
    // Only the funding source, only while deploying.
    // ========================================================

    #[payable("EGLD")]
    #[endpoint(fund)]
    fn fund(&self) {
        let caller = self.blockchain().get_caller();
        require!(
            caller == self.funding_source().get(),
            ERR_NOT_FUNDING_SOURCE
        );
        require!(self.stage().get() == Stage::Deploying, ERR_NOT_DEPLOYING);

        let payment = self.call_value().egld_value().clone_value();
        require!(payment > 0u64, ERR_ZERO_AMOUNT);

        self.reserve().update(|reserve| *reserve += &payment);
        self.funded_event(&caller, &payment);

        self.complete_deployment();
    }

    // ========================================================
    // ENDPOINT: deploy
    // Explicit finaliser. `fund` normally performs it already.
    // ========================================================

    #[endpoint(deploy)]
    fn deploy(&self) {
        require!(self.stage().get() == Stage::Deploying, ERR_NOT_DEPLOYING);
        require!(self.reserve().get() > 0u64, ERR_NO_RESERVE);

        self.complete_deployment();
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn complete_deployment(&self) {
        self.transition(Stage::Deployed);
        let now = self.blockchain().get_block_timestamp();
        self.deployed_event(now, &self.reserve().get());
    }

    /// The single place where the stage is written.
    fn transition(&self, next: Stage) {
        let current = self.stage().get();
        require!(current.can_advance_to(next), ERR_ILLEGAL_TRANSITION);
        self.stage().set(next);
    }

    fn require_stage(&self, expected: Stage, err_msg: &str) {
        require!(self.stage().get() == expected, err_msg);
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getStage)]
    fn get_stage(&self) -> Stage {
        self.stage().get()
    }

    #[view(isDeploying)]
    fn is_deploying(&self) -> bool {
        self.stage().get() == Stage::Deploying
    }

    #[view(isDeployed)]
    fn is_deployed(&self) -> bool {
        self.stage().get() == Stage::Deployed
    }

    #[view(isExecuted)]
    fn is_executed(&self) -> bool {
        self.stage().get() == Stage::Executed
    }

    #[view(getReserve)]
    fn get_reserve(&self) -> BigUint {
        self.reserve().get()
    }
}
