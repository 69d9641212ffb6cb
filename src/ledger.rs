multiversx_sc::imports!();

use crate::errors::{ERR_INSUFFICIENT_BALANCE, ERR_NOT_DEPLOYED, ERR_NOT_REGISTRY, ERR_ZERO_AMOUNT};
use crate::share_registry_proxy;
use crate::types::{ShareClass, Stage};

/// Per-depositor, per-class share balances held in custody.
///
/// The registries are the only writers on the deposit side: they call
/// `notifyDeposit` before crediting a transfer to this contract.
#[multiversx_sc::module]
pub trait LedgerModule:
    crate::storage::StorageModule + crate::events::EventsModule + crate::lifecycle::LifecycleModule
{
    // ========================================================
    // ENDPOINT: notifyDeposit
    // Registry callback. The caller identifies the share class.
    // ========================================================

    #[endpoint(notifyDeposit)]
    fn notify_deposit(&self, depositor: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let class = match self.class_of_registry(&caller) {
            Some(class) => class,
            None => sc_panic!(ERR_NOT_REGISTRY),
        };
        self.require_stage(Stage::Deployed, ERR_NOT_DEPLOYED);
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        self.deposits(class, &depositor).update(|balance| *balance += &amount);
        self.total_deposited(class).update(|total| *total += &amount);

        self.deposit_event(class, &depositor, &amount);
    }

    // ========================================================
    // ENDPOINT: withdraw
    // Ledger first, registry payout second.
    // ========================================================

    #[endpoint(withdraw)]
    fn withdraw(&self, class: ShareClass, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        require!(amount > 0u64, ERR_ZERO_AMOUNT);

        let balance = self.deposits(class, &caller).get();
        require!(amount <= balance, ERR_INSUFFICIENT_BALANCE);

        let remaining = balance - &amount;
        if remaining == 0u64 {
            self.deposits(class, &caller).clear();
        } else {
            self.deposits(class, &caller).set(&remaining);
        }
        self.total_deposited(class).update(|total| *total -= &amount);

        let registry = self.registry_address(class).get();
        self.tx()
            .to(&registry)
            .typed(share_registry_proxy::ShareRegistryProxy)
            .transfer(&caller, &amount)
            .sync_call();

        self.withdraw_event(class, &caller, &amount);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn class_of_registry(&self, address: &ManagedAddress) -> Option<ShareClass> {
        [ShareClass::Security, ShareClass::Utility]
            .into_iter()
            .find(|class| self.registry_address(*class).get() == *address)
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, class: ShareClass, account: ManagedAddress) -> BigUint {
        self.deposits(class, &account).get()
    }

    #[view(getTotalDeposited)]
    fn get_total_deposited(&self, class: ShareClass) -> BigUint {
        self.total_deposited(class).get()
    }
}
