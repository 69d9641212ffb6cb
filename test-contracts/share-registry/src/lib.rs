#![no_std]

//! Minimal share registry used by the governor's scenario tests.
//!
//! Holds balances, an owner set, and notifies a registered deposit sink
//! before crediting any transfer addressed to it.

multiversx_sc::imports!();

pub mod deposit_sink_proxy;
pub mod share_registry_proxy;

const ERR_NOT_OWNER: &str = "Caller is not an owner";
const ERR_INSUFFICIENT_BALANCE: &str = "Insufficient balance";

#[multiversx_sc::contract]
pub trait ShareRegistry {
    #[init]
    fn init(&self) {
        let caller = self.blockchain().get_caller();
        self.owners().insert(caller);
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ── Administration ──

    #[endpoint(addOwner)]
    fn add_owner(&self, account: ManagedAddress) {
        self.require_owner();
        self.owners().insert(account);
    }

    #[endpoint(removeOwner)]
    fn remove_owner(&self, account: ManagedAddress) {
        self.require_owner();
        self.owners().swap_remove(&account);
    }

    #[endpoint(setDepositSink)]
    fn set_deposit_sink(&self, sink: ManagedAddress) {
        self.require_owner();
        self.deposit_sink().set(&sink);
    }

    #[endpoint(issue)]
    fn issue(&self, to: ManagedAddress, amount: BigUint) {
        self.require_owner();
        self.balances(&to).update(|balance| *balance += &amount);
    }

    // ── Transfers ──

    #[endpoint(transfer)]
    fn transfer(&self, to: ManagedAddress, amount: BigUint) {
        let caller = self.blockchain().get_caller();
        let balance = self.balances(&caller).get();
        require!(amount <= balance, ERR_INSUFFICIENT_BALANCE);

        let sink = self.deposit_sink();
        if !sink.is_empty() && sink.get() == to {
            self.tx()
                .to(&to)
                .typed(deposit_sink_proxy::DepositSinkProxy)
                .notify_deposit(&caller, &amount)
                .sync_call();
        }

        self.balances(&caller).set(balance - &amount);
        self.balances(&to).update(|balance| *balance += &amount);
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(self.owners().contains(&caller), ERR_NOT_OWNER);
    }

    // ── Views ──

    #[view(isOwner)]
    fn is_owner(&self, account: ManagedAddress) -> bool {
        self.owners().contains(&account)
    }

    #[view(balanceOf)]
    fn balance_of(&self, account: ManagedAddress) -> BigUint {
        self.balances(&account).get()
    }

    // ── Storage ──

    #[storage_mapper("owners")]
    fn owners(&self) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("depositSink")]
    fn deposit_sink(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("balances")]
    fn balances(&self, account: &ManagedAddress) -> SingleValueMapper<BigUint>;
}
