multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Stage: global lifecycle of the governor
// ============================================================

/// Lifecycle of the governor. Stages only move forward.
///
/// `Deploying` is the first variant so that empty storage decodes to it.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    /// Waiting for the funding source to deposit the reserve.
    Deploying,
    /// Reserve held. Shares can be deposited, candidates proposed and voted on.
    Deployed,
    /// Custody handed to a winning candidate. Terminal.
    Executed,
}

impl Stage {
    /// The only stage reachable from `self`, if any.
    pub fn successor(self) -> Option<Stage> {
        match self {
            Stage::Deploying => Some(Stage::Deployed),
            Stage::Deployed => Some(Stage::Executed),
            Stage::Executed => None,
        }
    }

    pub fn can_advance_to(self, next: Stage) -> bool {
        self.successor() == Some(next)
    }
}

// ============================================================
// Share classes
// ============================================================

/// The two depositable share classes. Class-U carries more weight per unit.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum ShareClass {
    /// Class-S shares.
    Security,
    /// Class-U shares.
    Utility,
}

// ============================================================
// Ballot: one voter's position on one candidate
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Ballot {
    /// Never voted. Decoded from empty storage.
    Absent,
    For,
    Against,
}

impl Ballot {
    pub fn from_support(support: bool) -> Self {
        if support {
            Ballot::For
        } else {
            Ballot::Against
        }
    }
}

// ============================================================
// Proposal: a candidate for custody of the reserve
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub candidate: ManagedAddress<M>,
    /// Block timestamp at which the voting window opened
    pub created_at: u64,
    /// Block timestamp at which the voting window closes (exclusive)
    pub closes_at: u64,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn is_open(&self, now: u64) -> bool {
        now < self.closes_at
    }
}
