//! Error messages raised by the governor.
//!
//! Every message is prefixed with its kind so callers can match on it.

// ── Unauthorized ──
pub const ERR_NOT_FUNDING_SOURCE: &str = "Unauthorized: caller is not the funding source";
pub const ERR_NOT_REGISTRY: &str = "Unauthorized: caller is not a share registry";

// ── InvalidState ──
pub const ERR_NOT_DEPLOYING: &str = "InvalidState: governor is not deploying";
pub const ERR_NOT_DEPLOYED: &str = "InvalidState: governor is not deployed";
pub const ERR_ILLEGAL_TRANSITION: &str = "InvalidState: illegal stage transition";
pub const ERR_NO_RESERVE: &str = "InvalidState: reserve is empty";

// ── Voting window ──
pub const ERR_WINDOW_CLOSED: &str = "WindowClosed: voting period has ended";
pub const ERR_WINDOW_OPEN: &str = "WindowOpen: voting period has not ended";
pub const ERR_NO_VOTING_POWER: &str = "NoVotingPower: caller has no deposited shares";

// ── Proposals ──
pub const ERR_PROPOSAL_NOT_FOUND: &str = "ProposalNotFound: candidate was never proposed";
pub const ERR_ALREADY_PROPOSED: &str = "AlreadyProposed: candidate was already proposed";
pub const ERR_NOT_SUPPORTED: &str = "NotSupported: quorum or majority not reached";
pub const ERR_ALREADY_EXECUTED: &str = "AlreadyExecuted: custody was already transferred";

// ── Ledger ──
pub const ERR_INSUFFICIENT_BALANCE: &str = "InsufficientBalance: amount exceeds deposited shares";
pub const ERR_ZERO_AMOUNT: &str = "ZeroAmount: amount must be positive";

// ── Configuration ──
pub const ERR_SAME_REGISTRY: &str = "Config: share registries must differ";
pub const ERR_ZERO_DURATION: &str = "Config: voting duration must be positive";
pub const ERR_DURATION_TOO_LONG: &str = "Config: voting duration exceeds the maximum";
pub const ERR_INVALID_WEIGHTS: &str = "Config: Class-U weight must exceed a positive Class-S weight";
