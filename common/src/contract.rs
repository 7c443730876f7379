/// Tokens allocated by a single successful `drop` claim.
pub const DROP_AMOUNT: u128 = 100;

/// Gas attached to every change call (200 Tgas).
pub const CALL_GAS: u64 = 200_000_000_000_000;

/// Allowance funding a drop key's calls: 0.1 NEAR in yocto.
pub const ACCESS_KEY_ALLOWANCE: u128 = 100_000_000_000_000_000_000_000;

/// Change method: claim the one-time drop for the signer's public key.
pub const DROP: &str = "drop";

/// Change method: move the signer key's dropped balance to an account.
pub const TRANSFER: &str = "transfer";

/// View method: dropped-token balance for a public key.
pub const GET_BALANCE_DROPPED: &str = "get_balance_dropped";

/// View method: token balance for an account.
pub const GET_BALANCE_TOKENS: &str = "get_balance_tokens";

/// The methods a drop key's access grant is scoped to.
pub const CHANGE_METHODS: [&str; 2] = [DROP, TRANSFER];
