use near_sdk::json_types::U128;
use near_sdk::store::LookupMap;
use near_sdk::{env, near, require, AccountId, PanicOnDefault, PublicKey};

/// Tokens allocated by a single successful `drop` claim.
const DROP_AMOUNT: u128 = 100;

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct SocialDrop {
    pub owner_id: AccountId,
    /// One-time drops, keyed by the claiming access key.
    pub dropped: LookupMap<PublicKey, u128>,
    /// Token balances per receiver account.
    pub tokens: LookupMap<AccountId, u128>,
}

#[near]
impl SocialDrop {
    #[init]
    pub fn new(owner_id: AccountId) -> Self {
        Self {
            owner_id,
            dropped: LookupMap::new(b"d"),
            tokens: LookupMap::new(b"t"),
        }
    }

    /// Claim the one-time drop for the signer's public key. Calls must come
    /// in directly through one of the contract account's own keys.
    pub fn drop(&mut self) {
        require!(
            env::signer_account_id() == env::predecessor_account_id(),
            "Key not from app contract"
        );
        let public_key = env::signer_account_pk();
        let balance = self.dropped.get(&public_key).copied().unwrap_or(0);
        require!(balance == 0, "Tokens already dropped");
        self.dropped.insert(public_key, DROP_AMOUNT);
    }

    /// Move the signer key's dropped balance to `account_id`. Balances
    /// accumulate across transfers to the same receiver.
    pub fn transfer(&mut self, account_id: AccountId) {
        require!(
            env::signer_account_id() == env::predecessor_account_id(),
            "Key not from app contract"
        );
        let public_key = env::signer_account_pk();
        let balance = self.dropped.get(&public_key).copied().unwrap_or(0);
        require!(balance > 0, "No tokens");
        self.dropped.remove(&public_key);
        let current = self.tokens.get(&account_id).copied().unwrap_or(0);
        self.tokens.insert(account_id, current.saturating_add(balance));
    }

    pub fn get_balance_dropped(&self, public_key: PublicKey) -> U128 {
        U128(self.dropped.get(&public_key).copied().unwrap_or(0))
    }

    pub fn get_balance_tokens(&self, account_id: AccountId) -> U128 {
        U128(self.tokens.get(&account_id).copied().unwrap_or(0))
    }
}
