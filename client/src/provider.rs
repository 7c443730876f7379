use near_crypto::{InMemorySigner, PublicKey};
use near_primitives::types::AccountId;
use serde_json::Value;

use crate::error::ClientError;

/// A NEAR endpoint a session can drive: balance views, signed change calls,
/// and owner-side access-key provisioning. Production uses
/// [`crate::JsonRpcProvider`]; tests swap in an in-memory ledger.
#[async_trait::async_trait]
pub trait Provider: Send + Sync {
    /// Invoke a view method and return its JSON result.
    async fn view(
        &self,
        contract_id: &AccountId,
        method: &str,
        args: Value,
    ) -> Result<Value, ClientError>;

    /// Sign and submit a function call as `signer`, waiting for the final
    /// execution outcome. Execution failures come back as
    /// [`ClientError::Execution`] carrying the contract's message.
    async fn call(
        &self,
        signer: &InMemorySigner,
        receiver_id: &AccountId,
        method: &str,
        args: Value,
        gas: u64,
        deposit: u128,
    ) -> Result<(), ClientError>;

    /// Add a function-call access key to the signer's own account, scoped to
    /// `receiver_id` and `method_names` with a spending `allowance`.
    async fn add_key(
        &self,
        signer: &InMemorySigner,
        public_key: PublicKey,
        receiver_id: &AccountId,
        method_names: Vec<String>,
        allowance: u128,
    ) -> Result<(), ClientError>;
}
