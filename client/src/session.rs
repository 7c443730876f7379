use std::sync::Arc;

use near_crypto::{InMemorySigner, PublicKey, SecretKey};
use near_primitives::types::AccountId;
use serde_json::Value;

use crate::error::ClientError;
use crate::provider::Provider;

/// A signer-bound handle for one key pair against one contract.
///
/// With no account id the session runs in access-key-only mode: the key is a
/// function-call key living on the contract account, so calls are signed as
/// the contract's own account.
#[derive(Clone)]
pub struct Session {
    provider: Arc<dyn Provider>,
    contract_id: AccountId,
    signer: InMemorySigner,
}

impl Session {
    pub fn new(
        provider: Arc<dyn Provider>,
        contract_id: AccountId,
        secret_key: SecretKey,
        account_id: Option<AccountId>,
    ) -> Self {
        let signer_id = account_id.unwrap_or_else(|| contract_id.clone());
        Self {
            provider,
            signer: InMemorySigner::from_secret_key(signer_id, secret_key),
            contract_id,
        }
    }

    pub fn account_id(&self) -> &AccountId {
        &self.signer.account_id
    }

    pub fn contract_id(&self) -> &AccountId {
        &self.contract_id
    }

    /// Base58 form of the session key, as the balance views expect it.
    pub fn public_key(&self) -> String {
        self.signer.public_key.to_string()
    }

    pub async fn view(&self, method: &str, args: Value) -> Result<Value, ClientError> {
        self.provider.view(&self.contract_id, method, args).await
    }

    pub async fn call(&self, method: &str, args: Value, gas: u64) -> Result<(), ClientError> {
        self.provider
            .call(&self.signer, &self.contract_id, method, args, gas, 0)
            .await
    }

    /// Owner-side provisioning: grant `public_key` a function-call key on
    /// the contract account, scoped to the drop change methods with the
    /// fixed allowance.
    pub async fn grant_drop_key(&self, public_key: PublicKey) -> Result<(), ClientError> {
        tracing::info!(
            "granting drop key {} on {}",
            public_key,
            self.contract_id
        );
        self.provider
            .add_key(
                &self.signer,
                public_key,
                &self.contract_id,
                common::contract::CHANGE_METHODS
                    .iter()
                    .map(|m| m.to_string())
                    .collect(),
                common::contract::ACCESS_KEY_ALLOWANCE,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use near_crypto::KeyType;

    struct NullProvider;

    #[async_trait::async_trait]
    impl Provider for NullProvider {
        async fn view(&self, _: &AccountId, _: &str, _: Value) -> Result<Value, ClientError> {
            unimplemented!("not used")
        }

        async fn call(
            &self,
            _: &InMemorySigner,
            _: &AccountId,
            _: &str,
            _: Value,
            _: u64,
            _: u128,
        ) -> Result<(), ClientError> {
            unimplemented!("not used")
        }

        async fn add_key(
            &self,
            _: &InMemorySigner,
            _: PublicKey,
            _: &AccountId,
            _: Vec<String>,
            _: u128,
        ) -> Result<(), ClientError> {
            unimplemented!("not used")
        }
    }

    #[test]
    fn access_key_only_sessions_act_as_the_contract() {
        let contract_id: AccountId = "drop.testnet".parse().unwrap();
        let key = SecretKey::from_seed(KeyType::ED25519, "drop-key");
        let session = Session::new(
            Arc::new(NullProvider),
            contract_id.clone(),
            key,
            None,
        );
        assert_eq!(session.account_id(), &contract_id);
    }

    #[test]
    fn named_sessions_keep_their_identity() {
        let contract_id: AccountId = "drop.testnet".parse().unwrap();
        let alice: AccountId = "alice.testnet".parse().unwrap();
        let key = SecretKey::from_seed(KeyType::ED25519, "alice");
        let session = Session::new(
            Arc::new(NullProvider),
            contract_id,
            key,
            Some(alice.clone()),
        );
        assert_eq!(session.account_id(), &alice);
    }
}
