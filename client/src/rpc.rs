use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use borsh::BorshSerialize;
use near_crypto::{InMemorySigner, PublicKey};
use near_primitives::account::{AccessKey, AccessKeyPermission, FunctionCallPermission};
use near_primitives::hash::CryptoHash;
use near_primitives::transaction::{Action, AddKeyAction, FunctionCallAction, Transaction};
use near_primitives::types::AccountId;
use serde_json::{json, Value};

use crate::error::ClientError;
use crate::provider::Provider;

/// NEAR JSON-RPC provider: views go through `query`, change calls are
/// signed locally and submitted with `broadcast_tx_commit`.
pub struct JsonRpcProvider {
    rpc_url: String,
    http: reqwest::Client,
}

impl JsonRpcProvider {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc_url: rpc_url.into(),
            http: reqwest::Client::new(),
        }
    }

    async fn rpc(&self, method: &str, params: Value) -> Result<Value, ClientError> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": "dontcare",
            "method": method,
            "params": params,
        });
        let response: Value = self
            .http
            .post(&self.rpc_url)
            .json(&body)
            .send()
            .await?
            .json()
            .await?;
        if let Some(error) = response.get("error") {
            return Err(ClientError::Rpc(error.to_string()));
        }
        response
            .get("result")
            .cloned()
            .ok_or_else(|| ClientError::InvalidResponse("missing result".into()))
    }

    /// Fetch the signer key's next nonce and a recent block hash in one
    /// `view_access_key` query.
    async fn tx_anchor(&self, signer: &InMemorySigner) -> Result<(u64, CryptoHash), ClientError> {
        let result = self
            .rpc(
                "query",
                json!({
                    "request_type": "view_access_key",
                    "finality": "final",
                    "account_id": signer.account_id,
                    "public_key": signer.public_key.to_string(),
                }),
            )
            .await?;
        if let Some(error) = result.get("error").and_then(Value::as_str) {
            return Err(ClientError::Rpc(error.to_string()));
        }
        let nonce = result.get("nonce").and_then(Value::as_u64).ok_or_else(|| {
            ClientError::InvalidResponse("view_access_key without nonce".into())
        })?;
        let block_hash = result
            .get("block_hash")
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                ClientError::InvalidResponse("view_access_key without block hash".into())
            })?;
        Ok((nonce + 1, block_hash))
    }

    async fn sign_and_send(
        &self,
        signer: &InMemorySigner,
        receiver_id: &AccountId,
        actions: Vec<Action>,
    ) -> Result<(), ClientError> {
        let (nonce, block_hash) = self.tx_anchor(signer).await?;
        let transaction = Transaction {
            signer_id: signer.account_id.clone(),
            public_key: signer.public_key.clone(),
            nonce,
            receiver_id: receiver_id.clone(),
            block_hash,
            actions,
        };
        let signed = transaction.sign(signer);
        let bytes = signed
            .try_to_vec()
            .map_err(|e| ClientError::InvalidResponse(format!("transaction encoding: {e}")))?;
        let outcome = self
            .rpc("broadcast_tx_commit", json!([BASE64.encode(bytes)]))
            .await?;
        if let Some(failure) = outcome.pointer("/status/Failure") {
            let message =
                execution_error_message(failure).unwrap_or_else(|| failure.to_string());
            return Err(ClientError::Execution(message));
        }
        if let Some(hash) = outcome.pointer("/transaction/hash").and_then(Value::as_str) {
            tracing::debug!("transaction {} final", hash);
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl Provider for JsonRpcProvider {
    async fn view(
        &self,
        contract_id: &AccountId,
        method: &str,
        args: Value,
    ) -> Result<Value, ClientError> {
        let result = self
            .rpc(
                "query",
                json!({
                    "request_type": "call_function",
                    "finality": "final",
                    "account_id": contract_id,
                    "method_name": method,
                    "args_base64": BASE64.encode(args.to_string()),
                }),
            )
            .await?;
        if let Some(error) = result.get("error").and_then(Value::as_str) {
            return Err(ClientError::Rpc(error.to_string()));
        }
        let bytes: Vec<u8> = result
            .get("result")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .ok_or_else(|| {
                ClientError::InvalidResponse("call_function without result bytes".into())
            })?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("view result is not JSON: {e}")))
    }

    async fn call(
        &self,
        signer: &InMemorySigner,
        receiver_id: &AccountId,
        method: &str,
        args: Value,
        gas: u64,
        deposit: u128,
    ) -> Result<(), ClientError> {
        tracing::debug!(
            "calling {}.{} as {}",
            receiver_id,
            method,
            signer.account_id
        );
        let actions = vec![Action::FunctionCall(FunctionCallAction {
            method_name: method.to_string(),
            args: args.to_string().into_bytes(),
            gas,
            deposit,
        })];
        self.sign_and_send(signer, receiver_id, actions).await
    }

    async fn add_key(
        &self,
        signer: &InMemorySigner,
        public_key: PublicKey,
        receiver_id: &AccountId,
        method_names: Vec<String>,
        allowance: u128,
    ) -> Result<(), ClientError> {
        let access_key = AccessKey {
            nonce: 0,
            permission: AccessKeyPermission::FunctionCall(FunctionCallPermission {
                allowance: Some(allowance),
                receiver_id: receiver_id.to_string(),
                method_names,
            }),
        };
        let actions = vec![Action::AddKey(AddKeyAction {
            public_key,
            access_key,
        })];
        // AddKey always lands on the signer's own account.
        let own_account = signer.account_id.clone();
        self.sign_and_send(signer, &own_account, actions).await
    }
}

/// Pull the human-readable panic message out of a `Failure` status. The
/// interesting string lives under
/// `ActionError.kind.FunctionCallError.ExecutionError`, but the nesting has
/// shifted between node versions, so search the tree for it.
fn execution_error_message(failure: &Value) -> Option<String> {
    match failure {
        Value::Object(map) => {
            if let Some(Value::String(message)) = map.get("ExecutionError") {
                return Some(message.clone());
            }
            map.values().find_map(execution_error_message)
        }
        Value::Array(items) => items.iter().find_map(execution_error_message),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_the_contract_panic_from_a_failure_status() {
        let failure = json!({
            "ActionError": {
                "index": 0,
                "kind": {
                    "FunctionCallError": {
                        "ExecutionError": "Smart contract panicked: Tokens already dropped"
                    }
                }
            }
        });
        assert_eq!(
            execution_error_message(&failure).as_deref(),
            Some("Smart contract panicked: Tokens already dropped")
        );
    }

    #[test]
    fn falls_through_on_unrecognized_failures() {
        let failure = json!({ "InvalidTxError": { "InvalidNonce": { "tx_nonce": 1 } } });
        assert_eq!(execution_error_message(&failure), None);
    }
}
