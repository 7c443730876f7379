use serde_json::json;

use common::contract::{CALL_GAS, DROP, GET_BALANCE_DROPPED, GET_BALANCE_TOKENS, TRANSFER};

use crate::error::ClientError;
use crate::outcome::{benign_rejection, Notice, Outcome};
use crate::session::Session;

/// Claim-and-transfer workflow for one drop key.
///
/// The last-seen balances are explicit fields, refreshed by re-querying
/// after every change call rather than by optimistic local update.
pub struct DropZone {
    session: Session,
    balance_dropped: u128,
    balance_tokens: u128,
}

impl DropZone {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            balance_dropped: 0,
            balance_tokens: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn balance_dropped(&self) -> u128 {
        self.balance_dropped
    }

    pub fn balance_tokens(&self) -> u128 {
        self.balance_tokens
    }

    /// Refresh the dropped-token balance for the session key.
    pub async fn check_drop(&mut self) -> Result<u128, ClientError> {
        let args = json!({ "public_key": self.session.public_key() });
        let result = self.session.view(GET_BALANCE_DROPPED, args).await?;
        let balance =
            common::balance_from_json(&result).ok_or(ClientError::MalformedBalance(result))?;
        self.balance_dropped = balance;
        Ok(balance)
    }

    /// Refresh the token balance of `account_id`. The receiver is validated
    /// locally; an empty id never reaches the network.
    pub async fn check_receiver(&mut self, account_id: &str) -> Result<u128, ClientError> {
        if account_id.is_empty() {
            return Err(ClientError::ReceiverRequired);
        }
        let args = json!({ "account_id": account_id });
        let result = self.session.view(GET_BALANCE_TOKENS, args).await?;
        let balance =
            common::balance_from_json(&result).ok_or(ClientError::MalformedBalance(result))?;
        self.balance_tokens = balance;
        Ok(balance)
    }

    /// Claim the one-time drop for the session key. A repeat claim resolves
    /// benignly; any other failure is fatal. The dropped balance is
    /// re-queried on every non-fatal path.
    pub async fn claim_drop(&mut self) -> Result<Outcome, ClientError> {
        let result = self.session.call(DROP, json!({}), CALL_GAS).await;
        let outcome = outcome_from_call(DROP, result)?;
        self.check_drop().await?;
        Ok(outcome)
    }

    /// Transfer the claimed balance to `account_id`. An exhausted key
    /// resolves benignly; both balances are re-queried on every non-fatal
    /// network path.
    pub async fn transfer_drop(&mut self, account_id: &str) -> Result<Outcome, ClientError> {
        if account_id.is_empty() {
            tracing::warn!("transfer requested without a receiver");
            return Ok(Outcome::Benign(Notice::ReceiverMissing));
        }
        let args = json!({ "account_id": account_id });
        let result = self.session.call(TRANSFER, args, CALL_GAS).await;
        let outcome = outcome_from_call(TRANSFER, result)?;
        self.check_drop().await?;
        self.check_receiver(account_id).await?;
        Ok(outcome)
    }
}

fn outcome_from_call(method: &str, result: Result<(), ClientError>) -> Result<Outcome, ClientError> {
    match result {
        Ok(()) => Ok(Outcome::Completed),
        Err(ClientError::Execution(message)) => match benign_rejection(&message) {
            Some(notice) => {
                tracing::info!("{} rejected: {}", method, notice.message());
                Ok(Outcome::Benign(notice))
            }
            None => Err(ClientError::Execution(message)),
        },
        Err(e) => Err(e),
    }
}
