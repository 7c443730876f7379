//! Client for the social token drop contract: signer-bound sessions, the
//! claim-and-transfer workflow, and a JSON-RPC provider for live networks.

mod error;
mod outcome;
mod provider;
mod rpc;
mod session;
mod workflow;

pub use error::ClientError;
pub use outcome::{benign_rejection, Notice, Outcome};
pub use provider::Provider;
pub use rpc::JsonRpcProvider;
pub use session::Session;
pub use workflow::DropZone;

pub use near_crypto::{InMemorySigner, KeyType, PublicKey, SecretKey};
pub use near_primitives::types::AccountId;
