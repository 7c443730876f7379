use thiserror::Error;

/// Fatal failures of the drop workflow. Expected rejections never appear
/// here; they are classified into [`crate::Outcome::Benign`] instead.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure reaching the RPC endpoint.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The RPC server answered with an error object.
    #[error("rpc error: {0}")]
    Rpc(String),

    /// A change call executed and failed with an unexpected message.
    #[error("contract call failed: {0}")]
    Execution(String),

    /// The RPC response did not have the expected shape.
    #[error("unexpected rpc response: {0}")]
    InvalidResponse(String),

    /// A balance view returned something that does not parse as a balance.
    #[error("malformed balance in view result: {0}")]
    MalformedBalance(serde_json::Value),

    /// `check_receiver` requires a non-empty account id.
    #[error("receiver account id is required")]
    ReceiverRequired,
}
