pub struct Config {
    pub rpc_url: String,
    pub contract_id: String,
    /// Secret key of the function-call drop key ("ed25519:...").
    pub access_key_secret: Option<String>,
    /// Named account to act as; unset means access-key-only mode.
    pub account_id: Option<String>,
    /// Full-access key of the contract owner, required for `grant`.
    pub owner_secret: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            rpc_url: std::env::var("NEAR_RPC_URL")
                .unwrap_or_else(|_| "https://rpc.testnet.near.org".into()),
            contract_id: std::env::var("CONTRACT_ID")
                .unwrap_or_else(|_| "drop.testnet".into()),
            access_key_secret: std::env::var("ACCESS_KEY_SECRET").ok(),
            account_id: std::env::var("ACCOUNT_ID").ok(),
            owner_secret: std::env::var("OWNER_SECRET").ok(),
        }
    }
}
