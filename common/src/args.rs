use serde::{Deserialize, Serialize};

/// The JSON args for the `transfer` contract method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferArgs {
    pub account_id: String,
}

/// The JSON args for the `get_balance_dropped` view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceDroppedArgs {
    /// Base58 public key string, e.g. "ed25519:Eg2j...".
    pub public_key: String,
}

/// The JSON args for the `get_balance_tokens` view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceTokensArgs {
    pub account_id: String,
}

/// Parse a balance view result. The contract returns `U128`, which
/// serializes as a base-10 string; bare numbers are accepted too.
pub fn balance_from_json(value: &serde_json::Value) -> Option<u128> {
    match value {
        serde_json::Value::String(s) => s.parse().ok(),
        serde_json::Value::Number(n) => n.as_u64().map(u128::from),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_match_contract_surface() {
        let transfer = serde_json::to_value(TransferArgs {
            account_id: "alice.testnet".into(),
        })
        .unwrap();
        assert_eq!(transfer, json!({ "account_id": "alice.testnet" }));

        let dropped = serde_json::to_value(BalanceDroppedArgs {
            public_key: "ed25519:Eg2jtsiMrprn7zgKKUk79qM1hWhANsFyE6JSX4txLEuy".into(),
        })
        .unwrap();
        assert_eq!(
            dropped,
            json!({ "public_key": "ed25519:Eg2jtsiMrprn7zgKKUk79qM1hWhANsFyE6JSX4txLEuy" })
        );
    }

    #[test]
    fn balance_parses_u128_string() {
        assert_eq!(balance_from_json(&json!("100")), Some(100));
        assert_eq!(balance_from_json(&json!(0)), Some(0));
        assert_eq!(balance_from_json(&json!("not a number")), None);
        assert_eq!(balance_from_json(&json!({ "balance": "100" })), None);
    }
}
