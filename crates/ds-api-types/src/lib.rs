use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cosmetic color attached to a registered wallet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Red,
    Green,
    Blue,
    Yellow,
}

impl Highlight {
    pub const ALL: [Highlight; 4] = [
        Highlight::Red,
        Highlight::Green,
        Highlight::Blue,
        Highlight::Yellow,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Highlight::Red => "red",
            Highlight::Green => "green",
            Highlight::Blue => "blue",
            Highlight::Yellow => "yellow",
        }
    }

    /// Human-facing option label.
    pub fn label(self) -> &'static str {
        match self {
            Highlight::Red => "Red",
            Highlight::Green => "Green",
            Highlight::Blue => "Blue",
            Highlight::Yellow => "Yellow",
        }
    }
}

impl fmt::Display for Highlight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown highlight: {0}")]
pub struct UnknownHighlight(pub String);

impl FromStr for Highlight {
    type Err = UnknownHighlight;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Highlight::ALL
            .into_iter()
            .find(|h| h.as_str() == s)
            .ok_or_else(|| UnknownHighlight(s.to_owned()))
    }
}

/// Body of the "add wallet" call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddWalletRequest {
    pub wallet_address: String,
    pub wallet_chain_id: u64,
    pub wallet_tag: String,
    pub wallet_highlight: Highlight,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AddWalletResponse {
    pub accepted: bool,
    pub registration_id: String,
    pub wallet_address: String,
    pub wallet_chain_id: u64,
    pub chain_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Route of the "add wallet" procedure, relative to the API base.
pub const ADD_WALLET_PATH: &str = "/api/wallet.add";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_rpc_field_names() {
        let request = AddWalletRequest {
            wallet_address: "0xabc".to_owned(),
            wallet_chain_id: 1,
            wallet_tag: "main".to_owned(),
            wallet_highlight: Highlight::Blue,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "walletAddress": "0xabc",
                "walletChainId": 1,
                "walletTag": "main",
                "walletHighlight": "blue",
            })
        );
    }

    #[test]
    fn highlight_parses_only_known_literals() {
        assert_eq!("yellow".parse::<Highlight>(), Ok(Highlight::Yellow));
        assert_eq!(
            "Yellow".parse::<Highlight>(),
            Err(UnknownHighlight("Yellow".to_owned()))
        );
        assert!("purple".parse::<Highlight>().is_err());
    }

    #[test]
    fn unknown_highlight_is_rejected_on_deserialize() {
        let raw = serde_json::json!({
            "walletAddress": "0x1",
            "walletChainId": 1,
            "walletTag": "t",
            "walletHighlight": "pink",
        });
        assert!(serde_json::from_value::<AddWalletRequest>(raw).is_err());
    }
}
