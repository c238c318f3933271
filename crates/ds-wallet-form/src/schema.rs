//! Declarative checks run against the whole [`WalletInfo`] on submit.
//!
//! Every rule is evaluated; a failure reports all violations at once rather
//! than stopping at the first one.

use crate::form::WalletInfo;
use ds_api_types::{AddWalletRequest, Highlight};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

pub const TAG_MIN_LEN: usize = 1;
pub const TAG_MAX_LEN: usize = 20;

pub const INVALID_ADDRESS: &str = "Invalid address";
pub const TAG_REQUIRED: &str = "Please define a tag.";

static ADDRESS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^0x[a-fA-F0-9]+$").expect("valid address regex"));

/// The four keys of [`WalletInfo`], as named by the UI controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Address,
    ChainId,
    Tag,
    Highlight,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Address, Field::ChainId, Field::Tag, Field::Highlight];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Address => "address",
            Field::ChainId => "chainId",
            Field::Tag => "tag",
            Field::Highlight => "highlight",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| s.to_owned())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: Field,
    pub message: String,
}

/// Per-field messages extracted from a [`ValidationError`]; first message wins.
pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("wallet info failed validation ({} issue(s))", issues.len())]
pub struct ValidationError {
    issues: Vec<FieldIssue>,
}

impl ValidationError {
    pub fn issues(&self) -> &[FieldIssue] {
        &self.issues
    }

    pub fn flatten(&self) -> FieldErrors {
        let mut out = FieldErrors::new();
        for issue in &self.issues {
            out.entry(issue.field).or_insert_with(|| issue.message.clone());
        }
        out
    }
}

/// WalletInfo that passed every rule, with the highlight narrowed to its enum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedWallet {
    pub address: String,
    pub chain_id: u64,
    pub tag: String,
    pub highlight: Highlight,
}

impl From<ValidatedWallet> for AddWalletRequest {
    fn from(wallet: ValidatedWallet) -> Self {
        AddWalletRequest {
            wallet_address: wallet.address,
            wallet_chain_id: wallet.chain_id,
            wallet_tag: wallet.tag,
            wallet_highlight: wallet.highlight,
        }
    }
}

pub fn is_valid_address(address: &str) -> bool {
    ADDRESS_RE.is_match(address)
}

/// Run the schema. `chain_id` carries no constraint beyond being a number.
pub fn validate(info: &WalletInfo) -> Result<ValidatedWallet, ValidationError> {
    let mut issues = Vec::new();

    if !is_valid_address(&info.address) {
        issues.push(FieldIssue {
            field: Field::Address,
            message: INVALID_ADDRESS.to_owned(),
        });
    }

    // Browser string length: UTF-16 code units, as `maxlength` counts them.
    let tag_len = info.tag.encode_utf16().count();
    if tag_len < TAG_MIN_LEN {
        issues.push(FieldIssue {
            field: Field::Tag,
            message: TAG_REQUIRED.to_owned(),
        });
    } else if tag_len > TAG_MAX_LEN {
        issues.push(FieldIssue {
            field: Field::Tag,
            message: format!("String must contain at most {TAG_MAX_LEN} character(s)"),
        });
    }

    let highlight = match info.highlight.parse::<Highlight>() {
        Ok(highlight) => Some(highlight),
        Err(_) => {
            let expected = Highlight::ALL
                .iter()
                .map(|h| format!("'{h}'"))
                .collect::<Vec<_>>()
                .join(" | ");
            issues.push(FieldIssue {
                field: Field::Highlight,
                message: format!(
                    "Invalid enum value. Expected {expected}, received '{}'",
                    info.highlight
                ),
            });
            None
        }
    };

    match highlight {
        Some(highlight) if issues.is_empty() => Ok(ValidatedWallet {
            address: info.address.clone(),
            chain_id: info.chain_id,
            tag: info.tag.clone(),
            highlight,
        }),
        _ => Err(ValidationError { issues }),
    }
}
