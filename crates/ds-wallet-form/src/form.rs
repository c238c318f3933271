use crate::chains::DEFAULT_CHAIN_ID;
use crate::schema::{self, Field, FieldErrors, ValidationError};
use ds_api_types::{AddWalletRequest, Highlight};
use tracing::debug;

/// Current field values. All four keys are always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalletInfo {
    pub address: String,
    pub chain_id: u64,
    pub tag: String,
    /// Raw select value; narrowed to [`Highlight`] by the schema.
    pub highlight: String,
}

impl Default for WalletInfo {
    fn default() -> Self {
        Self {
            address: "0x".to_owned(),
            chain_id: DEFAULT_CHAIN_ID,
            tag: String::new(),
            highlight: Highlight::Red.as_str().to_owned(),
        }
    }
}

/// Messages shown under the address and tag inputs. Empty means no error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    pub address: String,
    pub tag: String,
}

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Address => Some(&self.address),
            Field::Tag => Some(&self.tag),
            Field::ChainId | Field::Highlight => None,
        }
    }

    pub fn clear(&mut self, field: Field) {
        match field {
            Field::Address => self.address.clear(),
            Field::Tag => self.tag.clear(),
            Field::ChainId | Field::Highlight => {}
        }
    }

    /// Overlay flattened validation messages. Fields without a message keep
    /// their previous text; fields without a display slot are dropped.
    pub fn merge(&mut self, errors: &FieldErrors) {
        for (field, message) in errors {
            match field {
                Field::Address => self.address = message.clone(),
                Field::Tag => self.tag = message.clone(),
                Field::ChainId | Field::Highlight => {}
            }
        }
    }

    pub fn is_clear(&self) -> bool {
        self.address.is_empty() && self.tag.is_empty()
    }
}

/// One edit coming from a UI control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Address(String),
    ChainId(u64),
    Tag(String),
    Highlight(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldParseError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
    #[error("chain id is not a number: {0:?}")]
    InvalidChainId(String),
}

impl FieldUpdate {
    /// Build an update from a control's `name` and raw string value.
    ///
    /// Select elements always hand back strings, so `chainId` is parsed here.
    pub fn from_raw(name: &str, value: &str) -> Result<Self, FieldParseError> {
        let field = name
            .parse::<Field>()
            .map_err(FieldParseError::UnknownField)?;

        Ok(match field {
            Field::Address => FieldUpdate::Address(value.to_owned()),
            Field::ChainId => FieldUpdate::ChainId(
                value
                    .trim()
                    .parse::<u64>()
                    .map_err(|_| FieldParseError::InvalidChainId(value.to_owned()))?,
            ),
            Field::Tag => FieldUpdate::Tag(value.to_owned()),
            Field::Highlight => FieldUpdate::Highlight(value.to_owned()),
        })
    }

    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::Address(_) => Field::Address,
            FieldUpdate::ChainId(_) => Field::ChainId,
            FieldUpdate::Tag(_) => Field::Tag,
            FieldUpdate::Highlight(_) => Field::Highlight,
        }
    }
}

/// Form state: field values plus the messages rendered beneath them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WalletForm {
    info: WalletInfo,
    errors: FormErrors,
}

impl WalletForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> &WalletInfo {
        &self.info
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    /// Apply an edit: clear that field's message, then store the value.
    pub fn apply(&mut self, update: FieldUpdate) {
        self.errors.clear(update.field());
        match update {
            FieldUpdate::Address(v) => self.info.address = v,
            FieldUpdate::ChainId(v) => self.info.chain_id = v,
            FieldUpdate::Tag(v) => self.info.tag = v,
            FieldUpdate::Highlight(v) => self.info.highlight = v,
        }
    }

    /// Validate the current values.
    ///
    /// On success returns the request to send and leaves the messages as they
    /// are. On failure the per-field messages are merged into [`FormErrors`]
    /// and the error is handed back for logging only.
    pub fn submit(&mut self) -> Result<AddWalletRequest, ValidationError> {
        match schema::validate(&self.info) {
            Ok(wallet) => Ok(wallet.into()),
            Err(err) => {
                debug!(issues = err.issues().len(), "wallet form failed validation");
                self.errors.merge(&err.flatten());
                Err(err)
            }
        }
    }
}
