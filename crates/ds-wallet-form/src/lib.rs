//! Wallet registration form: state, schema validation and the outbound
//! "add wallet" seam.
//!
//! The crate is UI-agnostic. A front-end feeds it [`FieldUpdate`]s and
//! submit events; it answers with error text to render and, when the input
//! passes the schema, exactly one [`AddWalletRequest`] to send.

pub mod chains;
pub mod form;
pub mod schema;
pub mod submit;

pub use chains::{DEFAULT_CHAIN_ID, SUPPORTED_CHAINS, SupportedChain};
pub use ds_api_types::{AddWalletRequest, AddWalletResponse, Highlight};
pub use form::{FieldParseError, FieldUpdate, FormErrors, WalletForm, WalletInfo};
pub use schema::{Field, FieldErrors, FieldIssue, ValidatedWallet, ValidationError, validate};
pub use submit::{ApiError, SubmitOutcome, WalletApi, submit_form};
