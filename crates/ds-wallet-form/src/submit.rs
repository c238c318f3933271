use crate::schema::ValidationError;
use async_trait::async_trait;
use ds_api_types::{AddWalletRequest, AddWalletResponse};
use tracing::warn;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("encode error: {0}")]
    Encode(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("malformed response: {0}")]
    Decode(String),
}

/// Receiver of the "add wallet" call.
///
/// Browser fetch futures are not `Send`, so neither is this trait.
#[async_trait(?Send)]
pub trait WalletApi {
    async fn add_wallet(&self, request: &AddWalletRequest) -> Result<AddWalletResponse, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; messages were merged into the form. Nothing was sent.
    Invalid,
    /// Exactly one call was issued; this is its result.
    Sent(Result<AddWalletResponse, ApiError>),
}

/// Issue one call through `api` for a passing submit attempt, none otherwise.
///
/// `attempt` is the result of [`WalletForm::submit`](crate::WalletForm::submit),
/// taken before awaiting so the form is not borrowed across the call. The
/// result of the call never touches the form state.
pub async fn submit_form<A>(
    attempt: Result<AddWalletRequest, ValidationError>,
    api: &A,
) -> SubmitOutcome
where
    A: WalletApi + ?Sized,
{
    let Ok(request) = attempt else {
        return SubmitOutcome::Invalid;
    };

    let result = api.add_wallet(&request).await;
    if let Err(err) = &result {
        warn!("add wallet call failed: {}", err);
    }
    SubmitOutcome::Sent(result)
}
