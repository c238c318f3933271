use axum::Json;
use ds_api_types::{AddWalletRequest, AddWalletResponse};
use ds_wallet_form::{WalletInfo, chains, validate};
use tracing::{info, warn};
use uuid::Uuid;

use crate::{ApiResult, bad_request};

/// POST /api/wallet.add
///
/// Re-runs the form schema and additionally requires a known chain id, which
/// the browser form does not enforce.
pub(crate) async fn add_wallet(
    Json(request): Json<AddWalletRequest>,
) -> ApiResult<AddWalletResponse> {
    let info = WalletInfo {
        address: request.wallet_address.clone(),
        chain_id: request.wallet_chain_id,
        tag: request.wallet_tag.clone(),
        highlight: request.wallet_highlight.as_str().to_owned(),
    };

    if let Err(err) = validate(&info) {
        let message = err
            .issues()
            .iter()
            .map(|issue| format!("{}: {}", issue.field, issue.message))
            .collect::<Vec<_>>()
            .join("; ");
        warn!("rejected wallet {}: {}", request.wallet_address, message);
        return Err(bad_request(&message));
    }

    let Some(chain) = chains::lookup(request.wallet_chain_id) else {
        warn!(
            "rejected wallet {}: unsupported chain id {}",
            request.wallet_address, request.wallet_chain_id
        );
        return Err(bad_request(&format!(
            "unsupported chain id: {}",
            request.wallet_chain_id
        )));
    };

    let registration_id = Uuid::new_v4().to_string();
    info!(
        "registered wallet {} on {} as {} ({})",
        request.wallet_address, chain.name, request.wallet_tag, registration_id
    );

    Ok(Json(AddWalletResponse {
        accepted: true,
        registration_id,
        wallet_address: request.wallet_address,
        wallet_chain_id: chain.id,
        chain_name: chain.name.to_owned(),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use ds_api_types::{AddWalletResponse, ErrorResponse};
    use tower::ServiceExt;

    async fn post(body: serde_json::Value) -> (StatusCode, Vec<u8>) {
        let response = crate::app()
            .oneshot(
                Request::post("/api/wallet.add")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn accepts_valid_registration() {
        let (status, body) = post(serde_json::json!({
            "walletAddress": "0xabc123",
            "walletChainId": 42161,
            "walletTag": "bridge",
            "walletHighlight": "green",
        }))
        .await;

        assert_eq!(status, StatusCode::OK);
        let response: AddWalletResponse = serde_json::from_slice(&body).unwrap();
        assert!(response.accepted);
        assert_eq!(response.chain_name, "Arbitrum One");
        assert_eq!(response.wallet_address, "0xabc123");
        assert!(!response.registration_id.is_empty());
    }

    #[tokio::test]
    async fn rejects_unknown_chain() {
        let (status, body) = post(serde_json::json!({
            "walletAddress": "0xabc123",
            "walletChainId": 137,
            "walletTag": "poly",
            "walletHighlight": "red",
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "unsupported chain id: 137");
    }

    #[tokio::test]
    async fn rejects_schema_violations() {
        let (status, body) = post(serde_json::json!({
            "walletAddress": "0x",
            "walletChainId": 1,
            "walletTag": "",
            "walletHighlight": "blue",
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.contains("address: Invalid address"));
        assert!(error.error.contains("tag: Please define a tag."));
    }

    #[tokio::test]
    async fn rejects_tag_longer_than_twenty_utf16_units() {
        let (status, body) = post(serde_json::json!({
            "walletAddress": "0xabc123",
            "walletChainId": 1,
            "walletTag": "\u{1F600}".repeat(11),
            "walletHighlight": "red",
        }))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(error.error.starts_with("tag: String must contain at most 20"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = crate::app()
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
