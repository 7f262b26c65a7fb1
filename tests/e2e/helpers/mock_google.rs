use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    routing::post,
    Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;

use super::mock_tts::mock_audio_bytes;

const TEST_PUBLIC_KEY: &str = include_str!("../../fixtures/service_account_key.pub.pem");

/// Claims of a bearer token signed with the test service account key
#[derive(Debug, Clone, Deserialize)]
pub struct BearerClaims {
    pub iss: String,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Recorded traffic of the local Google stand-in
#[derive(Default)]
pub struct MockGoogleState {
    pub synthesize_requests: Mutex<Vec<Value>>,
    pub authorization_headers: Mutex<Vec<String>>,
}

pub struct MockGoogleServer {
    pub base_url: String,
    pub state: Arc<MockGoogleState>,
}

impl MockGoogleServer {
    pub async fn start() -> Self {
        let state = Arc::new(MockGoogleState::default());
        let app = Router::new()
            // `text:synthesize` would parse as a path parameter
            .route("/v1/*method", post(synthesize))
            .with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock Google listener");
        let addr = listener.local_addr().expect("Failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            state,
        }
    }
}

/// Verify a `Bearer <jwt>` header against the test service account's public key
pub fn verify_bearer(authorization: &str) -> Option<BearerClaims> {
    let token = authorization.strip_prefix("Bearer ")?;

    let mut validation = Validation::new(Algorithm::RS256);
    validation.validate_aud = false;

    let key = DecodingKey::from_rsa_pem(TEST_PUBLIC_KEY.as_bytes()).ok()?;
    decode::<BearerClaims>(token, &key, &validation)
        .ok()
        .map(|data| data.claims)
}

async fn synthesize(
    State(state): State<Arc<MockGoogleState>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    state.authorization_headers.lock().push(authorization.clone());
    state.synthesize_requests.lock().push(body);

    if verify_bearer(&authorization).is_none() {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": {
                    "code": 401,
                    "message": "Request had invalid authentication credentials.",
                    "status": "UNAUTHENTICATED"
                }
            })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({ "audioContent": STANDARD.encode(mock_audio_bytes()) })),
    )
}
