use crate::e2e::helpers;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use helpers::mock_google::verify_bearer;
use helpers::mock_tts::mock_audio_bytes;
use helpers::{GoogleStackContext, TEST_CLIENT_EMAIL};
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use ssml_tts_backend::infrastructure::google::CLOUD_PLATFORM_SCOPE;
use test_context::test_context;

#[test_context(GoogleStackContext)]
#[tokio::test]
async fn it_should_call_google_with_service_account_token(ctx: &GoogleStackContext) {
    let response = ctx
        .client
        .post(
            "/tts",
            &json!({
                "ssml": "<speak>Hello</speak>",
                "voice": "Joey",
                "speakingRate": 0.9
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let audio_content = response.body.as_ref().unwrap()["audioContent"]
        .as_str()
        .unwrap()
        .to_string();
    assert_eq!(STANDARD.decode(audio_content).unwrap(), mock_audio_bytes());

    let authorization = ctx.google.state.authorization_headers.lock().clone();
    assert_eq!(authorization.len(), 1);
    let claims = verify_bearer(&authorization[0]).expect("Bearer token not signed by the service account");
    assert_eq!(claims.iss, TEST_CLIENT_EMAIL);
    assert_eq!(claims.scope.as_deref(), Some(CLOUD_PLATFORM_SCOPE));

    let requests = ctx.google.state.synthesize_requests.lock().clone();
    assert_eq!(
        requests[0],
        json!({
            "input": { "ssml": "<speak>Hello</speak>" },
            "voice": { "languageCode": "en-US", "name": "en-US-Neural2-D" },
            "audioConfig": { "audioEncoding": "MP3", "speakingRate": 0.9 }
        })
    );
}

#[test_context(GoogleStackContext)]
#[tokio::test]
async fn it_should_share_one_token_across_concurrent_chunks_and_requests(ctx: &GoogleStackContext) {
    let long_ssml = format!("<speak>{}</speak>", "Bonjour tout le monde. ".repeat(600));

    ctx.client
        .post("/tts", &json!({ "ssml": long_ssml, "voice": "Celine" }))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    ctx.client
        .post("/tts", &json!({ "ssml": "<speak>Encore</speak>", "voice": "Celine" }))
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let synthesize_requests = ctx.google.state.synthesize_requests.lock().clone();
    assert!(synthesize_requests.len() >= 4);
    assert!(synthesize_requests
        .iter()
        .all(|r| r["voice"]["languageCode"] == "fr-FR"));

    let authorization = ctx.google.state.authorization_headers.lock().clone();
    assert!(authorization.iter().all(|header| header == &authorization[0]));
}

#[test_context(GoogleStackContext)]
#[tokio::test]
async fn it_should_report_ready_when_credentials_are_loaded(ctx: &GoogleStackContext) {
    let response = ctx.client.get("/health/ready").await.unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body.as_ref().unwrap(),
        &json!({ "status": "ready", "tts": "configured" })
    );
}
