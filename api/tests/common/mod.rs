#![allow(dead_code)]

use std::{io::Cursor, sync::Arc};

use axum_test::TestServer;
use clap::Parser;
use larder_api::{
    application::http::server::http_server::{router, state},
    args::Args,
};
use serde_json::{Value, json};
use test_context::AsyncTestContext;
use wiremock::MockServer;

pub const GEMINI_PATH: &str = "/models/gemini-test:generateContent";
pub const ELEVENLABS_PATH: &str = "/text-to-speech/voice-test";
pub const RECOGNIZE_PATH: &str = "/speech:recognize";

/// Router wired to wiremock doubles of every provider.
pub struct ApiTestContext {
    pub server: TestServer,
    pub gemini: MockServer,
    pub elevenlabs: MockServer,
    pub speech: MockServer,
}

impl AsyncTestContext for ApiTestContext {
    async fn setup() -> Self {
        let gemini = MockServer::start().await;
        let elevenlabs = MockServer::start().await;
        let speech = MockServer::start().await;

        let server = build_server(
            &gemini,
            &elevenlabs,
            &speech,
            &["--elevenlabs-api-key", "eleven-key"],
        );

        Self {
            server,
            gemini,
            elevenlabs,
            speech,
        }
    }
}

pub fn build_server(
    gemini: &MockServer,
    elevenlabs: &MockServer,
    speech: &MockServer,
    extra_args: &[&str],
) -> TestServer {
    let gemini_uri = gemini.uri();
    let elevenlabs_uri = elevenlabs.uri();
    let speech_uri = speech.uri();

    let mut argv = vec![
        "larder-api",
        "--google-api-key",
        "test-key",
        "--llm-model",
        "gemini-test",
        "--gemini-base-url",
        gemini_uri.as_str(),
        "--elevenlabs-voice-id",
        "voice-test",
        "--elevenlabs-base-url",
        elevenlabs_uri.as_str(),
        "--google-speech-base-url",
        speech_uri.as_str(),
        "--debug",
        "false",
    ];
    argv.extend_from_slice(extra_args);

    let args = Arc::new(Args::parse_from(argv));
    let state = state(args).expect("state should build");
    let app = router(state).expect("router should build");

    TestServer::new(app).expect("test server should start")
}

pub async fn received_count(server: &MockServer) -> usize {
    server
        .received_requests()
        .await
        .map(|requests| requests.len())
        .unwrap_or_default()
}

pub fn gemini_reply(text: &str) -> Value {
    json!({
        "candidates": [
            { "content": { "parts": [{ "text": text }] } }
        ]
    })
}

pub fn recipe_json(title: &str, difficulty: &str) -> Value {
    json!({
        "id": "",
        "title": title,
        "summary": format!("{} for a weeknight", title),
        "ingredients": ["2 chicken breasts", "1 cup rice"],
        "instructions": ["Prep the ingredients", "Cook until done"],
        "cookingTime": 30,
        "servings": 2,
        "difficulty": difficulty,
        "tags": ["dinner"]
    })
}

pub fn recipes_reply(titles: &[&str]) -> String {
    let difficulties = ["Easy", "Easy", "Medium", "Medium", "Hard"];
    let recipes: Vec<Value> = titles
        .iter()
        .enumerate()
        .map(|(index, title)| recipe_json(title, difficulties[index % difficulties.len()]))
        .collect();

    Value::Array(recipes).to_string()
}

pub fn png_bytes() -> Vec<u8> {
    let image = image::RgbaImage::from_pixel(8, 8, image::Rgba([220, 40, 40, 255]));
    let mut out = Cursor::new(Vec::new());
    image
        .write_to(&mut out, image::ImageFormat::Png)
        .expect("png should encode");
    out.into_inner()
}
