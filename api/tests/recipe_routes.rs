mod common;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use base64::{Engine as _, engine::general_purpose};
use common::{
    ApiTestContext, GEMINI_PATH, gemini_reply, png_bytes, received_count, recipes_reply,
};
use serde_json::{Value, json};
use test_context::test_context;
use wiremock::{
    Mock, ResponseTemplate,
    matchers::{body_string_contains, method, path},
};

const FALLBACK_HEADER: &str = "x-provider-fallback";

async fn mount_identification(ctx: &ApiTestContext, reply: &str) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .and(body_string_contains("inline_data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(reply)))
        .mount(&ctx.gemini)
        .await;
}

async fn mount_recipes(ctx: &ApiTestContext, titles: &[&str]) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_reply(&recipes_reply(titles))),
        )
        .mount(&ctx.gemini)
        .await;
}

fn titles(body: &Value) -> Vec<String> {
    body["recipes"]
        .as_array()
        .expect("recipes array")
        .iter()
        .map(|recipe| recipe["title"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_identify_ingredients_json_parses_fenced_reply(ctx: &mut ApiTestContext) {
    mount_identification(
        ctx,
        "```json\n{\"ingredients\": [\"tomato\", \"basil\"], \"confidence\": 0.87}\n```",
    )
    .await;

    let response = ctx
        .server
        .post("/api/identify-ingredients-json")
        .json(&json!({ "image": general_purpose::STANDARD.encode(png_bytes()) }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get(FALLBACK_HEADER).is_none());
    assert_eq!(
        response.json::<Value>(),
        json!({ "ingredients": ["tomato", "basil"], "confidence": 0.87 })
    );
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_identify_ingredients_json_accepts_line_wrapped_base64(ctx: &mut ApiTestContext) {
    mount_identification(ctx, r#"{"ingredients": ["pepper"], "confidence": 0.7}"#).await;

    let encoded = general_purpose::STANDARD.encode(png_bytes());
    let wrapped = encoded
        .as_bytes()
        .chunks(76)
        .map(|line| String::from_utf8_lossy(line).into_owned())
        .collect::<Vec<_>>()
        .join("\n");
    assert!(wrapped.contains('\n'));

    let response = ctx
        .server
        .post("/api/identify-ingredients-json")
        .json(&json!({ "image": wrapped }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json::<Value>(),
        json!({ "ingredients": ["pepper"], "confidence": 0.7 })
    );
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_identify_ingredients_falls_back_when_provider_fails(ctx: &mut ApiTestContext) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend error"))
        .mount(&ctx.gemini)
        .await;

    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(png_bytes())
            .file_name("fridge.png")
            .mime_type("image/png"),
    );
    let response = ctx
        .server
        .post("/api/identify-ingredients")
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(FALLBACK_HEADER)
            .and_then(|value| value.to_str().ok()),
        Some("true")
    );
    assert_eq!(
        response.json::<Value>(),
        json!({ "ingredients": ["mixed vegetables"], "confidence": 0.1 })
    );
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_identify_ingredients_rejects_non_image_upload(ctx: &mut ApiTestContext) {
    let form = MultipartForm::new().add_part(
        "image",
        Part::bytes(b"just some text".to_vec())
            .file_name("notes.txt")
            .mime_type("text/plain"),
    );
    let response = ctx
        .server
        .post("/api/identify-ingredients")
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "File must be an image" })
    );
    assert_eq!(received_count(&ctx.gemini).await, 0);
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_identify_ingredients_rejects_undecodable_image(ctx: &mut ApiTestContext) {
    let response = ctx
        .server
        .post("/api/identify-ingredients-json")
        .json(&json!({ "image": general_purpose::STANDARD.encode(b"not an image") }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(received_count(&ctx.gemini).await, 0);
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_identify_ingredients_json_requires_image(ctx: &mut ApiTestContext) {
    let response = ctx
        .server
        .post("/api/identify-ingredients-json")
        .json(&json!({ "image": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "No image data provided" })
    );
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_generate_recipes_drops_excluded_titles(ctx: &mut ApiTestContext) {
    mount_identification(
        ctx,
        r#"{"ingredients": ["chicken", "rice", "broccoli"], "confidence": 0.9}"#,
    )
    .await;
    mount_recipes(
        ctx,
        &[
            "Chicken Fried Rice",
            "Teriyaki Chicken Bowl",
            "Chicken Broccoli Casserole",
            "Lemon Chicken Rice Soup",
            "Broccoli Rice Salad",
            "Chicken Risotto",
        ],
    )
    .await;

    let form = MultipartForm::new()
        .add_text("exclude_recipe_ids", "chicken-fried-rice, Unknown Dish")
        .add_part(
            "image",
            Part::bytes(png_bytes())
                .file_name("fridge.png")
                .mime_type("image/png"),
        );
    let response = ctx.server.post("/api/generate-recipes").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get(FALLBACK_HEADER).is_none());

    let body: Value = response.json();
    let titles = titles(&body);
    assert_eq!(titles.len(), 5);
    assert!(!titles.contains(&"Chicken Fried Rice".to_string()));
    assert_eq!(
        body["identifiedIngredients"],
        json!(["chicken", "rice", "broccoli"])
    );
    assert_eq!(body["recipes"][0]["id"], "teriyaki-chicken-bowl");
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_generate_recipes_json_falls_back_to_templates(ctx: &mut ApiTestContext) {
    mount_identification(
        ctx,
        r#"{"ingredients": ["salmon", "asparagus"], "confidence": 0.8}"#,
    )
    .await;
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply("no json here")))
        .mount(&ctx.gemini)
        .await;

    let response = ctx
        .server
        .post("/api/generate-recipes-json")
        .json(&json!({
            "image": general_purpose::STANDARD.encode(png_bytes()),
            "exclude_recipe_ids": []
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.headers().get(FALLBACK_HEADER).is_some());

    let body: Value = response.json();
    assert_eq!(
        titles(&body),
        vec![
            "Salmon and Asparagus Stir Fry",
            "Roasted Salmon with Asparagus",
            "Hearty Salmon and Asparagus Soup",
            "Fresh Salmon and Asparagus Salad",
            "Baked Salmon and Asparagus Casserole",
        ]
    );
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_regenerate_recipes_is_deterministic_offline(ctx: &mut ApiTestContext) {
    Mock::given(method("POST"))
        .and(path(GEMINI_PATH))
        .respond_with(ResponseTemplate::new(503))
        .mount(&ctx.gemini)
        .await;

    let request = json!({
        "ingredients": ["tofu", "spinach", "garlic"],
        "exclude_titles": ["Tofu and Spinach Stir Fry"]
    });

    let first = ctx
        .server
        .post("/api/regenerate-recipes")
        .json(&request)
        .await;
    let second = ctx
        .server
        .post("/api/regenerate-recipes")
        .json(&request)
        .await;

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(first.as_bytes(), second.as_bytes());

    let body: Value = first.json();
    assert_eq!(body["recipes"].as_array().map(Vec::len), Some(5));
    assert_eq!(
        body["identifiedIngredients"],
        json!(["tofu", "spinach", "garlic"])
    );
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_regenerate_recipes_sends_exclusions_to_provider(ctx: &mut ApiTestContext) {
    mount_recipes(
        ctx,
        &[
            "Garlic Butter Shrimp",
            "Shrimp Tacos",
            "Shrimp Scampi",
            "Coconut Shrimp Curry",
            "Shrimp Fried Rice",
        ],
    )
    .await;

    let response = ctx
        .server
        .post("/api/regenerate-recipes")
        .json(&json!({
            "ingredients": ["shrimp"],
            "exclude_titles": ["Shrimp Paella"]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(titles(&response.json()).len(), 5);

    let requests = ctx.gemini.received_requests().await.unwrap_or_default();
    assert_eq!(requests.len(), 1);
    let prompt = String::from_utf8_lossy(&requests[0].body);
    assert!(prompt.contains("Shrimp Paella"));
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_regenerate_recipes_requires_ingredients(ctx: &mut ApiTestContext) {
    let response = ctx
        .server
        .post("/api/regenerate-recipes")
        .json(&json!({ "ingredients": [], "exclude_titles": [] }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>(),
        json!({ "detail": "At least one ingredient is required" })
    );
    assert_eq!(received_count(&ctx.gemini).await, 0);
}

#[test_context(ApiTestContext)]
#[tokio::test]
async fn test_regenerate_recipes_rejects_malformed_body(ctx: &mut ApiTestContext) {
    let response = ctx
        .server
        .post("/api/regenerate-recipes")
        .json(&json!({ "ingredients": "tofu" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["detail"].is_string());
}
