mod common;

use axum::http::StatusCode;
use common::{ApiContext, GEMINI_PATH, gemini_body};
use httpmock::Method::POST;
use serde_json::{Value, json};
use test_context::test_context;

#[test_context(ApiContext)]
#[tokio::test]
async fn test_health(ctx: &mut ApiContext) {
    let response = ctx.server.get("/health").await;
    response.assert_status_ok();

    let response = ctx.server.get("/health/ready").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["backend"], "memory");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_breeds(ctx: &mut ApiContext) {
    let response = ctx.server.get("/breeds").await;
    response.assert_status_ok();
    let breeds = response.json::<Value>()["data"].as_array().cloned().unwrap();
    assert!(breeds.iter().any(|b| b["id"] == "labrador"));

    let response = ctx.server.get("/breeds/chihuahua").await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["average_weight_kg"], 2.0);

    let response = ctx.server.get("/breeds/dragon").await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_calculate_ration(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/rations")
        .json(&json!({ "breed": "labrador", "age_in_months": 4 }))
        .await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["data"]["daily_grams"], 750.0);
    assert_eq!(body["data"]["weight_source"], "breed_average");

    let response = ctx
        .server
        .post("/rations")
        .json(&json!({ "breed": "poodle", "age_in_months": 12 }))
        .await;
    assert_eq!(response.json::<Value>()["data"]["daily_grams"], 220.0);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_calculate_ration_errors(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/rations")
        .json(&json!({ "breed": "dragon", "age_in_months": 6 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert_eq!(body["code"], "E_BAD_REQUEST");
    assert!(body["message"].as_str().unwrap().contains("dragon"));

    let response = ctx
        .server
        .post("/rations")
        .json(&json!({ "breed": "golden", "age_in_months": 0 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let response = ctx
        .server
        .post("/rations")
        .json(&json!({ "breed": "golden", "age_in_months": 241 }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_build_feeding_plan(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/feeding-plans")
        .json(&json!({ "age_in_months": 1, "daily_grams": 40 }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>()["data"].clone();
    let portions: Vec<f64> = body["meals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["portion_grams"].as_f64().unwrap())
        .collect();
    assert_eq!(portions, vec![14.0, 13.0, 13.0]);
    assert!(!body["recommendations"].as_array().unwrap().is_empty());
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_generate_feeding_plan_rebalances(ctx: &mut ApiContext) {
    let plan = json!({
        "plan": {
            "meals": [
                { "meal_name": "Breakfast", "time": "07:30", "portion_grams": 200 },
                { "meal_name": "Dinner", "time": "18:30", "portion_grams": 200 }
            ],
            "recommendations": ["Weigh Rex once a month."]
        }
    });
    ctx.upstream
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(200).json_body(gemini_body(&plan.to_string()));
        })
        .await;

    let response = ctx
        .server
        .post("/feeding-plans/generate")
        .json(&json!({
            "dog_name": "Rex",
            "breed": "labrador",
            "age_in_months": 14,
            "weight_kg": 30,
            "daily_grams": 450
        }))
        .await;
    response.assert_status_ok();

    let body = response.json::<Value>()["data"].clone();
    assert_eq!(body["source"], "ai_rebalanced");
    assert_eq!(body["plan"]["meals"][0]["time"], "07:30");
    let total: f64 = body["plan"]["meals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["portion_grams"].as_f64().unwrap())
        .sum();
    assert_eq!(total, 450.0);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_chat_unavailable_is_503(ctx: &mut ApiContext) {
    ctx.upstream
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(500).body("boom");
        })
        .await;

    let response = ctx
        .server
        .post("/chat")
        .json(&json!({ "question": "How often should my dog eat?", "history": [] }))
        .await;
    response.assert_status(StatusCode::SERVICE_UNAVAILABLE);

    let body = response.json::<Value>();
    assert!(!body["message"].as_str().unwrap().contains("boom"));
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_chat(ctx: &mut ApiContext) {
    ctx.upstream
        .mock_async(|when, then| {
            when.method(POST).path(GEMINI_PATH);
            then.status(200)
                .json_body(gemini_body(r#"{"answer": "Twice a day for adults."}"#));
        })
        .await;

    let response = ctx
        .server
        .post("/chat")
        .json(&json!({
            "question": "How often should my dog eat?",
            "history": [{ "user": "Hi", "bot": "Hello!" }]
        }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["answer"], "Twice a day for adults.");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn test_quick_answer(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/chat/quick")
        .json(&json!({ "question": "Is chocolate toxic?" }))
        .await;
    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["data"]["topic"], "faq");

    let response = ctx
        .server
        .post("/chat/quick")
        .json(&json!({ "question": "" }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}
