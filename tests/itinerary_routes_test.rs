mod common;

use actix_web::{http::header, test};
use serde_json::json;
use std::sync::Arc;

use common::{MalformedReplyStrategy, TestApp, UnavailableStrategy};

fn day_names(body: &serde_json::Value) -> Vec<(u64, Vec<String>)> {
    body["itinerary"]
        .as_array()
        .unwrap()
        .iter()
        .map(|day| {
            let names = day["stops"]
                .as_array()
                .unwrap()
                .iter()
                .map(|stop| stop["name"].as_str().unwrap().to_string())
                .collect();
            (day["day"].as_u64().unwrap(), names)
        })
        .collect()
}

#[actix_rt::test]
async fn test_generate_single_day_defaults() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({ "days": 1 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["days"], 1);
    assert!(body["generated_at"].is_string());
    assert_eq!(
        day_names(&body),
        vec![(1, vec!["Petra".to_string(), "Wadi Rum".to_string()])]
    );

    let stop = &body["itinerary"][0]["stops"][0];
    assert!(stop["description"].as_str().unwrap().contains("Nabatean"));
    assert!(stop["tips"].as_str().unwrap().starts_with("Arrive early"));
}

#[actix_rt::test]
async fn test_generate_with_interests_and_hidden_spots() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({
            "days": 3,
            "interests": ["history"],
            "budget": "moderate",
            "include_famous_places": false,
            "include_hidden_spots": true,
            "include_cultural_experiences": true
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["days"], 3);
    assert_eq!(
        day_names(&body),
        vec![
            (1, vec!["Ajloun".to_string()]),
            (2, vec!["Mount Nebo".to_string()]),
            (3, vec!["Karak Castle".to_string()]),
        ]
    );
}

#[actix_rt::test]
async fn test_generate_omits_empty_days() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({
            "days": 5,
            "interests": ["adventure"],
            "include_hidden_spots": true
        }))
        .to_request();

    let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["days"], 5);
    assert_eq!(
        day_names(&body),
        vec![
            (1, vec!["Wadi Rum".to_string()]),
            (2, vec!["Dana Biosphere Reserve".to_string()]),
        ]
    );
}

#[actix_rt::test]
async fn test_generate_rejects_day_count() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    for days in [0, 15, -3] {
        let req = test::TestRequest::post()
            .uri("/generate")
            .set_json(&json!({ "days": days }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["detail"], "Days must be between 1 and 14");
    }
}

#[actix_rt::test]
async fn test_generate_no_matching_spots() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({
            "days": 3,
            "interests": ["history"],
            "include_famous_places": false,
            "include_hidden_spots": false
        }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .starts_with("No spots match your preferences"));
}

#[actix_rt::test]
async fn test_generate_malformed_body() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .insert_header((header::CONTENT_TYPE, "application/json"))
        .set_payload(r#"{"interests": ["history"]}"#)
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"].is_string());
}

#[actix_rt::test]
async fn test_generate_upstream_failure() {
    let test_app = TestApp::with_strategy(Arc::new(UnavailableStrategy));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({ "days": 2, "interests": ["nature"] }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

#[actix_rt::test]
async fn test_generate_malformed_upstream_reply() {
    let test_app = TestApp::with_strategy(Arc::new(MalformedReplyStrategy));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({ "days": 2 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 502);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["detail"]
        .as_str()
        .unwrap()
        .contains("no usable days"));
}

#[actix_rt::test]
async fn test_generate_validates_before_strategy_runs() {
    let test_app = TestApp::with_strategy(Arc::new(UnavailableStrategy));
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate")
        .set_json(&json!({ "days": 20 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
}
