use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

use enerlab_emissions::app;

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn index_renders_the_consumption_form() {
    let response = app()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains("name=\"coal\""));
    assert!(body.contains("name=\"oil-fuel\""));
    assert!(body.contains("name=\"natural-gas\""));
}

#[tokio::test]
async fn submission_renders_the_fixed_rates_and_gross_figures() {
    let request = Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from("coal=1000&oil-fuel=1000&natural-gas=500"))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    // Coal rate is the fixed plant constant; gross for 1000 t rounds to 3.
    assert!(body.contains("<td>150</td>"));
    assert!(body.contains("<td>3</td>"));
    // Oil rate at two decimals, gross from the display value of the rate.
    assert!(body.contains("<td>0.57</td>"));
    assert!(body.contains("<td>0.02</td>"));
    // Gas stays at zero regardless of volume.
    assert!(body.contains("<td>0</td>"));
    // Inputs are echoed back.
    assert!(body.contains("value=\"1000\""));
}

#[tokio::test]
async fn api_reports_gas_gross_of_zero_for_any_volume() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/emissions")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({ "coal": 0.0, "oil_fuel": 0.0, "natural_gas": 123456.0 }).to_string(),
        ))
        .unwrap();

    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["gas_rate"], 0);
    assert_eq!(body["gas_gross"], 0);
    assert_eq!(body["coal_rate"], 150);
}
