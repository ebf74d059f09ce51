use crate::adapters::HttpBackend;
use crate::domain::model::{Language, VisualizationType};
use crate::domain::ports::Backend;
use std::time::Duration;

use super::*;

/// Spins up a local server and returns its base URL.
async fn local_server() -> String {
    local_server_in(Language::En).await
}

async fn local_server_in(language: Language) -> String {
    let _ = tracing_subscriber::fmt::try_init();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, EkmanService::new(language)).await.unwrap();
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn calculate_returns_graph_and_results() {
    let base = local_server().await;

    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("{base}/calculate_ekman"))
        .json(&json!({
            "wind_speed": 15.0,
            "wind_direction": 45.0,
            "latitude": 30.0,
            "depth": 200.0,
            "visualization_type": "3d"
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert!(body["graph"].is_string());
    let graph: serde_json::Value = serde_json::from_str(body["graph"].as_str().unwrap()).unwrap();
    assert_eq!(graph["data"][0]["type"], "scatter3d");

    let results = &body["results"];
    assert_eq!(results["depth"], 200.0);
    assert!(results["Mx"].is_number());
    assert!(results["My"].is_number());
    assert!(results["f"].is_number());
    assert_eq!(results["z_levels"].as_array().unwrap().len(), 50);
}

#[tokio::test]
async fn missing_fields_take_defaults() {
    let base = local_server().await;

    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("{base}/calculate_ekman"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["results"]["wind_speed"], 10.0);
    assert_eq!(body["results"]["latitude"], 30.0);
    assert_eq!(body["results"]["depth"], 100.0);
}

#[tokio::test]
async fn out_of_range_values_are_bad_requests() {
    let base = local_server().await;

    let response = reqwest::Client::new()
        .post(format!("{base}/calculate_ekman"))
        .json(&json!({ "latitude": 120.0 }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json().await.unwrap();
    assert!(body["error"].as_str().unwrap().contains("latitude"));
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let base = local_server().await;

    let response = reqwest::Client::new()
        .post(format!("{base}/calculate_ekman"))
        .header("Content-Type", "application/json")
        .body("{\"wind_speed\": ")
        .send()
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn get_parameters_reports_slider_ranges() {
    let base = local_server().await;
    let backend = HttpBackend::new(&base, Duration::from_secs(5)).unwrap();

    let ranges = backend.parameter_ranges().await.unwrap();
    assert_eq!(ranges.wind_speed_range, [0.0, 30.0]);
    assert_eq!(ranges.wind_direction_range, [0.0, 360.0]);
    assert_eq!(ranges.latitude_range, [-90.0, 90.0]);
    assert_eq!(ranges.depth_range, [10.0, 1000.0]);
    assert_eq!(ranges.default_values.wind_speed, 10.0);
}

#[tokio::test]
async fn http_backend_round_trips_through_server() {
    let base = local_server().await;
    let backend = HttpBackend::new(&base, Duration::from_secs(5)).unwrap();

    let request = CalculationRequest {
        visualization_type: VisualizationType::TwoD,
        ..CalculationRequest::default()
    };
    let response = backend.calculate(&request).await.unwrap();

    let local = EkmanService::new(Language::En).respond(&request).unwrap();
    let close = |a: f64, b: f64| (a - b).abs() <= 1e-12 * a.abs().max(b.abs()).max(1e-30);
    assert!(close(response.results.mx, local.results.mx));
    assert!(close(response.results.my, local.results.my));
    assert!(close(response.results.f, local.results.f));
    assert!(close(response.results.ekman_depth, local.results.ekman_depth));
    assert_eq!(response.results.z_levels.len(), local.results.z_levels.len());
}

#[tokio::test]
async fn index_serves_the_form() {
    let base = local_server().await;

    let page = reqwest::get(format!("{base}/")).await.unwrap().text().await.unwrap();
    assert!(page.contains("ekmanForm"));
    assert!(page.contains("/calculate_ekman"));
}

#[tokio::test]
async fn index_text_matches_server_language() {
    let base = local_server_in(Language::Ko).await;

    let page = reqwest::get(format!("{base}/")).await.unwrap().text().await.unwrap();
    assert!(page.contains(r#"<html lang="ko">"#));
    assert!(page.contains("3D 에크만 수송 시각화"));
    assert!(!page.contains("Wind speed (m/s)"));

    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("{base}/calculate_ekman"))
        .json(&json!({ "visualization_type": "3d" }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let graph: serde_json::Value = serde_json::from_str(body["graph"].as_str().unwrap()).unwrap();
    assert_eq!(graph["layout"]["title"]["text"], "에크만 수송 3D 시각화");
}
