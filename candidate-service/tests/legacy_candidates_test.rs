mod common;

use common::TestApp;
use reqwest::{Client, Method};
use serde_json::{json, Value};

#[tokio::test]
async fn replace_all_then_get_returns_the_posted_documents() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/candidates", app.address))
        .json(&json!([
            { "name": "Ada Lovelace", "stage": "Applied" },
            { "name": "Grace Hopper", "stage": "Offer" },
        ]))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Candidates saved successfully");
    assert_eq!(body["count"], 2);

    let candidates: Vec<Value> = client
        .get(format!("{}/api/candidates", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0]["name"], "Ada Lovelace");
    // Stored identifiers come back as plain hex strings.
    assert!(!candidates[0]["_id"].as_str().unwrap().is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn replacing_with_an_empty_array_empties_the_collection() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    client
        .post(format!("{}/api/candidates", app.address))
        .json(&json!([{ "name": "Ada Lovelace" }]))
        .send()
        .await
        .expect("Failed to execute request");

    let response = client
        .post(format!("{}/api/candidates", app.address))
        .json(&json!([]))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["count"], 0);

    let candidates: Vec<Value> = client
        .get(format!("{}/api/candidates", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert!(candidates.is_empty());

    app.cleanup().await;
}

#[tokio::test]
async fn non_array_body_returns_400() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/candidates", app.address))
        .json(&json!({ "name": "Not An Array" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Expected array of candidates");

    app.cleanup().await;
}

#[tokio::test]
async fn unsupported_method_returns_405() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .request(Method::PUT, format!("{}/api/candidates", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 405);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Method not allowed");

    app.cleanup().await;
}
