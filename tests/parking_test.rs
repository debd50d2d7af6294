mod common;

use common::TestApp;
use mongodb::bson::doc;
use reqwest::Client;
use serde_json::json;

#[tokio::test]
async fn empty_parking_collection_returns_empty_array() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/welcome/parkingspaces", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body, json!([]));

    app.cleanup().await;
}

#[tokio::test]
async fn polygon_holes_are_dropped_from_the_response() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    let outer = vec![
        vec![121.5, 25.0],
        vec![121.6, 25.0],
        vec![121.6, 25.1],
        vec![121.5, 25.0],
    ];
    let hole = vec![
        vec![121.55, 25.02],
        vec![121.56, 25.02],
        vec![121.55, 25.03],
        vec![121.55, 25.02],
    ];

    app.db
        .parking_spaces()
        .insert_one(
            doc! {
                "parking_id": "P-001",
                "road": "Main St",
                "parktype": "roadside",
                "valid": true,
                "location": {
                    "type": "Polygon",
                    "coordinates": [outer.clone(), hole],
                },
            },
            None,
        )
        .await
        .expect("Failed to seed parking space");

    let body: serde_json::Value = client
        .get(format!("{}/welcome/parkingspaces", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(
        body,
        json!([{
            "parkingId": "P-001",
            "road": "Main St",
            "parkType": "roadside",
            "valid": true,
            "coordinates": outer,
        }])
    );

    app.cleanup().await;
}

#[tokio::test]
async fn empty_coordinates_is_a_server_error_not_an_empty_list() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    app.db
        .parking_spaces()
        .insert_one(
            doc! {
                "parking_id": "P-002",
                "road": "Main St",
                "location": { "type": "Polygon", "coordinates": [] },
            },
            None,
        )
        .await
        .expect("Failed to seed parking space");

    let response = client
        .get(format!("{}/welcome/parkingspaces", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["message"], "Invalid polygon geometry");

    app.cleanup().await;
}

#[tokio::test]
async fn extended_fields_config_strips_park_type_and_valid_when_stored() {
    let app = TestApp::spawn_with(|config| config.parking.extended_fields = false).await;
    let client = Client::new();

    app.db
        .parking_spaces()
        .insert_one(
            doc! {
                "parking_id": "P-004",
                "road": "Main St",
                "parktype": "roadside",
                "valid": true,
                "location": {
                    "type": "Polygon",
                    "coordinates": [[[121.5, 25.0], [121.6, 25.0], [121.5, 25.0]]],
                },
            },
            None,
        )
        .await
        .expect("Failed to seed parking space");

    let body: serde_json::Value = client
        .get(format!("{}/welcome/parkingspaces", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    assert_eq!(
        body,
        json!([{
            "parkingId": "P-004",
            "road": "Main St",
            "coordinates": [[121.5, 25.0], [121.6, 25.0], [121.5, 25.0]],
        }]),
        "stored parktype/valid must be suppressed when extended fields are off"
    );

    app.cleanup().await;
}

#[tokio::test]
async fn pre_extension_document_omits_park_type_and_valid() {
    let app = TestApp::spawn().await;
    let client = Client::new();

    app.db
        .parking_spaces()
        .insert_one(
            doc! {
                "parking_id": "P-003",
                "road": "Old Rd",
                "location": {
                    "type": "Polygon",
                    "coordinates": [[[121.5, 25.0], [121.6, 25.0], [121.5, 25.0]]],
                },
            },
            None,
        )
        .await
        .expect("Failed to seed parking space");

    let body: serde_json::Value = client
        .get(format!("{}/welcome/parkingspaces", app.address))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse JSON");

    let space = &body[0];
    assert_eq!(space["parkingId"], "P-003");
    assert!(space.get("parkType").is_none());
    assert!(space.get("valid").is_none());

    app.cleanup().await;
}
