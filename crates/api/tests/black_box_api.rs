use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use upkeep_api::app::services::{AppServices, InMemoryUsageMeter};
use upkeep_core::TenantId;

struct TestServer {
    base_url: String,
    meter: Arc<InMemoryUsageMeter>,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the same router as prod, but bind to an ephemeral port and
        // keep a handle on the meter for assertions.
        let meter = Arc::new(InMemoryUsageMeter::new());
        let services = Arc::new(AppServices::build().with_meter(meter.clone()));
        let app = upkeep_api::app::build_app_with_services(services);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            meter,
            handle,
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

fn hvac_request_body() -> serde_json::Value {
    json!({
        "equipment": {
            "id": "HVAC-EAST-01",
            "type": "HVAC System - Rooftop Unit",
            "model": "ACME 9000",
            "installation_date": "2012-03-15T00:00:00Z",
            "location": "Roof, Building A"
        },
        "sensor_data": {
            "temperature": [180.0, 210.0, 195.0],
            "vibration": [1.0, 1.5],
            "runtime_hours": 41000.0
        },
        "maintenance_history": [
            {
                "performed_at": "2025-01-10T09:00:00Z",
                "kind": "preventive",
                "parts_replaced": ["Air Filter"],
                "cost": 250.0,
                "duration_hours": 2.0
            }
        ],
        "prediction_horizon": "90d"
    })
}

#[tokio::test]
async fn health_endpoint_needs_no_tenant() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn missing_tenant_header_is_unauthorized() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!(
            "{}/ai/maintenance/recommendations",
            server.base_url
        ))
        .json(&hvac_request_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn full_report_round_trip_with_metering() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();
    let tenant_id = TenantId::new();

    let res = client
        .post(format!(
            "{}/ai/maintenance/recommendations",
            server.base_url
        ))
        .header("x-tenant-id", tenant_id.to_string())
        .json(&hvac_request_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    for section in [
        "equipment_health",
        "maintenance_recommendations",
        "optimal_scheduling",
        "cost_benefit_analysis",
        "inventory_recommendations",
        "customer_impact_analysis",
        "machine_learning_insights",
    ] {
        assert!(body.get(section).is_some(), "missing section {section}");
    }

    // Hot readings on an aged HVAC unit: overheating risk plus HVAC cleaning.
    let risks = body["equipment_health"]["risk_factors"].as_array().unwrap();
    assert!(risks.iter().any(|r| r["name"] == "Overheating"));

    let recommendations = body["maintenance_recommendations"].as_array().unwrap();
    assert!(!recommendations.is_empty());
    assert_eq!(
        body["optimal_scheduling"]["primary"].as_array().unwrap().len(),
        recommendations.len()
    );

    // One prediction event metered for the right tenant.
    let events = server.meter.all();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].0, tenant_id);
    assert_eq!(events[0].1, "maintenance.prediction");
}

#[tokio::test]
async fn missing_equipment_id_gets_field_level_detail() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut body = hvac_request_body();
    body["equipment"]
        .as_object_mut()
        .unwrap()
        .remove("id");

    let res = client
        .post(format!(
            "{}/ai/maintenance/recommendations",
            server.base_url
        ))
        .header("x-tenant-id", TenantId::new().to_string())
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
    assert_eq!(body["field"], "equipment.id");
}

#[tokio::test]
async fn unknown_horizon_is_rejected() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut body = hvac_request_body();
    body["prediction_horizon"] = json!("2w");

    let res = client
        .post(format!(
            "{}/ai/maintenance/recommendations",
            server.base_url
        ))
        .header("x-tenant-id", TenantId::new().to_string())
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["field"], "prediction_horizon");
}

#[tokio::test]
async fn no_sensor_data_degrades_confidence_instead_of_failing() {
    let server = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let mut body = hvac_request_body();
    body.as_object_mut().unwrap().remove("sensor_data");
    body.as_object_mut().unwrap().remove("maintenance_history");

    let res = client
        .post(format!(
            "{}/ai/maintenance/recommendations",
            server.base_url
        ))
        .header("x-tenant-id", TenantId::new().to_string())
        .json(&body)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    let insights = &body["machine_learning_insights"];
    assert_eq!(insights["data_quality_score"], 30.0);
    assert_eq!(insights["model_confidence"], 0.6);
    assert_eq!(insights["reliability"], "low");
}
