// tests/api.rs
//
// Endpoint tests over the assembled warp filter, backed by a
// throwaway catalog file per test.
use bank_certificates_backend::models::{
    Bank, BankData, Certificate, GraduatedRates, PayoutCadence, ReturnType,
};
use bank_certificates_backend::routes::routes;
use bank_certificates_backend::services::auth::AdminAuth;
use bank_certificates_backend::services::store::BankStore;
use serde_json::{json, Value};
use std::convert::Infallible;
use std::sync::Arc;
use tempfile::TempDir;
use warp::{Filter, Reply};

const PASSWORD: &str = "admin@1234";

fn catalog() -> BankData {
    BankData {
        banks: vec![Bank {
            id: "banque-misr".to_string(),
            name: "بنك مصر".to_string(),
            logo: "misr.png".to_string(),
            certificates: vec![
                Certificate {
                    id: "bm-3-year".to_string(),
                    name: "شهادة 3 سنوات".to_string(),
                    duration: 36,
                    interest_rate: 16.5,
                    return_type: ReturnType::Fixed,
                    graduated_rates: None,
                    payout: PayoutCadence::Monthly,
                    min_amount: 1500.0,
                    description: String::new(),
                    features: vec![],
                },
                Certificate {
                    id: "nbe-platinum".to_string(),
                    name: "الشهادة البلاتينية".to_string(),
                    duration: 36,
                    interest_rate: 15.0,
                    return_type: ReturnType::Graduated,
                    graduated_rates: Some(GraduatedRates {
                        year1: 15.0,
                        year2: 16.0,
                        year3: 17.0,
                    }),
                    payout: PayoutCadence::Annual,
                    min_amount: 1000.0,
                    description: String::new(),
                    features: vec![],
                },
            ],
        }],
    }
}

async fn test_api(
    dir: &TempDir,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let path = dir.path().join("catalog.json");
    tokio::fs::write(&path, serde_json::to_string_pretty(&catalog()).unwrap())
        .await
        .unwrap();

    let store = Arc::new(BankStore::load(&path).await.unwrap());
    let auth = Arc::new(AdminAuth::new(PASSWORD, "api-test-secret"));
    routes(store, auth)
}

fn body_json(body: &[u8]) -> Value {
    serde_json::from_slice(body).unwrap()
}

#[tokio::test]
async fn bank_data_returns_the_catalog() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("GET")
        .path("/api/v1/bank-data")
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 200);
    let data: BankData = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(data, catalog());
}

#[tokio::test]
async fn calculate_fixed_certificate() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/calculate")
        .json(&json!({ "certificateId": "bm-3-year", "amount": 1500 }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 200);
    let result = body_json(resp.body());
    assert_eq!(result["totalProfit"], 742.5);
    assert_eq!(result["periodicProfit"], 20.625);
    assert_eq!(result["totalAmount"], 2242.5);
    assert!(result.get("yearlyBreakdown").is_none());
}

#[tokio::test]
async fn calculate_graduated_certificate_includes_breakdown() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/calculate")
        .json(&json!({ "certificateId": "nbe-platinum", "amount": 1000 }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 200);
    let result = body_json(resp.body());
    assert_eq!(result["totalProfit"], 480.0);
    assert_eq!(result["totalAmount"], 1480.0);
    assert_eq!(result["yearlyBreakdown"]["year1"]["yearlyProfit"], 150.0);
    assert_eq!(result["yearlyBreakdown"]["year3"]["yearlyProfit"], 170.0);
}

#[tokio::test]
async fn calculate_rejects_non_positive_amount() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/calculate")
        .json(&json!({ "certificateId": "bm-3-year", "amount": 0 }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 400);
    assert!(body_json(resp.body())["error"].is_string());
}

#[tokio::test]
async fn calculate_unknown_certificate_is_404() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/calculate")
        .json(&json!({ "certificateId": "no-such-cert", "amount": 1000 }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn login_with_wrong_password_is_401() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/login")
        .json(&json!({ "password": "letmein" }))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn admin_routes_require_a_valid_token() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/save-data")
        .json(&json!({ "banks": [] }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 401);

    let resp = warp::test::request()
        .method("GET")
        .path("/api/v1/admin/export")
        .header("authorization", "Bearer not-a-real-token")
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 401);
}

#[tokio::test]
async fn save_data_replaces_the_catalog_and_persists() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/login")
        .json(&json!({ "password": PASSWORD }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 200);
    let token = body_json(resp.body())["token"].as_str().unwrap().to_string();

    let new_doc = json!({
        "banks": [{
            "id": "cib",
            "name": "CIB",
            "logo": "cib.png",
            "certificates": []
        }]
    });
    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/save-data")
        .header("authorization", format!("Bearer {}", token))
        .json(&new_doc)
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 200);

    let resp = warp::test::request()
        .method("GET")
        .path("/api/v1/bank-data")
        .reply(&api)
        .await;
    let data: BankData = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(data.banks.len(), 1);
    assert_eq!(data.banks[0].id, "cib");

    // The replacement is on disk, not just in memory
    let on_disk = std::fs::read_to_string(dir.path().join("catalog.json")).unwrap();
    let on_disk: BankData = serde_json::from_str(&on_disk).unwrap();
    assert_eq!(on_disk.banks[0].id, "cib");
}

#[tokio::test]
async fn certificate_crud_round_trip() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/login")
        .json(&json!({ "password": PASSWORD }))
        .reply(&api)
        .await;
    let token = body_json(resp.body())["token"].as_str().unwrap().to_string();
    let bearer = format!("Bearer {}", token);

    let new_cert = json!({
        "id": "",
        "name": "شهادة جديدة",
        "duration": 12,
        "interestRate": 20.0,
        "returnType": "fixed",
        "type": "monthly",
        "minAmount": 500.0,
        "description": "",
        "features": []
    });
    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/banks/banque-misr/certificates")
        .header("authorization", bearer.as_str())
        .json(&new_cert)
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 201);
    let cert_id = body_json(resp.body())["id"].as_str().unwrap().to_string();
    assert!(cert_id.starts_with("cert-"));

    // The new certificate is immediately calculable
    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/calculate")
        .json(&json!({ "certificateId": cert_id, "amount": 1000 }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(resp.body())["totalProfit"], 200.0);

    let resp = warp::test::request()
        .method("DELETE")
        .path(&format!(
            "/api/v1/admin/banks/banque-misr/certificates/{}",
            cert_id
        ))
        .header("authorization", bearer.as_str())
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 200);

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/calculate")
        .json(&json!({ "certificateId": cert_id, "amount": 1000 }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn bank_crud_round_trip() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/login")
        .json(&json!({ "password": PASSWORD }))
        .reply(&api)
        .await;
    let token = body_json(resp.body())["token"].as_str().unwrap().to_string();
    let bearer = format!("Bearer {}", token);

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/banks")
        .header("authorization", bearer.as_str())
        .json(&json!({ "id": "", "name": "CIB", "logo": "cib.png", "certificates": [] }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 201);
    let bank_id = body_json(resp.body())["id"].as_str().unwrap().to_string();

    let resp = warp::test::request()
        .method("PUT")
        .path(&format!("/api/v1/admin/banks/{}", bank_id))
        .header("authorization", bearer.as_str())
        .json(&json!({ "id": "ignored", "name": "CIB Egypt", "logo": "cib.png", "certificates": [] }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 200);
    let updated = body_json(resp.body());
    assert_eq!(updated["id"], bank_id.as_str());
    assert_eq!(updated["name"], "CIB Egypt");

    let resp = warp::test::request()
        .method("DELETE")
        .path(&format!("/api/v1/admin/banks/{}", bank_id))
        .header("authorization", bearer.as_str())
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 200);

    let resp = warp::test::request()
        .method("PUT")
        .path(&format!("/api/v1/admin/banks/{}", bank_id))
        .header("authorization", bearer.as_str())
        .json(&json!({ "id": "", "name": "x", "logo": "", "certificates": [] }))
        .reply(&api)
        .await;
    assert_eq!(resp.status(), 404);
}

#[tokio::test]
async fn export_returns_the_catalog_behind_the_gate() {
    let dir = TempDir::new().unwrap();
    let api = test_api(&dir).await;

    let resp = warp::test::request()
        .method("POST")
        .path("/api/v1/admin/login")
        .json(&json!({ "password": PASSWORD }))
        .reply(&api)
        .await;
    let token = body_json(resp.body())["token"].as_str().unwrap().to_string();

    let resp = warp::test::request()
        .method("GET")
        .path("/api/v1/admin/export")
        .header("authorization", format!("Bearer {}", token))
        .reply(&api)
        .await;

    assert_eq!(resp.status(), 200);
    let data: BankData = serde_json::from_slice(resp.body()).unwrap();
    assert_eq!(data, catalog());
}
