use chrono::Utc;
use planbook_api::app::{
    build_app,
    node_info::{NodeInfo, NodeInfoMapper},
    services::AppServices,
};
use planbook_catalog::VersionedCatalog;
use planbook_translation::{Bundle, Translator};
use reqwest::StatusCode;

const CATALOG: &str = r#"{
    "name": "Telephony",
    "versions": [
        {
            "effectiveDate": "2024-01-01T00:00:00Z",
            "currencies": ["USD"],
            "products": [
                {"name": "Phone", "category": "BASE", "available": ["Voicemail"]},
                {"name": "Voicemail", "category": "ADD_ON"}
            ],
            "plans": [
                {"name": "phone-monthly", "product": "Phone", "phases": [
                    {"phaseType": "EVERGREEN", "duration": {"unit": "UNLIMITED", "number": -1},
                     "recurring": {"billingPeriod": "MONTHLY",
                                   "recurringPrice": [{"currency": "USD", "value": 9.99}]}}
                ]},
                {"name": "phone-annual", "product": "Phone", "phases": [
                    {"phaseType": "EVERGREEN", "duration": {"unit": "UNLIMITED", "number": -1},
                     "recurring": {"billingPeriod": "ANNUAL",
                                   "recurringPrice": [{"currency": "USD", "value": 99.00}]}}
                ]}
            ],
            "priceLists": [{"name": "DEFAULT", "plans": ["phone-monthly", "phone-annual"]}]
        },
        {
            "effectiveDate": "2025-01-01T00:00:00Z",
            "currencies": ["USD", "EUR"],
            "products": [{"name": "Phone", "category": "BASE"}],
            "plans": [
                {"name": "phone-monthly", "product": "Phone", "phases": [
                    {"phaseType": "EVERGREEN", "duration": {"unit": "UNLIMITED", "number": -1},
                     "recurring": {"billingPeriod": "MONTHLY",
                                   "recurringPrice": [{"currency": "USD", "value": 10.99},
                                                      {"currency": "EUR"}]}}
                ]}
            ],
            "priceLists": [{"name": "DEFAULT", "plans": ["phone-monthly"]}]
        }
    ]
}"#;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        let catalog = VersionedCatalog::from_json_str(CATALOG).expect("test catalog must load");
        let translator = Translator::new(
            Some(Bundle::from_iter([("catalog.title", "Catalogue")])),
            Some(Bundle::from_iter([("catalog.title", "Catalog"), ("plan.phone", "Phone plan")])),
        );
        let node_info = NodeInfo::for_this_process("test-node".to_string(), Utc::now());

        // Build app (same router as prod), but bind to an ephemeral port.
        let app = build_app(AppServices::new(catalog, translator, node_info));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }

    async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::Client::new()
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await
            .unwrap()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn health_is_ok() {
    let srv = TestServer::spawn().await;
    assert_eq!(srv.get("/health").await.status(), StatusCode::OK);
}

#[tokio::test]
async fn catalog_groups_plans_by_product() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/catalog?requestedDate=2024-06-01T00:00:00Z").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();

    assert_eq!(body["name"], "Telephony");
    assert_eq!(body["effectiveDate"], "2024-01-01T00:00:00Z");
    assert_eq!(body["currencies"], serde_json::json!(["USD"]));

    let products = body["products"].as_array().unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0]["name"], "Phone");
    assert_eq!(products[0]["category"], "BASE");
    assert_eq!(products[0]["available"], serde_json::json!(["Voicemail"]));

    let plans = products[0]["plans"].as_array().unwrap();
    assert_eq!(plans[0]["name"], "phone-monthly");
    assert_eq!(plans[0]["recurringBillingPeriod"], "MONTHLY");
    assert_eq!(plans[1]["name"], "phone-annual");
    assert_eq!(plans[0]["phases"][0]["fixedPrices"], serde_json::json!([]));

    assert_eq!(
        body["priceLists"],
        serde_json::json!([{"name": "DEFAULT", "plans": ["phone-monthly", "phone-annual"]}])
    );
}

#[tokio::test]
async fn catalog_prices_keep_exact_decimal_text() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/catalog?requestedDate=2024-06-01T00:00:00Z").await;
    assert_eq!(res.status(), StatusCode::OK);
    let text = res.text().await.unwrap();
    assert!(text.contains(r#""recurringPrices":[{"currency":"USD","value":9.99}]"#));
    assert!(text.contains(r#""recurringPrices":[{"currency":"USD","value":99.00}]"#));
}

#[tokio::test]
async fn catalog_before_first_version_is_not_found() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/catalog?requestedDate=2023-06-01T00:00:00Z").await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "catalog_not_found");
}

#[tokio::test]
async fn price_without_value_fails_the_request() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/catalog?requestedDate=2025-02-01T00:00:00Z").await;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "currency_value_null");
    assert!(body["message"].as_str().unwrap().contains("EUR"));
}

#[tokio::test]
async fn malformed_requested_date_is_a_bad_request() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/catalog?requestedDate=last-tuesday").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "invalid_date");
}

#[tokio::test]
async fn translations_fall_back_in_order() {
    let srv = TestServer::spawn().await;

    let body: serde_json::Value = srv.get("/translations/catalog.title").await.json().await.unwrap();
    assert_eq!(body["value"], "Catalogue");

    let body: serde_json::Value = srv.get("/translations/plan.phone").await.json().await.unwrap();
    assert_eq!(body["value"], "Phone plan");

    let body: serde_json::Value = srv.get("/translations/missing.key").await.json().await.unwrap();
    assert_eq!(body["key"], "missing.key");
    assert_eq!(body["value"], "missing.key");
}

#[tokio::test]
async fn node_info_round_trips_through_the_mapper() {
    let srv = TestServer::spawn().await;

    let res = srv.get("/node").await;
    assert_eq!(res.status(), StatusCode::OK);
    let text = res.text().await.unwrap();

    let mapper = NodeInfoMapper;
    let info = mapper.deserialize(&text).unwrap();
    assert_eq!(info.node_name, "test-node");
    assert_eq!(mapper.deserialize(&mapper.serialize(&info).unwrap()).unwrap(), info);
}
