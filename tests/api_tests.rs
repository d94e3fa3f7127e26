use chrono::NaiveDate;
use serde_json::{json, Value};

mod common;
use common::{
    at, default_types, dimension, recurring, tx, InMemoryStore, ScriptedModel, TestApp, EXPENSE,
    INCOME,
};

fn grocery_store() -> InMemoryStore {
    InMemoryStore {
        transactions: vec![
            tx(1, EXPENSE, 100, at(2024, 1, 5)),
            tx(1, EXPENSE, 200, at(2024, 1, 20)),
            tx(1, EXPENSE, 300, at(2024, 2, 3)),
        ],
        categories: vec![dimension(1, "Grocery")],
        types: default_types(),
        ..Default::default()
    }
}

#[actix_rt::test]
async fn test_health_reports_unreachable_database() {
    let app = TestApp::new(InMemoryStore::default());

    let response = app.get("/healthcheck").await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await;
    assert_eq!(body["status"], "unhealthy");
    assert_eq!(body["database"], "disconnected");
}

#[actix_rt::test]
async fn test_category_average_is_mean_of_monthly_means() {
    let app = TestApp::new(grocery_store());

    let response = app.get("/api/v1/categories/average").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(
        body,
        json!([{"dimensionId": 1, "dimensionName": "Grocery", "average": 225.0}])
    );
}

#[actix_rt::test]
async fn test_category_trend_has_one_row_per_month() {
    let app = TestApp::new(grocery_store());

    let response = app.get("/api/v1/categories/average/monthly").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    let rows = body.as_array().expect("array body");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["month"], "2024-01-01T00:00:00Z");
    assert_eq!(rows[0]["average"], 150.0);
    assert_eq!(rows[1]["month"], "2024-02-01T00:00:00Z");
    assert_eq!(rows[1]["average"], 300.0);
}

#[actix_rt::test]
async fn test_recurring_counts_once_in_start_month() {
    let mut store = grocery_store();
    store.transactions.truncate(2);
    store
        .recurring
        .push(recurring(1, EXPENSE, 300, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    let app = TestApp::new(store);

    let response = app.get("/api/v1/categories/average/monthly").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));
    assert_eq!(body[0]["average"], 200.0);
}

#[actix_rt::test]
async fn test_unknown_category_has_empty_name() {
    let store = InMemoryStore {
        transactions: vec![tx(5, EXPENSE, 80, at(2024, 3, 1))],
        types: default_types(),
        ..Default::default()
    };
    let app = TestApp::new(store);

    let response = app.get("/api/v1/categories/average").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(body[0]["dimensionId"], 5);
    assert_eq!(body[0]["dimensionName"], "");
    assert_eq!(body[0]["average"], 80.0);
}

#[actix_rt::test]
async fn test_no_transactions_gives_empty_lists() {
    let app = TestApp::new(InMemoryStore {
        categories: vec![dimension(1, "Grocery")],
        types: default_types(),
        ..Default::default()
    });

    for path in [
        "/api/v1/categories/average",
        "/api/v1/categories/average/monthly",
        "/api/v1/types/average",
        "/average-spend",
    ] {
        let response = app.get(path).await;
        assert_eq!(response.status(), 200, "{path}");
        assert_eq!(response.json().await, json!([]), "{path}");
    }
}

#[actix_rt::test]
async fn test_type_average_groups_by_type() {
    let mut store = grocery_store();
    store.transactions.push(tx(1, INCOME, 5000, at(2024, 1, 1)));
    let app = TestApp::new(store);

    let response = app.get("/api/v1/types/average").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(
        body,
        json!([
            {"dimensionId": EXPENSE, "dimensionName": "expense", "average": 225.0},
            {"dimensionId": INCOME, "dimensionName": "income", "average": 5000.0}
        ])
    );
}

#[actix_rt::test]
async fn test_average_spend_excludes_income() {
    let mut store = grocery_store();
    store.transactions.push(tx(1, INCOME, 9000, at(2024, 1, 10)));
    let app = TestApp::new(store);

    let response = app.get("/average-spend").await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(body[0]["average"], 150.0);

    let response = app.get("/average-spend/summary").await;
    let body: Value = response.json().await;
    assert_eq!(body[0]["average"], 225.0);
}

#[actix_rt::test]
async fn test_fetch_failure_is_reported() {
    let mut store = grocery_store();
    store.fail_transactions = true;
    let app = TestApp::new(store);

    let response = app.get("/api/v1/categories/average").await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json().await;
    assert_eq!(body["error"], "FETCH_ERROR");
}

#[actix_rt::test]
async fn test_list_endpoints() {
    let mut store = grocery_store();
    store
        .recurring
        .push(recurring(1, EXPENSE, 40, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
    let app = TestApp::new(store);

    let response = app.get("/transactions").await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.json().await.as_array().map(Vec::len), Some(3));

    let response = app.get("/recurring-transactions").await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(body[0]["frequency"], "monthly");
    assert_eq!(body[0]["startDate"], "2024-01-01");

    let response = app.get("/categories").await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(body[0]["name"], "Grocery");

    let response = app.get("/types").await;
    assert_eq!(response.json().await.as_array().map(Vec::len), Some(2));
}

#[actix_rt::test]
async fn test_query_answers_question() {
    let model = ScriptedModel::new(&[
        "```sql\nSELECT c.name AS category, SUM(t.amount) AS total FROM transactions t JOIN categories c ON c.id = t.category_id GROUP BY c.name;\n```",
        "You spent 450 on Grocery.",
    ]);
    let app = TestApp::with_model(InMemoryStore::default(), model);

    let response = app
        .post("/v1/query", &json!({"question": "How much did I spend per category?"}))
        .await;

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await;
    assert_eq!(body["answer"], "You spent 450 on Grocery.");
    assert!(body["query"].as_str().unwrap().ends_with("GROUP BY c.name"));
    assert_eq!(body["result"]["columns"], json!(["category", "total"]));
    assert_eq!(
        body["result"]["rows"][0]["total"],
        json!({"type": "number", "value": 450.0})
    );
}

#[actix_rt::test]
async fn test_query_rejects_empty_question() {
    let app = TestApp::new(InMemoryStore::default());

    let response = app.post("/v1/query", &json!({"question": ""})).await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await;
    assert_eq!(body["error"], "VALIDATION_ERROR");
}

#[actix_rt::test]
async fn test_query_rejects_non_select() {
    let model = ScriptedModel::new(&["DELETE FROM transactions"]);
    let app = TestApp::with_model(InMemoryStore::default(), model);

    let response = app
        .post("/v1/query", &json!({"question": "wipe everything"}))
        .await;

    assert_eq!(response.status(), 422);
    let body: Value = response.json().await;
    assert_eq!(body["error"], "QUERY_FAILED");
}

#[actix_rt::test]
async fn test_query_without_model_is_unavailable() {
    let app = TestApp::new(InMemoryStore::default());

    let response = app
        .post("/v1/query", &json!({"question": "total spend?"}))
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await;
    assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
}
