use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use bank_api::endpoints::{
    FundId, GroupId,
    spy_cards::SpyCardType,
    trade::{Resource, TradeType},
    trust_fund::TrustFundAction,
};
use bank_api::{BankApiError, Client, Request};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

/// Request bodies received by the fake service, keyed by path
#[derive(Clone, Default)]
struct Received(Arc<Mutex<Vec<(&'static str, Value)>>>);

impl Received {
    fn take(&self) -> Vec<(&'static str, Value)> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

async fn record(received: &Received, path: &'static str, body: Value) -> Json<Value> {
    received.0.lock().unwrap().push((path, body));
    Json(json!({"message": format!("{path} done")}))
}

fn fake_bank(received: Received) -> Router {
    Router::new()
        .route(
            "/bank/get_group_trans",
            post(|State(r): State<Received>, Json(body): Json<Value>| async move {
                r.0.lock().unwrap().push(("/get_group_trans", body));
                Json(json!([
                    {"type": "buy", "amount": 10, "date": "2024-01-01"},
                    {"type": "loan", "amount": 250.5, "date": "2024-01-02"}
                ]))
            }),
        )
        .route(
            "/bank/trade",
            post(|State(r): State<Received>, Json(body): Json<Value>| async move {
                record(&r, "/trade", body).await
            }),
        )
        .route(
            "/bank/trust_fund",
            post(|State(r): State<Received>, Json(body): Json<Value>| async move {
                record(&r, "/trust_fund", body).await
            }),
        )
        .route(
            "/bank/set_loan",
            post(|State(r): State<Received>, Json(body): Json<Value>| async move {
                r.0.lock().unwrap().push(("/set_loan", body));
                // Missing the message field
                Json(json!({"status": "queued"}))
            }),
        )
        .route(
            "/bank/buy_spy_card",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "out of cards") }),
        )
        .with_state(received)
}

async fn spawn_fake_bank(received: Received) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, fake_bank(received)).await.unwrap();
    });
    format!("http://{addr}/bank")
}

#[tokio::test]
async fn lists_group_transactions_in_order() {
    let received = Received::default();
    let client = Client::new(&spawn_fake_bank(received.clone()).await);

    let records = client
        .send(Request::group(GroupId::new(9)).transactions())
        .await
        .unwrap();

    let lines: Vec<String> = records.iter().map(ToString::to_string).collect();
    assert_eq!(lines, vec!["buy: 10 - 2024-01-01", "loan: 250.5 - 2024-01-02"]);
    assert_eq!(
        received.take(),
        vec![("/get_group_trans", json!({"group_id": 9}))]
    );
}

#[tokio::test]
async fn trade_posts_one_body_and_returns_message() {
    let received = Received::default();
    let client = Client::new(&spawn_fake_bank(received.clone()).await);

    let res = client
        .send(
            Request::group(GroupId::new(1))
                .trade(Resource::Crystal, 15)
                .kind(TradeType::Sell),
        )
        .await
        .unwrap();

    assert_eq!(res.message, "/trade done");
    assert_eq!(
        received.take(),
        vec![(
            "/trade",
            json!({"group_id": 1, "resource": "crystal", "amount": 15, "type": "sell"})
        )]
    );
}

#[tokio::test]
async fn trust_fund_delete_sends_fund_id() {
    let received = Received::default();
    let client = Client::new(&spawn_fake_bank(received.clone()).await);

    client
        .send(
            Request::group(GroupId::new(1))
                .trust_fund(TrustFundAction::Delete, 0)
                .fund_id(FundId::from(3)),
        )
        .await
        .unwrap();

    assert_eq!(
        received.take(),
        vec![(
            "/trust_fund",
            json!({"group_id": 1, "action": "delete", "amount": 0, "fund_id": 3})
        )]
    );
}

#[tokio::test]
async fn server_error_maps_to_status() {
    let client = Client::new(&spawn_fake_bank(Received::default()).await);

    let err = client
        .send(Request::group(GroupId::new(1)).buy_spy_card(SpyCardType::Market))
        .await
        .unwrap_err();

    assert!(matches!(err, BankApiError::Status(..)));
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
    assert_eq!(err.to_string(), "Request failed with status code 500");
}

#[tokio::test]
async fn malformed_response_is_a_failed_request() {
    let received = Received::default();
    let client = Client::new(&spawn_fake_bank(received.clone()).await);

    let err = client
        .send(Request::group(GroupId::new(1)).set_loan(100, 2))
        .await
        .unwrap_err();

    assert!(matches!(err, BankApiError::Internal(_)));
    assert!(err.to_string().starts_with("Request failed"));
    // The request still reached the service exactly once
    assert_eq!(received.take().len(), 1);
}

#[tokio::test]
async fn unreachable_service_is_a_failed_request() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let client = Client::new(&format!("http://{addr}/bank"));

    let err = client
        .send(Request::group(GroupId::new(1)).transactions())
        .await
        .unwrap_err();

    assert!(err.status().is_none());
}
