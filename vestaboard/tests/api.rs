use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio_test::{assert_err, assert_ok};
use vestaboard::{vbml::Style, Board, Client, Error, KEY_HEADER};

const KEY: &str = "secret";

#[derive(Clone, Default)]
struct Written(Arc<Mutex<Option<Value>>>);

fn authorized(headers: &HeaderMap) -> bool {
    headers.get(KEY_HEADER).and_then(|v| v.to_str().ok()) == Some(KEY)
}

async fn compose(headers: HeaderMap, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if !authorized(&headers) {
        return (StatusCode::UNAUTHORIZED, Json(json!("bad key")));
    }
    assert_eq!(body["components"][0]["style"]["justify"], "center");
    let template = body["components"][0]["template"].as_str().unwrap_or_default();
    let mut grid = vec![vec![0u8; 22]; 6];
    for (cell, _) in grid[2].iter_mut().zip(template.chars()) {
        *cell = 1;
    }
    (StatusCode::OK, Json(json!(grid)))
}

async fn write(
    State(written): State<Written>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> StatusCode {
    if !authorized(&headers) {
        return StatusCode::UNAUTHORIZED;
    }
    *written.0.lock().unwrap() = Some(body);
    StatusCode::OK
}

async fn broken() -> (StatusCode, &'static str) {
    (StatusCode::INTERNAL_SERVER_ERROR, "board offline")
}

async fn serve(written: Written) -> String {
    let router = Router::new()
        .route("/compose", post(compose))
        .route("/rw", post(write))
        .route("/broken", post(broken))
        .with_state(written);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await.unwrap() });
    format!("http://{}", addr)
}

#[tokio::test]
async fn format_and_write() {
    let written = Written::default();
    let base = serve(written.clone()).await;
    let client = Client::new(KEY).with_endpoints(format!("{}/compose", base), format!("{}/rw", base));

    let board = assert_ok!(client.format("Hello", &Style::default()).await);
    assert!(board.fits_flagship());
    assert_eq!(board.0[2].iter().filter(|&&c| c == 1).count(), 5);

    assert_ok!(client.write(&board).await);
    let sent = written.0.lock().unwrap().take().unwrap();
    assert_eq!(serde_json::from_value::<Board>(sent).unwrap(), board);
}

#[tokio::test]
async fn wrong_key() {
    let base = serve(Written::default()).await;
    let client = Client::new("nope").with_endpoints(format!("{}/compose", base), format!("{}/rw", base));
    match assert_err!(client.format("Hello", &Style::default()).await) {
        Error::Status { status, body } => {
            assert_eq!(status, StatusCode::UNAUTHORIZED.as_u16());
            assert_eq!(body, "\"bad key\"");
        }
        e => panic!("unexpected error: {}", e),
    }
    assert_err!(client.write(&Board::blank()).await);
}

#[tokio::test]
async fn server_error_keeps_body() {
    let base = serve(Written::default()).await;
    let client = Client::new(KEY).with_endpoints(format!("{}/broken", base), format!("{}/broken", base));
    let err = assert_err!(client.write(&Board::blank()).await);
    assert_eq!(err.to_string(), "500 Internal Server Error: board offline");
}

#[tokio::test]
async fn unreachable() {
    let client = Client::new(KEY).with_endpoints("http://127.0.0.1:9/compose", "http://127.0.0.1:9/rw");
    assert!(matches!(
        client.format("Hello", &Style::default()).await,
        Err(Error::Request(_))
    ));
}
