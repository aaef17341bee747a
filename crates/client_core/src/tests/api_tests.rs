use std::sync::Arc;

use super::*;
use axum::{
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use shared::{domain::ClienteId, error::ErrorCode};
use tokio::{
    net::TcpListener,
    sync::{oneshot, Mutex},
};

#[derive(Debug)]
struct CapturedPost {
    content_type: Option<String>,
    body: serde_json::Value,
}

async fn spawn_server(app: Router) -> String {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}

fn joana_draft() -> ClienteDraft {
    ClienteDraft {
        nome: "Joana Silva".to_string(),
        email: "j@x.com".to_string(),
        nascimento: "1995-05-05".to_string(),
        cep: "01310-000".to_string(),
    }
}

#[tokio::test]
async fn list_clientes_decodes_records_in_server_order() {
    let app = Router::new().route(
        "/clientes",
        get(|| async {
            Json(serde_json::json!([
                {"id": 1, "nome": "Ana", "email": "a@b.com", "nascimento": "1990-01-01", "cep": "12345-678"},
                {"id": "x2", "nome": "Bruno", "email": "b@c.com", "nascimento": "1980-12-31", "cep": "87654-321"}
            ]))
        }),
    );
    let server_url = spawn_server(app).await;

    let clientes = HttpClientesApi::new(server_url)
        .list_clientes()
        .await
        .expect("list");

    assert_eq!(clientes.len(), 2);
    assert_eq!(clientes[0].id, Some(ClienteId::Numeric(1)));
    assert_eq!(clientes[0].nome, "Ana");
    assert_eq!(clientes[1].id, Some(ClienteId::from("x2")));
    assert_eq!(clientes[1].cep, "87654-321");
}

#[tokio::test]
async fn trailing_slash_in_server_url_is_ignored() {
    let app = Router::new().route("/clientes", get(|| async { Json(serde_json::json!([])) }));
    let server_url = spawn_server(app).await;

    let clientes = HttpClientesApi::new(format!("{server_url}/"))
        .list_clientes()
        .await
        .expect("list");
    assert!(clientes.is_empty());
}

#[tokio::test]
async fn create_cliente_posts_json_draft_and_returns_echo() {
    let (tx, rx) = oneshot::channel::<CapturedPost>();
    let tx = Arc::new(Mutex::new(Some(tx)));
    let app = Router::new().route(
        "/clientes",
        axum::routing::post(
            move |headers: HeaderMap, Json(body): Json<serde_json::Value>| {
                let tx = Arc::clone(&tx);
                async move {
                    let content_type = headers
                        .get(header::CONTENT_TYPE)
                        .and_then(|value| value.to_str().ok())
                        .map(str::to_string);
                    let mut echo = body.clone();
                    echo["id"] = serde_json::json!(42);
                    if let Some(tx) = tx.lock().await.take() {
                        let _ = tx.send(CapturedPost { content_type, body });
                    }
                    (StatusCode::CREATED, Json(echo))
                }
            },
        ),
    );
    let server_url = spawn_server(app).await;

    let created = HttpClientesApi::new(server_url)
        .create_cliente(&joana_draft())
        .await
        .expect("create");

    let captured = rx.await.expect("captured post");
    assert_eq!(captured.content_type.as_deref(), Some("application/json"));
    assert_eq!(
        captured.body,
        serde_json::json!({
            "nome": "Joana Silva",
            "email": "j@x.com",
            "nascimento": "1995-05-05",
            "cep": "01310-000",
        })
    );
    assert_eq!(created.id, Some(ClienteId::Numeric(42)));
    assert_eq!(created.nome, "Joana Silva");
}

#[tokio::test]
async fn non_success_status_is_reported_with_body() {
    let app = Router::new().route(
        "/clientes",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "db offline").into_response() }),
    );
    let server_url = spawn_server(app).await;

    let err = HttpClientesApi::new(server_url)
        .list_clientes()
        .await
        .expect_err("status error");

    assert_eq!(err.code(), ErrorCode::Status);
    match err {
        ClientesError::Status { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "db offline");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_list_body_is_a_decode_error() {
    let app = Router::new().route("/clientes", get(|| async { "not json" }));
    let server_url = spawn_server(app).await;

    let err = HttpClientesApi::new(server_url)
        .list_clientes()
        .await
        .expect_err("decode error");
    assert_eq!(err.code(), ErrorCode::Decode);
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let err = HttpClientesApi::new(format!("http://{addr}"))
        .create_cliente(&joana_draft())
        .await
        .expect_err("transport error");
    assert_eq!(err.code(), ErrorCode::Transport);
}
