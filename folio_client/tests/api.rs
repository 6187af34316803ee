use axum::{http::StatusCode, routing, Json, Router};
use folio_client::{
    api::{ContactApiError, ContactApiService, ContactApiServiceImpl},
    form::ContactFormData,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tokio::net::TcpListener;

fn data() -> ContactFormData {
    ContactFormData {
        name: "Ada Lovelace".into(),
        email: "ada@example.com".into(),
        message: "Hello, I would like to connect.".into(),
    }
}

#[tokio::test]
async fn ok() {
    let router = Router::new().route(
        "/api/contact",
        routing::post(|Json(body): Json<Value>| async move {
            assert_eq!(
                body,
                json!({
                    "name": "Ada Lovelace",
                    "email": "ada@example.com",
                    "message": "Hello, I would like to connect.",
                })
            );
            Json(json!({"message": "Email sent successfully"}))
        }),
    );
    let sut = setup(router).await;

    sut.submit(data()).await.unwrap();
}

#[tokio::test]
async fn success_status_ignores_body() {
    let router = Router::new().route("/api/contact", routing::post(|| async { "ok" }));
    let sut = setup(router).await;

    sut.submit(data()).await.unwrap();
}

#[tokio::test]
async fn rejected_with_message() {
    let router = Router::new().route(
        "/api/contact",
        routing::post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Name must be at least 2 characters"})),
            )
        }),
    );
    let sut = setup(router).await;

    let err = sut.submit(data()).await.unwrap_err();

    assert!(
        matches!(&err, ContactApiError::Rejected(message) if message == "Name must be at least 2 characters"),
        "{err:?}"
    );
}

#[tokio::test]
async fn rejected_without_message() {
    for router in [
        Router::new().route(
            "/api/contact",
            routing::post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "Bad Gateway") }),
        ),
        Router::new().route(
            "/api/contact",
            routing::post(|| async { (StatusCode::BAD_REQUEST, Json(json!({"error": ""}))) }),
        ),
        Router::new().route(
            "/api/contact",
            routing::post(|| async { (StatusCode::BAD_REQUEST, Json(json!({}))) }),
        ),
    ] {
        let sut = setup(router).await;

        let err = sut.submit(data()).await.unwrap_err();

        assert_eq!(err.to_string(), "Failed to send message");
        assert!(matches!(err, ContactApiError::Rejected(_)), "{err:?}");
    }
}

#[tokio::test]
async fn unreachable() {
    let sut = ContactApiServiceImpl::new("http://127.0.0.1:1/api/contact".parse().unwrap()).unwrap();

    let err = sut.submit(data()).await.unwrap_err();

    assert_eq!(err.to_string(), "Failed to send message");
    assert!(matches!(err, ContactApiError::Network(_)), "{err:?}");
}

async fn setup(router: Router) -> ContactApiServiceImpl {
    let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, router).await });
    ContactApiServiceImpl::new(format!("http://{addr}/api/contact").parse().unwrap()).unwrap()
}
