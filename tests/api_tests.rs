use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, put};
use axum::{Json, Router};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

// Router de prueba con la misma forma de respuestas que el servidor real,
// sin base de datos de por medio.
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "monaco-pro-backend",
                    "status": "healthy",
                }))
            }),
        )
        .route(
            "/api/lavadas/:id/estado",
            put(|Json(body): Json<Value>| async move {
                // Eco del estado solicitado, validando el nombre de negocio
                let estado = body["estado"].as_str().unwrap_or("");
                let conocido = matches!(
                    estado,
                    "EN ESPERA" | "EN LAVADO" | "TERMINADO" | "ENTREGADO"
                );
                if conocido {
                    (StatusCode::OK, Json(json!({ "estado": estado })))
                } else {
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({ "error": "Bad Request" })),
                    )
                }
            }),
        )
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["service"], "monaco-pro-backend");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_ruta_desconocida_da_404() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/no-existe")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_estado_con_nombre_de_negocio() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/lavadas/7b1c6a9e-0000-0000-0000-000000000000/estado")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "estado": "EN LAVADO" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["estado"], "EN LAVADO");
}

#[tokio::test]
async fn test_estado_invalido_rechazado() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("PUT")
                .uri("/api/lavadas/7b1c6a9e-0000-0000-0000-000000000000/estado")
                .header("content-type", "application/json")
                .body(Body::from(json!({ "estado": "CANCELADO" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
