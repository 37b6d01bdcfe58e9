mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🏍️ Monaco PRO - Backend del lavadero");
    info!("====================================");

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let config = EnvironmentConfig::default();
    let server_url = config.server_url();

    // En desarrollo el CORS es permisivo; en otros entornos se limita a
    // los orígenes de CORS_ORIGINS.
    let cors = if config.is_development() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Crear router de la API
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api/lavadas", routes::lavada_routes::create_lavada_router())
        .nest(
            "/api/tipos-lavado",
            routes::catalogo_routes::create_tipo_lavado_router(),
        )
        .nest(
            "/api/adicionales",
            routes::catalogo_routes::create_adicional_router(),
        )
        .nest(
            "/api/metodos-pago",
            routes::catalogo_routes::create_metodo_pago_router(),
        )
        .nest(
            "/api/clientes",
            routes::cliente_routes::create_cliente_router(),
        )
        .nest(
            "/api/lavadores",
            routes::lavador_routes::create_lavador_router(),
        )
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = server_url.parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🧼 Lavadas:");
    info!("   POST   /api/lavadas - Crear lavada");
    info!("   GET    /api/lavadas - Listar lavadas (?fecha=&estado=)");
    info!("   GET    /api/lavadas/:id - Obtener lavada");
    info!("   PUT    /api/lavadas/:id/estado - Cambiar estado");
    info!("   PUT    /api/lavadas/:id/tipo-lavado - Cambiar tipo de lavado");
    info!("   PUT    /api/lavadas/:id/adicionales - Agregar/quitar adicional");
    info!("   PUT    /api/lavadas/:id/lavador - Asignar lavador");
    info!("   PUT    /api/lavadas/:id/cliente - Asignar cliente");
    info!("   PUT    /api/lavadas/:id/pagos - Actualizar pagos");
    info!("   DELETE /api/lavadas/:id - Eliminar lavada");
    info!("📋 Catálogo:");
    info!("   CRUD /api/tipos-lavado, /api/adicionales, /api/metodos-pago");
    info!("👥 Clientes:");
    info!("   CRUD /api/clientes - GET /api/clientes/membresias");
    info!("🧽 Lavadores:");
    info!("   CRUD /api/lavadores - GET /api/lavadores/:id/resumen-pago");

    // Iniciar servidor
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check del servicio
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "service": "monaco-pro-backend",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
