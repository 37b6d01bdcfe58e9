//! Rutas de clientes y membresías

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::cliente_controller::ClienteController;
use crate::dto::cliente_dto::{ActualizarClienteRequest, ClienteResponse, CrearClienteRequest};
use crate::dto::ApiResponse;
use crate::models::cliente::Membresia;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_cliente_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_clientes))
        .route("/", post(crear_cliente))
        .route("/membresias", get(listar_membresias))
        .route("/:id", get(obtener_cliente))
        .route("/:id", put(actualizar_cliente))
        .route("/:id", delete(eliminar_cliente))
}

async fn listar_clientes(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ClienteResponse>>> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.listar().await?))
}

async fn obtener_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ClienteResponse>> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.obtener(id).await?))
}

async fn crear_cliente(
    State(state): State<AppState>,
    Json(request): Json<CrearClienteRequest>,
) -> AppResult<Json<ApiResponse<ClienteResponse>>> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.crear(request).await?))
}

async fn actualizar_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarClienteRequest>,
) -> AppResult<Json<ApiResponse<ClienteResponse>>> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.actualizar(id, request).await?))
}

async fn eliminar_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = ClienteController::new(state.pool.clone());
    controller.eliminar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cliente eliminado exitosamente"
    })))
}

async fn listar_membresias(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Membresia>>> {
    let controller = ClienteController::new(state.pool.clone());
    Ok(Json(controller.listar_membresias().await?))
}
