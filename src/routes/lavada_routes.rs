//! Rutas de lavadas

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::lavada_controller::LavadaController;
use crate::dto::lavada_dto::{
    ActualizarPagosRequest, AsignarClienteRequest, AsignarLavadorRequest, CambiarEstadoRequest,
    CambiarTipoRequest, CrearLavadaRequest, FiltrosLavada, LavadaResponse, ToggleAdicionalRequest,
};
use crate::dto::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_lavada_router() -> Router<AppState> {
    Router::new()
        .route("/", post(crear_lavada))
        .route("/", get(listar_lavadas))
        .route("/:id", get(obtener_lavada))
        .route("/:id", delete(eliminar_lavada))
        .route("/:id/estado", put(cambiar_estado))
        .route("/:id/tipo-lavado", put(cambiar_tipo_lavado))
        .route("/:id/adicionales", put(toggle_adicional))
        .route("/:id/lavador", put(asignar_lavador))
        .route("/:id/cliente", put(asignar_cliente))
        .route("/:id/pagos", put(actualizar_pagos))
}

fn controller(state: &AppState) -> LavadaController {
    LavadaController::new(state.pool.clone(), state.config.tolerancia_pago)
}

async fn crear_lavada(
    State(state): State<AppState>,
    Json(request): Json<CrearLavadaRequest>,
) -> AppResult<Json<ApiResponse<LavadaResponse>>> {
    let response = controller(&state).crear(request).await?;
    Ok(Json(response))
}

async fn listar_lavadas(
    State(state): State<AppState>,
    Query(filtros): Query<FiltrosLavada>,
) -> AppResult<Json<Vec<LavadaResponse>>> {
    let response = controller(&state).listar(filtros).await?;
    Ok(Json(response))
}

async fn obtener_lavada(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<LavadaResponse>> {
    let response = controller(&state).obtener(id).await?;
    Ok(Json(response))
}

async fn cambiar_estado(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CambiarEstadoRequest>,
) -> AppResult<Json<LavadaResponse>> {
    let response = controller(&state).cambiar_estado(id, request.estado).await?;
    Ok(Json(response))
}

async fn cambiar_tipo_lavado(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<CambiarTipoRequest>,
) -> AppResult<Json<LavadaResponse>> {
    let response = controller(&state)
        .cambiar_tipo_lavado(id, request.tipo_lavado_id)
        .await?;
    Ok(Json(response))
}

async fn toggle_adicional(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ToggleAdicionalRequest>,
) -> AppResult<Json<LavadaResponse>> {
    let response = controller(&state)
        .toggle_adicional(id, request.adicional_id)
        .await?;
    Ok(Json(response))
}

async fn asignar_lavador(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AsignarLavadorRequest>,
) -> AppResult<Json<LavadaResponse>> {
    let response = controller(&state)
        .asignar_lavador(id, request.lavador_id)
        .await?;
    Ok(Json(response))
}

async fn asignar_cliente(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AsignarClienteRequest>,
) -> AppResult<Json<LavadaResponse>> {
    let response = controller(&state)
        .asignar_cliente(id, request.cliente_id)
        .await?;
    Ok(Json(response))
}

async fn actualizar_pagos(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarPagosRequest>,
) -> AppResult<Json<LavadaResponse>> {
    let response = controller(&state).actualizar_pagos(id, request).await?;
    Ok(Json(response))
}

async fn eliminar_lavada(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    controller(&state).eliminar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Lavada eliminada exitosamente"
    })))
}
