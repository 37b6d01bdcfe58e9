//! Rutas del catálogo: tipos de lavado, adicionales y métodos de pago

use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::catalogo_controller::CatalogoController;
use crate::dto::catalogo_dto::{
    ActualizarAdicionalRequest, ActualizarMetodoPagoRequest, ActualizarTipoLavadoRequest,
    CrearAdicionalRequest, CrearMetodoPagoRequest, CrearTipoLavadoRequest,
};
use crate::dto::ApiResponse;
use crate::models::adicional::Adicional;
use crate::models::metodo_pago::MetodoPago;
use crate::models::tipo_lavado::TipoLavado;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_tipo_lavado_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_tipos))
        .route("/", post(crear_tipo))
        .route("/:id", put(actualizar_tipo))
        .route("/:id", delete(eliminar_tipo))
}

pub fn create_adicional_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_adicionales))
        .route("/", post(crear_adicional))
        .route("/:id", put(actualizar_adicional))
        .route("/:id", delete(eliminar_adicional))
}

pub fn create_metodo_pago_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_metodos_pago))
        .route("/", post(crear_metodo_pago))
        .route("/:id", put(actualizar_metodo_pago))
        .route("/:id", delete(eliminar_metodo_pago))
}

fn controller(state: &AppState) -> CatalogoController {
    CatalogoController::new(state.pool.clone(), state.catalogo.clone())
}

async fn listar_tipos(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<TipoLavado>>> {
    Ok(Json(controller(&state).listar_tipos().await?))
}

async fn crear_tipo(
    State(state): State<AppState>,
    Json(request): Json<CrearTipoLavadoRequest>,
) -> AppResult<Json<ApiResponse<TipoLavado>>> {
    Ok(Json(controller(&state).crear_tipo(request).await?))
}

async fn actualizar_tipo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarTipoLavadoRequest>,
) -> AppResult<Json<ApiResponse<TipoLavado>>> {
    Ok(Json(controller(&state).actualizar_tipo(id, request).await?))
}

async fn eliminar_tipo(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    controller(&state).eliminar_tipo(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tipo de lavado eliminado exitosamente"
    })))
}

async fn listar_adicionales(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Adicional>>> {
    Ok(Json(controller(&state).listar_adicionales().await?))
}

async fn crear_adicional(
    State(state): State<AppState>,
    Json(request): Json<CrearAdicionalRequest>,
) -> AppResult<Json<ApiResponse<Adicional>>> {
    Ok(Json(controller(&state).crear_adicional(request).await?))
}

async fn actualizar_adicional(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarAdicionalRequest>,
) -> AppResult<Json<ApiResponse<Adicional>>> {
    Ok(Json(
        controller(&state).actualizar_adicional(id, request).await?,
    ))
}

async fn eliminar_adicional(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    controller(&state).eliminar_adicional(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Adicional eliminado exitosamente"
    })))
}

async fn listar_metodos_pago(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<MetodoPago>>> {
    Ok(Json(controller(&state).listar_metodos_pago().await?))
}

async fn crear_metodo_pago(
    State(state): State<AppState>,
    Json(request): Json<CrearMetodoPagoRequest>,
) -> AppResult<Json<ApiResponse<MetodoPago>>> {
    Ok(Json(controller(&state).crear_metodo_pago(request).await?))
}

async fn actualizar_metodo_pago(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarMetodoPagoRequest>,
) -> AppResult<Json<ApiResponse<MetodoPago>>> {
    Ok(Json(
        controller(&state).actualizar_metodo_pago(id, request).await?,
    ))
}

async fn eliminar_metodo_pago(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    controller(&state).eliminar_metodo_pago(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Método de pago eliminado exitosamente"
    })))
}
