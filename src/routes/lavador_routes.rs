//! Rutas de lavadores

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::lavador_controller::LavadorController;
use crate::dto::lavador_dto::{
    ActualizarLavadorRequest, CrearLavadorRequest, FiltrosLavador, VentanaResumenPago,
};
use crate::dto::ApiResponse;
use crate::models::lavador::Lavador;
use crate::services::payroll_service::ResumenPago;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub fn create_lavador_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_lavadores))
        .route("/", post(crear_lavador))
        .route("/:id", get(obtener_lavador))
        .route("/:id", put(actualizar_lavador))
        .route("/:id", delete(eliminar_lavador))
        .route("/:id/resumen-pago", get(resumen_pago))
}

async fn listar_lavadores(
    State(state): State<AppState>,
    Query(filtros): Query<FiltrosLavador>,
) -> AppResult<Json<Vec<Lavador>>> {
    let controller = LavadorController::new(state.pool.clone());
    Ok(Json(controller.listar(filtros.solo_activos).await?))
}

async fn obtener_lavador(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Lavador>> {
    let controller = LavadorController::new(state.pool.clone());
    Ok(Json(controller.obtener(id).await?))
}

async fn crear_lavador(
    State(state): State<AppState>,
    Json(request): Json<CrearLavadorRequest>,
) -> AppResult<Json<ApiResponse<Lavador>>> {
    let controller = LavadorController::new(state.pool.clone());
    Ok(Json(controller.crear(request).await?))
}

async fn actualizar_lavador(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ActualizarLavadorRequest>,
) -> AppResult<Json<ApiResponse<Lavador>>> {
    let controller = LavadorController::new(state.pool.clone());
    Ok(Json(controller.actualizar(id, request).await?))
}

async fn eliminar_lavador(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<serde_json::Value>> {
    let controller = LavadorController::new(state.pool.clone());
    controller.eliminar(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Lavador eliminado exitosamente"
    })))
}

async fn resumen_pago(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(ventana): Query<VentanaResumenPago>,
) -> AppResult<Json<ResumenPago>> {
    let controller = LavadorController::new(state.pool.clone());
    Ok(Json(controller.resumen_pago(id, ventana).await?))
}
