//! Orquestación de clientes y membresías

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::cliente_dto::{ActualizarClienteRequest, ClienteResponse, CrearClienteRequest};
use crate::dto::ApiResponse;
use crate::models::cliente::Membresia;
use crate::repositories::cliente_repository::ClienteRepository;
use crate::utils::errors::AppError;

pub struct ClienteController {
    repo: ClienteRepository,
}

impl ClienteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: ClienteRepository::new(pool),
        }
    }

    pub async fn listar(&self) -> Result<Vec<ClienteResponse>, AppError> {
        let hoy = Utc::now().date_naive();
        let clientes = self.repo.list().await?;
        Ok(clientes
            .into_iter()
            .map(|c| ClienteResponse::from_cliente(c, hoy))
            .collect())
    }

    pub async fn obtener(&self, id: Uuid) -> Result<ClienteResponse, AppError> {
        let cliente = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        Ok(ClienteResponse::from_cliente(cliente, Utc::now().date_naive()))
    }

    pub async fn crear(
        &self,
        request: CrearClienteRequest,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        request.validate()?;

        let cliente = self
            .repo
            .create(request.nombre, request.telefono, request.placa)
            .await?;
        log::info!("👥 Cliente {} creado", cliente.id);

        Ok(ApiResponse::success_with_message(
            ClienteResponse::from_cliente(cliente, Utc::now().date_naive()),
            "Cliente creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar(
        &self,
        id: Uuid,
        request: ActualizarClienteRequest,
    ) -> Result<ApiResponse<ClienteResponse>, AppError> {
        let cliente = self
            .repo
            .update(
                id,
                request.nombre,
                request.telefono,
                request.placa,
                request.membresia_id,
                request.fecha_inicio_membresia,
                request.fecha_fin_membresia,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            ClienteResponse::from_cliente(cliente, Utc::now().date_naive()),
            "Cliente actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        log::info!("🗑️ Cliente {} eliminado", id);
        Ok(())
    }

    pub async fn listar_membresias(&self) -> Result<Vec<Membresia>, AppError> {
        self.repo.list_membresias().await
    }
}
