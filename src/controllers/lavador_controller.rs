//! Orquestación de lavadores y su liquidación

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::lavador_dto::{
    ActualizarLavadorRequest, CrearLavadorRequest, VentanaResumenPago,
};
use crate::dto::ApiResponse;
use crate::models::lavador::Lavador;
use crate::repositories::lavada_repository::LavadaRepository;
use crate::repositories::lavador_repository::LavadorRepository;
use crate::services::payroll_service::{resumen, LavadaLiquidable, ResumenPago};
use crate::utils::errors::AppError;

pub struct LavadorController {
    repo: LavadorRepository,
    lavadas: LavadaRepository,
}

impl LavadorController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: LavadorRepository::new(pool.clone()),
            lavadas: LavadaRepository::new(pool),
        }
    }

    pub async fn listar(&self, solo_activos: bool) -> Result<Vec<Lavador>, AppError> {
        self.repo.list(solo_activos).await
    }

    pub async fn obtener(&self, id: Uuid) -> Result<Lavador, AppError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lavador no encontrado".to_string()))
    }

    pub async fn crear(
        &self,
        request: CrearLavadorRequest,
    ) -> Result<ApiResponse<Lavador>, AppError> {
        request.validate()?;

        let lavador = self
            .repo
            .create(request.nombre, request.telefono, request.porcentaje_pago)
            .await?;
        log::info!("🧽 Lavador {} creado", lavador.id);

        Ok(ApiResponse::success_with_message(
            lavador,
            "Lavador creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar(
        &self,
        id: Uuid,
        request: ActualizarLavadorRequest,
    ) -> Result<ApiResponse<Lavador>, AppError> {
        request.validate()?;

        let lavador = self
            .repo
            .update(
                id,
                request.nombre,
                request.telefono,
                request.porcentaje_pago,
                request.activo,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            lavador,
            "Lavador actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete(id).await?;
        log::info!("🗑️ Lavador {} eliminado", id);
        Ok(())
    }

    /// Resumen de liquidación: lavadas ENTREGADAS del lavador en la
    /// ventana, con comisión por porcentaje sobre los tipos base.
    pub async fn resumen_pago(
        &self,
        id: Uuid,
        ventana: VentanaResumenPago,
    ) -> Result<ResumenPago, AppError> {
        if ventana.desde > ventana.hasta {
            return Err(AppError::BadRequest(
                "La fecha inicial no puede ser posterior a la final".to_string(),
            ));
        }

        let lavador = self.obtener(id).await?;

        let entregadas: Vec<LavadaLiquidable> = self
            .lavadas
            .entregadas_por_lavador(id, ventana.desde, ventana.hasta)
            .await?
            .into_iter()
            .map(|(valor, es_base)| LavadaLiquidable { valor, es_base })
            .collect();

        Ok(resumen(&entregadas, lavador.porcentaje_pago))
    }
}
