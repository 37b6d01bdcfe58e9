//! Orquestación del catálogo (tipos de lavado, adicionales, métodos de pago)
//!
//! Las lecturas pasan por el cache en memoria del proceso; cualquier
//! escritura lo invalida para que la siguiente lectura recargue desde la
//! base de datos.

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::dto::catalogo_dto::{
    ActualizarAdicionalRequest, ActualizarMetodoPagoRequest, ActualizarTipoLavadoRequest,
    CrearAdicionalRequest, CrearMetodoPagoRequest, CrearTipoLavadoRequest,
};
use crate::dto::ApiResponse;
use crate::models::adicional::Adicional;
use crate::models::metodo_pago::MetodoPago;
use crate::models::tipo_lavado::TipoLavado;
use crate::repositories::catalogo_repository::CatalogoRepository;
use crate::state::{CatalogoCache, CatalogoSnapshot};
use crate::utils::errors::AppError;

pub struct CatalogoController {
    repo: CatalogoRepository,
    cache: CatalogoCache,
}

impl CatalogoController {
    pub fn new(pool: PgPool, cache: CatalogoCache) -> Self {
        Self {
            repo: CatalogoRepository::new(pool),
            cache,
        }
    }

    async fn snapshot(&self) -> Result<CatalogoSnapshot, AppError> {
        if let Some(snapshot) = self.cache.get().await {
            return Ok(snapshot);
        }

        let snapshot = CatalogoSnapshot {
            tipos: self.repo.list_tipos().await?,
            adicionales: self.repo.list_adicionales().await?,
            metodos_pago: self.repo.list_metodos_pago().await?,
        };
        self.cache.set(snapshot.clone()).await;
        info!("📋 Cache de catálogo recargado desde la base de datos");
        Ok(snapshot)
    }

    // ---------- Tipos de lavado ----------

    pub async fn listar_tipos(&self) -> Result<Vec<TipoLavado>, AppError> {
        Ok(self.snapshot().await?.tipos)
    }

    pub async fn crear_tipo(
        &self,
        request: CrearTipoLavadoRequest,
    ) -> Result<ApiResponse<TipoLavado>, AppError> {
        request.validate()?;

        let tipo = self
            .repo
            .create_tipo(
                request.nombre,
                request.precio,
                request.es_base,
                request.adicionales_incluidos,
            )
            .await?;
        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            tipo,
            "Tipo de lavado creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar_tipo(
        &self,
        id: Uuid,
        request: ActualizarTipoLavadoRequest,
    ) -> Result<ApiResponse<TipoLavado>, AppError> {
        request.validate()?;

        let tipo = self
            .repo
            .update_tipo(
                id,
                request.nombre,
                request.precio,
                request.es_base,
                request.adicionales_incluidos,
            )
            .await?;
        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            tipo,
            "Tipo de lavado actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar_tipo(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_tipo(id).await?;
        self.cache.invalidar().await;
        Ok(())
    }

    // ---------- Adicionales ----------

    pub async fn listar_adicionales(&self) -> Result<Vec<Adicional>, AppError> {
        Ok(self.snapshot().await?.adicionales)
    }

    pub async fn crear_adicional(
        &self,
        request: CrearAdicionalRequest,
    ) -> Result<ApiResponse<Adicional>, AppError> {
        request.validate()?;

        let adicional = self
            .repo
            .create_adicional(request.nombre, request.precio)
            .await?;
        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            adicional,
            "Adicional creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar_adicional(
        &self,
        id: Uuid,
        request: ActualizarAdicionalRequest,
    ) -> Result<ApiResponse<Adicional>, AppError> {
        request.validate()?;

        let adicional = self
            .repo
            .update_adicional(id, request.nombre, request.precio)
            .await?;
        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            adicional,
            "Adicional actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar_adicional(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_adicional(id).await?;
        self.cache.invalidar().await;
        Ok(())
    }

    // ---------- Métodos de pago ----------

    pub async fn listar_metodos_pago(&self) -> Result<Vec<MetodoPago>, AppError> {
        Ok(self.snapshot().await?.metodos_pago)
    }

    pub async fn crear_metodo_pago(
        &self,
        request: CrearMetodoPagoRequest,
    ) -> Result<ApiResponse<MetodoPago>, AppError> {
        request.validate()?;

        let metodo = self.repo.create_metodo_pago(request.nombre).await?;
        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            metodo,
            "Método de pago creado exitosamente".to_string(),
        ))
    }

    pub async fn actualizar_metodo_pago(
        &self,
        id: Uuid,
        request: ActualizarMetodoPagoRequest,
    ) -> Result<ApiResponse<MetodoPago>, AppError> {
        request.validate()?;

        let metodo = self.repo.update_metodo_pago(id, request.nombre).await?;
        self.cache.invalidar().await;

        Ok(ApiResponse::success_with_message(
            metodo,
            "Método de pago actualizado exitosamente".to_string(),
        ))
    }

    pub async fn eliminar_metodo_pago(&self, id: Uuid) -> Result<(), AppError> {
        self.repo.delete_metodo_pago(id).await?;
        self.cache.invalidar().await;
        Ok(())
    }
}
