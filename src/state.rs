//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum, incluido el cache en memoria del catálogo.

use sqlx::PgPool;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::config::environment::EnvironmentConfig;
use crate::models::adicional::Adicional;
use crate::models::metodo_pago::MetodoPago;
use crate::models::tipo_lavado::TipoLavado;

/// Foto completa del catálogo de referencia
#[derive(Clone, Debug)]
pub struct CatalogoSnapshot {
    pub tipos: Vec<TipoLavado>,
    pub adicionales: Vec<Adicional>,
    pub metodos_pago: Vec<MetodoPago>,
}

/// Cache en memoria del catálogo. Las escrituras del catálogo lo
/// invalidan; la siguiente lectura lo recarga completo desde la base de
/// datos. Vive lo que vive el proceso.
#[derive(Clone, Default)]
pub struct CatalogoCache {
    inner: Arc<RwLock<Option<CatalogoSnapshot>>>,
}

impl CatalogoCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self) -> Option<CatalogoSnapshot> {
        self.inner.read().await.clone()
    }

    pub async fn set(&self, snapshot: CatalogoSnapshot) {
        *self.inner.write().await = Some(snapshot);
    }

    pub async fn invalidar(&self) {
        *self.inner.write().await = None;
    }
}

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub catalogo: CatalogoCache,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            pool,
            config,
            catalogo: CatalogoCache::new(),
        }
    }
}
