//! Configuración de conexión a PostgreSQL

use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Conexión a la base de datos envuelta para el arranque de la app
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conecta usando DATABASE_URL del entorno
    pub async fn new_default() -> Result<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set in environment variables"))?;
        Self::new(&database_url).await
    }

    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;

        // Verificación rápida de que la conexión responde
        sqlx::query("SELECT 1").execute(&pool).await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}
