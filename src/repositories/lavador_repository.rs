//! Acceso a datos de lavadores

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::lavador::Lavador;
use crate::utils::errors::AppError;

pub struct LavadorRepository {
    pool: PgPool,
}

impl LavadorRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, solo_activos: bool) -> Result<Vec<Lavador>, AppError> {
        let lavadores = sqlx::query_as::<_, Lavador>(
            "SELECT * FROM lavadores WHERE ($1 = false OR activo) ORDER BY nombre",
        )
        .bind(solo_activos)
        .fetch_all(&self.pool)
        .await?;

        Ok(lavadores)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Lavador>, AppError> {
        let lavador = sqlx::query_as::<_, Lavador>("SELECT * FROM lavadores WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(lavador)
    }

    pub async fn create(
        &self,
        nombre: String,
        telefono: Option<String>,
        porcentaje_pago: i32,
    ) -> Result<Lavador, AppError> {
        let lavador = sqlx::query_as::<_, Lavador>(
            r#"
            INSERT INTO lavadores (id, nombre, telefono, porcentaje_pago, activo, created_at)
            VALUES ($1, $2, $3, $4, true, $5)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(telefono)
        .bind(porcentaje_pago)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(lavador)
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        telefono: Option<String>,
        porcentaje_pago: Option<i32>,
        activo: Option<bool>,
    ) -> Result<Lavador, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Lavador no encontrado".to_string()))?;

        let lavador = sqlx::query_as::<_, Lavador>(
            r#"
            UPDATE lavadores
            SET nombre = $2, telefono = $3, porcentaje_pago = $4, activo = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(actual.nombre))
        .bind(telefono.or(actual.telefono))
        .bind(porcentaje_pago.unwrap_or(actual.porcentaje_pago))
        .bind(activo.unwrap_or(actual.activo))
        .fetch_one(&self.pool)
        .await?;

        Ok(lavador)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lavadores WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Lavador no encontrado".to_string()));
        }
        Ok(())
    }
}
