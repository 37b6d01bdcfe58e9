//! Acceso a datos del catálogo: tipos de lavado, adicionales y métodos de pago

use chrono::{DateTime, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::adicional::Adicional;
use crate::models::metodo_pago::MetodoPago;
use crate::models::tipo_lavado::TipoLavado;
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct TipoLavadoRow {
    id: Uuid,
    nombre: String,
    precio: i64,
    es_base: bool,
    adicionales_incluidos: Json<Vec<Uuid>>,
    created_at: DateTime<Utc>,
}

impl From<TipoLavadoRow> for TipoLavado {
    fn from(row: TipoLavadoRow) -> Self {
        TipoLavado {
            id: row.id,
            nombre: row.nombre,
            precio: row.precio,
            es_base: row.es_base,
            adicionales_incluidos: row.adicionales_incluidos.0,
            created_at: row.created_at,
        }
    }
}

pub struct CatalogoRepository {
    pool: PgPool,
}

impl CatalogoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // ---------- Tipos de lavado ----------

    pub async fn list_tipos(&self) -> Result<Vec<TipoLavado>, AppError> {
        let rows = sqlx::query_as::<_, TipoLavadoRow>(
            "SELECT * FROM tipos_lavado ORDER BY precio",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(TipoLavado::from).collect())
    }

    pub async fn find_tipo(&self, id: Uuid) -> Result<Option<TipoLavado>, AppError> {
        let row = sqlx::query_as::<_, TipoLavadoRow>("SELECT * FROM tipos_lavado WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(TipoLavado::from))
    }

    pub async fn create_tipo(
        &self,
        nombre: String,
        precio: i64,
        es_base: bool,
        adicionales_incluidos: Vec<Uuid>,
    ) -> Result<TipoLavado, AppError> {
        let row = sqlx::query_as::<_, TipoLavadoRow>(
            r#"
            INSERT INTO tipos_lavado (id, nombre, precio, es_base, adicionales_incluidos, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(precio)
        .bind(es_base)
        .bind(Json(adicionales_incluidos))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn update_tipo(
        &self,
        id: Uuid,
        nombre: Option<String>,
        precio: Option<i64>,
        es_base: Option<bool>,
        adicionales_incluidos: Option<Vec<Uuid>>,
    ) -> Result<TipoLavado, AppError> {
        let actual = self
            .find_tipo(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Tipo de lavado no encontrado".to_string()))?;

        let row = sqlx::query_as::<_, TipoLavadoRow>(
            r#"
            UPDATE tipos_lavado
            SET nombre = $2, precio = $3, es_base = $4, adicionales_incluidos = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(actual.nombre))
        .bind(precio.unwrap_or(actual.precio))
        .bind(es_base.unwrap_or(actual.es_base))
        .bind(Json(
            adicionales_incluidos.unwrap_or(actual.adicionales_incluidos),
        ))
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    pub async fn delete_tipo(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM tipos_lavado WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Tipo de lavado no encontrado".to_string()));
        }
        Ok(())
    }

    // ---------- Adicionales ----------

    pub async fn list_adicionales(&self) -> Result<Vec<Adicional>, AppError> {
        let adicionales =
            sqlx::query_as::<_, Adicional>("SELECT * FROM adicionales ORDER BY nombre")
                .fetch_all(&self.pool)
                .await?;

        Ok(adicionales)
    }

    pub async fn find_adicional(&self, id: Uuid) -> Result<Option<Adicional>, AppError> {
        let adicional = sqlx::query_as::<_, Adicional>("SELECT * FROM adicionales WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(adicional)
    }

    pub async fn create_adicional(&self, nombre: String, precio: i64) -> Result<Adicional, AppError> {
        let adicional = sqlx::query_as::<_, Adicional>(
            r#"
            INSERT INTO adicionales (id, nombre, precio, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(precio)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(adicional)
    }

    pub async fn update_adicional(
        &self,
        id: Uuid,
        nombre: Option<String>,
        precio: Option<i64>,
    ) -> Result<Adicional, AppError> {
        let actual = self
            .find_adicional(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Adicional no encontrado".to_string()))?;

        let adicional = sqlx::query_as::<_, Adicional>(
            "UPDATE adicionales SET nombre = $2, precio = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(nombre.unwrap_or(actual.nombre))
        .bind(precio.unwrap_or(actual.precio))
        .fetch_one(&self.pool)
        .await?;

        Ok(adicional)
    }

    pub async fn delete_adicional(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM adicionales WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Adicional no encontrado".to_string()));
        }
        Ok(())
    }

    // ---------- Métodos de pago ----------

    pub async fn list_metodos_pago(&self) -> Result<Vec<MetodoPago>, AppError> {
        let metodos =
            sqlx::query_as::<_, MetodoPago>("SELECT * FROM metodos_pago ORDER BY nombre")
                .fetch_all(&self.pool)
                .await?;

        Ok(metodos)
    }

    pub async fn find_metodo_pago(&self, id: Uuid) -> Result<Option<MetodoPago>, AppError> {
        let metodo = sqlx::query_as::<_, MetodoPago>("SELECT * FROM metodos_pago WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(metodo)
    }

    pub async fn create_metodo_pago(&self, nombre: String) -> Result<MetodoPago, AppError> {
        let metodo = sqlx::query_as::<_, MetodoPago>(
            "INSERT INTO metodos_pago (id, nombre, created_at) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(nombre)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(metodo)
    }

    pub async fn update_metodo_pago(&self, id: Uuid, nombre: String) -> Result<MetodoPago, AppError> {
        let metodo = sqlx::query_as::<_, MetodoPago>(
            "UPDATE metodos_pago SET nombre = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(nombre)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Método de pago no encontrado".to_string()))?;

        Ok(metodo)
    }

    pub async fn delete_metodo_pago(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM metodos_pago WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Método de pago no encontrado".to_string()));
        }
        Ok(())
    }
}
