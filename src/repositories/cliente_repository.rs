//! Acceso a datos de clientes y membresías

use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cliente::{Cliente, Membresia};
use crate::utils::errors::AppError;

// El nombre de la membresía se trae por JOIN para evaluar la vigencia sin
// una segunda consulta.
const SELECT_CLIENTE: &str = r#"
    SELECT c.id, c.nombre, c.telefono, c.placa,
           c.membresia_id, m.nombre AS membresia_nombre,
           c.fecha_inicio_membresia, c.fecha_fin_membresia,
           c.created_at
    FROM clientes c
    LEFT JOIN membresias m ON m.id = c.membresia_id
"#;

pub struct ClienteRepository {
    pool: PgPool,
}

impl ClienteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<Cliente>, AppError> {
        let clientes = sqlx::query_as::<_, Cliente>(&format!(
            "{SELECT_CLIENTE} ORDER BY c.nombre"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(clientes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cliente>, AppError> {
        let cliente = sqlx::query_as::<_, Cliente>(&format!(
            "{SELECT_CLIENTE} WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(cliente)
    }

    pub async fn create(
        &self,
        nombre: String,
        telefono: Option<String>,
        placa: Option<String>,
    ) -> Result<Cliente, AppError> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO clientes (id, nombre, telefono, placa, created_at)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id)
        .bind(nombre)
        .bind(telefono)
        .bind(placa)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::Internal("Cliente recién creado no encontrado".to_string()))
    }

    pub async fn update(
        &self,
        id: Uuid,
        nombre: Option<String>,
        telefono: Option<String>,
        placa: Option<String>,
        membresia_id: Option<Option<Uuid>>,
        fecha_inicio_membresia: Option<Option<NaiveDate>>,
        fecha_fin_membresia: Option<Option<NaiveDate>>,
    ) -> Result<Cliente, AppError> {
        let actual = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))?;

        sqlx::query(
            r#"
            UPDATE clientes
            SET nombre = $2, telefono = $3, placa = $4,
                membresia_id = $5, fecha_inicio_membresia = $6, fecha_fin_membresia = $7
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(nombre.unwrap_or(actual.nombre))
        .bind(telefono.or(actual.telefono))
        .bind(placa.or(actual.placa))
        .bind(membresia_id.unwrap_or(actual.membresia_id))
        .bind(fecha_inicio_membresia.unwrap_or(actual.fecha_inicio_membresia))
        .bind(fecha_fin_membresia.unwrap_or(actual.fecha_fin_membresia))
        .execute(&self.pool)
        .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cliente no encontrado".to_string()))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM clientes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Cliente no encontrado".to_string()));
        }
        Ok(())
    }

    pub async fn list_membresias(&self) -> Result<Vec<Membresia>, AppError> {
        let membresias =
            sqlx::query_as::<_, Membresia>("SELECT * FROM membresias ORDER BY precio")
                .fetch_all(&self.pool)
                .await?;

        Ok(membresias)
    }
}
