//! Acceso a datos de lavadas
//!
//! Los campos `adicionales` y `pagos` viven en columnas JSONB y siempre se
//! escriben como documento completo; el estado se guarda como texto con
//! los nombres del negocio.

use chrono::{DateTime, NaiveDate, Utc};
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::lavada::{AdicionalSnapshot, EstadoLavada, Lavada, Pago};
use crate::services::lifecycle_service::CambioEstado;
use crate::utils::errors::AppError;

#[derive(Debug, sqlx::FromRow)]
struct LavadaRow {
    id: Uuid,
    estado: String,
    cliente_id: Option<Uuid>,
    tipo_lavado_id: Option<Uuid>,
    lavador_id: Option<Uuid>,
    valor: i64,
    adicionales: Json<Vec<AdicionalSnapshot>>,
    pagos: Json<Vec<Pago>>,
    tiempo_espera_inicio: Option<DateTime<Utc>>,
    duracion_espera: Option<i64>,
    tiempo_lavado_inicio: Option<DateTime<Utc>>,
    duracion_lavado: Option<i64>,
    tiempo_terminado_inicio: Option<DateTime<Utc>>,
    duracion_terminado: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<LavadaRow> for Lavada {
    type Error = AppError;

    fn try_from(row: LavadaRow) -> Result<Self, Self::Error> {
        let estado = EstadoLavada::parse(&row.estado).ok_or_else(|| {
            AppError::Internal(format!("Estado de lavada desconocido en BD: '{}'", row.estado))
        })?;

        Ok(Lavada {
            id: row.id,
            estado,
            cliente_id: row.cliente_id,
            tipo_lavado_id: row.tipo_lavado_id,
            lavador_id: row.lavador_id,
            valor: row.valor,
            adicionales: row.adicionales.0,
            pagos: row.pagos.0,
            tiempo_espera_inicio: row.tiempo_espera_inicio,
            duracion_espera: row.duracion_espera,
            tiempo_lavado_inicio: row.tiempo_lavado_inicio,
            duracion_lavado: row.duracion_lavado,
            tiempo_terminado_inicio: row.tiempo_terminado_inicio,
            duracion_terminado: row.duracion_terminado,
            created_at: row.created_at,
        })
    }
}

const COLUMNAS: &str = r#"
    id, estado, cliente_id, tipo_lavado_id, lavador_id, valor,
    adicionales, pagos,
    tiempo_espera_inicio, duracion_espera,
    tiempo_lavado_inicio, duracion_lavado,
    tiempo_terminado_inicio, duracion_terminado,
    created_at
"#;

pub struct LavadaRepository {
    pool: PgPool,
}

impl LavadaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crea la lavada en EN ESPERA con el cronómetro de espera corriendo
    /// desde el instante de creación.
    pub async fn create(
        &self,
        cliente_id: Option<Uuid>,
        ahora: DateTime<Utc>,
    ) -> Result<Lavada, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            r#"
            INSERT INTO lavadas (
                id, estado, cliente_id, tipo_lavado_id, lavador_id, valor,
                adicionales, pagos, tiempo_espera_inicio, created_at
            )
            VALUES ($1, $2, $3, NULL, NULL, 0, '[]'::jsonb, '[]'::jsonb, $4, $4)
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(EstadoLavada::EnEspera.as_str())
        .bind(cliente_id)
        .bind(ahora)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Lavada>, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            "SELECT {COLUMNAS} FROM lavadas WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Lavada::try_from).transpose()
    }

    /// Lista las lavadas filtrando opcionalmente por día de creación y estado
    pub async fn list(
        &self,
        fecha: Option<NaiveDate>,
        estado: Option<EstadoLavada>,
    ) -> Result<Vec<Lavada>, AppError> {
        let rows = sqlx::query_as::<_, LavadaRow>(&format!(
            r#"
            SELECT {COLUMNAS} FROM lavadas
            WHERE ($1::date IS NULL OR created_at::date = $1)
              AND ($2::text IS NULL OR estado = $2)
            ORDER BY created_at DESC
            "#
        ))
        .bind(fecha)
        .bind(estado.map(|e| e.as_str()))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Lavada::try_from).collect()
    }

    /// Persiste una transición de estado: el estado más los seis campos de
    /// cronómetros, siempre como conjunto completo.
    pub async fn update_estado(&self, id: Uuid, cambio: &CambioEstado) -> Result<Lavada, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            r#"
            UPDATE lavadas
            SET estado = $2,
                tiempo_espera_inicio = $3, duracion_espera = $4,
                tiempo_lavado_inicio = $5, duracion_lavado = $6,
                tiempo_terminado_inicio = $7, duracion_terminado = $8
            WHERE id = $1
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(id)
        .bind(cambio.estado.as_str())
        .bind(cambio.tiempo_espera_inicio)
        .bind(cambio.duracion_espera)
        .bind(cambio.tiempo_lavado_inicio)
        .bind(cambio.duracion_lavado)
        .bind(cambio.tiempo_terminado_inicio)
        .bind(cambio.duracion_terminado)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn update_tipo(
        &self,
        id: Uuid,
        tipo_lavado_id: Option<Uuid>,
        adicionales: &[AdicionalSnapshot],
        valor: i64,
    ) -> Result<Lavada, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            r#"
            UPDATE lavadas
            SET tipo_lavado_id = $2, adicionales = $3, valor = $4
            WHERE id = $1
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(id)
        .bind(tipo_lavado_id)
        .bind(Json(adicionales))
        .bind(valor)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn update_adicionales(
        &self,
        id: Uuid,
        adicionales: &[AdicionalSnapshot],
        valor: i64,
    ) -> Result<Lavada, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            r#"
            UPDATE lavadas
            SET adicionales = $2, valor = $3
            WHERE id = $1
            RETURNING {COLUMNAS}
            "#
        ))
        .bind(id)
        .bind(Json(adicionales))
        .bind(valor)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn update_lavador(
        &self,
        id: Uuid,
        lavador_id: Option<Uuid>,
    ) -> Result<Lavada, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            "UPDATE lavadas SET lavador_id = $2 WHERE id = $1 RETURNING {COLUMNAS}"
        ))
        .bind(id)
        .bind(lavador_id)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn update_cliente(
        &self,
        id: Uuid,
        cliente_id: Option<Uuid>,
        valor: i64,
    ) -> Result<Lavada, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            "UPDATE lavadas SET cliente_id = $2, valor = $3 WHERE id = $1 RETURNING {COLUMNAS}"
        ))
        .bind(id)
        .bind(cliente_id)
        .bind(valor)
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    /// Reemplaza el arreglo de pagos completo (columna documento, sin
    /// parches parciales).
    pub async fn update_pagos(&self, id: Uuid, pagos: &[Pago]) -> Result<Lavada, AppError> {
        let row = sqlx::query_as::<_, LavadaRow>(&format!(
            "UPDATE lavadas SET pagos = $2 WHERE id = $1 RETURNING {COLUMNAS}"
        ))
        .bind(id)
        .bind(Json(pagos))
        .fetch_one(&self.pool)
        .await?;

        row.try_into()
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM lavadas WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Lavada no encontrada".to_string()));
        }
        Ok(())
    }

    /// Lavadas entregadas de un lavador en una ventana de fechas, con la
    /// marca `es_base` del tipo para la liquidación.
    pub async fn entregadas_por_lavador(
        &self,
        lavador_id: Uuid,
        desde: NaiveDate,
        hasta: NaiveDate,
    ) -> Result<Vec<(i64, bool)>, AppError> {
        let rows: Vec<(i64, bool)> = sqlx::query_as(
            r#"
            SELECT l.valor, COALESCE(t.es_base, false)
            FROM lavadas l
            LEFT JOIN tipos_lavado t ON t.id = l.tipo_lavado_id
            WHERE l.lavador_id = $1
              AND l.estado = 'ENTREGADO'
              AND l.created_at::date BETWEEN $2 AND $3
            ORDER BY l.created_at
            "#,
        )
        .bind(lavador_id)
        .bind(desde)
        .bind(hasta)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
