//! Lavador (trabajador asignable a una lavada)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Lavador {
    pub id: Uuid,
    pub nombre: String,
    pub telefono: Option<String>,
    /// Porcentaje del valor de cada lavada base que gana el lavador
    pub porcentaje_pago: i32,
    pub activo: bool,
    pub created_at: DateTime<Utc>,
}
