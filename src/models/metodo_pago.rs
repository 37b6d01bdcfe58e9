//! Método de pago del catálogo (efectivo, Nequi, tarjeta, etc.)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct MetodoPago {
    pub id: Uuid,
    pub nombre: String,
    pub created_at: DateTime<Utc>,
}
