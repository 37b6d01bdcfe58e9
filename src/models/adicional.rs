//! Servicio adicional del catálogo (cera, grafito, etc.)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Adicional {
    pub id: Uuid,
    pub nombre: String,
    pub precio: i64,
    pub created_at: DateTime<Utc>,
}
