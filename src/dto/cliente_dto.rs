//! DTOs de clientes

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::cliente::Cliente;

/// Distingue "campo ausente" (no tocar) de "campo en null" (limpiar)
fn doble_opcional<'de, T, D>(de: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(de).map(Some)
}

#[derive(Debug, Deserialize, Validate)]
pub struct CrearClienteRequest {
    #[validate(length(min = 1, message = "El nombre es requerido"))]
    pub nombre: String,
    pub telefono: Option<String>,
    pub placa: Option<String>,
}

/// Los campos de membresía usan doble opcional: ausente = no tocar,
/// `null` = limpiar.
#[derive(Debug, Deserialize)]
pub struct ActualizarClienteRequest {
    pub nombre: Option<String>,
    pub telefono: Option<String>,
    pub placa: Option<String>,
    #[serde(default, deserialize_with = "doble_opcional")]
    pub membresia_id: Option<Option<Uuid>>,
    #[serde(default, deserialize_with = "doble_opcional")]
    pub fecha_inicio_membresia: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "doble_opcional")]
    pub fecha_fin_membresia: Option<Option<NaiveDate>>,
}

#[derive(Debug, Serialize)]
pub struct ClienteResponse {
    pub id: Uuid,
    pub nombre: String,
    pub telefono: Option<String>,
    pub placa: Option<String>,
    pub membresia_id: Option<Uuid>,
    pub membresia_nombre: Option<String>,
    pub fecha_inicio_membresia: Option<NaiveDate>,
    pub fecha_fin_membresia: Option<NaiveDate>,
    /// Derivado: la membresía está vigente hoy
    pub membresia_activa: bool,
    pub created_at: DateTime<Utc>,
}

impl ClienteResponse {
    pub fn from_cliente(cliente: Cliente, hoy: NaiveDate) -> Self {
        let membresia_activa = cliente.membresia_activa(hoy);
        Self {
            id: cliente.id,
            nombre: cliente.nombre,
            telefono: cliente.telefono,
            placa: cliente.placa,
            membresia_id: cliente.membresia_id,
            membresia_nombre: cliente.membresia_nombre,
            fecha_inicio_membresia: cliente.fecha_inicio_membresia,
            fecha_fin_membresia: cliente.fecha_fin_membresia,
            membresia_activa,
            created_at: cliente.created_at,
        }
    }
}
