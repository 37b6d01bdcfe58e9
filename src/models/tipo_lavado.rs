//! Tipo de lavado (paquete de servicio)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Paquete de lavado del catálogo
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TipoLavado {
    pub id: Uuid,
    pub nombre: String,
    /// Precio base en pesos
    pub precio: i64,
    /// Marca el tipo como "lavada base" para la fórmula de pago por
    /// porcentaje de los lavadores
    pub es_base: bool,
    /// Adicionales incluidos en el precio del paquete; al calcular el
    /// valor de una lavada estos no se cobran aparte
    pub adicionales_incluidos: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl TipoLavado {
    pub fn incluye(&self, adicional_id: Uuid) -> bool {
        self.adicionales_incluidos.contains(&adicional_id)
    }
}
