//! DTOs de lavadas

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::lavada::{AdicionalSnapshot, EstadoLavada, Lavada, Pago};
use crate::services::lifecycle_service::formatear_duracion;
use crate::services::reconciliation_service::{reconciliar, sugerencia_abono, Reconciliacion};

// Request para crear una lavada
#[derive(Debug, Deserialize)]
pub struct CrearLavadaRequest {
    pub cliente_id: Option<Uuid>,
    pub tipo_lavado_id: Option<Uuid>,
    pub lavador_id: Option<Uuid>,
}

// Request para cambiar el estado del ciclo de vida
#[derive(Debug, Deserialize)]
pub struct CambiarEstadoRequest {
    pub estado: EstadoLavada,
}

#[derive(Debug, Deserialize)]
pub struct CambiarTipoRequest {
    pub tipo_lavado_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct ToggleAdicionalRequest {
    pub adicional_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct AsignarLavadorRequest {
    pub lavador_id: Option<Uuid>,
}

#[derive(Debug, Deserialize)]
pub struct AsignarClienteRequest {
    pub cliente_id: Option<Uuid>,
}

// El arreglo de pagos se reemplaza completo en cada edición
#[derive(Debug, Deserialize)]
pub struct ActualizarPagosRequest {
    pub pagos: Vec<PagoRequest>,
}

#[derive(Debug, Deserialize)]
pub struct PagoRequest {
    pub metodo_pago_id: Option<Uuid>,
    pub nombre: Option<String>,
    pub valor: f64,
}

impl From<PagoRequest> for Pago {
    fn from(req: PagoRequest) -> Self {
        Pago {
            metodo_pago_id: req.metodo_pago_id,
            nombre: req.nombre,
            valor: req.valor,
        }
    }
}

// Filtros del listado
#[derive(Debug, Deserialize)]
pub struct FiltrosLavada {
    pub fecha: Option<NaiveDate>,
    pub estado: Option<String>,
}

/// Respuesta completa de una lavada, con la conciliación de pagos ya
/// calculada y las duraciones congeladas en formato legible.
#[derive(Debug, Serialize)]
pub struct LavadaResponse {
    pub id: Uuid,
    pub estado: EstadoLavada,
    pub cliente_id: Option<Uuid>,
    pub tipo_lavado_id: Option<Uuid>,
    pub lavador_id: Option<Uuid>,
    pub valor: i64,
    pub adicionales: Vec<AdicionalSnapshot>,
    pub pagos: Vec<Pago>,
    pub reconciliacion: Reconciliacion,
    /// Monto sugerido para el próximo abono (saldo pendiente)
    pub sugerencia_abono: i64,
    pub tiempo_espera_inicio: Option<DateTime<Utc>>,
    pub duracion_espera: Option<i64>,
    pub duracion_espera_texto: Option<String>,
    pub tiempo_lavado_inicio: Option<DateTime<Utc>>,
    pub duracion_lavado: Option<i64>,
    pub duracion_lavado_texto: Option<String>,
    pub tiempo_terminado_inicio: Option<DateTime<Utc>>,
    pub duracion_terminado: Option<i64>,
    pub duracion_terminado_texto: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LavadaResponse {
    pub fn from_lavada(lavada: Lavada, tolerancia: i64) -> Self {
        let reconciliacion = reconciliar(&lavada.pagos, lavada.valor, tolerancia);
        let sugerencia = sugerencia_abono(&lavada.pagos, lavada.valor);

        Self {
            id: lavada.id,
            estado: lavada.estado,
            cliente_id: lavada.cliente_id,
            tipo_lavado_id: lavada.tipo_lavado_id,
            lavador_id: lavada.lavador_id,
            valor: lavada.valor,
            reconciliacion,
            sugerencia_abono: sugerencia,
            duracion_espera_texto: lavada.duracion_espera.map(formatear_duracion),
            duracion_lavado_texto: lavada.duracion_lavado.map(formatear_duracion),
            duracion_terminado_texto: lavada.duracion_terminado.map(formatear_duracion),
            adicionales: lavada.adicionales,
            pagos: lavada.pagos,
            tiempo_espera_inicio: lavada.tiempo_espera_inicio,
            duracion_espera: lavada.duracion_espera,
            tiempo_lavado_inicio: lavada.tiempo_lavado_inicio,
            duracion_lavado: lavada.duracion_lavado,
            tiempo_terminado_inicio: lavada.tiempo_terminado_inicio,
            duracion_terminado: lavada.duracion_terminado,
            created_at: lavada.created_at,
        }
    }
}
