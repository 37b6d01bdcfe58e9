//! Modelo de la lavada (orden de servicio)
//!
//! Este módulo define la entidad central del sistema: una lavada con su
//! estado de ciclo de vida, cronómetros por fase, adicionales y pagos.
//! Los adicionales y los pagos se guardan como snapshots de valor dentro
//! del registro (política documentada: una lavada es dueña de una copia
//! inmutable de sus líneas con precio, de modo que ediciones posteriores
//! del catálogo no alteran registros históricos).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Estados del ciclo de vida de una lavada
///
/// Se persisten como texto con los nombres que maneja el negocio
/// ("EN ESPERA", "EN LAVADO", "TERMINADO", "ENTREGADO").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoLavada {
    #[serde(rename = "EN ESPERA")]
    EnEspera,
    #[serde(rename = "EN LAVADO")]
    EnLavado,
    #[serde(rename = "TERMINADO")]
    Terminado,
    #[serde(rename = "ENTREGADO")]
    Entregado,
}

impl EstadoLavada {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstadoLavada::EnEspera => "EN ESPERA",
            EstadoLavada::EnLavado => "EN LAVADO",
            EstadoLavada::Terminado => "TERMINADO",
            EstadoLavada::Entregado => "ENTREGADO",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "EN ESPERA" => Some(EstadoLavada::EnEspera),
            "EN LAVADO" => Some(EstadoLavada::EnLavado),
            "TERMINADO" => Some(EstadoLavada::Terminado),
            "ENTREGADO" => Some(EstadoLavada::Entregado),
            _ => None,
        }
    }

    /// Fase cronometrada asociada al estado. ENTREGADO es un marcador
    /// terminal y no corre ningún cronómetro.
    pub fn fase(&self) -> Option<Fase> {
        match self {
            EstadoLavada::EnEspera => Some(Fase::Espera),
            EstadoLavada::EnLavado => Some(Fase::Lavado),
            EstadoLavada::Terminado => Some(Fase::Terminado),
            EstadoLavada::Entregado => None,
        }
    }
}

/// Fases con cronómetro propio
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fase {
    Espera,
    Lavado,
    Terminado,
}

/// Snapshot de un servicio adicional congelado al momento de seleccionarlo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdicionalSnapshot {
    pub id: Uuid,
    pub nombre: String,
    pub precio: i64,
}

/// Un abono parcial aplicado a la lavada
///
/// El nombre del método se denormaliza dentro de la entrada para que el
/// registro sobreviva ediciones del catálogo de métodos de pago.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pago {
    #[serde(default)]
    pub metodo_pago_id: Option<Uuid>,
    #[serde(default)]
    pub nombre: Option<String>,
    pub valor: f64,
}

/// Registro completo de una lavada
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lavada {
    pub id: Uuid,
    pub estado: EstadoLavada,
    pub cliente_id: Option<Uuid>,
    pub tipo_lavado_id: Option<Uuid>,
    pub lavador_id: Option<Uuid>,
    /// Valor total en pesos (entero, sin centavos)
    pub valor: i64,
    pub adicionales: Vec<AdicionalSnapshot>,
    pub pagos: Vec<Pago>,
    // Cronómetros por fase: mientras la fase está activa vive el inicio;
    // al salir de la fase se congela la duración en segundos y el inicio
    // se limpia. Para la fase actual exactamente uno de los dos tiene
    // significado.
    pub tiempo_espera_inicio: Option<DateTime<Utc>>,
    pub duracion_espera: Option<i64>,
    pub tiempo_lavado_inicio: Option<DateTime<Utc>>,
    pub duracion_lavado: Option<i64>,
    pub tiempo_terminado_inicio: Option<DateTime<Utc>>,
    pub duracion_terminado: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Lavada {
    pub fn inicio_de(&self, fase: Fase) -> Option<DateTime<Utc>> {
        match fase {
            Fase::Espera => self.tiempo_espera_inicio,
            Fase::Lavado => self.tiempo_lavado_inicio,
            Fase::Terminado => self.tiempo_terminado_inicio,
        }
    }

    pub fn duracion_de(&self, fase: Fase) -> Option<i64> {
        match fase {
            Fase::Espera => self.duracion_espera,
            Fase::Lavado => self.duracion_lavado,
            Fase::Terminado => self.duracion_terminado,
        }
    }

    /// Busca un adicional por id dentro de los snapshots
    pub fn tiene_adicional(&self, adicional_id: Uuid) -> bool {
        self.adicionales.iter().any(|a| a.id == adicional_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_estado_round_trip() {
        for estado in [
            EstadoLavada::EnEspera,
            EstadoLavada::EnLavado,
            EstadoLavada::Terminado,
            EstadoLavada::Entregado,
        ] {
            assert_eq!(EstadoLavada::parse(estado.as_str()), Some(estado));
        }
        assert_eq!(EstadoLavada::parse("CANCELADO"), None);
    }

    #[test]
    fn test_estado_serde_usa_nombres_de_negocio() {
        let json = serde_json::to_string(&EstadoLavada::EnEspera).unwrap();
        assert_eq!(json, "\"EN ESPERA\"");

        let estado: EstadoLavada = serde_json::from_str("\"ENTREGADO\"").unwrap();
        assert_eq!(estado, EstadoLavada::Entregado);
    }

    #[test]
    fn test_entregado_no_tiene_fase() {
        assert_eq!(EstadoLavada::Entregado.fase(), None);
        assert_eq!(EstadoLavada::EnLavado.fase(), Some(Fase::Lavado));
    }
}
