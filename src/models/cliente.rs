//! Cliente y su ventana de membresía

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Cliente del lavadero
///
/// El nombre de la membresía viene denormalizado desde el JOIN con la
/// tabla de membresías para poder evaluar la vigencia sin otra consulta.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cliente {
    pub id: Uuid,
    pub nombre: String,
    pub telefono: Option<String>,
    /// Placa de la moto
    pub placa: Option<String>,
    pub membresia_id: Option<Uuid>,
    pub membresia_nombre: Option<String>,
    pub fecha_inicio_membresia: Option<NaiveDate>,
    pub fecha_fin_membresia: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Cliente {
    /// Membresía activa = tiene membresía asignada, su nombre no es la
    /// variante "sin membresía" y hoy cae dentro de la ventana de vigencia.
    pub fn membresia_activa(&self, hoy: NaiveDate) -> bool {
        if self.membresia_id.is_none() {
            return false;
        }
        let nombre = match &self.membresia_nombre {
            Some(n) => n,
            None => return false,
        };
        if nombre.to_lowercase().contains("sin") {
            return false;
        }
        match (self.fecha_inicio_membresia, self.fecha_fin_membresia) {
            (Some(inicio), Some(fin)) => inicio <= hoy && hoy <= fin,
            _ => false,
        }
    }
}

/// Plan de membresía (referencia)
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Membresia {
    pub id: Uuid,
    pub nombre: String,
    pub precio: i64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cliente_con_membresia(nombre: &str, inicio: &str, fin: &str) -> Cliente {
        Cliente {
            id: Uuid::new_v4(),
            nombre: "Carlos".to_string(),
            telefono: None,
            placa: Some("ABC12D".to_string()),
            membresia_id: Some(Uuid::new_v4()),
            membresia_nombre: Some(nombre.to_string()),
            fecha_inicio_membresia: Some(inicio.parse().unwrap()),
            fecha_fin_membresia: Some(fin.parse().unwrap()),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_membresia_vigente() {
        let cliente = cliente_con_membresia("Mensual", "2025-01-01", "2025-01-31");
        assert!(cliente.membresia_activa("2025-01-15".parse().unwrap()));
        assert!(cliente.membresia_activa("2025-01-01".parse().unwrap()));
        assert!(cliente.membresia_activa("2025-01-31".parse().unwrap()));
    }

    #[test]
    fn test_membresia_fuera_de_ventana() {
        let cliente = cliente_con_membresia("Mensual", "2025-01-01", "2025-01-31");
        assert!(!cliente.membresia_activa("2025-02-01".parse().unwrap()));
        assert!(!cliente.membresia_activa("2024-12-31".parse().unwrap()));
    }

    #[test]
    fn test_sin_membresia_no_cuenta() {
        let cliente = cliente_con_membresia("Sin membresía", "2025-01-01", "2025-01-31");
        assert!(!cliente.membresia_activa("2025-01-15".parse().unwrap()));

        let mut sin_referencia = cliente_con_membresia("Mensual", "2025-01-01", "2025-01-31");
        sin_referencia.membresia_id = None;
        assert!(!sin_referencia.membresia_activa("2025-01-15".parse().unwrap()));
    }

    #[test]
    fn test_membresia_sin_fechas_no_cuenta() {
        let mut cliente = cliente_con_membresia("Mensual", "2025-01-01", "2025-01-31");
        cliente.fecha_fin_membresia = None;
        assert!(!cliente.membresia_activa("2025-01-15".parse().unwrap()));
    }
}
