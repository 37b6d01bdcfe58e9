//! Verificación previa a la entrega
//!
//! Agrupa la conciliación de pagos y los campos obligatorios (tipo de
//! lavado y lavador asignado) en un solo veredicto que habilita la
//! transición a ENTREGADO. Todos los campos bloqueantes se reportan a la
//! vez; el mensaje humano sigue la prioridad tipo → lavador → pagos.

use serde::{Deserialize, Serialize};

use crate::models::lavada::Lavada;
use crate::services::reconciliation_service::{metodos_completos, reconciliar, EstadoPago};

/// Veredicto de la verificación de entrega
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificacionEntrega {
    pub permitido: bool,
    pub falta_tipo: bool,
    pub falta_lavador: bool,
    pub pagos_incompletos: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mensaje: Option<String>,
}

/// Evalúa si la lavada puede pasar a ENTREGADO.
pub fn verificar_entrega(lavada: &Lavada, tolerancia: i64) -> VerificacionEntrega {
    let reconciliacion = reconciliar(&lavada.pagos, lavada.valor, tolerancia);
    let pagos_ok =
        reconciliacion.estado == EstadoPago::Pagado && metodos_completos(&lavada.pagos);

    let falta_tipo = lavada.tipo_lavado_id.is_none();
    let falta_lavador = lavada.lavador_id.is_none();
    let pagos_incompletos = !pagos_ok;

    let permitido = !falta_tipo && !falta_lavador && !pagos_incompletos;

    let mensaje = if falta_tipo {
        Some("Selecciona el tipo de lavado".to_string())
    } else if falta_lavador {
        Some("Asigna un lavador".to_string())
    } else if pagos_incompletos {
        Some("Los pagos no cuadran con el valor de la lavada".to_string())
    } else {
        None
    };

    VerificacionEntrega {
        permitido,
        falta_tipo,
        falta_lavador,
        pagos_incompletos,
        mensaje,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::lavada::{EstadoLavada, Pago};
    use crate::services::reconciliation_service::TOLERANCIA_PAGO_DEFECTO;
    use chrono::Utc;
    use uuid::Uuid;

    fn lavada_lista() -> Lavada {
        Lavada {
            id: Uuid::new_v4(),
            estado: EstadoLavada::Terminado,
            cliente_id: None,
            tipo_lavado_id: Some(Uuid::new_v4()),
            lavador_id: Some(Uuid::new_v4()),
            valor: 25000,
            adicionales: vec![],
            pagos: vec![Pago {
                metodo_pago_id: Some(Uuid::new_v4()),
                nombre: Some("Efectivo".to_string()),
                valor: 25000.0,
            }],
            tiempo_espera_inicio: None,
            duracion_espera: Some(30),
            tiempo_lavado_inicio: None,
            duracion_lavado: Some(600),
            tiempo_terminado_inicio: Some(Utc::now()),
            duracion_terminado: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_lavada_completa_pasa() {
        let v = verificar_entrega(&lavada_lista(), TOLERANCIA_PAGO_DEFECTO);
        assert!(v.permitido);
        assert!(v.mensaje.is_none());
    }

    #[test]
    fn test_pago_sin_metodo_bloquea_aunque_cuadre() {
        // Escenario: total 25000, dos abonos que suman exacto pero al
        // primero le falta el método de pago
        let mut lavada = lavada_lista();
        lavada.pagos = vec![
            Pago {
                metodo_pago_id: None,
                nombre: None,
                valor: 15000.0,
            },
            Pago {
                metodo_pago_id: Some(Uuid::new_v4()),
                nombre: Some("Efectivo".to_string()),
                valor: 10000.0,
            },
        ];

        let v = verificar_entrega(&lavada, TOLERANCIA_PAGO_DEFECTO);
        assert!(!v.permitido);
        assert!(v.pagos_incompletos);
        assert!(!v.falta_tipo);
        assert!(!v.falta_lavador);
    }

    #[test]
    fn test_todos_los_campos_se_marcan_a_la_vez() {
        let mut lavada = lavada_lista();
        lavada.tipo_lavado_id = None;
        lavada.lavador_id = None;
        lavada.pagos = vec![];

        let v = verificar_entrega(&lavada, TOLERANCIA_PAGO_DEFECTO);
        assert!(!v.permitido);
        assert!(v.falta_tipo);
        assert!(v.falta_lavador);
        assert!(v.pagos_incompletos);
        // El mensaje sigue la prioridad: primero el tipo
        assert_eq!(v.mensaje.as_deref(), Some("Selecciona el tipo de lavado"));
    }

    #[test]
    fn test_prioridad_del_mensaje() {
        let mut lavada = lavada_lista();
        lavada.lavador_id = None;
        let v = verificar_entrega(&lavada, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(v.mensaje.as_deref(), Some("Asigna un lavador"));

        let mut lavada = lavada_lista();
        lavada.pagos = vec![];
        let v = verificar_entrega(&lavada, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(
            v.mensaje.as_deref(),
            Some("Los pagos no cuadran con el valor de la lavada")
        );
    }

    #[test]
    fn test_valor_cero_sin_pagos_pasa() {
        // Lavada de miembro: valor 0 y sin abonos
        let mut lavada = lavada_lista();
        lavada.valor = 0;
        lavada.pagos = vec![];

        let v = verificar_entrega(&lavada, TOLERANCIA_PAGO_DEFECTO);
        assert!(v.permitido);
    }
}
