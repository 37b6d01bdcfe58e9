//! Conciliación de pagos parciales contra el valor de la lavada
//!
//! Una lavada acumula abonos (método + monto) y solo puede entregarse
//! cuando la suma cuadra con el total dentro de la tolerancia. La
//! tolerancia es un umbral con nombre, configurable por entorno, que
//! absorbe el redondeo por entrada; el valor por defecto es 1 peso.

use serde::{Deserialize, Serialize};

use crate::models::lavada::Pago;

/// Tolerancia por defecto: 1 peso de diferencia absoluta
pub const TOLERANCIA_PAGO_DEFECTO: i64 = 1;

/// Estado de conciliación de los pagos de una lavada
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstadoPago {
    #[serde(rename = "pagado")]
    Pagado,
    #[serde(rename = "parcial")]
    Parcial,
    #[serde(rename = "sin-pagar")]
    SinPagar,
}

/// Resultado de conciliar los pagos contra el total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reconciliacion {
    pub suma_pagos: i64,
    pub diferencia: i64,
    pub estado: EstadoPago,
}

/// Concilia la lista de abonos contra el total. Cada monto se redondea al
/// peso antes de sumar.
pub fn reconciliar(pagos: &[Pago], total: i64, tolerancia: i64) -> Reconciliacion {
    let suma_pagos: i64 = pagos.iter().map(|p| p.valor.round() as i64).sum();
    let diferencia = suma_pagos - total;

    let pagado = if total == 0 {
        pagos.is_empty() || diferencia.abs() < tolerancia
    } else {
        !pagos.is_empty() && diferencia.abs() < tolerancia
    };

    let estado = if pagado {
        EstadoPago::Pagado
    } else if suma_pagos > 0 {
        EstadoPago::Parcial
    } else {
        EstadoPago::SinPagar
    };

    Reconciliacion {
        suma_pagos,
        diferencia,
        estado,
    }
}

/// Todos los abonos llevan método de pago asignado. Requisito aparte del
/// cuadre numérico para poder entregar.
pub fn metodos_completos(pagos: &[Pago]) -> bool {
    pagos.iter().all(|p| p.metodo_pago_id.is_some())
}

/// Monto sugerido para un abono nuevo: el saldo pendiente, nunca negativo.
pub fn sugerencia_abono(pagos: &[Pago], total: i64) -> i64 {
    let suma: i64 = pagos.iter().map(|p| p.valor.round() as i64).sum();
    (total - suma).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn pago(valor: f64) -> Pago {
        Pago {
            metodo_pago_id: Some(Uuid::new_v4()),
            nombre: Some("Efectivo".to_string()),
            valor,
        }
    }

    #[test]
    fn test_total_cero_sin_pagos_queda_pagado() {
        let r = reconciliar(&[], 0, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(r.estado, EstadoPago::Pagado);
        assert_eq!(r.suma_pagos, 0);
        assert_eq!(r.diferencia, 0);
    }

    #[test]
    fn test_total_cero_con_pago_descuadrado() {
        let r = reconciliar(&[pago(500.0)], 0, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(r.estado, EstadoPago::Parcial);
        assert_eq!(r.diferencia, 500);
    }

    #[test]
    fn test_total_positivo_exige_pagos() {
        // diff == -total pero sin abonos: sin pagar
        let r = reconciliar(&[], 25000, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(r.estado, EstadoPago::SinPagar);
    }

    #[test]
    fn test_cuadre_exacto() {
        let r = reconciliar(&[pago(15000.0), pago(10000.0)], 25000, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(r.estado, EstadoPago::Pagado);
        assert_eq!(r.suma_pagos, 25000);
        assert_eq!(r.diferencia, 0);
    }

    #[test]
    fn test_borde_de_tolerancia() {
        // diferencia exactamente 1: |1| < 1 es falso, no queda pagado
        let r = reconciliar(&[pago(25001.0)], 25000, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(r.diferencia, 1);
        assert_eq!(r.estado, EstadoPago::Parcial);

        // diferencia exactamente -1
        let r = reconciliar(&[pago(24999.0)], 25000, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(r.diferencia, -1);
        assert_eq!(r.estado, EstadoPago::Parcial);

        // 0.99 por entrada se redondea al peso antes de sumar
        let r = reconciliar(&[pago(24999.99)], 25000, TOLERANCIA_PAGO_DEFECTO);
        assert_eq!(r.suma_pagos, 25000);
        assert_eq!(r.estado, EstadoPago::Pagado);
    }

    #[test]
    fn test_tolerancia_configurable() {
        // Con tolerancia 100 un descuadre de 50 pesos pasa
        let r = reconciliar(&[pago(24950.0)], 25000, 100);
        assert_eq!(r.estado, EstadoPago::Pagado);
    }

    #[test]
    fn test_metodos_completos() {
        let mut sin_metodo = pago(15000.0);
        sin_metodo.metodo_pago_id = None;

        assert!(metodos_completos(&[pago(1000.0)]));
        assert!(!metodos_completos(&[sin_metodo, pago(10000.0)]));
        assert!(metodos_completos(&[]));
    }

    #[test]
    fn test_sugerencia_abono() {
        assert_eq!(sugerencia_abono(&[pago(15000.0)], 25000), 10000);
        assert_eq!(sugerencia_abono(&[], 25000), 25000);
        // Sobrepago: la sugerencia queda en 0, nunca negativa
        assert_eq!(sugerencia_abono(&[pago(30000.0)], 25000), 0);
    }
}
