//! Liquidación de lavadores
//!
//! La comisión se calcula por lavada entregada: porcentaje del valor para
//! los tipos marcados como lavada base; los tipos no base no generan
//! comisión por porcentaje.

use serde::Serialize;

/// Una lavada entregada vista desde la liquidación
#[derive(Debug, Clone)]
pub struct LavadaLiquidable {
    pub valor: i64,
    pub es_base: bool,
}

/// Resumen de pago de un lavador en una ventana de fechas
#[derive(Debug, Clone, Serialize)]
pub struct ResumenPago {
    pub lavadas: usize,
    pub valor_total: i64,
    pub comision: i64,
}

/// Comisión de una lavada individual
pub fn calcular_comision(valor: i64, porcentaje_pago: i32, es_base: bool) -> i64 {
    if !es_base {
        return 0;
    }
    ((valor as f64) * (porcentaje_pago as f64) / 100.0).round() as i64
}

/// Acumula el resumen sobre las lavadas entregadas del lavador
pub fn resumen(entregadas: &[LavadaLiquidable], porcentaje_pago: i32) -> ResumenPago {
    let mut resumen = ResumenPago {
        lavadas: entregadas.len(),
        valor_total: 0,
        comision: 0,
    };

    for lavada in entregadas {
        resumen.valor_total += lavada.valor;
        resumen.comision += calcular_comision(lavada.valor, porcentaje_pago, lavada.es_base);
    }

    resumen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comision_solo_en_tipos_base() {
        assert_eq!(calcular_comision(20000, 40, true), 8000);
        assert_eq!(calcular_comision(20000, 40, false), 0);
    }

    #[test]
    fn test_comision_redondea_al_peso() {
        // 15500 * 33% = 5115
        assert_eq!(calcular_comision(15500, 33, true), 5115);
        // 12501 * 40% = 5000.4 -> 5000
        assert_eq!(calcular_comision(12501, 40, true), 5000);
    }

    #[test]
    fn test_resumen_acumula() {
        let entregadas = vec![
            LavadaLiquidable {
                valor: 20000,
                es_base: true,
            },
            LavadaLiquidable {
                valor: 35000,
                es_base: false,
            },
            LavadaLiquidable {
                valor: 10000,
                es_base: true,
            },
        ];

        let r = resumen(&entregadas, 40);
        assert_eq!(r.lavadas, 3);
        assert_eq!(r.valor_total, 65000);
        assert_eq!(r.comision, 8000 + 4000);
    }

    #[test]
    fn test_resumen_vacio() {
        let r = resumen(&[], 40);
        assert_eq!(r.lavadas, 0);
        assert_eq!(r.valor_total, 0);
        assert_eq!(r.comision, 0);
    }
}
