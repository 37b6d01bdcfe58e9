//! Cálculo del valor de una lavada
//!
//! El valor es una función pura del tipo de lavado y de los snapshots de
//! adicionales. Los adicionales incluidos en el paquete no se cobran
//! aparte. La membresía activa del cliente fuerza el valor a cero; ese
//! override vive aquí, en `valor_para_cliente`, para que ningún llamador
//! pueda recalcular un precio distinto de cero para un miembro vigente.

use chrono::NaiveDate;

use crate::models::adicional::Adicional;
use crate::models::cliente::Cliente;
use crate::models::lavada::AdicionalSnapshot;
use crate::models::tipo_lavado::TipoLavado;

/// Valor de la lavada: precio base del tipo más los adicionales que no
/// vienen incluidos en el paquete. Sin tipo seleccionado la base es 0.
pub fn calcular_valor(tipo: Option<&TipoLavado>, adicionales: &[AdicionalSnapshot]) -> i64 {
    let base = tipo.map(|t| t.precio).unwrap_or(0);

    let extras: i64 = adicionales
        .iter()
        .filter(|a| !tipo.map(|t| t.incluye(a.id)).unwrap_or(false))
        .map(|a| a.precio)
        .sum();

    base + extras
}

/// Valor final considerando la membresía del cliente: una membresía
/// vigente deja la lavada en 0.
pub fn valor_para_cliente(
    cliente: Option<&Cliente>,
    tipo: Option<&TipoLavado>,
    adicionales: &[AdicionalSnapshot],
    hoy: NaiveDate,
) -> i64 {
    if cliente.map(|c| c.membresia_activa(hoy)).unwrap_or(false) {
        return 0;
    }
    calcular_valor(tipo, adicionales)
}

/// Agrega los snapshots de los adicionales incluidos por el tipo que aún
/// no estén presentes. Idempotente: no duplica entradas por id.
pub fn agregar_adicionales_incluidos(
    tipo: &TipoLavado,
    actuales: &[AdicionalSnapshot],
    catalogo: &[Adicional],
) -> Vec<AdicionalSnapshot> {
    let mut resultado = actuales.to_vec();

    for incluido in &tipo.adicionales_incluidos {
        if resultado.iter().any(|a| a.id == *incluido) {
            continue;
        }
        if let Some(adicional) = catalogo.iter().find(|a| a.id == *incluido) {
            resultado.push(AdicionalSnapshot {
                id: adicional.id,
                nombre: adicional.nombre.clone(),
                precio: adicional.precio,
            });
        }
    }

    resultado
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn tipo(precio: i64, incluidos: Vec<Uuid>) -> TipoLavado {
        TipoLavado {
            id: Uuid::new_v4(),
            nombre: "Lavada general".to_string(),
            precio,
            es_base: true,
            adicionales_incluidos: incluidos,
            created_at: Utc::now(),
        }
    }

    fn snapshot(id: Uuid, precio: i64) -> AdicionalSnapshot {
        AdicionalSnapshot {
            id,
            nombre: "Cera".to_string(),
            precio,
        }
    }

    #[test]
    fn test_valor_sin_tipo_es_solo_adicionales() {
        let id = Uuid::new_v4();
        assert_eq!(calcular_valor(None, &[snapshot(id, 5000)]), 5000);
        assert_eq!(calcular_valor(None, &[]), 0);
    }

    #[test]
    fn test_adicional_incluido_no_se_cobra_doble() {
        let cera = Uuid::new_v4();
        let t = tipo(20000, vec![cera]);

        // Escenario del negocio: tipo de 20000 con cera de 5000 incluida
        assert_eq!(calcular_valor(Some(&t), &[snapshot(cera, 5000)]), 20000);
    }

    #[test]
    fn test_adicional_no_incluido_suma() {
        let cera = Uuid::new_v4();
        let grafito = Uuid::new_v4();
        let t = tipo(20000, vec![cera]);

        let adicionales = vec![snapshot(cera, 5000), snapshot(grafito, 8000)];
        assert_eq!(calcular_valor(Some(&t), &adicionales), 28000);
    }

    #[test]
    fn test_agregar_incluidos_es_idempotente() {
        let cera = Uuid::new_v4();
        let t = tipo(20000, vec![cera]);
        let catalogo = vec![Adicional {
            id: cera,
            nombre: "Cera".to_string(),
            precio: 5000,
            created_at: Utc::now(),
        }];

        let una_vez = agregar_adicionales_incluidos(&t, &[], &catalogo);
        let dos_veces = agregar_adicionales_incluidos(&t, &una_vez, &catalogo);

        assert_eq!(una_vez.len(), 1);
        assert_eq!(una_vez, dos_veces);
        assert_eq!(una_vez[0].precio, 5000);
    }

    #[test]
    fn test_incluido_fuera_del_catalogo_se_ignora() {
        let fantasma = Uuid::new_v4();
        let t = tipo(20000, vec![fantasma]);

        let resultado = agregar_adicionales_incluidos(&t, &[], &[]);
        assert!(resultado.is_empty());
    }

    #[test]
    fn test_membresia_activa_fuerza_valor_cero() {
        let t = tipo(20000, vec![]);
        let cliente = Cliente {
            id: Uuid::new_v4(),
            nombre: "Ana".to_string(),
            telefono: None,
            placa: None,
            membresia_id: Some(Uuid::new_v4()),
            membresia_nombre: Some("Mensual".to_string()),
            fecha_inicio_membresia: Some("2025-01-01".parse().unwrap()),
            fecha_fin_membresia: Some("2025-12-31".parse().unwrap()),
            created_at: Utc::now(),
        };

        let hoy = "2025-06-15".parse().unwrap();
        assert_eq!(valor_para_cliente(Some(&cliente), Some(&t), &[], hoy), 0);

        // Membresía vencida: se cobra normal
        let vencido = "2026-01-01".parse().unwrap();
        assert_eq!(
            valor_para_cliente(Some(&cliente), Some(&t), &[], vencido),
            20000
        );

        // Sin cliente: se cobra normal
        assert_eq!(valor_para_cliente(None, Some(&t), &[], hoy), 20000);
    }
}
