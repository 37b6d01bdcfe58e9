//! Transiciones de estado y cronómetros por fase
//!
//! Cada fase (espera, lavado, terminado) lleva su propio cronómetro: un
//! instante de inicio mientras la fase está viva y una duración congelada
//! en segundos cuando la fase termina. Las transiciones las dispara el
//! usuario y no siguen una cadena estricta; la única entrada vigilada es
//! ENTREGADO (ver `completion_service`). El cálculo es puro: devuelve los
//! campos a persistir y el llamador decide qué hacer con ellos.

use chrono::{DateTime, Utc};

use crate::models::lavada::{EstadoLavada, Fase, Lavada};

/// Campos de estado y cronómetros que produce una transición.
/// Se persiste el conjunto completo, nunca un parche parcial.
#[derive(Debug, Clone, PartialEq)]
pub struct CambioEstado {
    pub estado: EstadoLavada,
    pub tiempo_espera_inicio: Option<DateTime<Utc>>,
    pub duracion_espera: Option<i64>,
    pub tiempo_lavado_inicio: Option<DateTime<Utc>>,
    pub duracion_lavado: Option<i64>,
    pub tiempo_terminado_inicio: Option<DateTime<Utc>>,
    pub duracion_terminado: Option<i64>,
}

impl CambioEstado {
    fn desde(lavada: &Lavada) -> Self {
        Self {
            estado: lavada.estado,
            tiempo_espera_inicio: lavada.tiempo_espera_inicio,
            duracion_espera: lavada.duracion_espera,
            tiempo_lavado_inicio: lavada.tiempo_lavado_inicio,
            duracion_lavado: lavada.duracion_lavado,
            tiempo_terminado_inicio: lavada.tiempo_terminado_inicio,
            duracion_terminado: lavada.duracion_terminado,
        }
    }

    fn inicio(&self, fase: Fase) -> Option<DateTime<Utc>> {
        match fase {
            Fase::Espera => self.tiempo_espera_inicio,
            Fase::Lavado => self.tiempo_lavado_inicio,
            Fase::Terminado => self.tiempo_terminado_inicio,
        }
    }

    fn poner_inicio(&mut self, fase: Fase, valor: Option<DateTime<Utc>>) {
        match fase {
            Fase::Espera => self.tiempo_espera_inicio = valor,
            Fase::Lavado => self.tiempo_lavado_inicio = valor,
            Fase::Terminado => self.tiempo_terminado_inicio = valor,
        }
    }

    fn poner_duracion(&mut self, fase: Fase, valor: Option<i64>) {
        match fase {
            Fase::Espera => self.duracion_espera = valor,
            Fase::Lavado => self.duracion_lavado = valor,
            Fase::Terminado => self.duracion_terminado = valor,
        }
    }
}

/// Aplica la transición hacia `destino`. Devuelve `None` cuando el destino
/// es el estado actual (no-op).
pub fn aplicar_transicion(
    lavada: &Lavada,
    destino: EstadoLavada,
    ahora: DateTime<Utc>,
) -> Option<CambioEstado> {
    if destino == lavada.estado {
        return None;
    }

    let mut cambio = CambioEstado::desde(lavada);

    // Al salir de la fase actual se congela su duración si el cronómetro
    // estaba vivo.
    if let Some(fase) = lavada.estado.fase() {
        if let Some(inicio) = cambio.inicio(fase) {
            let segundos = (ahora - inicio).num_seconds().max(0);
            cambio.poner_duracion(fase, Some(segundos));
            cambio.poner_inicio(fase, None);
        }
    }

    match destino {
        // Volver a EN ESPERA reinicia todo el flujo: se descartan las
        // mediciones de lavado y terminado.
        EstadoLavada::EnEspera => {
            cambio.tiempo_espera_inicio = Some(ahora);
            cambio.duracion_espera = None;
            cambio.tiempo_lavado_inicio = None;
            cambio.duracion_lavado = None;
            cambio.tiempo_terminado_inicio = None;
            cambio.duracion_terminado = None;
        }
        EstadoLavada::EnLavado => {
            cambio.tiempo_lavado_inicio = Some(ahora);
            cambio.duracion_lavado = None;
        }
        EstadoLavada::Terminado => {
            cambio.tiempo_terminado_inicio = Some(ahora);
            cambio.duracion_terminado = None;
        }
        // ENTREGADO es marcador terminal: no arranca ningún cronómetro
        EstadoLavada::Entregado => {}
    }

    cambio.estado = destino;
    Some(cambio)
}

/// Formatea segundos como "HhMmSs" omitiendo unidades mayores en cero.
/// Con horas presentes siempre se muestran minutos y segundos.
pub fn formatear_duracion(segundos: i64) -> String {
    let segundos = segundos.max(0);
    let horas = segundos / 3600;
    let minutos = (segundos % 3600) / 60;
    let resto = segundos % 60;

    if horas > 0 {
        format!("{}h {}m {}s", horas, minutos, resto)
    } else if minutos > 0 {
        format!("{}m {}s", minutos, resto)
    } else {
        format!("{}s", resto)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use uuid::Uuid;

    fn lavada_en(estado: EstadoLavada, creada: DateTime<Utc>) -> Lavada {
        Lavada {
            id: Uuid::new_v4(),
            estado,
            cliente_id: None,
            tipo_lavado_id: None,
            lavador_id: None,
            valor: 0,
            adicionales: vec![],
            pagos: vec![],
            tiempo_espera_inicio: Some(creada),
            duracion_espera: None,
            tiempo_lavado_inicio: None,
            duracion_lavado: None,
            tiempo_terminado_inicio: None,
            duracion_terminado: None,
            created_at: creada,
        }
    }

    #[test]
    fn test_mismo_estado_es_noop() {
        let t0 = Utc::now();
        let lavada = lavada_en(EstadoLavada::EnEspera, t0);
        assert!(aplicar_transicion(&lavada, EstadoLavada::EnEspera, t0).is_none());
    }

    #[test]
    fn test_espera_a_lavado_congela_espera() {
        let t0 = Utc::now();
        let lavada = lavada_en(EstadoLavada::EnEspera, t0);

        let cambio = aplicar_transicion(&lavada, EstadoLavada::EnLavado, t0 + Duration::seconds(47))
            .expect("debe producir cambio");

        assert_eq!(cambio.estado, EstadoLavada::EnLavado);
        assert_eq!(cambio.duracion_espera, Some(47));
        assert_eq!(cambio.tiempo_espera_inicio, None);
        assert_eq!(cambio.tiempo_lavado_inicio, Some(t0 + Duration::seconds(47)));
        assert_eq!(cambio.duracion_lavado, None);
    }

    #[test]
    fn test_volver_a_espera_reinicia_todo() {
        let t0 = Utc::now();
        let mut lavada = lavada_en(EstadoLavada::EnLavado, t0);
        lavada.tiempo_espera_inicio = None;
        lavada.duracion_espera = Some(30);
        lavada.tiempo_lavado_inicio = Some(t0 + Duration::seconds(30));
        lavada.duracion_terminado = Some(12);

        let ahora = t0 + Duration::seconds(90);
        let cambio = aplicar_transicion(&lavada, EstadoLavada::EnEspera, ahora).unwrap();

        assert_eq!(cambio.estado, EstadoLavada::EnEspera);
        assert_eq!(cambio.tiempo_espera_inicio, Some(ahora));
        assert_eq!(cambio.duracion_espera, None);
        assert_eq!(cambio.tiempo_lavado_inicio, None);
        assert_eq!(cambio.duracion_lavado, None);
        assert_eq!(cambio.tiempo_terminado_inicio, None);
        assert_eq!(cambio.duracion_terminado, None);
    }

    #[test]
    fn test_entregado_no_arranca_cronometro() {
        let t0 = Utc::now();
        let mut lavada = lavada_en(EstadoLavada::Terminado, t0);
        lavada.tiempo_espera_inicio = None;
        lavada.duracion_espera = Some(30);
        lavada.duracion_lavado = Some(120);
        lavada.tiempo_terminado_inicio = Some(t0);

        let cambio = aplicar_transicion(&lavada, EstadoLavada::Entregado, t0 + Duration::seconds(15))
            .unwrap();

        assert_eq!(cambio.estado, EstadoLavada::Entregado);
        // La fase terminado queda congelada y no arranca nada nuevo
        assert_eq!(cambio.duracion_terminado, Some(15));
        assert_eq!(cambio.tiempo_terminado_inicio, None);
        assert_eq!(cambio.duracion_espera, Some(30));
        assert_eq!(cambio.duracion_lavado, Some(120));
    }

    #[test]
    fn test_salto_directo_conserva_duraciones_previas() {
        let t0 = Utc::now();
        let mut lavada = lavada_en(EstadoLavada::EnEspera, t0);
        lavada.duracion_lavado = Some(99);

        // EN ESPERA -> TERMINADO sin pasar por lavado
        let cambio = aplicar_transicion(&lavada, EstadoLavada::Terminado, t0 + Duration::seconds(10))
            .unwrap();

        assert_eq!(cambio.duracion_espera, Some(10));
        assert_eq!(cambio.duracion_lavado, Some(99));
        assert_eq!(cambio.tiempo_terminado_inicio, Some(t0 + Duration::seconds(10)));
    }

    #[test]
    fn test_reloj_retrocedido_no_da_duracion_negativa() {
        let t0 = Utc::now();
        let lavada = lavada_en(EstadoLavada::EnEspera, t0);

        let cambio = aplicar_transicion(&lavada, EstadoLavada::EnLavado, t0 - Duration::seconds(5))
            .unwrap();
        assert_eq!(cambio.duracion_espera, Some(0));
    }

    #[test]
    fn test_formatear_duracion() {
        assert_eq!(formatear_duracion(45), "45s");
        assert_eq!(formatear_duracion(190), "3m 10s");
        assert_eq!(formatear_duracion(3900), "1h 5m 0s");
        assert_eq!(formatear_duracion(0), "0s");
        assert_eq!(formatear_duracion(3600), "1h 0m 0s");
    }
}
