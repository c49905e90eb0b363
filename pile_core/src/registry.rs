//! # Method Registry
//!
//! Process-wide catalog of the calculation methods, keyed by a stable id.
//! Populated once behind a `Lazy` static and read-only afterwards, so
//! concurrent readers need no locking. Each entry carries display metadata
//! and a factory producing a fully wired calculator; calculators are cheap
//! and stateless, create one per request.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::registry;
//!
//! let calc = registry::create_calculator("aoki_velloso_1975").unwrap();
//! let info = registry::get("teixeira_1996").unwrap();
//! assert_eq!(info.name, "Teixeira (1996)");
//! ```

use std::collections::HashMap;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::calculations::{
    AokiVellosoCalculator, DecourtQuaresmaCalculator, MetodoCalculo, TeixeiraCalculator,
};
use crate::coefficients::{AokiVellosoProvider, DecourtQuaresmaProvider, TeixeiraProvider};
use crate::errors::{CalcError, CalcResult};

/// A wired, ready-to-use calculator
pub type Calculador = Box<dyn MetodoCalculo + Send + Sync>;

/// Display metadata for a registered method
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetodoInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub authors: &'static [&'static str],
    pub reference: &'static str,
}

struct RegistroMetodo {
    info: MetodoInfo,
    fabrica: fn() -> Calculador,
}

static REGISTRO: Lazy<HashMap<&'static str, RegistroMetodo>> = Lazy::new(|| {
    let entradas = [
        RegistroMetodo {
            info: MetodoInfo {
                id: "aoki_velloso_1975",
                name: "Aoki e Velloso (1975)",
                authors: &["Nelson Aoki", "Dirceu de Alencar Velloso"],
                reference: "AOKI, N.; VELLOSO, D. A. An approximate method to estimate the \
                            bearing capacity of piles. In: PAN AMERICAN CONFERENCE ON SOIL \
                            MECHANICS AND FOUNDATION ENGINEERING, 5., 1975, Buenos Aires.",
            },
            fabrica: || {
                Box::new(AokiVellosoCalculator::new(
                    AokiVellosoProvider::aoki_velloso_1975(),
                ))
            },
        },
        RegistroMetodo {
            info: MetodoInfo {
                id: "aoki_velloso_laprovitera_1988",
                name: "Aoki e Velloso, revisão de Laprovitera (1988)",
                authors: &["Herbert Laprovitera"],
                reference: "LAPROVITERA, H. Reavaliação de método semi-empírico de previsão \
                            da capacidade de carga de estacas a partir de banco de dados. \
                            Dissertação (Mestrado), COPPE/UFRJ, Rio de Janeiro, 1988.",
            },
            fabrica: || {
                Box::new(AokiVellosoCalculator::new(
                    AokiVellosoProvider::laprovitera_1988(),
                ))
            },
        },
        RegistroMetodo {
            info: MetodoInfo {
                id: "decourt_quaresma_1978",
                name: "Décourt e Quaresma (1978)",
                authors: &["Luciano Décourt", "Arthur Rodrigues Quaresma"],
                reference: "DÉCOURT, L.; QUARESMA, A. R. Capacidade de carga de estacas a \
                            partir de valores de SPT. In: CONGRESSO BRASILEIRO DE MECÂNICA \
                            DOS SOLOS E ENGENHARIA DE FUNDAÇÕES, 6., 1978, Rio de Janeiro.",
            },
            fabrica: || {
                Box::new(DecourtQuaresmaCalculator::new(
                    DecourtQuaresmaProvider::new(),
                ))
            },
        },
        RegistroMetodo {
            info: MetodoInfo {
                id: "teixeira_1996",
                name: "Teixeira (1996)",
                authors: &["Alberto Henriques Teixeira"],
                reference: "TEIXEIRA, A. H. Projeto e execução de fundações. In: SEMINÁRIO \
                            DE ENGENHARIA DE FUNDAÇÕES ESPECIAIS E GEOTECNIA, 3., 1996, \
                            São Paulo.",
            },
            fabrica: || Box::new(TeixeiraCalculator::new(TeixeiraProvider::new())),
        },
    ];
    entradas.into_iter().map(|e| (e.info.id, e)).collect()
});

/// Registered method ids, sorted for stable display
pub fn list_ids() -> Vec<&'static str> {
    let mut ids: Vec<&'static str> = REGISTRO.keys().copied().collect();
    ids.sort_unstable();
    ids
}

/// Metadata for a method id
pub fn get(id: &str) -> CalcResult<&'static MetodoInfo> {
    REGISTRO
        .get(id)
        .map(|e| &e.info)
        .ok_or_else(|| CalcError::method_not_found(id))
}

/// Build a fresh calculator for a method id
pub fn create_calculator(id: &str) -> CalcResult<Calculador> {
    let entrada = REGISTRO
        .get(id)
        .ok_or_else(|| CalcError::method_not_found(id))?;
    Ok((entrada.fabrica)())
}

/// Convenience alias for [`create_calculator`]
pub fn get_calculator(id: &str) -> CalcResult<Calculador> {
    create_calculator(id)
}

/// Metadata for every registered method, in id order
pub fn list_available_methods() -> Vec<&'static MetodoInfo> {
    list_ids()
        .into_iter()
        .map(|id| get(id).expect("listed ids are registered"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piles::{EstacaFactory, ProcessoConstrucao, TipoEstaca};
    use crate::profile::PerfilSPT;

    #[test]
    fn test_builtin_methods_registered() {
        let ids = list_ids();
        for esperado in [
            "aoki_velloso_1975",
            "aoki_velloso_laprovitera_1988",
            "decourt_quaresma_1978",
            "teixeira_1996",
        ] {
            assert!(ids.contains(&esperado));
        }
    }

    #[test]
    fn test_get_method_info() {
        let info = get("aoki_velloso_1975").unwrap();
        assert_eq!(info.name, "Aoki e Velloso (1975)");
        assert!(info.authors[0].contains("Aoki"));
        assert!(info.reference.to_uppercase().contains("AOKI"));
    }

    #[test]
    fn test_get_nonexistent_method() {
        let err = get("metodo_inexistente").unwrap_err();
        assert_eq!(err.error_code(), "METHOD_NOT_FOUND");
        assert!(err.to_string().contains("metodo_inexistente"));
    }

    #[test]
    fn test_list_available_methods() {
        let metodos = list_available_methods();
        assert!(metodos.len() >= 4);
        assert!(metodos.windows(2).all(|par| par[0].id <= par[1].id));
    }

    #[test]
    fn test_all_calculators_return_valid_results() {
        let mut perfil = PerfilSPT::new("SP-01");
        perfil
            .adicionar_medidas(vec![
                (1.0, 3, "argila_arenosa"),
                (2.0, 3, "argila_arenosa"),
                (3.0, 5, "argila_arenosa"),
                (4.0, 6, "argila_arenosa"),
                (5.0, 8, "argila_arenosa"),
                (6.0, 13, "areia_argilosa"),
                (7.0, 17, "areia_argilosa"),
            ])
            .unwrap();
        let estaca = EstacaFactory::criar_circular(
            TipoEstaca::PreMoldada,
            ProcessoConstrucao::Deslocamento,
            0.3,
            5.0,
        )
        .unwrap();
        for id in list_ids() {
            let calc = create_calculator(id).unwrap();
            let resultado = calc.calcular(&perfil, &estaca).unwrap();
            assert!(resultado.capacidade_carga > 0.0, "{id}");
            assert!(resultado.capacidade_carga_adm > 0.0, "{id}");
        }
    }
}
