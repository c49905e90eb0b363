//! Commercial Cross-Section Catalogs
//!
//! Reference data for the pile sections commonly found in Brazilian practice:
//! precast concrete (circular and square), bored shafts, continuous-flight
//! auger, root piles, Franki shafts, ômega screw piles and driven steel
//! sections (HP and pipe). Diameters and section dimensions follow
//! manufacturer tables; built once behind `Lazy` statics and read-only
//! afterwards.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};
use crate::piles::{Geometria, TipoEstaca};

/// A named catalog cross-section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PerfilCatalogo {
    pub nome: &'static str,
    pub geometria: Geometria,
}

type Catalogo = HashMap<&'static str, PerfilCatalogo>;

fn circular(nome: &'static str, diametro: f64) -> (&'static str, PerfilCatalogo) {
    (
        nome,
        PerfilCatalogo {
            nome,
            geometria: Geometria::Circular { diametro },
        },
    )
}

fn quadrada(nome: &'static str, lado: f64) -> (&'static str, PerfilCatalogo) {
    (
        nome,
        PerfilCatalogo {
            nome,
            geometria: Geometria::Quadrada { lado },
        },
    )
}

fn retangular(nome: &'static str, largura: f64, altura: f64) -> (&'static str, PerfilCatalogo) {
    (
        nome,
        PerfilCatalogo {
            nome,
            geometria: Geometria::Retangular { largura, altura },
        },
    )
}

/// Precast concrete piles (circular and square sections)
pub static CATALOGO_PRE_MOLDADAS: Lazy<Catalogo> = Lazy::new(|| {
    HashMap::from([
        circular("CIRCULAR_200", 0.20),
        circular("CIRCULAR_230", 0.23),
        circular("CIRCULAR_260", 0.26),
        circular("CIRCULAR_330", 0.33),
        circular("CIRCULAR_380", 0.38),
        circular("CIRCULAR_420", 0.42),
        circular("CIRCULAR_500", 0.50),
        circular("CIRCULAR_600", 0.60),
        quadrada("QUADRADA_200", 0.20),
        quadrada("QUADRADA_250", 0.25),
        quadrada("QUADRADA_300", 0.30),
        quadrada("QUADRADA_350", 0.35),
    ])
});

/// Bored shafts; the `_REV` entries are cased (revestida)
pub static CATALOGO_ESCAVADAS: Lazy<Catalogo> = Lazy::new(|| {
    HashMap::from([
        circular("ESCAVADA_250", 0.25),
        circular("ESCAVADA_300", 0.30),
        circular("ESCAVADA_400", 0.40),
        circular("ESCAVADA_500", 0.50),
        circular("ESCAVADA_600", 0.60),
        circular("ESCAVADA_600_REV", 0.60),
        circular("ESCAVADA_700", 0.70),
        circular("ESCAVADA_800", 0.80),
        circular("ESCAVADA_1000", 1.00),
    ])
});

/// Continuous-flight-auger piles
pub static CATALOGO_HELICE_CONTINUA: Lazy<Catalogo> = Lazy::new(|| {
    HashMap::from([
        circular("HELICE_275", 0.275),
        circular("HELICE_300", 0.30),
        circular("HELICE_350", 0.35),
        circular("HELICE_400", 0.40),
        circular("HELICE_500", 0.50),
        circular("HELICE_600", 0.60),
        circular("HELICE_700", 0.70),
        circular("HELICE_800", 0.80),
        circular("HELICE_1000", 1.00),
    ])
});

/// Root piles (micropile family)
pub static CATALOGO_RAIZ: Lazy<Catalogo> = Lazy::new(|| {
    HashMap::from([
        circular("RAIZ_100", 0.10),
        circular("RAIZ_120", 0.12),
        circular("RAIZ_150", 0.15),
        circular("RAIZ_160", 0.16),
        circular("RAIZ_200", 0.20),
        circular("RAIZ_250", 0.25),
        circular("RAIZ_310", 0.31),
        circular("RAIZ_400", 0.40),
    ])
});

/// Franki driven cast-in-place shafts
pub static CATALOGO_FRANKI: Lazy<Catalogo> = Lazy::new(|| {
    HashMap::from([
        circular("FRANKI_300", 0.30),
        circular("FRANKI_350", 0.35),
        circular("FRANKI_400", 0.40),
        circular("FRANKI_450", 0.45),
        circular("FRANKI_520", 0.52),
        circular("FRANKI_600", 0.60),
    ])
});

/// Ômega displacement screw piles
pub static CATALOGO_OMEGA: Lazy<Catalogo> = Lazy::new(|| {
    HashMap::from([
        circular("OMEGA_310", 0.31),
        circular("OMEGA_360", 0.36),
        circular("OMEGA_410", 0.41),
        circular("OMEGA_460", 0.46),
        circular("OMEGA_510", 0.51),
        circular("OMEGA_610", 0.61),
    ])
});

/// Driven steel sections: HP profiles (flange width × depth) and pipes
pub static CATALOGO_PERFIS_METALICOS: Lazy<Catalogo> = Lazy::new(|| {
    HashMap::from([
        retangular("HP_250x62", 0.256, 0.246),
        retangular("HP_310x79", 0.306, 0.299),
        retangular("HP_310x110", 0.310, 0.308),
        retangular("HP_360x132", 0.373, 0.351),
        retangular("HP_360x174", 0.378, 0.361),
        circular("TUBULAR_273x6.4", 0.273),
        circular("TUBULAR_355.6x9.5", 0.3556),
        circular("TUBULAR_406.4x9.5", 0.4064),
    ])
});

fn catalogo_para(tipo: TipoEstaca) -> Option<&'static Catalogo> {
    match tipo {
        TipoEstaca::PreMoldada => Some(&CATALOGO_PRE_MOLDADAS),
        TipoEstaca::Metalica => Some(&CATALOGO_PERFIS_METALICOS),
        TipoEstaca::Franki => Some(&CATALOGO_FRANKI),
        TipoEstaca::Escavada | TipoEstaca::EscavadaBentonita => Some(&CATALOGO_ESCAVADAS),
        TipoEstaca::HeliceContinua => Some(&CATALOGO_HELICE_CONTINUA),
        TipoEstaca::Raiz => Some(&CATALOGO_RAIZ),
        TipoEstaca::Omega => Some(&CATALOGO_OMEGA),
        TipoEstaca::Injetada => None,
    }
}

/// Look up a named cross-section in the catalog for a pile category
pub fn obter_perfil(tipo: TipoEstaca, nome: &str) -> CalcResult<PerfilCatalogo> {
    let catalogo = catalogo_para(tipo)
        .ok_or_else(|| CalcError::profile_not_found(tipo.key(), nome))?;
    catalogo
        .get(nome.trim())
        .copied()
        .ok_or_else(|| CalcError::profile_not_found(tipo.key(), nome))
}

/// Pile categories that carry a catalog
pub fn listar_tipos_estaca() -> Vec<TipoEstaca> {
    TipoEstaca::ALL
        .into_iter()
        .filter(|tipo| catalogo_para(*tipo).is_some())
        .collect()
}

/// Category key → sorted section names, for display
pub fn resumo_catalogos() -> BTreeMap<&'static str, Vec<&'static str>> {
    let mut resumo = BTreeMap::new();
    for tipo in listar_tipos_estaca() {
        // EscavadaBentonita shares the bored catalog; list it once
        if tipo == TipoEstaca::EscavadaBentonita {
            continue;
        }
        let catalogo = catalogo_para(tipo).expect("filtered to cataloged types");
        let mut nomes: Vec<&'static str> = catalogo.keys().copied().collect();
        nomes.sort_unstable();
        resumo.insert(tipo.key(), nomes);
    }
    resumo
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piles::EstacaFactory;

    #[test]
    fn test_catalogs_populated() {
        assert!(CATALOGO_PRE_MOLDADAS.len() >= 10);
        assert!(CATALOGO_ESCAVADAS.len() >= 8);
        assert!(CATALOGO_HELICE_CONTINUA.len() >= 8);
        assert!(CATALOGO_RAIZ.len() >= 6);
        assert!(CATALOGO_FRANKI.len() >= 5);
    }

    #[test]
    fn test_obter_perfil() {
        let perfil = obter_perfil(TipoEstaca::Escavada, "ESCAVADA_600_REV").unwrap();
        assert_eq!(
            perfil.geometria,
            Geometria::Circular { diametro: 0.60 }
        );
        let err = obter_perfil(TipoEstaca::Escavada, "ESCAVADA_9000").unwrap_err();
        assert_eq!(err.error_code(), "PROFILE_NOT_FOUND");
    }

    #[test]
    fn test_steel_profiles() {
        assert!(CATALOGO_PERFIS_METALICOS.contains_key("HP_310x79"));
        assert!(CATALOGO_PERFIS_METALICOS.contains_key("HP_360x132"));
        assert!(CATALOGO_PERFIS_METALICOS.contains_key("TUBULAR_406.4x9.5"));
    }

    #[test]
    fn test_factory_integration() {
        let casos = [
            (TipoEstaca::PreMoldada, "CIRCULAR_330"),
            (TipoEstaca::Escavada, "ESCAVADA_600_REV"),
            (TipoEstaca::HeliceContinua, "HELICE_500"),
            (TipoEstaca::Raiz, "RAIZ_200"),
            (TipoEstaca::Franki, "FRANKI_450"),
            (TipoEstaca::Metalica, "HP_310x79"),
        ];
        for (tipo, nome) in casos {
            let estaca = EstacaFactory::criar_de_catalogo(tipo, nome, 10.0).unwrap();
            assert_eq!(estaca.tipo, tipo);
            assert_eq!(estaca.cota_assentamento, 10.0);
            assert!(estaca.area_ponta() > 0.0);
        }
    }

    #[test]
    fn test_criar_metalica() {
        let estaca = EstacaFactory::criar_metalica("HP_310x79", 15.0).unwrap();
        assert_eq!(estaca.tipo, TipoEstaca::Metalica);
        assert_eq!(estaca.dimensao_caracteristica(), None);
    }

    #[test]
    fn test_listar_e_resumo() {
        let tipos = listar_tipos_estaca();
        for esperado in [
            TipoEstaca::PreMoldada,
            TipoEstaca::Escavada,
            TipoEstaca::HeliceContinua,
            TipoEstaca::Raiz,
            TipoEstaca::Franki,
            TipoEstaca::Omega,
        ] {
            assert!(tipos.contains(&esperado));
        }
        let resumo = resumo_catalogos();
        assert!(resumo.len() >= 6);
        for nomes in resumo.values() {
            assert!(!nomes.is_empty());
        }
    }
}
