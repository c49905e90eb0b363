//! Per-Method Soil Grouping
//!
//! Each empirical method groups the canonical soil taxonomy its own way:
//! Aoki-Velloso keeps nearly the full taxonomy, Teixeira works on eight
//! buckets, and Décourt-Quaresma collapses everything into three (plus a
//! four-row grouping used only by its K table). Every bucket enum here has a
//! total, deterministic `from_canonical` constructor — no canonical soil can
//! fail to map for any registered method.

use serde::{Deserialize, Serialize};

use crate::soil::types::TipoSolo;

/// Aoki-Velloso soil grouping.
///
/// Near-identity: the 1975 table has a row for every canonical type except
/// gravelly sand, which the method treats as sand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AokiVellosoSoilMapper;

impl AokiVellosoSoilMapper {
    pub fn map_soil_type(solo: TipoSolo) -> TipoSolo {
        match solo {
            TipoSolo::AreiaComPedregulhos => TipoSolo::Areia,
            other => other,
        }
    }
}

/// Décourt-Quaresma three-bucket grouping, used by the alpha and beta tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoloDecourtQuaresma {
    Argila,
    Silte,
    Areia,
}

impl SoloDecourtQuaresma {
    /// Collapse a canonical soil type into the method's three buckets,
    /// keyed by the dominant fraction.
    pub fn from_canonical(solo: TipoSolo) -> Self {
        match solo {
            TipoSolo::Argila
            | TipoSolo::ArgilaArenosa
            | TipoSolo::ArgilaArenoSiltosa
            | TipoSolo::ArgilaSiltosa
            | TipoSolo::ArgilaSiltoArenosa => SoloDecourtQuaresma::Argila,
            TipoSolo::Silte
            | TipoSolo::SilteArenoso
            | TipoSolo::SilteArenoArgiloso
            | TipoSolo::SilteArgiloso
            | TipoSolo::SilteArgiloArenoso => SoloDecourtQuaresma::Silte,
            TipoSolo::Areia
            | TipoSolo::AreiaSiltosa
            | TipoSolo::AreiaSiltoArgilosa
            | TipoSolo::AreiaArgilosa
            | TipoSolo::AreiaArgiloSiltosa
            | TipoSolo::AreiaComPedregulhos => SoloDecourtQuaresma::Areia,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SoloDecourtQuaresma::Argila => "argila",
            SoloDecourtQuaresma::Silte => "silte",
            SoloDecourtQuaresma::Areia => "areia",
        }
    }
}

/// Décourt-Quaresma K-table grouping (the 1978 table has four rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoloDecourtQuaresmaK {
    Argila,
    SilteArgiloso,
    SilteArenoso,
    Areia,
}

impl SoloDecourtQuaresmaK {
    /// Pure silt goes to the clayey-silt row, the lower-K (conservative)
    /// of the two silt rows.
    pub fn from_canonical(solo: TipoSolo) -> Self {
        match solo {
            TipoSolo::Argila
            | TipoSolo::ArgilaArenosa
            | TipoSolo::ArgilaArenoSiltosa
            | TipoSolo::ArgilaSiltosa
            | TipoSolo::ArgilaSiltoArenosa => SoloDecourtQuaresmaK::Argila,
            TipoSolo::Silte | TipoSolo::SilteArgiloso | TipoSolo::SilteArgiloArenoso => {
                SoloDecourtQuaresmaK::SilteArgiloso
            }
            TipoSolo::SilteArenoso | TipoSolo::SilteArenoArgiloso => {
                SoloDecourtQuaresmaK::SilteArenoso
            }
            TipoSolo::Areia
            | TipoSolo::AreiaSiltosa
            | TipoSolo::AreiaSiltoArgilosa
            | TipoSolo::AreiaArgilosa
            | TipoSolo::AreiaArgiloSiltosa
            | TipoSolo::AreiaComPedregulhos => SoloDecourtQuaresmaK::Areia,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SoloDecourtQuaresmaK::Argila => "argila",
            SoloDecourtQuaresmaK::SilteArgiloso => "silte_argiloso",
            SoloDecourtQuaresmaK::SilteArenoso => "silte_arenoso",
            SoloDecourtQuaresmaK::Areia => "areia",
        }
    }
}

/// Teixeira (1996) eight-bucket grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoloTeixeira {
    ArgilaSiltosa,
    SilteArgiloso,
    ArgilaArenosa,
    SilteArenoso,
    AreiaArgilosa,
    AreiaSiltosa,
    Areia,
    AreiaComPedregulhos,
}

impl SoloTeixeira {
    pub fn from_canonical(solo: TipoSolo) -> Self {
        match solo {
            TipoSolo::Argila | TipoSolo::ArgilaSiltosa => SoloTeixeira::ArgilaSiltosa,
            TipoSolo::ArgilaArenosa
            | TipoSolo::ArgilaArenoSiltosa
            | TipoSolo::ArgilaSiltoArenosa => SoloTeixeira::ArgilaArenosa,
            TipoSolo::Silte | TipoSolo::SilteArgiloso | TipoSolo::SilteArgiloArenoso => {
                SoloTeixeira::SilteArgiloso
            }
            TipoSolo::SilteArenoso | TipoSolo::SilteArenoArgiloso => SoloTeixeira::SilteArenoso,
            TipoSolo::AreiaArgilosa | TipoSolo::AreiaArgiloSiltosa => SoloTeixeira::AreiaArgilosa,
            TipoSolo::AreiaSiltosa | TipoSolo::AreiaSiltoArgilosa => SoloTeixeira::AreiaSiltosa,
            TipoSolo::Areia => SoloTeixeira::Areia,
            TipoSolo::AreiaComPedregulhos => SoloTeixeira::AreiaComPedregulhos,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            SoloTeixeira::ArgilaSiltosa => "argila_siltosa",
            SoloTeixeira::SilteArgiloso => "silte_argiloso",
            SoloTeixeira::ArgilaArenosa => "argila_arenosa",
            SoloTeixeira::SilteArenoso => "silte_arenoso",
            SoloTeixeira::AreiaArgilosa => "areia_argilosa",
            SoloTeixeira::AreiaSiltosa => "areia_siltosa",
            SoloTeixeira::Areia => "areia",
            SoloTeixeira::AreiaComPedregulhos => "areia_com_pedregulhos",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aoki_velloso_near_identity() {
        assert_eq!(
            AokiVellosoSoilMapper::map_soil_type(TipoSolo::ArgilaArenosa),
            TipoSolo::ArgilaArenosa
        );
        assert_eq!(
            AokiVellosoSoilMapper::map_soil_type(TipoSolo::AreiaComPedregulhos),
            TipoSolo::Areia
        );
    }

    #[test]
    fn test_decourt_quaresma_collapses_variants() {
        assert_eq!(
            SoloDecourtQuaresma::from_canonical(TipoSolo::Argila),
            SoloDecourtQuaresma::Argila
        );
        assert_eq!(
            SoloDecourtQuaresma::from_canonical(TipoSolo::ArgilaArenosa),
            SoloDecourtQuaresma::Argila
        );
        assert_eq!(
            SoloDecourtQuaresma::from_canonical(TipoSolo::Areia),
            SoloDecourtQuaresma::Areia
        );
    }

    #[test]
    fn test_decourt_quaresma_k_grouping() {
        assert_eq!(
            SoloDecourtQuaresmaK::from_canonical(TipoSolo::Silte),
            SoloDecourtQuaresmaK::SilteArgiloso
        );
        assert_eq!(
            SoloDecourtQuaresmaK::from_canonical(TipoSolo::SilteArenoArgiloso),
            SoloDecourtQuaresmaK::SilteArenoso
        );
    }

    #[test]
    fn test_teixeira_specific_mappings() {
        assert_eq!(
            SoloTeixeira::from_canonical(TipoSolo::ArgilaSiltosa),
            SoloTeixeira::ArgilaSiltosa
        );
        assert_eq!(
            SoloTeixeira::from_canonical(TipoSolo::Silte),
            SoloTeixeira::SilteArgiloso
        );
    }

    // Totality is by construction (exhaustive matches), but keep the
    // behavioral check: every canonical value maps for every method.
    #[test]
    fn test_all_mappers_total() {
        for solo in TipoSolo::ALL {
            let _ = AokiVellosoSoilMapper::map_soil_type(solo);
            let _ = SoloDecourtQuaresma::from_canonical(solo);
            let _ = SoloDecourtQuaresmaK::from_canonical(solo);
            let _ = SoloTeixeira::from_canonical(solo);
        }
    }
}
