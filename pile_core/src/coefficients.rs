//! # Coefficient Providers
//!
//! One provider per empirical method, each wrapping that method's published
//! lookup tables behind a small query interface. Tables are built once at
//! provider construction and never mutated.
//!
//! Values follow the published tables: Aoki & Velloso (1975) fifteen-row
//! K/α table with the F1/F2 pile factors, the Laprovitera (1988) revision
//! with its reduced K values, fixed F1/F2 pairs and the unreliable-SPT α*
//! column, Décourt & Quaresma (1978) K with the 1996 α/β revision, and
//! Teixeira (1996) α/β by soil bucket and pile group.
//!
//! F1 is either a fixed constant or the diameter-dependent `1 + D/0.8` form;
//! the tagged [`Fator1`] makes the distinction explicit and fails with a
//! diameter-required error when the formula branch is selected without one.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::piles::{EstacaDecourtQuaresma, EstacaTeixeira, ProcessoConstrucao, TipoEstaca};
use crate::soil::{SoloDecourtQuaresma, SoloDecourtQuaresmaK, SoloTeixeira, TipoSolo};

// ============================================================================
// Value Objects
// ============================================================================

/// K/α pair for one (method, soil) table row.
///
/// `alpha_star_perc` is the Laprovitera column for soundings of doubtful
/// quality; rows without a published value fall back to `alpha_perc`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoeficienteSolo {
    pub k_kpa: f64,
    pub alpha_perc: f64,
    pub alpha_star_perc: Option<f64>,
}

impl CoeficienteSolo {
    pub const fn new(k_kpa: f64, alpha_perc: f64) -> Self {
        CoeficienteSolo {
            k_kpa,
            alpha_perc,
            alpha_star_perc: None,
        }
    }

    pub const fn com_alpha_star(k_kpa: f64, alpha_perc: f64, alpha_star_perc: f64) -> Self {
        CoeficienteSolo {
            k_kpa,
            alpha_perc,
            alpha_star_perc: Some(alpha_star_perc),
        }
    }

    /// Dimensionless α (tables publish percentages)
    pub fn alpha(&self) -> f64 {
        self.alpha_perc / 100.0
    }

    /// α for the given sounding reliability
    pub fn get_alpha(&self, confiavel: bool) -> f64 {
        if confiavel {
            self.alpha()
        } else {
            self.alpha_star_perc.unwrap_or(self.alpha_perc) / 100.0
        }
    }
}

/// Tip factor F1: a table constant or the diameter-dependent 1975 form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fator1 {
    Fixo(f64),
    /// `F1 = 1 + D/0.8`, D the pile's characteristic dimension in meters
    DependenteDiametro,
}

impl Fator1 {
    fn resolver(&self, tipo: TipoEstaca, diametro: Option<f64>) -> CalcResult<f64> {
        match self {
            Fator1::Fixo(valor) => Ok(*valor),
            Fator1::DependenteDiametro => {
                let d = diametro.ok_or_else(|| CalcError::diameter_required(tipo.key()))?;
                Ok(1.0 + d / 0.8)
            }
        }
    }
}

/// Shaft factor F2: a table constant or a multiple of the resolved F1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Fator2 {
    Fixo(f64),
    MultiploDeF1(f64),
}

impl Fator2 {
    fn resolver(&self, f1: f64) -> f64 {
        match self {
            Fator2::Fixo(valor) => *valor,
            Fator2::MultiploDeF1(mult) => mult * f1,
        }
    }
}

// ============================================================================
// Aoki-Velloso (1975 and Laprovitera 1988)
// ============================================================================

/// Which revision of the Aoki-Velloso tables a provider carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisaoAokiVelloso {
    Original1975,
    Laprovitera1988,
}

/// Coefficient provider for the Aoki-Velloso family.
///
/// Both revisions share the query interface; they differ only in table
/// contents (K/α rows, F1/F2 factors, presence of the α* column).
#[derive(Debug, Clone)]
pub struct AokiVellosoProvider {
    revisao: RevisaoAokiVelloso,
    nome_tabela: &'static str,
    tabela: HashMap<TipoSolo, CoeficienteSolo>,
    fatores: HashMap<TipoEstaca, (Fator1, Fator2)>,
}

impl AokiVellosoProvider {
    /// The original 1975 tables
    pub fn aoki_velloso_1975() -> Self {
        let tabela = HashMap::from([
            (TipoSolo::Areia, CoeficienteSolo::new(1000.0, 1.4)),
            (TipoSolo::AreiaSiltosa, CoeficienteSolo::new(800.0, 2.0)),
            (TipoSolo::AreiaSiltoArgilosa, CoeficienteSolo::new(700.0, 2.4)),
            (TipoSolo::AreiaArgilosa, CoeficienteSolo::new(600.0, 3.0)),
            (TipoSolo::AreiaArgiloSiltosa, CoeficienteSolo::new(500.0, 2.8)),
            (TipoSolo::Silte, CoeficienteSolo::new(400.0, 3.0)),
            (TipoSolo::SilteArenoso, CoeficienteSolo::new(550.0, 2.2)),
            (TipoSolo::SilteArenoArgiloso, CoeficienteSolo::new(450.0, 2.8)),
            (TipoSolo::SilteArgiloso, CoeficienteSolo::new(230.0, 3.4)),
            (TipoSolo::SilteArgiloArenoso, CoeficienteSolo::new(250.0, 3.0)),
            (TipoSolo::Argila, CoeficienteSolo::new(200.0, 6.0)),
            (TipoSolo::ArgilaArenosa, CoeficienteSolo::new(350.0, 2.4)),
            (TipoSolo::ArgilaArenoSiltosa, CoeficienteSolo::new(300.0, 2.8)),
            (TipoSolo::ArgilaSiltosa, CoeficienteSolo::new(220.0, 4.0)),
            (TipoSolo::ArgilaSiltoArenosa, CoeficienteSolo::new(330.0, 3.0)),
        ]);
        let f2 = Fator2::MultiploDeF1(2.0);
        let fatores = HashMap::from([
            (TipoEstaca::Franki, (Fator1::Fixo(2.50), f2)),
            (TipoEstaca::Metalica, (Fator1::Fixo(1.75), f2)),
            (TipoEstaca::PreMoldada, (Fator1::DependenteDiametro, f2)),
            (TipoEstaca::Escavada, (Fator1::Fixo(3.00), f2)),
            (TipoEstaca::Raiz, (Fator1::Fixo(2.00), f2)),
            (TipoEstaca::HeliceContinua, (Fator1::Fixo(2.00), f2)),
            (TipoEstaca::Omega, (Fator1::Fixo(2.00), f2)),
        ]);
        AokiVellosoProvider {
            revisao: RevisaoAokiVelloso::Original1975,
            nome_tabela: "coef_aoki_velloso_1975",
            tabela,
            fatores,
        }
    }

    /// The Laprovitera (1988) revision: reduced K, fixed F1/F2 pairs, α*
    pub fn laprovitera_1988() -> Self {
        let tabela = HashMap::from([
            (TipoSolo::Areia, CoeficienteSolo::new(600.0, 1.4)),
            (TipoSolo::AreiaSiltosa, CoeficienteSolo::new(530.0, 1.9)),
            (TipoSolo::AreiaSiltoArgilosa, CoeficienteSolo::new(530.0, 2.4)),
            (TipoSolo::AreiaArgilosa, CoeficienteSolo::new(530.0, 3.0)),
            (TipoSolo::AreiaArgiloSiltosa, CoeficienteSolo::new(530.0, 2.8)),
            (TipoSolo::Silte, CoeficienteSolo::new(480.0, 3.0)),
            (TipoSolo::SilteArenoso, CoeficienteSolo::new(480.0, 3.0)),
            (TipoSolo::SilteArenoArgiloso, CoeficienteSolo::new(380.0, 3.0)),
            (TipoSolo::SilteArgiloso, CoeficienteSolo::new(300.0, 3.4)),
            (TipoSolo::SilteArgiloArenoso, CoeficienteSolo::new(380.0, 3.0)),
            (TipoSolo::Argila, CoeficienteSolo::new(250.0, 6.0)),
            (
                TipoSolo::ArgilaArenosa,
                CoeficienteSolo::com_alpha_star(480.0, 4.0, 2.6),
            ),
            (TipoSolo::ArgilaArenoSiltosa, CoeficienteSolo::new(380.0, 4.5)),
            (TipoSolo::ArgilaSiltosa, CoeficienteSolo::new(250.0, 5.5)),
            (TipoSolo::ArgilaSiltoArenosa, CoeficienteSolo::new(380.0, 5.0)),
        ]);
        let fatores = HashMap::from([
            (TipoEstaca::Franki, (Fator1::Fixo(2.5), Fator2::Fixo(3.0))),
            (TipoEstaca::Metalica, (Fator1::Fixo(2.4), Fator2::Fixo(3.4))),
            (TipoEstaca::PreMoldada, (Fator1::Fixo(2.0), Fator2::Fixo(3.5))),
            (TipoEstaca::Escavada, (Fator1::Fixo(4.5), Fator2::Fixo(4.5))),
        ]);
        AokiVellosoProvider {
            revisao: RevisaoAokiVelloso::Laprovitera1988,
            nome_tabela: "coef_aoki_velloso_laprovitera_1988",
            tabela,
            fatores,
        }
    }

    pub fn revisao(&self) -> RevisaoAokiVelloso {
        self.revisao
    }

    fn coeficiente(&self, solo: TipoSolo) -> CalcResult<&CoeficienteSolo> {
        self.tabela
            .get(&solo)
            .ok_or_else(|| CalcError::not_supported(self.nome_tabela, solo.canonical_key()))
    }

    /// K in kPa
    pub fn get_k(&self, solo: TipoSolo) -> CalcResult<f64> {
        Ok(self.coeficiente(solo)?.k_kpa)
    }

    /// Dimensionless α, assuming a reliable sounding
    pub fn get_alpha(&self, solo: TipoSolo) -> CalcResult<f64> {
        self.get_alpha_com_confianca(solo, true)
    }

    /// Dimensionless α, selecting the α* column for unreliable soundings
    pub fn get_alpha_com_confianca(&self, solo: TipoSolo, confiavel: bool) -> CalcResult<f64> {
        Ok(self.coeficiente(solo)?.get_alpha(confiavel))
    }

    /// Resolved (F1, F2) for a pile type; needs the diameter when the
    /// revision uses the diameter-dependent F1 form for that type
    pub fn get_f1_f2(&self, tipo: TipoEstaca, diametro: Option<f64>) -> CalcResult<(f64, f64)> {
        let (f1, f2) = self
            .fatores
            .get(&tipo)
            .ok_or_else(|| CalcError::not_supported(self.nome_tabela, tipo.key()))?;
        let f1 = f1.resolver(tipo, diametro)?;
        Ok((f1, f2.resolver(f1)))
    }
}

// ============================================================================
// Décourt-Quaresma (1978, α/β of the 1996 revision)
// ============================================================================

/// Coefficient provider for Décourt-Quaresma.
///
/// The bucket enums make the tables total, so lookups cannot miss; bad keys
/// are rejected earlier, at the taxonomy boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecourtQuaresmaProvider;

impl DecourtQuaresmaProvider {
    pub fn new() -> Self {
        DecourtQuaresmaProvider
    }

    /// K in kPa by the four-row soil grouping and construction process
    pub fn get_k(&self, solo: SoloDecourtQuaresmaK, processo: ProcessoConstrucao) -> f64 {
        use ProcessoConstrucao::{Deslocamento, Escavada};
        match (solo, processo) {
            (SoloDecourtQuaresmaK::Argila, Deslocamento) => 120.0,
            (SoloDecourtQuaresmaK::Argila, Escavada) => 100.0,
            (SoloDecourtQuaresmaK::SilteArgiloso, Deslocamento) => 200.0,
            (SoloDecourtQuaresmaK::SilteArgiloso, Escavada) => 120.0,
            (SoloDecourtQuaresmaK::SilteArenoso, Deslocamento) => 250.0,
            (SoloDecourtQuaresmaK::SilteArenoso, Escavada) => 140.0,
            (SoloDecourtQuaresmaK::Areia, Deslocamento) => 400.0,
            (SoloDecourtQuaresmaK::Areia, Escavada) => 200.0,
        }
    }

    /// Tip factor α by soil and pile bucket
    pub fn get_alpha(&self, solo: SoloDecourtQuaresma, estaca: EstacaDecourtQuaresma) -> f64 {
        use EstacaDecourtQuaresma as E;
        match (solo, estaca) {
            (_, E::Cravada) | (_, E::Injetada) => 1.0,
            (_, E::HeliceContinua) => 0.3,
            (SoloDecourtQuaresma::Argila, E::Escavada | E::EscavadaBentonita | E::Raiz) => 0.85,
            (SoloDecourtQuaresma::Silte, E::Escavada | E::EscavadaBentonita | E::Raiz) => 0.6,
            (SoloDecourtQuaresma::Areia, E::Escavada | E::EscavadaBentonita | E::Raiz) => 0.5,
        }
    }

    /// Shaft factor β by soil and pile bucket
    pub fn get_beta(&self, solo: SoloDecourtQuaresma, estaca: EstacaDecourtQuaresma) -> f64 {
        use EstacaDecourtQuaresma as E;
        match (solo, estaca) {
            (_, E::Cravada) => 1.0,
            (_, E::HeliceContinua) => 1.0,
            (_, E::Raiz) => 1.5,
            (_, E::Injetada) => 3.0,
            (SoloDecourtQuaresma::Argila, E::Escavada) => 0.8,
            (SoloDecourtQuaresma::Argila, E::EscavadaBentonita) => 0.9,
            (SoloDecourtQuaresma::Silte, E::Escavada) => 0.65,
            (SoloDecourtQuaresma::Silte, E::EscavadaBentonita) => 0.75,
            (SoloDecourtQuaresma::Areia, E::Escavada) => 0.5,
            (SoloDecourtQuaresma::Areia, E::EscavadaBentonita) => 0.6,
        }
    }
}

// ============================================================================
// Teixeira (1996)
// ============================================================================

/// Coefficient provider for Teixeira (1996): α in kPa by soil bucket and
/// pile group, β dimensionless by pile group alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeixeiraProvider;

impl TeixeiraProvider {
    pub fn new() -> Self {
        TeixeiraProvider
    }

    /// Tip parameter α in kPa
    pub fn get_alpha(&self, solo: SoloTeixeira, estaca: EstacaTeixeira) -> f64 {
        // Columns: precast/steel driven, Franki, bored, root
        let linha = match solo {
            SoloTeixeira::ArgilaSiltosa => [110.0, 100.0, 100.0, 100.0],
            SoloTeixeira::SilteArgiloso => [160.0, 120.0, 110.0, 110.0],
            SoloTeixeira::ArgilaArenosa => [210.0, 160.0, 130.0, 140.0],
            SoloTeixeira::SilteArenoso => [260.0, 210.0, 160.0, 160.0],
            SoloTeixeira::AreiaArgilosa => [300.0, 240.0, 200.0, 190.0],
            SoloTeixeira::AreiaSiltosa => [360.0, 300.0, 240.0, 220.0],
            SoloTeixeira::Areia => [400.0, 340.0, 270.0, 260.0],
            SoloTeixeira::AreiaComPedregulhos => [440.0, 380.0, 310.0, 290.0],
        };
        let coluna = match estaca {
            EstacaTeixeira::PreMoldada => 0,
            EstacaTeixeira::Franki => 1,
            EstacaTeixeira::Escavada => 2,
            EstacaTeixeira::Raiz => 3,
        };
        linha[coluna]
    }

    /// Shaft parameter β
    pub fn get_beta(&self, estaca: EstacaTeixeira) -> f64 {
        match estaca {
            EstacaTeixeira::PreMoldada => 4.0,
            EstacaTeixeira::Franki => 5.0,
            EstacaTeixeira::Escavada => 4.0,
            EstacaTeixeira::Raiz => 6.0,
        }
    }
}
