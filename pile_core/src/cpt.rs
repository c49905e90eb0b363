//! # CPT Soundings and CPT→SPT Conversion
//!
//! Cone Penetration Test profiles and the empirical correlations that turn
//! them into equivalent SPT profiles, so every calculator can consume a CPT
//! sounding unchanged.
//!
//! Two correlations are available: Robertson et al. (1983) qc/N ratios by
//! soil behavior, and the Aoki-Velloso (1975) K-based conversion. Soil
//! behavior is classified from the friction ratio `Rf = fs/qc·100`.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::cpt::{converter_cpt_para_spt, PerfilCPT};
//!
//! let mut perfil = PerfilCPT::new("CPT-01");
//! perfil
//!     .adicionar_medidas(vec![(1.0, 5.0, 50.0), (2.0, 10.0, 60.0)])
//!     .unwrap();
//! let spt = converter_cpt_para_spt(&perfil, "robertson_1983").unwrap();
//! assert_eq!(spt.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::profile::{ModoAgregacao, PerfilSPT};

/// Friction ratio at or above which the soil behaves as cohesive (%)
const RF_COESIVO: f64 = 2.5;

const DEPTH_EPS: f64 = 1e-6;

/// Test variant, detected from the presence of pore-pressure data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TipoEnsaio {
    Cpt,
    Cptu,
}

/// A single CPT reading: cone resistance `qc` in MPa, sleeve friction `fs`
/// in kPa, optional pore pressure `u2` in kPa (CPTU)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedidaCPT {
    pub profundidade: f64,
    pub qc: f64,
    pub fs: f64,
    pub u2: Option<f64>,
}

impl MedidaCPT {
    pub fn new(profundidade: f64, qc: f64, fs: f64, u2: Option<f64>) -> CalcResult<Self> {
        if profundidade < 0.0 {
            return Err(CalcError::invalid_input(
                "profundidade",
                profundidade.to_string(),
                "Depth must be non-negative",
            ));
        }
        if qc <= 0.0 || fs < 0.0 {
            return Err(CalcError::invalid_input(
                "qc/fs",
                format!("qc={qc}, fs={fs}"),
                "Cone resistance must be positive and sleeve friction non-negative",
            ));
        }
        Ok(MedidaCPT {
            profundidade,
            qc,
            fs,
            u2,
        })
    }

    /// Cone resistance in kPa
    pub fn qc_kpa(&self) -> f64 {
        self.qc * 1000.0
    }

    /// Friction ratio Rf in percent
    pub fn rf(&self) -> f64 {
        self.fs / self.qc_kpa() * 100.0
    }

    /// Cohesive behavior (high friction ratio)
    pub fn is_cohesive(&self) -> bool {
        self.rf() >= RF_COESIVO
    }

    pub fn tipo_ensaio(&self) -> TipoEnsaio {
        if self.u2.is_some() {
            TipoEnsaio::Cptu
        } else {
            TipoEnsaio::Cpt
        }
    }
}

/// Ordered, depth-indexed CPT sounding
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerfilCPT {
    pub nome_sondagem: String,
    medidas: Vec<MedidaCPT>,
}

impl PerfilCPT {
    pub fn new(nome_sondagem: impl Into<String>) -> Self {
        PerfilCPT {
            nome_sondagem: nome_sondagem.into(),
            medidas: Vec::new(),
        }
    }

    /// Append (depth, qc, fs) triples, keeping depths strictly increasing
    pub fn adicionar_medidas(
        &mut self,
        medidas: impl IntoIterator<Item = (f64, f64, f64)>,
    ) -> CalcResult<()> {
        for (profundidade, qc, fs) in medidas {
            self.adicionar_medida(profundidade, qc, fs, None)?;
        }
        Ok(())
    }

    pub fn adicionar_medida(
        &mut self,
        profundidade: f64,
        qc: f64,
        fs: f64,
        u2: Option<f64>,
    ) -> CalcResult<()> {
        let medida = MedidaCPT::new(profundidade, qc, fs, u2)?;
        let pos = self
            .medidas
            .partition_point(|m| m.profundidade < profundidade - DEPTH_EPS);
        if self
            .medidas
            .get(pos)
            .is_some_and(|m| (m.profundidade - profundidade).abs() <= DEPTH_EPS)
        {
            return Err(CalcError::invalid_input(
                "profundidade",
                profundidade.to_string(),
                "Duplicate depth in profile",
            ));
        }
        self.medidas.insert(pos, medida);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.medidas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medidas.is_empty()
    }

    pub fn profundidade_minima(&self) -> Option<f64> {
        self.medidas.first().map(|m| m.profundidade)
    }

    pub fn profundidade_maxima(&self) -> Option<f64> {
        self.medidas.last().map(|m| m.profundidade)
    }

    pub fn medidas(&self) -> &[MedidaCPT] {
        &self.medidas
    }

    /// Aggregate cone resistance (MPa) over the closed depth interval
    pub fn obter_qc_intervalo(
        &self,
        inicio: f64,
        fim: f64,
        modo: ModoAgregacao,
    ) -> CalcResult<f64> {
        let valores: Vec<f64> = self
            .medidas
            .iter()
            .filter(|m| m.profundidade >= inicio - DEPTH_EPS && m.profundidade <= fim + DEPTH_EPS)
            .map(|m| m.qc)
            .collect();
        if valores.is_empty() {
            return Err(CalcError::invalid_input(
                "intervalo",
                format!("[{inicio}, {fim}]"),
                "No measurements in interval",
            ));
        }
        match modo {
            ModoAgregacao::Media => Ok(valores.iter().sum::<f64>() / valores.len() as f64),
        }
    }
}

// ============================================================================
// Correlations
// ============================================================================

/// CPT→SPT correlation model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Correlacao {
    /// qc/N ratios by soil behavior, Robertson et al. (1983)
    #[default]
    Robertson1983,
    /// `N = qc/K` with the Aoki-Velloso (1975) K per soil type
    AokiVelloso1975,
}

impl Correlacao {
    pub const ALL: [Correlacao; 2] = [Correlacao::Robertson1983, Correlacao::AokiVelloso1975];

    pub fn id(&self) -> &'static str {
        match self {
            Correlacao::Robertson1983 => "robertson_1983",
            Correlacao::AokiVelloso1975 => "aoki_velloso_1975",
        }
    }

    pub fn from_id(id: &str) -> CalcResult<Self> {
        Correlacao::ALL
            .into_iter()
            .find(|c| c.id() == id.trim())
            .ok_or_else(|| CalcError::not_supported("correlacao_cpt_spt", id))
    }
}

/// Converts a CPT sounding into an equivalent SPT profile
#[derive(Debug, Clone, Copy, Default)]
pub struct CptParaSptConverter {
    correlacao: Correlacao,
}

impl CptParaSptConverter {
    pub fn new(correlacao: Correlacao) -> Self {
        CptParaSptConverter { correlacao }
    }

    /// Soil behavior label from the friction ratio, in the vocabulary the
    /// calculators' soil taxonomy understands
    fn classificar_solo(medida: &MedidaCPT) -> &'static str {
        if medida.is_cohesive() {
            "argila"
        } else if medida.rf() >= 1.0 {
            "silte_arenoso"
        } else {
            "areia"
        }
    }

    /// Equivalent blow-count, clamped to the usable SPT range 1..=60
    fn n_spt_equivalente(&self, medida: &MedidaCPT) -> u32 {
        let n = match self.correlacao {
            Correlacao::Robertson1983 => {
                // qc/N in MPa: ~0.2 for clays, ~0.45 for granular soils
                let razao = if medida.is_cohesive() { 0.2 } else { 0.45 };
                medida.qc / razao
            }
            Correlacao::AokiVelloso1975 => {
                let k_kpa: f64 = match Self::classificar_solo(medida) {
                    "argila" => 200.0,
                    "silte_arenoso" => 550.0,
                    _ => 1000.0,
                };
                medida.qc_kpa() / k_kpa
            }
        };
        (n.round() as i64).clamp(1, 60) as u32
    }

    /// Produce the equivalent SPT profile, one layer per CPT reading
    pub fn convert(&self, perfil_cpt: &PerfilCPT) -> CalcResult<PerfilSPT> {
        if perfil_cpt.is_empty() {
            return Err(CalcError::invalid_input(
                "perfil_cpt",
                perfil_cpt.nome_sondagem.clone(),
                "Profile has no measurements",
            ));
        }
        let mut perfil_spt = PerfilSPT::new(perfil_cpt.nome_sondagem.clone());
        for medida in perfil_cpt.medidas() {
            perfil_spt.adicionar_medida(
                medida.profundidade,
                self.n_spt_equivalente(medida),
                Self::classificar_solo(medida),
            )?;
        }
        Ok(perfil_spt)
    }
}

/// One-shot conversion by correlation id
pub fn converter_cpt_para_spt(perfil_cpt: &PerfilCPT, correlacao_id: &str) -> CalcResult<PerfilSPT> {
    let correlacao = Correlacao::from_id(correlacao_id)?;
    CptParaSptConverter::new(correlacao).convert(perfil_cpt)
}

/// Ids of the available correlations
pub fn listar_correlacoes() -> Vec<&'static str> {
    Correlacao::ALL.iter().map(|c| c.id()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medida_derivations() {
        let medida = MedidaCPT::new(2.0, 5.0, 50.0, None).unwrap();
        assert_eq!(medida.qc_kpa(), 5000.0);
        assert!((medida.rf() - 1.0).abs() < 1e-9);
        assert_eq!(medida.tipo_ensaio(), TipoEnsaio::Cpt);
        assert_eq!(
            MedidaCPT::new(2.0, 5.0, 50.0, Some(100.0))
                .unwrap()
                .tipo_ensaio(),
            TipoEnsaio::Cptu
        );
    }

    #[test]
    fn test_cohesive_detection() {
        // Rf = 0.5% → granular; Rf = 5% → cohesive
        assert!(!MedidaCPT::new(2.0, 10.0, 50.0, None).unwrap().is_cohesive());
        assert!(MedidaCPT::new(2.0, 2.0, 100.0, None).unwrap().is_cohesive());
    }

    #[test]
    fn test_perfil_basico() {
        let mut perfil = PerfilCPT::new("CPT-01");
        perfil
            .adicionar_medidas(vec![(1.0, 2.0, 30.0), (2.0, 5.0, 50.0), (3.0, 10.0, 60.0)])
            .unwrap();
        assert_eq!(perfil.len(), 3);
        assert_eq!(perfil.profundidade_minima(), Some(1.0));
        assert_eq!(perfil.profundidade_maxima(), Some(3.0));

        let media = perfil
            .obter_qc_intervalo(1.0, 3.0, ModoAgregacao::Media)
            .unwrap();
        assert!((media - 17.0 / 3.0).abs() < 0.1);

        let err = perfil.adicionar_medida(2.0, 4.0, 40.0, None).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_conversion_produces_spt() {
        let mut perfil = PerfilCPT::new("CPT-01");
        perfil
            .adicionar_medidas(vec![(1.0, 2.0, 20.0), (2.0, 5.0, 40.0), (3.0, 10.0, 50.0)])
            .unwrap();
        let spt = CptParaSptConverter::default().convert(&perfil).unwrap();
        assert_eq!(spt.len(), 3);
        assert_eq!(spt.nome_sondagem, "CPT-01");
        for medida in spt.medidas() {
            assert!(medida.n_spt >= 1.0 && medida.n_spt <= 60.0);
        }
    }

    #[test]
    fn test_correlations_differ() {
        let mut perfil = PerfilCPT::new("CPT-02");
        perfil
            .adicionar_medidas(vec![(1.0, 5.0, 50.0), (2.0, 10.0, 60.0)])
            .unwrap();
        let robertson = converter_cpt_para_spt(&perfil, "robertson_1983").unwrap();
        let aoki = converter_cpt_para_spt(&perfil, "aoki_velloso_1975").unwrap();
        assert_ne!(
            robertson.medidas()[0].n_spt,
            aoki.medidas()[0].n_spt
        );
    }

    #[test]
    fn test_unknown_correlation() {
        let mut perfil = PerfilCPT::new("CPT-03");
        perfil.adicionar_medidas(vec![(1.0, 5.0, 50.0)]).unwrap();
        let err = converter_cpt_para_spt(&perfil, "schmertmann_1970").unwrap_err();
        assert_eq!(err.error_code(), "NOT_SUPPORTED");
    }

    #[test]
    fn test_listar_correlacoes() {
        let ids = listar_correlacoes();
        assert!(ids.contains(&"robertson_1983"));
        assert!(ids.contains(&"aoki_velloso_1975"));
    }
}
