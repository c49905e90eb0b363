//! # SPT Soil Profile
//!
//! Depth-indexed container of Standard Penetration Test measurements with the
//! retrieval strategies the calculators depend on: exact match, nearest,
//! at-or-before, and linear interpolation.
//!
//! Depths are strictly increasing and need not be integer or evenly spaced.
//! Queries beyond the deepest stored measurement do not fail: by geotechnical
//! convention the unexplored soil below the sounding is treated as
//! impenetrable, so the profile synthesizes a sentinel measurement with the
//! blow-count pinned at the impenetrable threshold and the flag set.
//!
//! ## Example
//!
//! ```rust
//! use pile_core::profile::{Estrategia, PerfilSPT};
//!
//! let mut perfil = PerfilSPT::new("SP-01");
//! perfil
//!     .adicionar_medidas(vec![(1.0, 5, "argila"), (2.0, 10, "areia")])
//!     .unwrap();
//!
//! let medida = perfil.obter_medida(1.0, Estrategia::Exata).unwrap();
//! assert_eq!(medida.n_spt, 5.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::soil::normalize_soil_text;

/// Blow-count at or above which a layer counts as impenetrable, and the
/// value assigned to sentinel measurements synthesized below the sounding.
pub const N_SPT_IMPENETRAVEL: f64 = 50.0;

/// Tolerance for comparing depths (field logs carry centimeter precision)
const DEPTH_EPS: f64 = 1e-6;

/// A single SPT measurement: depth, blow-count and the soil description
/// transcribed from the field log. Immutable after ingestion.
///
/// `n_spt` is stored as a float so that interpolated and sentinel
/// measurements share the type; ingestion only accepts whole blow-counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedidaSPT {
    /// Depth below ground level (m)
    pub profundidade: f64,

    /// Blow-count N_SPT (whole for stored layers, fractional when interpolated)
    pub n_spt: f64,

    /// Raw soil-type text as logged (parsed lazily by the calculators)
    pub tipo_solo: String,

    /// True when the layer stops the calculation: blow-count at the
    /// threshold or the log says the sampler did not advance
    pub impenetravel: bool,
}

impl MedidaSPT {
    /// Build a measurement, deriving the impenetrable flag
    pub fn new(profundidade: f64, n_spt: f64, tipo_solo: impl Into<String>) -> CalcResult<Self> {
        if profundidade < 0.0 {
            return Err(CalcError::invalid_input(
                "profundidade",
                profundidade.to_string(),
                "Depth must be non-negative",
            ));
        }
        if n_spt < 0.0 {
            return Err(CalcError::invalid_input(
                "n_spt",
                n_spt.to_string(),
                "Blow-count must be non-negative",
            ));
        }
        let tipo_solo = tipo_solo.into();
        let impenetravel =
            n_spt >= N_SPT_IMPENETRAVEL || normalize_soil_text(&tipo_solo) == "impenetravel";
        Ok(MedidaSPT {
            profundidade,
            n_spt,
            tipo_solo,
            impenetravel,
        })
    }

    /// Sentinel measurement for depths below the explored profile
    pub fn sentinela_impenetravel(profundidade: f64) -> Self {
        MedidaSPT {
            profundidade,
            n_spt: N_SPT_IMPENETRAVEL,
            tipo_solo: "impenetravel".to_string(),
            impenetravel: true,
        }
    }
}

/// Measurement-retrieval strategy for [`PerfilSPT::obter_medida`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Estrategia {
    /// Require a stored measurement at exactly the queried depth
    Exata,
    /// Measurement minimizing the absolute depth difference; ties break
    /// toward the smaller depth
    #[default]
    MaisProxima,
    /// Deepest stored measurement at or above the queried depth
    Anterior,
    /// Linear interpolation of the blow-count between the bounding layers
    Interpolar,
}

/// Aggregation mode for interval queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModoAgregacao {
    /// Arithmetic mean
    Media,
}

/// Ordered, depth-indexed SPT sounding.
///
/// Built incrementally by appending batches of (depth, blow-count, soil)
/// triples; read-only once handed to a calculator. Duplicate depths are
/// rejected at ingestion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PerfilSPT {
    /// Sounding identifier (e.g. "SP-01")
    pub nome_sondagem: String,

    /// Step used by [`PerfilSPT::iterar_profundidades`] (m)
    pub intervalo_padrao: f64,

    /// Measurements sorted by strictly increasing depth
    medidas: Vec<MedidaSPT>,
}

impl PerfilSPT {
    /// Create an empty profile with the standard 1 m iteration step
    pub fn new(nome_sondagem: impl Into<String>) -> Self {
        Self::com_intervalo(nome_sondagem, 1.0)
    }

    /// Create an empty profile with a custom iteration step
    pub fn com_intervalo(nome_sondagem: impl Into<String>, intervalo_padrao: f64) -> Self {
        PerfilSPT {
            nome_sondagem: nome_sondagem.into(),
            intervalo_padrao,
            medidas: Vec::new(),
        }
    }

    /// Append a batch of (depth, blow-count, soil-type) triples.
    ///
    /// Fails on a duplicate depth; on failure no measurement of the batch is
    /// discarded but the profile may hold a prefix of it, so treat an error
    /// as fatal for the profile being built.
    pub fn adicionar_medidas<S: Into<String>>(
        &mut self,
        medidas: impl IntoIterator<Item = (f64, u32, S)>,
    ) -> CalcResult<()> {
        for (profundidade, n_spt, tipo_solo) in medidas {
            self.adicionar_medida(profundidade, n_spt, tipo_solo)?;
        }
        Ok(())
    }

    /// Append a single measurement, keeping depths strictly increasing
    pub fn adicionar_medida(
        &mut self,
        profundidade: f64,
        n_spt: u32,
        tipo_solo: impl Into<String>,
    ) -> CalcResult<()> {
        let medida = MedidaSPT::new(profundidade, f64::from(n_spt), tipo_solo)?;
        match self.busca(profundidade) {
            Ok(_) => Err(CalcError::invalid_input(
                "profundidade",
                profundidade.to_string(),
                "Duplicate depth in profile",
            )),
            Err(pos) => {
                self.medidas.insert(pos, medida);
                Ok(())
            }
        }
    }

    /// Number of stored measurements
    pub fn len(&self) -> usize {
        self.medidas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.medidas.is_empty()
    }

    /// Membership test by depth
    pub fn contem(&self, profundidade: f64) -> bool {
        self.busca(profundidade).is_ok()
    }

    /// Shallowest stored depth
    pub fn profundidade_minima(&self) -> Option<f64> {
        self.medidas.first().map(|m| m.profundidade)
    }

    /// Deepest stored depth
    pub fn profundidade_maxima(&self) -> Option<f64> {
        self.medidas.last().map(|m| m.profundidade)
    }

    /// Stored measurements in depth order
    pub fn medidas(&self) -> &[MedidaSPT] {
        &self.medidas
    }

    /// Retrieve a measurement at the queried depth using the given strategy.
    ///
    /// A query below the deepest stored measurement returns the impenetrable
    /// sentinel regardless of strategy.
    pub fn obter_medida(&self, profundidade: f64, estrategia: Estrategia) -> CalcResult<MedidaSPT> {
        if profundidade < 0.0 {
            return Err(CalcError::invalid_input(
                "profundidade",
                profundidade.to_string(),
                "Depth must be non-negative",
            ));
        }
        let maxima = self.profundidade_maxima().ok_or_else(|| {
            CalcError::invalid_input(
                "perfil",
                self.nome_sondagem.clone(),
                "Profile has no measurements",
            )
        })?;
        if profundidade > maxima + DEPTH_EPS {
            return Ok(MedidaSPT::sentinela_impenetravel(profundidade));
        }

        match estrategia {
            Estrategia::Exata => match self.busca(profundidade) {
                Ok(i) => Ok(self.medidas[i].clone()),
                Err(_) => Err(CalcError::measurement_not_found(
                    profundidade,
                    self.nome_sondagem.clone(),
                )),
            },
            Estrategia::MaisProxima => {
                // Strict comparison keeps the first (smaller-depth) layer on ties
                let mut melhor = &self.medidas[0];
                for medida in &self.medidas[1..] {
                    if (medida.profundidade - profundidade).abs()
                        < (melhor.profundidade - profundidade).abs()
                    {
                        melhor = medida;
                    }
                }
                Ok(melhor.clone())
            }
            Estrategia::Anterior => self
                .medidas
                .iter()
                .rev()
                .find(|m| m.profundidade <= profundidade + DEPTH_EPS)
                .cloned()
                .ok_or_else(|| {
                    CalcError::measurement_not_found(profundidade, self.nome_sondagem.clone())
                }),
            Estrategia::Interpolar => self.interpolar(profundidade),
        }
    }

    fn interpolar(&self, profundidade: f64) -> CalcResult<MedidaSPT> {
        if let Ok(i) = self.busca(profundidade) {
            // Stored depth: exact value, zero interpolation error
            return Ok(self.medidas[i].clone());
        }
        let minima = self.profundidade_minima().unwrap_or(0.0);
        if profundidade < minima - DEPTH_EPS {
            return Err(CalcError::invalid_input(
                "profundidade",
                profundidade.to_string(),
                "Interpolation outside the profile's depth range",
            ));
        }
        let acima = self
            .medidas
            .iter()
            .rev()
            .find(|m| m.profundidade < profundidade)
            .expect("bounded below by profundidade_minima");
        let abaixo = self
            .medidas
            .iter()
            .find(|m| m.profundidade > profundidade)
            .expect("bounded above by profundidade_maxima");

        let fracao = (profundidade - acima.profundidade) / (abaixo.profundidade - acima.profundidade);
        let n_spt = acima.n_spt + (abaixo.n_spt - acima.n_spt) * fracao;

        Ok(MedidaSPT {
            profundidade,
            n_spt,
            tipo_solo: acima.tipo_solo.clone(),
            impenetravel: n_spt >= N_SPT_IMPENETRAVEL,
        })
    }

    /// Aggregate the blow-counts of every measurement whose depth lies in
    /// the closed interval `[inicio, fim]`.
    pub fn obter_n_spt_intervalo(
        &self,
        inicio: f64,
        fim: f64,
        modo: ModoAgregacao,
    ) -> CalcResult<f64> {
        let valores: Vec<f64> = self
            .medidas
            .iter()
            .filter(|m| {
                m.profundidade >= inicio - DEPTH_EPS && m.profundidade <= fim + DEPTH_EPS
            })
            .map(|m| m.n_spt)
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

    /// Finite, restartable sequence of depths stepping by `intervalo_padrao`
    /// from the shallowest to the deepest stored depth (inclusive).
    pub fn iterar_profundidades(&self) -> impl Iterator<Item = f64> + '_ {
        let minima = self.profundidade_minima().unwrap_or(0.0);
        // Empty profile or degenerate step: empty sequence
        let maxima = match self.profundidade_maxima() {
            Some(maxima) if self.intervalo_padrao > 0.0 => maxima,
            _ => minima - 1.0,
        };
        let passo = self.intervalo_padrao;
        // Index-based stepping avoids accumulating float error
        (0u32..)
            .map(move |i| minima + f64::from(i) * passo)
            .take_while(move |p| *p <= maxima + DEPTH_EPS)
    }

    /// Binary search by depth within tolerance
    fn busca(&self, profundidade: f64) -> Result<usize, usize> {
        match self
            .medidas
            .binary_search_by(|m| m.profundidade.total_cmp(&profundidade))
        {
            Ok(i) => Ok(i),
            Err(i) => {
                if i < self.medidas.len()
                    && (self.medidas[i].profundidade - profundidade).abs() <= DEPTH_EPS
                {
                    Ok(i)
                } else if i > 0 && (self.medidas[i - 1].profundidade - profundidade).abs() <= DEPTH_EPS
                {
                    Ok(i - 1)
                } else {
                    Err(i)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn perfil() -> PerfilSPT {
        let mut perfil = PerfilSPT::new("SP-01");
        perfil
            .adicionar_medidas(vec![
                (1.0, 5, "argila"),
                (2.0, 10, "areia"),
                (3.0, 15, "areia"),
                (4.0, 20, "areia"),
            ])
            .unwrap();
        perfil
    }

    #[test]
    fn test_basic_operations() {
        let perfil = perfil();
        assert_eq!(perfil.len(), 4);
        assert_eq!(perfil.profundidade_minima(), Some(1.0));
        assert_eq!(perfil.profundidade_maxima(), Some(4.0));
        assert!(perfil.contem(2.0));
        assert!(!perfil.contem(5.0));
    }

    #[test]
    fn test_duplicate_depth_rejected() {
        let mut perfil = perfil();
        let err = perfil.adicionar_medida(2.0, 12, "areia").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert_eq!(perfil.len(), 4);
    }

    #[test]
    fn test_out_of_order_ingestion_sorts() {
        let mut perfil = PerfilSPT::new("SP-02");
        perfil
            .adicionar_medidas(vec![(3.0, 15, "areia"), (1.0, 5, "argila"), (2.0, 10, "areia")])
            .unwrap();
        let profundidades: Vec<f64> = perfil.medidas().iter().map(|m| m.profundidade).collect();
        assert_eq!(profundidades, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_exata() {
        let perfil = perfil();
        for m in perfil.medidas() {
            let achada = perfil.obter_medida(m.profundidade, Estrategia::Exata).unwrap();
            assert_eq!(achada.profundidade, m.profundidade);
            assert_eq!(achada.n_spt, m.n_spt);
        }
        let err = perfil.obter_medida(2.5, Estrategia::Exata).unwrap_err();
        assert_eq!(err.error_code(), "MEASUREMENT_NOT_FOUND");
    }

    #[test]
    fn test_mais_proxima() {
        let perfil = perfil();
        let medida = perfil.obter_medida(2.3, Estrategia::MaisProxima).unwrap();
        assert_eq!(medida.profundidade, 2.0);
        // Equidistant: smaller depth wins
        let medida = perfil.obter_medida(2.5, Estrategia::MaisProxima).unwrap();
        assert_eq!(medida.profundidade, 2.0);
    }

    #[test]
    fn test_anterior() {
        let perfil = perfil();
        let medida = perfil.obter_medida(2.5, Estrategia::Anterior).unwrap();
        assert_eq!(medida.profundidade, 2.0);
        let err = perfil.obter_medida(0.5, Estrategia::Anterior).unwrap_err();
        assert_eq!(err.error_code(), "MEASUREMENT_NOT_FOUND");
    }

    #[test]
    fn test_interpolar() {
        let perfil = perfil();
        // Stored depth: exact value
        let medida = perfil.obter_medida(2.0, Estrategia::Interpolar).unwrap();
        assert_eq!(medida.n_spt, 10.0);
        // Midway between 10 and 15
        let medida = perfil.obter_medida(2.5, Estrategia::Interpolar).unwrap();
        assert!((medida.n_spt - 12.5).abs() < 1e-9);
        // Below the shallowest layer is not interpolable
        let err = perfil.obter_medida(0.5, Estrategia::Interpolar).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_impenetravel_beyond_profile() {
        let perfil = perfil();
        for estrategia in [
            Estrategia::Exata,
            Estrategia::MaisProxima,
            Estrategia::Anterior,
            Estrategia::Interpolar,
        ] {
            let medida = perfil.obter_medida(5.0, estrategia).unwrap();
            assert!(medida.impenetravel);
            assert_eq!(medida.n_spt, N_SPT_IMPENETRAVEL);
        }
    }

    #[test]
    fn test_medida_impenetravel_flag() {
        assert!(MedidaSPT::new(10.0, 50.0, "areia").unwrap().impenetravel);
        assert!(MedidaSPT::new(10.0, 45.0, "Impenetrável").unwrap().impenetravel);
        assert!(!MedidaSPT::new(5.0, 25.0, "areia").unwrap().impenetravel);
    }

    #[test]
    fn test_obter_n_spt_intervalo() {
        let perfil = perfil();
        let media = perfil
            .obter_n_spt_intervalo(1.0, 4.0, ModoAgregacao::Media)
            .unwrap();
        assert_eq!(media, 12.5); // (5+10+15+20)/4
    }

    #[test]
    fn test_iterar_profundidades() {
        let mut perfil = PerfilSPT::com_intervalo("SP-03", 0.5);
        perfil
            .adicionar_medidas(vec![(1.0, 5, "argila"), (2.0, 10, "areia")])
            .unwrap();
        let profundidades: Vec<f64> = perfil.iterar_profundidades().collect();
        assert_eq!(profundidades, vec![1.0, 1.5, 2.0]);
        // Restartable: a second call yields the same sequence
        let de_novo: Vec<f64> = perfil.iterar_profundidades().collect();
        assert_eq!(profundidades, de_novo);
    }

    #[test]
    fn test_fractional_depths() {
        let mut perfil = PerfilSPT::new("SP-04");
        perfil
            .adicionar_medidas(vec![(1.5, 8, "argila"), (2.75, 12, "areia")])
            .unwrap();
        let medida = perfil.obter_medida(1.5, Estrategia::Exata).unwrap();
        assert_eq!(medida.n_spt, 8.0);
    }
}
