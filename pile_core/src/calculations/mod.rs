//! # Capacity Calculations
//!
//! The shared calculation contract ([`MetodoCalculo`], [`ResultadoCalculo`])
//! and one calculator per empirical method:
//!
//! - [`aoki_velloso`]: Aoki & Velloso (1975) and the Laprovitera (1988)
//!   revision
//! - [`decourt_quaresma`]: Décourt & Quaresma (1978)
//! - [`teixeira`]: Teixeira (1996)
//!
//! Each calculator is a pure function of its inputs plus the immutable
//! coefficient provider it was built with: no per-call state, idempotent,
//! safe to share across threads.

pub mod aoki_velloso;
pub mod decourt_quaresma;
pub mod teixeira;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::piles::Estaca;
use crate::profile::{MedidaSPT, PerfilSPT};
use crate::soil::TipoSolo;

pub use aoki_velloso::AokiVellosoCalculator;
pub use decourt_quaresma::DecourtQuaresmaCalculator;
pub use teixeira::TeixeiraCalculator;

/// Immutable result of one capacity calculation at one settlement depth.
/// All resistances in kN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultadoCalculo {
    /// Settlement depth the result refers to (m)
    pub cota: f64,
    /// Tip (end-bearing) resistance Rp
    pub resistencia_ponta: f64,
    /// Shaft (friction) resistance Rl
    pub resistencia_lateral: f64,
    /// Ultimate capacity Rp + Rl
    pub capacidade_carga: f64,
    /// Admissible capacity after the method's safety convention
    pub capacidade_carga_adm: f64,
}

impl ResultadoCalculo {
    /// Assemble a result, deriving the ultimate capacity
    pub fn new(
        cota: f64,
        resistencia_ponta: f64,
        resistencia_lateral: f64,
        capacidade_carga_adm: f64,
    ) -> CalcResult<Self> {
        if cota < 1.0 {
            return Err(CalcError::invalid_input(
                "cota",
                cota.to_string(),
                "Result depth must be at least 1 m",
            ));
        }
        Ok(ResultadoCalculo {
            cota,
            resistencia_ponta,
            resistencia_lateral,
            capacidade_carga: resistencia_ponta + resistencia_lateral,
            capacidade_carga_adm,
        })
    }
}

/// Contract every calculation method implements
pub trait MetodoCalculo {
    /// Capacity at the pile's settlement depth
    fn calcular(&self, perfil: &PerfilSPT, estaca: &Estaca) -> CalcResult<ResultadoCalculo>;

    /// Deepest depth at which a full calculation runs without synthesizing
    /// data beyond the profile (the deepest stored layer is reserved as
    /// look-ahead for the methods that read below the tip)
    fn cota_parada(&self, perfil: &PerfilSPT) -> CalcResult<f64> {
        cota_parada(perfil)
    }
}

/// Second-greatest stored depth of the profile
pub(crate) fn cota_parada(perfil: &PerfilSPT) -> CalcResult<f64> {
    let medidas = perfil.medidas();
    if medidas.len() < 2 {
        return Err(CalcError::invalid_input(
            "perfil",
            perfil.nome_sondagem.clone(),
            "Profile needs at least two measurements for a stopping depth",
        ));
    }
    Ok(medidas[medidas.len() - 2].profundidade)
}

/// Parse the canonical soil type from a measurement's logged text
pub(crate) fn solo_da_medida(medida: &MedidaSPT) -> CalcResult<TipoSolo> {
    TipoSolo::from_string(&medida.tipo_solo)
}

/// Stored layers down to the settlement depth, paired with each layer's
/// thickness (difference between consecutive depths; the first layer is
/// measured from the surface)
pub(crate) fn camadas_ate(
    perfil: &PerfilSPT,
    cota: f64,
) -> impl Iterator<Item = (f64, &MedidaSPT)> + '_ {
    let mut anterior = 0.0;
    perfil
        .medidas()
        .iter()
        .take_while(move |m| m.profundidade <= cota + 1e-6)
        .map(move |m| {
            let espessura = m.profundidade - anterior;
            anterior = m.profundidade;
            (espessura, m)
        })
}
