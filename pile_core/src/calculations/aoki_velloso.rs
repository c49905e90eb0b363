//! Aoki-Velloso Calculator
//!
//! Implements Aoki & Velloso (1975); the revision is picked by the provider
//! the calculator is constructed with, so the same code serves the original
//! tables and the Laprovitera (1988) revision.
//!
//! Tip: `Rp = (K·Np)/F1 · A`, with Np the blow-count of the settlement
//! layer. Shaft: accumulated layer by layer down to the settlement depth,
//! each layer contributing `U·e·(α·K·Nl)/F2` with its own soil's K/α.
//! Admissible capacity is the ultimate capacity over a global factor of 2.

use crate::coefficients::AokiVellosoProvider;
use crate::errors::CalcResult;
use crate::piles::Estaca;
use crate::profile::{Estrategia, PerfilSPT};
use crate::soil::AokiVellosoSoilMapper;

use super::{camadas_ate, solo_da_medida, MetodoCalculo, ResultadoCalculo};

/// Global safety factor shared by both Aoki-Velloso revisions
const FATOR_SEGURANCA: f64 = 2.0;

pub struct AokiVellosoCalculator {
    provider: AokiVellosoProvider,
    /// Sounding reliability, selects the α* column where the revision has one
    confiavel: bool,
}

impl AokiVellosoCalculator {
    pub fn new(provider: AokiVellosoProvider) -> Self {
        AokiVellosoCalculator {
            provider,
            confiavel: true,
        }
    }

    /// Treat the sounding as unreliable (Laprovitera α* column)
    pub fn com_sondagem_nao_confiavel(provider: AokiVellosoProvider) -> Self {
        AokiVellosoCalculator {
            provider,
            confiavel: false,
        }
    }

    /// Blow-count entering the tip formula: the settlement layer's own value
    pub fn calcular_np(&self, perfil: &PerfilSPT, cota_assentamento: f64) -> CalcResult<f64> {
        Ok(perfil
            .obter_medida(cota_assentamento, Estrategia::MaisProxima)?
            .n_spt)
    }

    /// `Rp = (K·Np)/F1 · A`
    pub fn calcular_rp(k: f64, np: f64, f1: f64, area_ponta: f64) -> f64 {
        (k * np) / f1 * area_ponta
    }

    /// One layer's shaft contribution: `U·e·(α·K·Nl)/F2`
    pub fn calcular_rl_parcial(
        alpha: f64,
        k: f64,
        nl: f64,
        f2: f64,
        perimetro: f64,
        espessura: f64,
    ) -> f64 {
        perimetro * espessura * (alpha * k * nl) / f2
    }
}

impl MetodoCalculo for AokiVellosoCalculator {
    fn calcular(&self, perfil: &PerfilSPT, estaca: &Estaca) -> CalcResult<ResultadoCalculo> {
        let medida_ponta =
            perfil.obter_medida(estaca.cota_assentamento, Estrategia::MaisProxima)?;
        let cota = medida_ponta.profundidade;

        let solo_ponta =
            AokiVellosoSoilMapper::map_soil_type(solo_da_medida(&medida_ponta)?);
        let k_ponta = self.provider.get_k(solo_ponta)?;
        let (f1, f2) = self
            .provider
            .get_f1_f2(estaca.tipo, estaca.dimensao_caracteristica())?;

        let rp = Self::calcular_rp(k_ponta, medida_ponta.n_spt, f1, estaca.area_ponta());

        let mut rl = 0.0;
        for (espessura, medida) in camadas_ate(perfil, cota) {
            let solo = AokiVellosoSoilMapper::map_soil_type(solo_da_medida(medida)?);
            let k = self.provider.get_k(solo)?;
            let alpha = self.provider.get_alpha_com_confianca(solo, self.confiavel)?;
            rl += Self::calcular_rl_parcial(
                alpha,
                k,
                medida.n_spt,
                f2,
                estaca.perimetro(),
                espessura,
            );
        }

        let adm = (rp + rl) / FATOR_SEGURANCA;
        ResultadoCalculo::new(cota, rp, rl, adm)
    }
}
