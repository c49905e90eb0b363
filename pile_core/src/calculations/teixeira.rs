//! Teixeira Calculator
//!
//! Teixeira (1996). Tip: `Rp = α·Np·A`, α in kPa by soil bucket and pile
//! group, Np the settlement layer's blow-count. Shaft: `β·Nl·U` accumulated
//! per layer, β by pile group alone. The admissible capacity takes the
//! minimum of the global-factor value and the partial-factor value
//! `Rp/4 + Rl/1.5`.

use crate::coefficients::TeixeiraProvider;
use crate::errors::CalcResult;
use crate::piles::{Estaca, EstacaTeixeira};
use crate::profile::{Estrategia, PerfilSPT};
use crate::soil::SoloTeixeira;

use super::{camadas_ate, solo_da_medida, MetodoCalculo, ResultadoCalculo};

pub struct TeixeiraCalculator {
    provider: TeixeiraProvider,
}

impl TeixeiraCalculator {
    pub fn new(provider: TeixeiraProvider) -> Self {
        TeixeiraCalculator { provider }
    }

    /// `Rp = α·Np·A`
    pub fn calcular_rp(alpha: f64, np: f64, area_ponta: f64) -> f64 {
        alpha * np * area_ponta
    }

    /// Admissible capacity: `min((Rp+Rl)/2, Rp/4 + Rl/1.5)`
    pub fn calcular_carga_adm(rp: f64, rl: f64) -> f64 {
        let global = (rp + rl) / 2.0;
        let parcial = rp / 4.0 + rl / 1.5;
        global.min(parcial)
    }
}

impl MetodoCalculo for TeixeiraCalculator {
    fn calcular(&self, perfil: &PerfilSPT, estaca: &Estaca) -> CalcResult<ResultadoCalculo> {
        let medida_ponta =
            perfil.obter_medida(estaca.cota_assentamento, Estrategia::MaisProxima)?;
        let cota = medida_ponta.profundidade;

        let grupo = EstacaTeixeira::from_tipo(estaca.tipo)?;
        let solo_ponta = SoloTeixeira::from_canonical(solo_da_medida(&medida_ponta)?);
        let alpha = self.provider.get_alpha(solo_ponta, grupo);
        let rp = Self::calcular_rp(alpha, medida_ponta.n_spt, estaca.area_ponta());

        let beta = self.provider.get_beta(grupo);
        let mut rl = 0.0;
        for (espessura, medida) in camadas_ate(perfil, cota) {
            rl += beta * medida.n_spt * estaca.perimetro() * espessura;
        }

        let adm = Self::calcular_carga_adm(rp, rl);
        ResultadoCalculo::new(cota, rp, rl, adm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piles::{EstacaFactory, ProcessoConstrucao, TipoEstaca};

    fn perfil_spt() -> PerfilSPT {
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
                (8.0, 25, "areia_argilosa"),
                (9.0, 27, "areia_silto_argilosa"),
                (10.0, 32, "areia"),
                (11.0, 36, "areia"),
            ])
            .unwrap();
        perfil
    }

    fn calculator() -> TeixeiraCalculator {
        TeixeiraCalculator::new(TeixeiraProvider::new())
    }

    #[test]
    fn test_calcular_returns_resultado() {
        let estaca = EstacaFactory::criar_quadrada(
            TipoEstaca::PreMoldada,
            ProcessoConstrucao::Deslocamento,
            0.3,
            5.0,
        )
        .unwrap();
        let resultado = calculator().calcular(&perfil_spt(), &estaca).unwrap();
        assert_eq!(resultado.cota, 5.0);
        assert!(resultado.resistencia_ponta > 0.0);
        assert!(resultado.resistencia_lateral > 0.0);
        assert!(resultado.capacidade_carga_adm <= resultado.capacidade_carga / 2.0 + 1e-9);
    }

    #[test]
    fn test_rp_formula_exact() {
        let rp = TeixeiraCalculator::calcular_rp(300.0, 15.0, 0.09);
        assert!((rp - 405.0).abs() < 1e-9);
    }

    #[test]
    fn test_carga_adm_takes_minimum() {
        // min((100+60)/2, 100/4 + 60/1.5) = min(80, 65)
        assert_eq!(TeixeiraCalculator::calcular_carga_adm(100.0, 60.0), 65.0);
        // Shaft-light case flips the minimum to the global factor
        assert_eq!(TeixeiraCalculator::calcular_carga_adm(100.0, 300.0), 200.0);
    }

    #[test]
    fn test_cota_parada() {
        assert_eq!(calculator().cota_parada(&perfil_spt()).unwrap(), 10.0);
    }

    #[test]
    fn test_unsupported_pile_type() {
        let estaca = EstacaFactory::criar_circular(
            TipoEstaca::HeliceContinua,
            ProcessoConstrucao::Escavada,
            0.4,
            5.0,
        )
        .unwrap();
        let err = calculator().calcular(&perfil_spt(), &estaca).unwrap_err();
        assert_eq!(err.error_code(), "NOT_SUPPORTED");
    }
}
