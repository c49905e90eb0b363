//! Décourt-Quaresma Calculator
//!
//! Décourt & Quaresma (1978), with the α/β adjustment factors of the 1996
//! revision. Tip: `Rp = α·K·Np·A`, with Np the mean blow-count of the
//! settlement layer and its two immediate neighbors (the layer below may be
//! the impenetrable sentinel). Shaft: `Rl = β·10·(Nl/3 + 1)·U·L`, with Nl
//! the mean blow-count of the layers strictly above the tip averaging
//! window. Admissible capacity is the ultimate capacity over 2.

use crate::coefficients::DecourtQuaresmaProvider;
use crate::errors::CalcResult;
use crate::piles::{Estaca, EstacaDecourtQuaresma};
use crate::profile::{Estrategia, PerfilSPT};
use crate::soil::{SoloDecourtQuaresma, SoloDecourtQuaresmaK};

use super::{solo_da_medida, MetodoCalculo, ResultadoCalculo};

const FATOR_SEGURANCA: f64 = 2.0;

pub struct DecourtQuaresmaCalculator {
    provider: DecourtQuaresmaProvider,
}

impl DecourtQuaresmaCalculator {
    pub fn new(provider: DecourtQuaresmaProvider) -> Self {
        DecourtQuaresmaCalculator { provider }
    }

    /// Tip blow-count: mean of the settlement layer and both neighbors
    pub fn calcular_np(&self, perfil: &PerfilSPT, cota_assentamento: f64) -> CalcResult<f64> {
        let na_cota = perfil.obter_medida(cota_assentamento, Estrategia::Exata)?;
        let acima = perfil.obter_medida(
            (cota_assentamento - 1.0).max(0.0),
            Estrategia::MaisProxima,
        )?;
        // Below the deepest layer this is the impenetrable sentinel
        let abaixo = perfil.obter_medida(cota_assentamento + 1.0, Estrategia::MaisProxima)?;
        Ok((na_cota.n_spt + acima.n_spt + abaixo.n_spt) / 3.0)
    }

    /// Shaft blow-count: mean of the stored layers strictly above the tip
    /// averaging window; 0 when no layer qualifies
    pub fn calcular_nl(&self, perfil: &PerfilSPT, cota_assentamento: f64) -> f64 {
        let limite = cota_assentamento - 1.0;
        let valores: Vec<f64> = perfil
            .medidas()
            .iter()
            .filter(|m| m.profundidade < limite - 1e-6)
            .map(|m| m.n_spt)
            .collect();
        if valores.is_empty() {
            0.0
        } else {
            valores.iter().sum::<f64>() / valores.len() as f64
        }
    }

    /// `Rp = α·K·Np·A`
    pub fn calcular_rp(alpha: f64, np: f64, k: f64, area_ponta: f64) -> f64 {
        alpha * np * k * area_ponta
    }

    /// `Rl = β·10·(Nl/3 + 1)·U·L`
    pub fn calcular_rl(beta: f64, nl: f64, perimetro: f64, comprimento: f64) -> f64 {
        beta * 10.0 * (nl / 3.0 + 1.0) * perimetro * comprimento
    }
}

impl MetodoCalculo for DecourtQuaresmaCalculator {
    fn calcular(&self, perfil: &PerfilSPT, estaca: &Estaca) -> CalcResult<ResultadoCalculo> {
        let medida_ponta =
            perfil.obter_medida(estaca.cota_assentamento, Estrategia::MaisProxima)?;
        let cota = medida_ponta.profundidade;

        let solo_canonico = solo_da_medida(&medida_ponta)?;
        let solo_k = SoloDecourtQuaresmaK::from_canonical(solo_canonico);
        let solo = SoloDecourtQuaresma::from_canonical(solo_canonico);
        let estaca_dq = EstacaDecourtQuaresma::from_tipo(estaca.tipo);

        let np = self.calcular_np(perfil, cota)?;
        let k = self.provider.get_k(solo_k, estaca.processo_construcao);
        let alpha = self.provider.get_alpha(solo, estaca_dq);
        let rp = Self::calcular_rp(alpha, np, k, estaca.area_ponta());

        let nl = self.calcular_nl(perfil, cota);
        let beta = self.provider.get_beta(solo, estaca_dq);
        let rl = Self::calcular_rl(beta, nl, estaca.perimetro(), cota);

        let adm = (rp + rl) / FATOR_SEGURANCA;
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

    fn calculator() -> DecourtQuaresmaCalculator {
        DecourtQuaresmaCalculator::new(DecourtQuaresmaProvider::new())
    }

    #[test]
    fn test_calcular_returns_resultado() {
        let estaca = EstacaFactory::criar_circular(
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
        assert!(
            (resultado.capacidade_carga_adm - resultado.capacidade_carga / 2.0).abs() < 1e-9
        );
    }

    #[test]
    fn test_np_three_layer_mean() {
        // Cota 5: mean of layers 4, 5, 6 = (6 + 8 + 13)/3 = 9
        let np = calculator().calcular_np(&perfil_spt(), 5.0).unwrap();
        assert!((np - 9.0).abs() < 1e-9);
    }

    #[test]
    fn test_np_at_last_layer_uses_sentinel() {
        // Cota 11: layer below is the sentinel N=50 → (32 + 36 + 50)/3
        let np = calculator().calcular_np(&perfil_spt(), 11.0).unwrap();
        assert!((np - (32.0 + 36.0 + 50.0) / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_nl_excludes_tip_window() {
        // Cota 5: shaft layers are those above depth 4 → 1, 2, 3
        let nl = calculator().calcular_nl(&perfil_spt(), 5.0);
        assert!((nl - (3.0 + 3.0 + 5.0) / 3.0).abs() < 1e-9);
        // Cota 2: window swallows everything
        assert_eq!(calculator().calcular_nl(&perfil_spt(), 2.0), 0.0);
    }

    #[test]
    fn test_rp_formula_exact() {
        let rp = DecourtQuaresmaCalculator::calcular_rp(1.0, 10.0, 120.0, 0.09);
        assert!((rp - 108.0).abs() < 1e-9);
    }

    #[test]
    fn test_cota_parada() {
        assert_eq!(calculator().cota_parada(&perfil_spt()).unwrap(), 10.0);
    }

    #[test]
    fn test_process_changes_k() {
        let perfil = perfil_spt();
        let cravada = EstacaFactory::criar_circular(
            TipoEstaca::PreMoldada,
            ProcessoConstrucao::Deslocamento,
            0.3,
            5.0,
        )
        .unwrap();
        let escavada = EstacaFactory::criar_circular(
            TipoEstaca::Escavada,
            ProcessoConstrucao::Escavada,
            0.3,
            5.0,
        )
        .unwrap();
        let r1 = calculator().calcular(&perfil, &cravada).unwrap();
        let r2 = calculator().calcular(&perfil, &escavada).unwrap();
        assert!(r1.resistencia_ponta > r2.resistencia_ponta);
    }
}
