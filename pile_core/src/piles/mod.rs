//! # Pile Taxonomy and Geometry
//!
//! Pile category and construction-process tags, the cross-section geometry
//! variants with their derived tip area and perimeter, and the factory that
//! builds validated [`Estaca`] values either from raw dimensions or from the
//! commercial cross-section catalogs in [`catalogs`].
//!
//! ## Example
//!
//! ```rust
//! use pile_core::piles::{EstacaFactory, ProcessoConstrucao, TipoEstaca};
//!
//! let estaca = EstacaFactory::criar_circular(
//!     TipoEstaca::PreMoldada,
//!     ProcessoConstrucao::Deslocamento,
//!     0.3,
//!     5.0,
//! )
//! .unwrap();
//! assert!((estaca.perimetro() - std::f64::consts::PI * 0.3).abs() < 1e-9);
//! ```

pub mod catalogs;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::soil::normalize_soil_text;

// ============================================================================
// Pile Category & Construction Process
// ============================================================================

/// Pile category as named on Brazilian foundation drawings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoEstaca {
    PreMoldada,
    Metalica,
    Franki,
    Escavada,
    EscavadaBentonita,
    HeliceContinua,
    Raiz,
    Omega,
    Injetada,
}

impl TipoEstaca {
    pub const ALL: [TipoEstaca; 9] = [
        TipoEstaca::PreMoldada,
        TipoEstaca::Metalica,
        TipoEstaca::Franki,
        TipoEstaca::Escavada,
        TipoEstaca::EscavadaBentonita,
        TipoEstaca::HeliceContinua,
        TipoEstaca::Raiz,
        TipoEstaca::Omega,
        TipoEstaca::Injetada,
    ];

    /// Accent-free snake_case key, stable across the coefficient tables
    pub fn key(&self) -> &'static str {
        match self {
            TipoEstaca::PreMoldada => "pre_moldada",
            TipoEstaca::Metalica => "metalica",
            TipoEstaca::Franki => "franki",
            TipoEstaca::Escavada => "escavada",
            TipoEstaca::EscavadaBentonita => "escavada_bentonita",
            TipoEstaca::HeliceContinua => "helice_continua",
            TipoEstaca::Raiz => "raiz",
            TipoEstaca::Omega => "omega",
            TipoEstaca::Injetada => "injetada",
        }
    }

    /// Display name with the accents the drawings carry
    pub fn nome(&self) -> &'static str {
        match self {
            TipoEstaca::PreMoldada => "pré-moldada",
            TipoEstaca::Metalica => "metálica",
            TipoEstaca::Franki => "franki",
            TipoEstaca::Escavada => "escavada",
            TipoEstaca::EscavadaBentonita => "escavada com bentonita",
            TipoEstaca::HeliceContinua => "hélice contínua",
            TipoEstaca::Raiz => "raiz",
            TipoEstaca::Omega => "ômega",
            TipoEstaca::Injetada => "injetada",
        }
    }

    /// Parse free-form pile-category text (same normalization as soil text)
    pub fn from_string(text: &str) -> CalcResult<Self> {
        let key = normalize_soil_text(text);
        let tipo = match key.as_str() {
            "pre_moldada" => TipoEstaca::PreMoldada,
            "metalica" => TipoEstaca::Metalica,
            "franki" => TipoEstaca::Franki,
            "escavada" => TipoEstaca::Escavada,
            "escavada_bentonita" | "escavada_com_bentonita" => TipoEstaca::EscavadaBentonita,
            "helice_continua" | "helice" => TipoEstaca::HeliceContinua,
            "raiz" => TipoEstaca::Raiz,
            "omega" => TipoEstaca::Omega,
            "injetada" => TipoEstaca::Injetada,
            _ => {
                return Err(CalcError::invalid_input(
                    "tipo_estaca",
                    text,
                    "Unrecognized pile category",
                ))
            }
        };
        Ok(tipo)
    }

    /// Construction process implied by the category (used when the caller
    /// does not state one explicitly)
    pub fn processo_padrao(&self) -> ProcessoConstrucao {
        match self {
            TipoEstaca::PreMoldada
            | TipoEstaca::Metalica
            | TipoEstaca::Franki
            | TipoEstaca::Omega => ProcessoConstrucao::Deslocamento,
            TipoEstaca::Escavada
            | TipoEstaca::EscavadaBentonita
            | TipoEstaca::HeliceContinua
            | TipoEstaca::Raiz
            | TipoEstaca::Injetada => ProcessoConstrucao::Escavada,
        }
    }
}

impl std::fmt::Display for TipoEstaca {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.nome())
    }
}

/// Construction process: displacement (driven) vs. excavated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessoConstrucao {
    Deslocamento,
    Escavada,
}

impl ProcessoConstrucao {
    pub fn key(&self) -> &'static str {
        match self {
            ProcessoConstrucao::Deslocamento => "deslocamento",
            ProcessoConstrucao::Escavada => "escavada",
        }
    }
}

// ============================================================================
// Per-Method Pile Grouping
// ============================================================================

/// Décourt-Quaresma pile buckets: every driven category collapses into
/// "cravada", the excavated families keep their own alpha/beta columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstacaDecourtQuaresma {
    Cravada,
    Escavada,
    EscavadaBentonita,
    HeliceContinua,
    Raiz,
    Injetada,
}

impl EstacaDecourtQuaresma {
    pub fn from_tipo(tipo: TipoEstaca) -> Self {
        match tipo {
            TipoEstaca::PreMoldada
            | TipoEstaca::Metalica
            | TipoEstaca::Franki
            | TipoEstaca::Omega => EstacaDecourtQuaresma::Cravada,
            TipoEstaca::Escavada => EstacaDecourtQuaresma::Escavada,
            TipoEstaca::EscavadaBentonita => EstacaDecourtQuaresma::EscavadaBentonita,
            TipoEstaca::HeliceContinua => EstacaDecourtQuaresma::HeliceContinua,
            TipoEstaca::Raiz => EstacaDecourtQuaresma::Raiz,
            TipoEstaca::Injetada => EstacaDecourtQuaresma::Injetada,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            EstacaDecourtQuaresma::Cravada => "cravada",
            EstacaDecourtQuaresma::Escavada => "escavada",
            EstacaDecourtQuaresma::EscavadaBentonita => "escavada_bentonita",
            EstacaDecourtQuaresma::HeliceContinua => "helice_continua",
            EstacaDecourtQuaresma::Raiz => "raiz",
            EstacaDecourtQuaresma::Injetada => "injetada",
        }
    }
}

/// Teixeira (1996) pile groups, the four columns of the published tables.
///
/// The 1996 tables do not cover continuous-flight-auger, ômega or
/// high-pressure injected piles; those categories are rejected rather than
/// silently approximated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EstacaTeixeira {
    PreMoldada,
    Franki,
    Escavada,
    Raiz,
}

impl EstacaTeixeira {
    pub fn from_tipo(tipo: TipoEstaca) -> CalcResult<Self> {
        match tipo {
            TipoEstaca::PreMoldada | TipoEstaca::Metalica => Ok(EstacaTeixeira::PreMoldada),
            TipoEstaca::Franki => Ok(EstacaTeixeira::Franki),
            TipoEstaca::Escavada | TipoEstaca::EscavadaBentonita => Ok(EstacaTeixeira::Escavada),
            TipoEstaca::Raiz => Ok(EstacaTeixeira::Raiz),
            TipoEstaca::HeliceContinua | TipoEstaca::Omega | TipoEstaca::Injetada => Err(
                CalcError::not_supported("coef_teixeira_1996", tipo.key()),
            ),
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            EstacaTeixeira::PreMoldada => "pre_moldada",
            EstacaTeixeira::Franki => "franki",
            EstacaTeixeira::Escavada => "escavada",
            EstacaTeixeira::Raiz => "raiz",
        }
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Cross-section geometry variant.
///
/// `Retangular` exists for catalog-derived steel sections (HP flange width ×
/// depth); the direct factory constructors only build circular and square
/// piles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "forma", rename_all = "snake_case")]
pub enum Geometria {
    Circular { diametro: f64 },
    Quadrada { lado: f64 },
    Retangular { largura: f64, altura: f64 },
}

impl Geometria {
    /// Tip (end-bearing) area in m²
    pub fn area_ponta(&self) -> f64 {
        match self {
            Geometria::Circular { diametro } => {
                std::f64::consts::PI * (diametro / 2.0).powi(2)
            }
            Geometria::Quadrada { lado } => lado * lado,
            Geometria::Retangular { largura, altura } => largura * altura,
        }
    }

    /// Cross-section perimeter in m
    pub fn perimetro(&self) -> f64 {
        match self {
            Geometria::Circular { diametro } => std::f64::consts::PI * diametro,
            Geometria::Quadrada { lado } => 4.0 * lado,
            Geometria::Retangular { largura, altura } => 2.0 * (largura + altura),
        }
    }

    /// Characteristic dimension feeding diameter-dependent coefficients
    /// (diameter or side; rectangular sections have none).
    pub fn dimensao_caracteristica(&self) -> Option<f64> {
        match self {
            Geometria::Circular { diametro } => Some(*diametro),
            Geometria::Quadrada { lado } => Some(*lado),
            Geometria::Retangular { .. } => None,
        }
    }

    fn validar(&self) -> CalcResult<()> {
        fn checar(campo: &str, valor: f64) -> CalcResult<()> {
            if valor <= 0.0 || !valor.is_finite() {
                return Err(CalcError::invalid_input(
                    campo,
                    valor.to_string(),
                    "Cross-section dimension must be positive",
                ));
            }
            Ok(())
        }
        match self {
            Geometria::Circular { diametro } => checar("diametro", *diametro),
            Geometria::Quadrada { lado } => checar("lado", *lado),
            Geometria::Retangular { largura, altura } => {
                checar("largura", *largura)?;
                checar("altura", *altura)
            }
        }
    }
}

// ============================================================================
// Pile
// ============================================================================

/// A pile ready for a capacity calculation: category, construction process,
/// validated geometry and the settlement depth of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estaca {
    pub tipo: TipoEstaca,
    pub processo_construcao: ProcessoConstrucao,
    pub geometria: Geometria,
    /// Depth at which the tip is assumed to bear (m, fractional allowed)
    pub cota_assentamento: f64,
}

impl Estaca {
    /// Build a pile, validating geometry and settlement depth
    pub fn new(
        tipo: TipoEstaca,
        processo_construcao: ProcessoConstrucao,
        geometria: Geometria,
        cota_assentamento: f64,
    ) -> CalcResult<Self> {
        geometria.validar()?;
        if cota_assentamento <= 0.0 || !cota_assentamento.is_finite() {
            return Err(CalcError::invalid_input(
                "cota_assentamento",
                cota_assentamento.to_string(),
                "Settlement depth must be positive",
            ));
        }
        Ok(Estaca {
            tipo,
            processo_construcao,
            geometria,
            cota_assentamento,
        })
    }

    pub fn area_ponta(&self) -> f64 {
        self.geometria.area_ponta()
    }

    pub fn perimetro(&self) -> f64 {
        self.geometria.perimetro()
    }

    /// Diameter/side for diameter-dependent coefficient lookups
    pub fn dimensao_caracteristica(&self) -> Option<f64> {
        self.geometria.dimensao_caracteristica()
    }
}

// ============================================================================
// Factory
// ============================================================================

/// Builds piles from raw geometry or from the cross-section catalogs
pub struct EstacaFactory;

impl EstacaFactory {
    pub fn criar_circular(
        tipo: TipoEstaca,
        processo_construcao: ProcessoConstrucao,
        diametro: f64,
        cota_assentamento: f64,
    ) -> CalcResult<Estaca> {
        Estaca::new(
            tipo,
            processo_construcao,
            Geometria::Circular { diametro },
            cota_assentamento,
        )
    }

    pub fn criar_quadrada(
        tipo: TipoEstaca,
        processo_construcao: ProcessoConstrucao,
        lado: f64,
        cota_assentamento: f64,
    ) -> CalcResult<Estaca> {
        Estaca::new(
            tipo,
            processo_construcao,
            Geometria::Quadrada { lado },
            cota_assentamento,
        )
    }

    /// Build a pile from a named catalog cross-section, copying its geometry
    /// and using the category's default construction process
    pub fn criar_de_catalogo(
        tipo: TipoEstaca,
        nome_perfil: &str,
        cota_assentamento: f64,
    ) -> CalcResult<Estaca> {
        let perfil = catalogs::obter_perfil(tipo, nome_perfil)?;
        Estaca::new(
            tipo,
            tipo.processo_padrao(),
            perfil.geometria,
            cota_assentamento,
        )
    }

    /// Shorthand for steel piles, always driven
    pub fn criar_metalica(nome_perfil: &str, cota_assentamento: f64) -> CalcResult<Estaca> {
        Self::criar_de_catalogo(TipoEstaca::Metalica, nome_perfil, cota_assentamento)
    }
}
