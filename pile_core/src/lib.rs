//! # pile_core - Pile Bearing Capacity Calculation Engine
//!
//! `pile_core` computes the axial load-bearing capacity of foundation piles
//! from in-situ soil-investigation profiles (SPT blow-counts, optionally
//! derived from CPT soundings), across the empirical methods of Brazilian
//! foundation practice: Aoki & Velloso (1975) and the Laprovitera (1988)
//! revision, Décourt & Quaresma (1978) and Teixeira (1996).
//!
//! ## Design Philosophy
//!
//! - **Stateless**: calculators are pure functions of profile + pile
//! - **JSON-First**: all inputs, results and errors implement Serialize
//! - **Rich Errors**: structured error types, not just strings
//! - **One taxonomy**: a single canonical soil enumeration with explicit,
//!   total per-method groupings
//!
//! ## Quick Start
//!
//! ```rust
//! use pile_core::piles::{EstacaFactory, ProcessoConstrucao, TipoEstaca};
//! use pile_core::profile::PerfilSPT;
//! use pile_core::registry;
//!
//! let mut perfil = PerfilSPT::new("SP-01");
//! perfil
//!     .adicionar_medidas(vec![
//!         (1.0, 3, "argila arenosa"),
//!         (2.0, 4, "argila arenosa"),
//!         (3.0, 6, "areia argilosa"),
//!         (4.0, 9, "areia argilosa"),
//!         (5.0, 15, "areia"),
//!     ])
//!     .unwrap();
//!
//! let estaca = EstacaFactory::criar_circular(
//!     TipoEstaca::PreMoldada,
//!     ProcessoConstrucao::Deslocamento,
//!     0.3,
//!     3.0,
//! )
//! .unwrap();
//!
//! let calc = registry::create_calculator("aoki_velloso_1975").unwrap();
//! let resultado = calc.calcular(&perfil, &estaca).unwrap();
//! assert!(resultado.capacidade_carga_adm > 0.0);
//! ```
//!
//! ## Modules
//!
//! - [`profile`] - SPT profile with depth-indexed retrieval strategies
//! - [`soil`] - canonical soil taxonomy and per-method groupings
//! - [`piles`] - pile taxonomy, geometry, factory and section catalogs
//! - [`coefficients`] - per-method coefficient providers
//! - [`calculations`] - the calculation contract and the method calculators
//! - [`registry`] - process-wide method registry
//! - [`cpt`] - CPT profiles and CPT→SPT correlations
//! - [`errors`] - structured error types

pub mod calculations;
pub mod coefficients;
pub mod cpt;
pub mod errors;
pub mod piles;
pub mod profile;
pub mod registry;
pub mod soil;

// Re-export commonly used types at crate root for convenience
pub use calculations::{MetodoCalculo, ResultadoCalculo};
pub use errors::{CalcError, CalcResult};
pub use piles::{Estaca, EstacaFactory, Geometria, ProcessoConstrucao, TipoEstaca};
pub use profile::{Estrategia, MedidaSPT, PerfilSPT};
pub use soil::TipoSolo;
