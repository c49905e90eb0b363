//! # Soil Taxonomy and Per-Method Grouping
//!
//! - [`types`]: the canonical soil enumeration and text normalization
//! - [`mappers`]: each method's grouping of the canonical taxonomy

pub mod mappers;
pub mod types;

pub use mappers::{
    AokiVellosoSoilMapper, SoloDecourtQuaresma, SoloDecourtQuaresmaK, SoloTeixeira,
};
pub use types::{normalize_soil_text, TipoSolo};
