//! Canonical Soil Taxonomy
//!
//! The empirical methods disagree on how soils are grouped, but they all
//! start from the same field description written on the SPT log. This module
//! owns the single canonical enumeration of soil categories and the one
//! normalization function that maps free-form log text onto it. Per-method
//! grouping lives in [`crate::soil::mappers`].
//!
//! ## Example
//!
//! ```rust
//! use pile_core::soil::TipoSolo;
//!
//! let solo = TipoSolo::from_string("Argila Arenosa").unwrap();
//! assert_eq!(solo, TipoSolo::ArgilaArenosa);
//! assert_eq!(solo.canonical_key(), "argila_arenosa");
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Canonical soil type, following the fifteen-row Aoki-Velloso taxonomy
/// plus gravelly sand (which some logs report as plain "pedregulho").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TipoSolo {
    Argila,
    ArgilaArenosa,
    ArgilaArenoSiltosa,
    ArgilaSiltosa,
    ArgilaSiltoArenosa,
    Silte,
    SilteArenoso,
    SilteArenoArgiloso,
    SilteArgiloso,
    SilteArgiloArenoso,
    Areia,
    AreiaSiltosa,
    AreiaSiltoArgilosa,
    AreiaArgilosa,
    AreiaArgiloSiltosa,
    AreiaComPedregulhos,
}

impl TipoSolo {
    /// All canonical soil types for iteration (mapper totality tests rely on this)
    pub const ALL: [TipoSolo; 16] = [
        TipoSolo::Argila,
        TipoSolo::ArgilaArenosa,
        TipoSolo::ArgilaArenoSiltosa,
        TipoSolo::ArgilaSiltosa,
        TipoSolo::ArgilaSiltoArenosa,
        TipoSolo::Silte,
        TipoSolo::SilteArenoso,
        TipoSolo::SilteArenoArgiloso,
        TipoSolo::SilteArgiloso,
        TipoSolo::SilteArgiloArenoso,
        TipoSolo::Areia,
        TipoSolo::AreiaSiltosa,
        TipoSolo::AreiaSiltoArgilosa,
        TipoSolo::AreiaArgilosa,
        TipoSolo::AreiaArgiloSiltosa,
        TipoSolo::AreiaComPedregulhos,
    ];

    /// Accent-free snake_case key, stable across the coefficient tables
    pub fn canonical_key(&self) -> &'static str {
        match self {
            TipoSolo::Argila => "argila",
            TipoSolo::ArgilaArenosa => "argila_arenosa",
            TipoSolo::ArgilaArenoSiltosa => "argila_areno_siltosa",
            TipoSolo::ArgilaSiltosa => "argila_siltosa",
            TipoSolo::ArgilaSiltoArenosa => "argila_silto_arenosa",
            TipoSolo::Silte => "silte",
            TipoSolo::SilteArenoso => "silte_arenoso",
            TipoSolo::SilteArenoArgiloso => "silte_areno_argiloso",
            TipoSolo::SilteArgiloso => "silte_argiloso",
            TipoSolo::SilteArgiloArenoso => "silte_argilo_arenoso",
            TipoSolo::Areia => "areia",
            TipoSolo::AreiaSiltosa => "areia_siltosa",
            TipoSolo::AreiaSiltoArgilosa => "areia_silto_argilosa",
            TipoSolo::AreiaArgilosa => "areia_argilosa",
            TipoSolo::AreiaArgiloSiltosa => "areia_argilo_siltosa",
            TipoSolo::AreiaComPedregulhos => "areia_com_pedregulhos",
        }
    }

    /// Parse free-form soil text from an SPT log.
    ///
    /// Normalizes case, accents, separators and whitespace before matching.
    /// Fails with a descriptive error on unrecognized text. Total over the
    /// canonical keys: `from_string(s.canonical_key())` is the identity.
    pub fn from_string(text: &str) -> CalcResult<Self> {
        let key = normalize_soil_text(text);
        let solo = match key.as_str() {
            "argila" => TipoSolo::Argila,
            "argila_arenosa" => TipoSolo::ArgilaArenosa,
            "argila_areno_siltosa" => TipoSolo::ArgilaArenoSiltosa,
            "argila_siltosa" => TipoSolo::ArgilaSiltosa,
            "argila_silto_arenosa" => TipoSolo::ArgilaSiltoArenosa,
            "silte" => TipoSolo::Silte,
            "silte_arenoso" => TipoSolo::SilteArenoso,
            "silte_areno_argiloso" => TipoSolo::SilteArenoArgiloso,
            "silte_argiloso" => TipoSolo::SilteArgiloso,
            "silte_argilo_arenoso" => TipoSolo::SilteArgiloArenoso,
            "areia" => TipoSolo::Areia,
            "areia_siltosa" => TipoSolo::AreiaSiltosa,
            "areia_silto_argilosa" => TipoSolo::AreiaSiltoArgilosa,
            "areia_argilosa" => TipoSolo::AreiaArgilosa,
            "areia_argilo_siltosa" => TipoSolo::AreiaArgiloSiltosa,
            // Field logs often write gravelly layers as just "pedregulho"
            "pedregulho" | "pedregulhos" | "areia_com_pedregulho" | "areia_com_pedregulhos" => {
                TipoSolo::AreiaComPedregulhos
            }
            _ => {
                if key.is_empty() {
                    return Err(CalcError::invalid_input(
                        "tipo_solo",
                        text,
                        "Soil type text must not be empty",
                    ));
                }
                return Err(CalcError::soil_not_recognized(text));
            }
        };
        Ok(solo)
    }
}

impl std::fmt::Display for TipoSolo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.canonical_key())
    }
}

/// Normalize soil text: lowercase, strip Portuguese accents, turn separators
/// into single underscores.
pub fn normalize_soil_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last_was_sep = true;
    for c in text.trim().chars() {
        let c = match c {
            'á' | 'â' | 'ã' | 'à' => 'a',
            'é' | 'ê' => 'e',
            'í' => 'i',
            'ó' | 'ô' | 'õ' => 'o',
            'ú' => 'u',
            'ç' => 'c',
            other => other,
        };
        if c == ' ' || c == '-' || c == '_' {
            if !last_was_sep {
                out.push('_');
                last_was_sep = true;
            }
        } else {
            for lc in c.to_lowercase() {
                out.push(lc);
            }
            last_was_sep = false;
        }
    }
    if out.ends_with('_') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string_variants() {
        assert_eq!(TipoSolo::from_string("argila").unwrap(), TipoSolo::Argila);
        assert_eq!(
            TipoSolo::from_string("argila arenosa").unwrap(),
            TipoSolo::ArgilaArenosa
        );
        assert_eq!(
            TipoSolo::from_string("AREIA_SILTOSA").unwrap(),
            TipoSolo::AreiaSiltosa
        );
        assert_eq!(
            TipoSolo::from_string("pedregulho").unwrap(),
            TipoSolo::AreiaComPedregulhos
        );
        assert_eq!(
            TipoSolo::from_string("Silte Argilo-Arenoso").unwrap(),
            TipoSolo::SilteArgiloArenoso
        );
    }

    #[test]
    fn test_from_string_invalid() {
        let err = TipoSolo::from_string("solo_inventado").unwrap_err();
        assert_eq!(err.error_code(), "SOIL_NOT_RECOGNIZED");
    }

    #[test]
    fn test_from_string_empty() {
        let err = TipoSolo::from_string("   ").unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_normalization_idempotent() {
        for solo in TipoSolo::ALL {
            let key = solo.canonical_key();
            assert_eq!(normalize_soil_text(key), key);
            assert_eq!(TipoSolo::from_string(key).unwrap(), solo);
        }
    }

    #[test]
    fn test_accent_stripping() {
        assert_eq!(normalize_soil_text("hélice contínua"), "helice_continua");
        assert_eq!(normalize_soil_text("  Areia  com  pedregulhos "), "areia_com_pedregulhos");
    }
}
