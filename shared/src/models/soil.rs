//! Soil texture classes and their reference water needs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Base water need (L/m²/day) used when a soil name is not in the table
pub const DEFAULT_BASE_WATER_NEED: u32 = 12;

/// Soil texture classification
///
/// Each class carries a base daily water need under reference conditions
/// (20°, 50% humidity, no wind, no rain).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Sandy,
    SandyLoam,
    Loamy,
    SiltLoam,
    ClayLoam,
    Clay,
    Peaty,
    VolcanicLoam,
    SiltyClayLoam,
    SandyClayLoam,
    Silty,
    ClayeySilt,
    AlluvialLoam,
    Chernozem,
    GlacialTillAndRocky,
    RockyAndSandy,
}

impl SoilType {
    /// All known soil texture classes
    pub const ALL: [SoilType; 16] = [
        SoilType::Sandy,
        SoilType::SandyLoam,
        SoilType::Loamy,
        SoilType::SiltLoam,
        SoilType::ClayLoam,
        SoilType::Clay,
        SoilType::Peaty,
        SoilType::VolcanicLoam,
        SoilType::SiltyClayLoam,
        SoilType::SandyClayLoam,
        SoilType::Silty,
        SoilType::ClayeySilt,
        SoilType::AlluvialLoam,
        SoilType::Chernozem,
        SoilType::GlacialTillAndRocky,
        SoilType::RockyAndSandy,
    ];

    /// Resolve a soil name case-insensitively
    pub fn resolve(name: &str) -> Option<SoilType> {
        let folded = name.trim().to_lowercase();
        SoilType::ALL
            .iter()
            .copied()
            .find(|soil| soil.label() == folded)
    }

    /// Canonical lowercase name, as reported by soil surveys
    pub fn label(&self) -> &'static str {
        match self {
            SoilType::Sandy => "sandy",
            SoilType::SandyLoam => "sandy loam",
            SoilType::Loamy => "loamy",
            SoilType::SiltLoam => "silt loam",
            SoilType::ClayLoam => "clay loam",
            SoilType::Clay => "clay",
            SoilType::Peaty => "peaty",
            SoilType::VolcanicLoam => "volcanic loam",
            SoilType::SiltyClayLoam => "silty clay loam",
            SoilType::SandyClayLoam => "sandy clay loam",
            SoilType::Silty => "silty",
            SoilType::ClayeySilt => "clayey silt",
            SoilType::AlluvialLoam => "alluvial loam",
            SoilType::Chernozem => "chernozem",
            SoilType::GlacialTillAndRocky => "glacial till and rocky",
            SoilType::RockyAndSandy => "rocky and sandy",
        }
    }

    /// Base water need in L/m²/day under reference conditions
    pub fn base_water_need(&self) -> u32 {
        match self {
            SoilType::Sandy => 20,
            SoilType::SandyLoam => 17,
            SoilType::Loamy => 14,
            SoilType::SiltLoam => 12,
            SoilType::ClayLoam => 10,
            SoilType::Clay => 9,
            SoilType::Peaty => 16,
            SoilType::VolcanicLoam => 14,
            SoilType::SiltyClayLoam => 12,
            SoilType::SandyClayLoam => 13,
            SoilType::Silty => 10,
            SoilType::ClayeySilt => 9,
            SoilType::AlluvialLoam => 12,
            SoilType::Chernozem => 14,
            SoilType::GlacialTillAndRocky => 8,
            SoilType::RockyAndSandy => 6,
        }
    }
}

/// Look up the base water need for a soil name, case-insensitively.
/// Unrecognized names fall back to [`DEFAULT_BASE_WATER_NEED`].
pub fn base_water_need(soil_name: &str) -> Decimal {
    let base = SoilType::resolve(soil_name)
        .map(|soil| soil.base_water_need())
        .unwrap_or(DEFAULT_BASE_WATER_NEED);
    Decimal::from(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_is_case_insensitive() {
        assert_eq!(SoilType::resolve("Loamy"), Some(SoilType::Loamy));
        assert_eq!(SoilType::resolve("LOAMY"), Some(SoilType::Loamy));
        assert_eq!(SoilType::resolve("loamy"), Some(SoilType::Loamy));
        assert_eq!(SoilType::resolve("Sandy Clay Loam"), Some(SoilType::SandyClayLoam));
    }

    #[test]
    fn test_resolve_unknown_name() {
        assert_eq!(SoilType::resolve("martian regolith"), None);
        assert_eq!(base_water_need("martian regolith"), Decimal::from(12));
    }

    #[test]
    fn test_base_water_need_table() {
        assert_eq!(base_water_need("sandy"), Decimal::from(20));
        assert_eq!(base_water_need("loamy"), Decimal::from(14));
        assert_eq!(base_water_need("rocky and sandy"), Decimal::from(6));
    }
}
