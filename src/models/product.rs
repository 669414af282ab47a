use serde::{Deserialize, Serialize};

/// Crops the greenhouse can be planted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GreenhouseProduct {
    Tomato,
    Lettuce,
    Strawberry,
    Cucumber,
}

impl GreenhouseProduct {
    /// Every product in catalog order.
    pub const ALL: [GreenhouseProduct; 4] = [
        GreenhouseProduct::Tomato,
        GreenhouseProduct::Lettuce,
        GreenhouseProduct::Strawberry,
        GreenhouseProduct::Cucumber,
    ];

    /// Catalog yield for soilless production, tonnes per hectare per year.
    pub fn default_yield_t_per_ha(&self) -> f64 {
        match self {
            GreenhouseProduct::Tomato => 100.0,
            GreenhouseProduct::Lettuce => 60.0,
            GreenhouseProduct::Strawberry => 40.0,
            GreenhouseProduct::Cucumber => 150.0,
        }
    }

    /// Catalog farm-gate price in USD per kg.
    pub fn default_price_usd_per_kg(&self) -> f64 {
        match self {
            GreenhouseProduct::Tomato => 0.125,
            GreenhouseProduct::Lettuce => 0.5,
            GreenhouseProduct::Strawberry => 2.0,
            GreenhouseProduct::Cucumber => 0.15,
        }
    }
}

impl Default for GreenhouseProduct {
    fn default() -> Self {
        GreenhouseProduct::Tomato
    }
}

impl std::fmt::Display for GreenhouseProduct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GreenhouseProduct::Tomato => write!(f, "Tomato"),
            GreenhouseProduct::Lettuce => write!(f, "Lettuce"),
            GreenhouseProduct::Strawberry => write!(f, "Strawberry"),
            GreenhouseProduct::Cucumber => write!(f, "Cucumber"),
        }
    }
}

impl std::str::FromStr for GreenhouseProduct {
    type Err = crate::error::FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tomato" | "tomatoes" => Ok(GreenhouseProduct::Tomato),
            "lettuce" => Ok(GreenhouseProduct::Lettuce),
            "strawberry" | "strawberries" => Ok(GreenhouseProduct::Strawberry),
            "cucumber" | "cucumbers" => Ok(GreenhouseProduct::Cucumber),
            _ => Err(crate::error::FarmError::ParseError(format!(
                "Unknown greenhouse product: '{s}'. Use tomato, lettuce, strawberry or cucumber"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tomato_catalog_values() {
        let p = GreenhouseProduct::Tomato;
        assert!((p.default_yield_t_per_ha() - 100.0).abs() < 1e-9);
        assert!((p.default_price_usd_per_kg() - 0.125).abs() < 1e-9);
    }

    #[test]
    fn test_catalog_values_positive() {
        for p in GreenhouseProduct::ALL {
            assert!(p.default_yield_t_per_ha() > 0.0, "{p} yield");
            assert!(p.default_price_usd_per_kg() > 0.0, "{p} price");
        }
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("TOMATO".parse::<GreenhouseProduct>().unwrap(), GreenhouseProduct::Tomato);
        assert_eq!("Lettuce".parse::<GreenhouseProduct>().unwrap(), GreenhouseProduct::Lettuce);
        assert_eq!(
            " strawberries ".parse::<GreenhouseProduct>().unwrap(),
            GreenhouseProduct::Strawberry
        );
        assert_eq!("cucumber".parse::<GreenhouseProduct>().unwrap(), GreenhouseProduct::Cucumber);
    }

    #[test]
    fn test_parse_invalid() {
        assert!("pepper".parse::<GreenhouseProduct>().is_err());
        assert!("".parse::<GreenhouseProduct>().is_err());
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for p in GreenhouseProduct::ALL {
            assert_eq!(p.to_string().parse::<GreenhouseProduct>().unwrap(), p);
        }
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&GreenhouseProduct::Strawberry).unwrap();
        assert_eq!(json, "\"strawberry\"");
    }
}
