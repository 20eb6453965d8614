use serde::{Deserialize, Serialize};

/// Price-feed provider backing a derivative market
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OracleType {
    #[default]
    Unspecified,
    Band,
    PriceFeed,
    Coinbase,
    Chainlink,
    Razor,
    Dia,
    #[serde(rename = "API3")]
    Api3,
    Uma,
    Pyth,
    #[serde(rename = "BandIBC")]
    BandIbc,
    /// Any wire value this build does not know about
    #[serde(other)]
    Unrecognized,
}

impl OracleType {
    /// Providers a market may be launched against.
    pub const SUPPORTED: [OracleType; 10] = [
        OracleType::Band,
        OracleType::PriceFeed,
        OracleType::Coinbase,
        OracleType::Chainlink,
        OracleType::Razor,
        OracleType::Dia,
        OracleType::Api3,
        OracleType::Uma,
        OracleType::Pyth,
        OracleType::BandIbc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OracleType::Unspecified => "Unspecified",
            OracleType::Band => "Band",
            OracleType::PriceFeed => "PriceFeed",
            OracleType::Coinbase => "Coinbase",
            OracleType::Chainlink => "Chainlink",
            OracleType::Razor => "Razor",
            OracleType::Dia => "Dia",
            OracleType::Api3 => "API3",
            OracleType::Uma => "Uma",
            OracleType::Pyth => "Pyth",
            OracleType::BandIbc => "BandIBC",
            OracleType::Unrecognized => "Unrecognized",
        }
    }

    pub fn is_supported(&self) -> bool {
        Self::SUPPORTED.contains(self)
    }
}

impl std::fmt::Display for OracleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allow_list() {
        assert!(OracleType::Band.is_supported());
        assert!(OracleType::BandIbc.is_supported());
        assert!(!OracleType::Unspecified.is_supported());
        assert!(!OracleType::Unrecognized.is_supported());
    }

    #[test]
    fn test_wire_names() {
        let t: OracleType = serde_json::from_str("\"API3\"").unwrap();
        assert_eq!(t, OracleType::Api3);
        let t: OracleType = serde_json::from_str("\"BandIBC\"").unwrap();
        assert_eq!(t, OracleType::BandIbc);
        let t: OracleType = serde_json::from_str("\"Stork\"").unwrap();
        assert_eq!(t, OracleType::Unrecognized);
        assert_eq!(serde_json::to_string(&OracleType::PriceFeed).unwrap(), "\"PriceFeed\"");
    }
}
