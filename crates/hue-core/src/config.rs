//! Conversion settings with documented defaults.
//!
//! `ConversionConfig` collects the parameters that callers would otherwise
//! pass to every call: the mix weight, the luma encoding and the reference
//! white. Every field is optional when deserializing.

use serde::{Deserialize, Serialize};

use crate::coefficients::{SignalEncoding, WhitePoint};
use crate::error::ColorError;
use crate::mixing::{DEFAULT_MIX_WEIGHT, mix};
use crate::rgba::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionConfig {
    /// Weight toward the second color when mixing. Default: 0.5.
    #[serde(default = "ConversionConfig::default_mix_weight")]
    pub mix_weight: f64,
    /// Luma coefficients for YPbPr/YCbCr and luminance. Default: BT.601.
    #[serde(default)]
    pub encoding: SignalEncoding,
    /// Reference white for XYZ and LAB. Default: D65.
    #[serde(default)]
    pub white_point: WhitePoint,
}

impl ConversionConfig {
    fn default_mix_weight() -> f64 {
        DEFAULT_MIX_WEIGHT
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ColorError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Strict check for configured values. Conversions themselves clamp
    /// instead of rejecting, but a stored weight outside [0, 1] is almost
    /// certainly a mistake.
    pub fn validate(&self) -> Result<(), ColorError> {
        if !(0.0..=1.0).contains(&self.mix_weight) {
            tracing::warn!("mix_weight {} is outside [0, 1]", self.mix_weight);
            return Err(ColorError::OutOfRange {
                field: "mix_weight",
                value: self.mix_weight,
            });
        }
        Ok(())
    }

    /// Mix two colors with the configured weight.
    pub fn mix(&self, a: Rgba, b: Rgba) -> Rgba {
        mix(a, b, self.mix_weight)
    }
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            mix_weight: DEFAULT_MIX_WEIGHT,
            encoding: SignalEncoding::Rec601,
            white_point: WhitePoint::D65,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = ConversionConfig::default();
        assert_eq!(config.mix_weight, 0.5);
        assert_eq!(config.encoding, SignalEncoding::Rec601);
        assert_eq!(config.white_point, WhitePoint::D65);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let config = ConversionConfig::from_json(r#"{ "encoding": "Rec709" }"#).unwrap();
        assert_eq!(config.encoding, SignalEncoding::Rec709);
        assert_eq!(config.mix_weight, DEFAULT_MIX_WEIGHT);
        assert_eq!(config.white_point, WhitePoint::D65);

        assert_eq!(ConversionConfig::from_json("{}").unwrap(), ConversionConfig::default());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let config = ConversionConfig {
            mix_weight: 0.25,
            encoding: SignalEncoding::Rec709,
            white_point: WhitePoint::D50,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(ConversionConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_from_json_rejects_out_of_range_weight() {
        let err = ConversionConfig::from_json(r#"{ "mix_weight": 1.5 }"#).unwrap_err();
        assert!(matches!(err, ColorError::OutOfRange { field: "mix_weight", .. }));
    }

    #[test]
    fn test_from_json_rejects_unknown_encoding() {
        let err = ConversionConfig::from_json(r#"{ "encoding": "Rec2020" }"#).unwrap_err();
        assert!(matches!(err, ColorError::Json(_)));
    }

    #[test]
    fn test_validate_rejects_nan_weight() {
        let config = ConversionConfig { mix_weight: f64::NAN, ..Default::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_mix_uses_weight() {
        let config = ConversionConfig { mix_weight: 1.0, ..Default::default() };
        let b = Rgba::opaque(10.0, 20.0, 30.0);
        assert_eq!(config.mix(Rgba::default(), b), b);
    }
}
