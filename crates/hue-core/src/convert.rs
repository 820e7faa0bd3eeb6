//! Runtime-selected conversion between any two numeric models.
//!
//! Components are plain tuples in the order the model's record declares
//! them (RGB is 0–255, everything else uses its own documented range).
//! Alpha travels beside the tuple, normalized to [0, 1], and is unchanged by
//! every conversion. All conversions route through [`Rgba`].

use crate::config::ConversionConfig;
use crate::cylindrical::{Hsb, Hsl};
use crate::error::ColorError;
use crate::linear::{YCbCr, YPbPr};
use crate::model::Model;
use crate::rgba::{MAX_CHANNEL, Rgba};
use crate::subtractive::{Cmyk, Ryb};
use crate::tristimulus::{Lab, Tristimulus};

/// Convert `components` from one model to another.
///
/// Hex is not a numeric tuple; use [`crate::linear::parse_hex`] and
/// [`crate::linear::to_hex`] for it.
pub fn convert(
    from: Model,
    to: Model,
    components: &[f64],
    alpha: f64,
    config: &ConversionConfig,
) -> Result<Vec<f64>, ColorError> {
    tracing::trace!("convert {from} → {to}: {components:?}");
    let rgba = decode(from, components, alpha, config)?;
    encode(to, &rgba, config)
}

/// Build an [`Rgba`] from a model's component tuple.
pub fn decode(
    model: Model,
    components: &[f64],
    alpha: f64,
    config: &ConversionConfig,
) -> Result<Rgba, ColorError> {
    let expected = model
        .component_count()
        .ok_or(ColorError::UnsupportedModel(model))?;
    if components.len() != expected {
        return Err(ColorError::ComponentCount {
            model,
            expected,
            found: components.len(),
        });
    }

    let c = components;
    let rgba = match model {
        Model::Hex => return Err(ColorError::UnsupportedModel(model)),
        Model::Rgb => Rgba::new(c[0], c[1], c[2], alpha * MAX_CHANNEL),
        Model::Ryb => Rgba::from_ryb(
            Ryb {
                red: c[0],
                yellow: c[1],
                blue: c[2],
            },
            alpha,
        ),
        Model::Cmyk => Rgba::from_cmyk(Cmyk::new(c[0], c[1], c[2], c[3]), alpha),
        Model::Hsb | Model::Hsv => Rgba::from_hsb(Hsb::new(c[0], c[1], c[2]), alpha),
        Model::Hsl => Rgba::from_hsl(Hsl::new(c[0], c[1], c[2]), alpha),
        Model::YPbPr => Rgba::from_ypbpr(
            YPbPr {
                y: c[0],
                pb: c[1],
                pr: c[2],
            },
            config.encoding,
            alpha,
        ),
        Model::YCbCr => Rgba::from_ycbcr(
            YCbCr {
                y: c[0],
                cb: c[1],
                cr: c[2],
            },
            config.encoding,
            alpha,
        ),
        Model::CieXyz => Rgba::from_xyz_under(
            Tristimulus::new(c[0], c[1], c[2]),
            config.white_point,
            alpha,
        ),
        Model::CieLab => Rgba::from_lab(
            Lab {
                l: c[0],
                a: c[1],
                b: c[2],
            },
            config.white_point,
            alpha,
        ),
    };
    Ok(rgba)
}

/// Express an [`Rgba`] as a model's component tuple (alpha excluded).
pub fn encode(model: Model, rgba: &Rgba, config: &ConversionConfig) -> Result<Vec<f64>, ColorError> {
    let components = match model {
        Model::Hex => return Err(ColorError::UnsupportedModel(model)),
        Model::Rgb => vec![rgba.red, rgba.green, rgba.blue],
        Model::Ryb => {
            let v = rgba.ryb();
            vec![v.red, v.yellow, v.blue]
        }
        Model::Cmyk => {
            let v = rgba.cmyk();
            vec![v.cyan, v.magenta, v.yellow, v.key]
        }
        Model::Hsb | Model::Hsv => {
            let v = rgba.hsb();
            vec![v.hue, v.saturation, v.brightness]
        }
        Model::Hsl => {
            let v = rgba.hsl();
            vec![v.hue, v.saturation, v.lightness]
        }
        Model::YPbPr => {
            let v = rgba.ypbpr_with(config.encoding);
            vec![v.y, v.pb, v.pr]
        }
        Model::YCbCr => {
            let v = rgba.ycbcr_with(config.encoding);
            vec![v.y, v.cb, v.cr]
        }
        Model::CieXyz => {
            let v = rgba.xyz_under(config.white_point);
            vec![v.x, v.y, v.z]
        }
        Model::CieLab => {
            let v = rgba.lab_under(config.white_point);
            vec![v.l, v.a, v.b]
        }
    };
    Ok(components)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coefficients::{SignalEncoding, WhitePoint};

    const EPSILON: f64 = 1e-6;

    fn assert_components(got: &[f64], expected: &[f64], tolerance: f64) {
        assert_eq!(got.len(), expected.len());
        for (g, e) in got.iter().zip(expected) {
            assert!((g - e).abs() < tolerance, "{got:?} vs {expected:?}");
        }
    }

    #[test]
    fn test_rgb_to_every_model_matches_direct_methods() {
        let config = ConversionConfig::default();
        let rgba = Rgba::opaque(200.0, 80.0, 30.0);
        let rgb = [rgba.red, rgba.green, rgba.blue];

        let hsl = rgba.hsl();
        let out = convert(Model::Rgb, Model::Hsl, &rgb, 1.0, &config).unwrap();
        assert_components(&out, &[hsl.hue, hsl.saturation, hsl.lightness], EPSILON);

        let cmyk = rgba.cmyk();
        let out = convert(Model::Rgb, Model::Cmyk, &rgb, 1.0, &config).unwrap();
        assert_components(&out, &[cmyk.cyan, cmyk.magenta, cmyk.yellow, cmyk.key], EPSILON);

        let lab = rgba.lab();
        let out = convert(Model::Rgb, Model::CieLab, &rgb, 1.0, &config).unwrap();
        assert_components(&out, &[lab.l, lab.a, lab.b], EPSILON);
    }

    #[test]
    fn test_every_numeric_model_roundtrips_through_rgb() {
        let config = ConversionConfig::default();
        let rgb = [64.0, 128.0, 192.0];
        for &model in Model::all() {
            if model == Model::Hex {
                continue;
            }
            let there = convert(Model::Rgb, model, &rgb, 1.0, &config).unwrap();
            let back = convert(model, Model::Rgb, &there, 1.0, &config).unwrap();
            assert_components(&back, &rgb, 0.5);
        }
    }

    #[test]
    fn test_hsb_and_hsv_are_interchangeable() {
        let config = ConversionConfig::default();
        let hsb = convert(Model::Rgb, Model::Hsb, &[10.0, 20.0, 30.0], 1.0, &config).unwrap();
        let hsv = convert(Model::Rgb, Model::Hsv, &[10.0, 20.0, 30.0], 1.0, &config).unwrap();
        assert_eq!(hsb, hsv);
    }

    #[test]
    fn test_config_selects_encoding_and_white() {
        let hd = ConversionConfig { encoding: SignalEncoding::Rec709, ..Default::default() };
        let out = convert(Model::Rgb, Model::YPbPr, &[0.0, 255.0, 0.0], 1.0, &hd).unwrap();
        assert!((out[0] - 0.7152).abs() < 1e-12);

        let d50 = ConversionConfig { white_point: WhitePoint::D50, ..Default::default() };
        let out = convert(Model::Rgb, Model::CieXyz, &[255.0, 255.0, 255.0], 1.0, &d50).unwrap();
        assert_components(&out, &[0.96422, 1.0, 0.82521], 1e-5);
    }

    #[test]
    fn test_alpha_passes_through_decode() {
        let config = ConversionConfig::default();
        let rgba = decode(Model::Hsl, &[0.0, 1.0, 0.5], 0.5, &config).unwrap();
        assert!((rgba.alpha - 127.5).abs() < 1e-9);
    }

    #[test]
    fn test_wrong_component_count_is_rejected() {
        let config = ConversionConfig::default();
        let err = convert(Model::Cmyk, Model::Rgb, &[0.1, 0.2, 0.3], 1.0, &config).unwrap_err();
        assert!(matches!(
            err,
            ColorError::ComponentCount { model: Model::Cmyk, expected: 4, found: 3 }
        ));
    }

    #[test]
    fn test_hex_is_not_a_numeric_model() {
        let config = ConversionConfig::default();
        assert!(matches!(
            convert(Model::Hex, Model::Rgb, &[], 1.0, &config),
            Err(ColorError::UnsupportedModel(Model::Hex))
        ));
        assert!(matches!(
            convert(Model::Rgb, Model::Hex, &[1.0, 2.0, 3.0], 1.0, &config),
            Err(ColorError::UnsupportedModel(Model::Hex))
        ));
    }
}
