//! Placement and symbology props for 1D barcodes.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::offset;
use crate::structure::Details;

/// 1D barcode symbology.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BarcodeKind {
    Code39,
    #[default]
    Code128,
    Ean13,
    UpcA,
    Itf,
}

impl BarcodeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BarcodeKind::Code39 => "code39",
            BarcodeKind::Code128 => "code128",
            BarcodeKind::Ean13 => "ean13",
            BarcodeKind::UpcA => "upca",
            BarcodeKind::Itf => "itf",
        }
    }
}

/// Width-to-height ratio of the rendered bars.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Proportion {
    pub width: f64,
    pub height: f64,
}

/// Barcode props.
///
/// After [`make_valid`](Self::make_valid) the bar height always lies between
/// 10% and 20% of the proportion width.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BarcodeProps {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub percent: f64,
    #[serde(default)]
    pub proportion: Proportion,
    #[serde(default)]
    pub center: bool,
    #[serde(default)]
    pub kind: BarcodeKind,
}

impl BarcodeProps {
    pub const MAX_PERCENT: f64 = 100.0;
    const MIN_HEIGHT_RATIO: f64 = 0.10;
    const MAX_HEIGHT_RATIO: f64 = 0.20;

    /// Normalize in place: out-of-range values become their defaults.
    pub fn make_valid(&mut self) {
        if !(self.percent > 0.0 && self.percent <= Self::MAX_PERCENT) {
            self.percent = Self::MAX_PERCENT;
        }

        if self.center {
            self.left = 0.0;
            self.top = 0.0;
        }

        self.left = offset(self.left);
        self.top = offset(self.top);

        if !(self.proportion.width > 0.0 && self.proportion.width.is_finite()) {
            self.proportion.width = 1.0;
        }

        if !(self.proportion.height > 0.0 && self.proportion.height.is_finite()) {
            self.proportion.height = self.proportion.width * Self::MAX_HEIGHT_RATIO;
        }

        let min_height = self.proportion.width * Self::MIN_HEIGHT_RATIO;
        let max_height = self.proportion.width * Self::MAX_HEIGHT_RATIO;
        self.proportion.height = self.proportion.height.clamp(min_height, max_height);
    }

    /// Consume and return the normalized props.
    pub fn into_valid(mut self) -> Self {
        self.make_valid();
        self
    }

    pub fn to_map(&self) -> Details {
        let mut map = Details::new();

        if self.left != 0.0 {
            map.insert("prop_left".into(), json!(self.left));
        }
        if self.top != 0.0 {
            map.insert("prop_top".into(), json!(self.top));
        }
        if self.percent != 0.0 {
            map.insert("prop_percent".into(), json!(self.percent));
        }
        if self.proportion.width != 0.0 {
            map.insert("prop_proportion_width".into(), json!(self.proportion.width));
        }
        if self.proportion.height != 0.0 {
            map.insert("prop_proportion_height".into(), json!(self.proportion.height));
        }
        if self.center {
            map.insert("prop_center".into(), json!(true));
        }
        map.insert("prop_barcode_type".into(), json!(self.kind.as_str()));

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_props_are_filled() {
        let props = BarcodeProps::default().into_valid();

        assert_eq!(props.percent, 100.0);
        assert_eq!(props.proportion.width, 1.0);
        assert!((props.proportion.height - 0.2).abs() < 1e-9);
        assert_eq!(props.kind, BarcodeKind::Code128);
    }

    #[test]
    fn test_height_clamped_to_ratio() {
        let tall = BarcodeProps {
            proportion: Proportion {
                width: 10.0,
                height: 9.0,
            },
            ..Default::default()
        }
        .into_valid();
        assert!((tall.proportion.height - 2.0).abs() < 1e-9);

        let flat = BarcodeProps {
            proportion: Proportion {
                width: 10.0,
                height: 0.1,
            },
            ..Default::default()
        }
        .into_valid();
        assert!((flat.proportion.height - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_offsets() {
        let props = BarcodeProps {
            left: -1.0,
            top: -2.0,
            percent: -5.0,
            ..Default::default()
        }
        .into_valid();

        assert_eq!(props.left, 0.0);
        assert_eq!(props.top, 0.0);
        assert_eq!(props.percent, 100.0);
    }

    #[test]
    fn test_nan_proportion_does_not_panic() {
        let props = BarcodeProps {
            proportion: Proportion {
                width: f64::NAN,
                height: 0.0,
            },
            ..Default::default()
        }
        .into_valid();

        assert_eq!(props.proportion.width, 1.0);
        assert!((props.proportion.height - 0.2).abs() < 1e-9);

        let props = BarcodeProps {
            proportion: Proportion {
                width: f64::INFINITY,
                height: f64::NAN,
            },
            ..Default::default()
        }
        .into_valid();

        assert_eq!(props.proportion.width, 1.0);
        assert!((props.proportion.height - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_nan_offsets_and_percent() {
        let props = BarcodeProps {
            left: f64::NAN,
            top: f64::NEG_INFINITY,
            percent: f64::NAN,
            ..Default::default()
        }
        .into_valid();

        assert_eq!(props.left, 0.0);
        assert_eq!(props.top, 0.0);
        assert_eq!(props.percent, 100.0);
    }

    #[test]
    fn test_to_map_includes_kind() {
        let props = BarcodeProps {
            kind: BarcodeKind::Ean13,
            ..Default::default()
        }
        .into_valid();
        let map = props.to_map();

        assert_eq!(map["prop_barcode_type"], json!("ean13"));
        assert_eq!(map["prop_proportion_width"], json!(1.0));
        assert!(!map.contains_key("prop_left"));
    }
}
