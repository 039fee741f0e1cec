//! Placement props for rectangular content (matrix codes, QR codes).

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::offset;
use crate::structure::Details;

/// Where a rectangular element sits inside its cell.
///
/// `percent` is the share of the cell the element may occupy. With
/// `center` set, the element is centered and `left`/`top` are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RectProps {
    #[serde(default)]
    pub left: f64,
    #[serde(default)]
    pub top: f64,
    #[serde(default)]
    pub percent: f64,
    /// Size against the cell width only, ignoring its height.
    #[serde(default)]
    pub just_reference_width: bool,
    #[serde(default)]
    pub center: bool,
}

impl RectProps {
    pub const MAX_PERCENT: f64 = 100.0;

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
        if self.just_reference_width {
            map.insert("prop_just_reference_width".into(), json!(true));
        }
        if self.center {
            map.insert("prop_center".into(), json!(true));
        }

        map
    }
}
