//! Heatmap shapes and the per-question color scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use survey_model::Question;

use crate::columns::SegmentColumn;
use crate::error::{Result, SegmentsError};
use crate::extract::numeric_cell;
use crate::kind::SegmentKind;

/// An sRGB color, serialized as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear blend toward `other`; `t` is clamped to `[0, 1]`.
    pub fn lerp(self, other: Rgb, t: f64) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let channel = |from: u8, to: u8| {
            let value = f64::from(from) + (f64::from(to) - f64::from(from)) * t;
            value.round().clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            channel(self.r, other.r),
            channel(self.g, other.g),
            channel(self.b, other.b),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = SegmentsError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || SegmentsError::InvalidColor(s.to_string());
        let hex = s.strip_prefix('#').ok_or_else(invalid)?;
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };
        Ok(Rgb::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl TryFrom<String> for Rgb {
    type Error = SegmentsError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgb> for String {
    fn from(color: Rgb) -> Self {
        color.to_hex()
    }
}

/// Heatmap ramp colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapPalette {
    /// Color of the smallest value.
    pub low: Rgb,
    /// Color at the midpoint of the range.
    pub mid: Rgb,
    /// Color of the largest value.
    pub high: Rgb,
    /// Color of every cell when all values are equal.
    pub neutral: Rgb,
}

impl Default for HeatmapPalette {
    fn default() -> Self {
        Self {
            low: Rgb::new(0, 255, 0),
            mid: Rgb::new(255, 255, 0),
            high: Rgb::new(255, 0, 0),
            neutral: Rgb::new(204, 204, 204),
        }
    }
}

impl HeatmapPalette {
    pub fn with_low(mut self, low: Rgb) -> Self {
        self.low = low;
        self
    }

    pub fn with_mid(mut self, mid: Rgb) -> Self {
        self.mid = mid;
        self
    }

    pub fn with_high(mut self, high: Rgb) -> Self {
        self.high = high;
        self
    }

    pub fn with_neutral(mut self, neutral: Rgb) -> Self {
        self.neutral = neutral;
        self
    }
}

/// Min-max color scale over one question's values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScale {
    pub min: f64,
    pub max: f64,
    palette: HeatmapPalette,
}

impl ColorScale {
    /// `None` when there are no values.
    pub fn from_values(values: &[f64], palette: HeatmapPalette) -> Option<Self> {
        let (first, rest) = values.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), value| {
                (min.min(*value), max.max(*value))
            });
        Some(Self { min, max, palette })
    }

    pub fn color(&self, value: f64) -> Rgb {
        if self.min == self.max {
            return self.palette.neutral;
        }
        let t = ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0);
        if t < 0.5 {
            self.palette.low.lerp(self.palette.mid, t * 2.0)
        } else {
            self.palette.mid.lerp(self.palette.high, (t - 0.5) * 2.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapCell {
    /// Option text.
    pub x: String,
    /// Column header.
    pub y: String,
    pub value: f64,
    pub color: Rgb,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub question: String,
    pub cells: Vec<HeatmapCell>,
    /// Scale bounds; absent when no cell resolved.
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Heatmap of `question`, option-major.
///
/// Cells without a numeric value are left out. The scale covers this
/// question only.
pub fn heatmap(
    question: &Question,
    columns: &[SegmentColumn],
    kind: &SegmentKind,
    palette: HeatmapPalette,
) -> Heatmap {
    let resolved: Vec<(&str, &str, f64)> = question
        .options
        .iter()
        .flat_map(|option| {
            columns.iter().filter_map(move |column| {
                numeric_cell(option, column, kind)
                    .map(|value| (option.text.as_str(), column.header.as_str(), value))
            })
        })
        .collect();

    let values: Vec<f64> = resolved.iter().map(|(_, _, value)| *value).collect();
    let scale = ColorScale::from_values(&values, palette);

    let cells = match scale {
        Some(scale) => resolved
            .into_iter()
            .map(|(x, y, value)| HeatmapCell {
                x: x.to_string(),
                y: y.to_string(),
                value,
                color: scale.color(value),
            })
            .collect(),
        None => Vec::new(),
    };

    Heatmap {
        question: question.text.clone(),
        cells,
        min: scale.map(|scale| scale.min),
        max: scale.map(|scale| scale.max),
    }
}
