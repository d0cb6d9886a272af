//! Renderer-ready chart data
//!
//! Everything a plotting backend needs to draw the range chart: one floating
//! bar per instrument, the octave guide lines and the display settings.

mod config;
mod hover;

pub use config::{ChartConfig, GridlineStyle, HoverLabelStyle, Margins};
pub use hover::HoverText;

use crate::instruments::{build_table, Category, InstrumentRange, Rgb};
use crate::pitch::{octave_markers, OctaveMarker};

/// Axis range used when there is nothing to plot: the 88 piano keys
const EMPTY_BOUNDS: [f64; 2] = [1.0, 88.0];
/// Extra room above and below the plotted data, in semitones
const BOUNDS_PADDING: f64 = 1.0;

/// A floating bar spanning one instrument's range
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bar {
    pub label: String,
    pub category: Category,
    /// Bottom of the bar (`y_min`)
    pub base: f64,
    /// `y_max - y_min`
    pub height: f64,
    pub color: Rgb,
    pub hover: HoverText,
}

impl Bar {
    pub fn new(range: &InstrumentRange) -> Self {
        Self {
            label: range.name.clone(),
            category: range.category,
            base: range.y_min,
            height: range.span(),
            color: range.color,
            hover: HoverText::new(range),
        }
    }

    /// Top of the bar (`y_max`)
    pub fn top(&self) -> f64 {
        self.base + self.height
    }
}

/// Output only: read instrument rows back as [`InstrumentRange`] and
/// rebuild the chart with [`ChartData::from_table`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartData {
    /// In table order
    pub bars: Vec<Bar>,
    /// Lowest first
    pub gridlines: Vec<OctaveMarker>,
    pub config: ChartConfig,
}

impl ChartData {
    pub fn new(table: &[InstrumentRange], gridlines: Vec<OctaveMarker>, config: ChartConfig) -> Self {
        let bars: Vec<_> = table.iter().map(Bar::new).collect();
        tracing::debug!(
            bars = bars.len(),
            gridlines = gridlines.len(),
            "prepared chart data"
        );
        Self {
            bars,
            gridlines,
            config,
        }
    }

    /// Chart of `table`, with the octave markers `config` asks for
    pub fn from_table(table: &[InstrumentRange], config: ChartConfig) -> Self {
        let gridlines = octave_markers(config.low_octave, config.high_octave);
        Self::new(table, gridlines, config)
    }

    /// Chart of the embedded table
    pub fn from_config(config: ChartConfig) -> Self {
        Self::from_table(&build_table(), config)
    }

    /// Vertical range `[low, high]` covering every bar and gridline
    pub fn y_bounds(&self) -> [f64; 2] {
        let positions = self
            .bars
            .iter()
            .flat_map(|bar| [bar.base, bar.top()])
            .chain(self.gridlines.iter().map(|marker| marker.position));

        let (low, high) = positions.fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), y| {
            (low.min(y), high.max(y))
        });

        if low > high {
            return EMPTY_BOUNDS;
        }
        [low - BOUNDS_PADDING, high + BOUNDS_PADDING]
    }

    /// Pretty-printed JSON for an external renderer
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Default for ChartData {
    fn default() -> Self {
        Self::from_config(ChartConfig::default())
    }
}
