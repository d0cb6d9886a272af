//! Display settings handed to the renderer along with the chart data

use crate::pitch::{MAX_OCTAVE, MIN_OCTAVE};

const CAPTION: &str = "\
Este gráfico muestra la tesitura de varios instrumentos musicales y voces humanas de una manera compacta y visual:
- Cada barra representa el rango de un instrumento o voz.
- El eje Y muestra la altura musical en una escala logarítmica, con líneas punteadas marcando las octavas.
- Los colores distinguen entre diferentes tipos de instrumentos y voces.
- Al seleccionar una barra, se muestra información detallada incluyendo el rango en notas y frecuencias.

Esta representación es particularmente útil para arregladores musicales, ya que permite visualizar rápidamente cómo los diferentes instrumentos y voces se superponen en términos de rango tonal.";

/// Space around the plot area, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margins {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margins {
    pub const fn uniform(margin: u32) -> Self {
        Self {
            left: margin,
            right: margin,
            top: margin,
            bottom: margin,
        }
    }
}

/// Octave guide lines
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridlineStyle {
    /// Named color
    pub color: String,
    pub width: u32,
    pub dashed: bool,
    pub label_font_size: u32,
}

/// Box shown for the selected (hovered) bar
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HoverLabelStyle {
    /// Named color
    pub background: String,
    pub font_size: u32,
}

/// Static chart configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChartConfig {
    /// Heading of the whole page
    pub page_title: String,
    pub title: String,
    pub x_axis_title: String,
    pub y_axis_title: String,
    /// Explanation shown next to the chart
    pub caption: String,
    /// Plot height in pixels
    pub height: u32,
    pub margins: Margins,
    /// Rotation of the instrument names, in degrees
    pub x_tick_angle: i32,
    pub show_y_tick_labels: bool,
    pub show_y_grid: bool,
    pub show_legend: bool,
    pub hover_label: HoverLabelStyle,
    pub gridline: GridlineStyle,
    /// Lowest octave marker exponent (`440 * 2^low_octave` Hz)
    pub low_octave: i32,
    /// Highest octave marker exponent, inclusive
    pub high_octave: i32,
}

impl ChartConfig {
    pub fn new() -> Self {
        Self {
            page_title: "Tesitura de Instrumentos y Voces para Arregladores Musicales".to_string(),
            title: "Tesitura de Instrumentos y Voces".to_string(),
            x_axis_title: String::new(),
            y_axis_title: "Altura (Notas)".to_string(),
            caption: CAPTION.to_string(),
            height: 800,
            margins: Margins::uniform(50),
            x_tick_angle: 45,
            show_y_tick_labels: false,
            show_y_grid: false,
            show_legend: false,
            hover_label: HoverLabelStyle {
                background: "white".to_string(),
                font_size: 10,
            },
            gridline: GridlineStyle {
                color: "LightGrey".to_string(),
                width: 1,
                dashed: true,
                label_font_size: 8,
            },
            low_octave: -1,
            high_octave: 7,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn page_title(mut self, page_title: impl Into<String>) -> Self {
        self.page_title = page_title.into();
        self
    }

    pub fn y_axis_title(mut self, y_axis_title: impl Into<String>) -> Self {
        self.y_axis_title = y_axis_title.into();
        self
    }

    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    pub fn margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Set the inclusive range of octave marker exponents, each clamped to
    /// `MIN_OCTAVE..=MAX_OCTAVE`
    pub fn octaves(mut self, low: i32, high: i32) -> Self {
        self.low_octave = low.clamp(MIN_OCTAVE, MAX_OCTAVE);
        self.high_octave = high.clamp(MIN_OCTAVE, MAX_OCTAVE);
        self
    }

    pub fn dashed_gridlines(mut self, dashed: bool) -> Self {
        self.gridline.dashed = dashed;
        self
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new()
    }
}
