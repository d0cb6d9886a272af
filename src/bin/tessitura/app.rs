//! Tessitura - application builder and runner

use std::io::Write;

use color_eyre::eyre::{Result as EyreResult, WrapErr};

use tessitura::{build_table, ChartConfig, ChartData, InstrumentRange};

use super::ui::UiApp;

/// Main application builder
pub struct Tessitura {
    config: ChartConfig,
}

impl Tessitura {
    /// Create a new Tessitura instance with the default chart settings
    pub fn new() -> Self {
        Self {
            config: ChartConfig::default(),
        }
    }

    /// Replace the chart settings
    pub fn config(mut self, config: ChartConfig) -> Self {
        self.config = config;
        self
    }

    /// Build the table and the chart data derived from it
    fn prepare(self) -> (Vec<InstrumentRange>, ChartData) {
        let table = build_table();
        let chart = ChartData::from_table(&table, self.config);
        (table, chart)
    }

    /// Run the interactive chart (takes over the terminal until quit)
    pub fn run(self) -> EyreResult<()> {
        let (table, chart) = self.prepare();
        tracing::info!(instruments = table.len(), "starting chart view");

        let mut terminal = ratatui::init();
        let result = UiApp::new(table, chart).run(&mut terminal);
        ratatui::restore();

        result
    }

    /// Print one aligned line per instrument
    pub fn print_table(self, out: &mut impl Write) -> EyreResult<()> {
        let (table, chart) = self.prepare();

        writeln!(out, "{}", chart.config.page_title)?;
        writeln!(out)?;
        writeln!(
            out,
            "{:<24} {:<17} {:>9} {:>17} {:>15}",
            "Instrumento", "Tipo", "Rango", "Frecuencia (Hz)", "Posición"
        )?;
        for range in &table {
            writeln!(
                out,
                "{:<24} {:<17} {:>4} - {:<4} {:>7.1} - {:<7.1} {:>6.2} - {:<6.2}",
                range.name,
                range.category.label(),
                range.note_min,
                range.note_max,
                range.freq_min,
                range.freq_max,
                range.y_min,
                range.y_max,
            )?;
        }

        writeln!(out)?;
        let octaves: Vec<_> = chart
            .gridlines
            .iter()
            .map(|marker| format!("{} {:.0} Hz", marker.label, marker.frequency))
            .collect();
        writeln!(out, "Octavas: {}", octaves.join(", "))?;

        out.flush().wrap_err("failed to write instrument table")
    }

    /// Print the chart data as pretty JSON
    #[cfg(feature = "serde")]
    pub fn print_json(self, out: &mut impl Write) -> EyreResult<()> {
        let (_, chart) = self.prepare();
        let json = chart.to_json().wrap_err("failed to serialize chart data")?;
        writeln!(out, "{json}").wrap_err("failed to write chart data")
    }
}

impl Default for Tessitura {
    fn default() -> Self {
        Self::new()
    }
}
