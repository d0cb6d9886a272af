use std::collections::HashSet;

use super::{Category, InstrumentRange, InstrumentSpec, RangeError, Rgb};
use Category::*;

const fn row(
    name: &'static str,
    freq_min: f64,
    freq_max: f64,
    note_min: &'static str,
    note_max: &'static str,
    category: Category,
    color: u32,
) -> InstrumentSpec<'static> {
    InstrumentSpec {
        name,
        freq_min,
        freq_max,
        note_min,
        note_max,
        category,
        color: Rgb::from_u32(color),
    }
}

/// Instruments and voices shown on the chart, in display order
#[rustfmt::skip]
pub const TABLE: &[InstrumentSpec<'static>] = &[
    row("Piano",                  27.5, 4186.0, "A0",  "C8", StruckString,  0x000000),
    row("Guitarra",               82.4, 1175.0, "E2",  "D6", PluckedString, 0x8B4513),
    row("Violín",                196.0, 3136.0, "G3",  "G7", BowedString,   0xFFB3BA),
    row("Viola",                 131.0, 1568.0, "C3",  "G6", BowedString,   0xBAFFC9),
    row("Violonchelo",            65.0, 1047.0, "C2",  "C6", BowedString,   0xBAE1FF),
    row("Contrabajo",             41.0,  247.0, "E1",  "B3", BowedString,   0xFFFFBA),
    row("Flauta",                262.0, 2093.0, "C4",  "C7", Woodwind,      0xFFD700),
    row("Oboe",                  247.0, 1568.0, "B3",  "G6", Woodwind,      0xFF69B4),
    row("Clarinete",             147.0, 1568.0, "D3",  "G6", Woodwind,      0x00CED1),
    row("Fagot",                  58.0,  587.0, "Bb1", "D5", Woodwind,      0xFFA500),
    row("Voz de niño (soprano)", 260.0, 1000.0, "C4",  "C6", Voice,         0xFF1493),
    row("Voz de mujer (soprano)",230.0, 1046.0, "Bb3", "C6", Voice,         0xFF69B4),
    row("Voz de mujer (alto)",   175.0,  698.0, "F3",  "F5", Voice,         0xDA70D6),
    row("Voz de hombre (tenor)", 130.0,  523.0, "C3",  "C5", Voice,         0x4169E1),
    row("Voz de hombre (bajo)",   80.0,  349.0, "E2",  "F4", Voice,         0x000080),
];

/// Build the embedded instrument table.
///
/// Deterministic: every call yields the same rows, in [`TABLE`] order.
pub fn build_table() -> Vec<InstrumentRange> {
    let table: Vec<_> = TABLE.iter().map(InstrumentRange::derive).collect();
    tracing::debug!(rows = table.len(), "built instrument table");
    table
}

/// Build a table from rows that have not been checked.
///
/// Stops at the first invalid row; names must be unique.
pub fn try_build_table(specs: &[InstrumentSpec<'_>]) -> Result<Vec<InstrumentRange>, RangeError> {
    let mut seen = HashSet::with_capacity(specs.len());
    let mut table = Vec::with_capacity(specs.len());

    for spec in specs {
        if !seen.insert(spec.name) {
            tracing::warn!(name = spec.name, "duplicate instrument row");
            return Err(RangeError::DuplicateName(spec.name.to_string()));
        }
        let range = InstrumentRange::from_spec(spec).inspect_err(|err| {
            tracing::warn!(%err, "rejected instrument row");
        })?;
        table.push(range);
    }

    tracing::debug!(rows = table.len(), "built instrument table");
    Ok(table)
}
