use std::fmt;

use crate::instruments::InstrumentRange;

/// Details shown for a bar under the cursor (or selected).
///
/// Frequencies are rounded to whole Hz.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HoverText {
    /// Instrument name, shown in bold
    pub name: String,
    /// `Tipo: <category>`
    pub category: String,
    /// `Rango: <note_min> - <note_max>`
    pub notes: String,
    /// `Frecuencia: <min> - <max> Hz`
    pub frequencies: String,
}

impl HoverText {
    pub fn new(range: &InstrumentRange) -> Self {
        Self {
            name: range.name.clone(),
            category: format!("Tipo: {}", range.category),
            notes: format!("Rango: {} - {}", range.note_min, range.note_max),
            frequencies: format!(
                "Frecuencia: {:.0} - {:.0} Hz",
                range.freq_min, range.freq_max
            ),
        }
    }

    /// Lines in display order
    pub fn lines(&self) -> [&str; 4] {
        [
            self.name.as_str(),
            self.category.as_str(),
            self.notes.as_str(),
            self.frequencies.as_str(),
        ]
    }
}

impl fmt::Display for HoverText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instruments::build_table;

    #[test]
    fn violin() {
        let table = build_table();
        let hover = HoverText::new(&table[2]);
        assert_eq!(
            hover.to_string(),
            "Violín\nTipo: Cuerda frotada\nRango: G3 - G7\nFrecuencia: 196 - 3136 Hz"
        );
    }

    #[test]
    fn frequencies_are_whole_hz() {
        let table = build_table();
        assert_eq!(HoverText::new(&table[0]).frequencies, "Frecuencia: 28 - 4186 Hz");
        assert_eq!(HoverText::new(&table[1]).frequencies, "Frecuencia: 82 - 1175 Hz");
    }
}
