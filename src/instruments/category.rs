use std::fmt;

/// Instrument family, used for grouping and for the hover text.
///
/// Serialized as its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Piano
    #[cfg_attr(feature = "serde", serde(rename = "Cuerda percutida"))]
    StruckString,
    /// Guitar
    #[cfg_attr(feature = "serde", serde(rename = "Cuerda pulsada"))]
    PluckedString,
    /// Violin family
    #[cfg_attr(feature = "serde", serde(rename = "Cuerda frotada"))]
    BowedString,
    #[cfg_attr(feature = "serde", serde(rename = "Viento madera"))]
    Woodwind,
    #[cfg_attr(feature = "serde", serde(rename = "Voz"))]
    Voice,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::StruckString,
        Category::PluckedString,
        Category::BowedString,
        Category::Woodwind,
        Category::Voice,
    ];

    /// Display label shown on the chart
    pub fn label(self) -> &'static str {
        match self {
            Category::StruckString => "Cuerda percutida",
            Category::PluckedString => "Cuerda pulsada",
            Category::BowedString => "Cuerda frotada",
            Category::Woodwind => "Viento madera",
            Category::Voice => "Voz",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_distinct() {
        let mut labels: Vec<_> = Category::ALL.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Category::ALL.len());
    }

    #[test]
    fn display_uses_label() {
        assert_eq!(Category::Woodwind.to_string(), "Viento madera");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_as_label() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.label()));
            assert_eq!(serde_json::from_str::<Category>(&json).unwrap(), category);
        }
        assert!(serde_json::from_str::<Category>("\"BowedString\"").is_err());
    }
}
