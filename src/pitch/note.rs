/*
Note Names
==========

Scientific pitch notation: letter, optional accidental, octave.
  "A4"  = concert A, key 49
  "Bb1" = B flat in octave 1, key 14
  "C#4" = "Db4" = key 41

Octaves start at C, so B3 and C4 are one semitone apart.

MIDI number = 12 * (octave + 1) + semitone + accidental
Piano key   = MIDI number - 20 (A0 = 1, C8 = 88)

The piano key number is the coordinate used by `project`, so a note name and
a frequency can be compared directly.
*/

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Offset from MIDI numbers to piano key numbers
const KEY_OFFSET: i32 = 20;

/// Spelling used when naming an arbitrary position (flats for Eb, Ab, Bb)
const SPELLINGS: [(char, Accidental); 12] = [
    ('C', Accidental::Natural),
    ('C', Accidental::Sharp),
    ('D', Accidental::Natural),
    ('E', Accidental::Flat),
    ('E', Accidental::Natural),
    ('F', Accidental::Natural),
    ('F', Accidental::Sharp),
    ('G', Accidental::Natural),
    ('A', Accidental::Flat),
    ('A', Accidental::Natural),
    ('B', Accidental::Flat),
    ('B', Accidental::Natural),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Accidental {
    Natural,
    Sharp,
    Flat,
}

impl Accidental {
    fn semitones(self) -> i32 {
        match self {
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::Flat => -1,
        }
    }

    fn symbol(self) -> &'static str {
        match self {
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::Flat => "b",
        }
    }
}

/// Errors from parsing a note name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteParseError {
    #[error("empty note name")]
    Empty,
    #[error("invalid note letter {0:?} (expected A-G)")]
    InvalidLetter(char),
    #[error("invalid octave in note name {0:?}")]
    InvalidOctave(String),
}

/// A note in scientific pitch notation, e.g. `Bb1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(into = "String", try_from = "String")
)]
pub struct NoteName {
    letter: char,
    accidental: Accidental,
    octave: i32,
}

impl NoteName {
    /// Create a note name. `letter` must be one of `A`..=`G`.
    pub fn new(letter: char, accidental: Accidental, octave: i32) -> Result<Self, NoteParseError> {
        let letter = letter.to_ascii_uppercase();
        letter_semitone(letter).ok_or(NoteParseError::InvalidLetter(letter))?;
        Ok(Self {
            letter,
            accidental,
            octave,
        })
    }

    /// Name the piano key nearest to an axis position.
    ///
    /// Positions beyond the `i32` key range saturate; NaN names key 0.
    pub fn nearest(position: f64) -> Self {
        let midi = (position.round() as i32).saturating_add(KEY_OFFSET);
        let (letter, accidental) = SPELLINGS[midi.rem_euclid(12) as usize];
        Self {
            letter,
            accidental,
            octave: midi.div_euclid(12) - 1,
        }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    /// MIDI note number (C4 = 60). May fall outside 0..=127.
    pub fn midi(&self) -> i32 {
        // Letters are validated on construction
        let semitone = letter_semitone(self.letter).unwrap_or(0);
        self.octave
            .saturating_add(1)
            .saturating_mul(12)
            .saturating_add(semitone + self.accidental.semitones())
    }

    /// Piano key number (A0 = 1, A4 = 49, C8 = 88)
    pub fn key_number(&self) -> i32 {
        self.midi().saturating_sub(KEY_OFFSET)
    }
}

fn letter_semitone(letter: char) -> Option<i32> {
    match letter {
        'C' => Some(0),
        'D' => Some(2),
        'E' => Some(4),
        'F' => Some(5),
        'G' => Some(7),
        'A' => Some(9),
        'B' => Some(11),
        _ => None,
    }
}

impl FromStr for NoteName {
    type Err = NoteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let letter = chars.next().ok_or(NoteParseError::Empty)?;

        let rest = chars.as_str();
        let (accidental, octave) = if let Some(octave) = rest.strip_prefix('#') {
            (Accidental::Sharp, octave)
        } else if let Some(octave) = rest.strip_prefix('b') {
            (Accidental::Flat, octave)
        } else {
            (Accidental::Natural, rest)
        };

        let octave = octave
            .parse::<i32>()
            .map_err(|_| NoteParseError::InvalidOctave(s.to_string()))?;

        NoteName::new(letter, accidental, octave)
    }
}

impl fmt::Display for NoteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental.symbol(), self.octave)
    }
}

impl TryFrom<String> for NoteName {
    type Error = NoteParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<NoteName> for String {
    fn from(note: NoteName) -> Self {
        note.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(s: &str) -> NoteName {
        s.parse().unwrap()
    }

    #[test]
    fn piano_keys() {
        assert_eq!(note("A0").key_number(), 1);
        assert_eq!(note("A4").key_number(), 49);
        assert_eq!(note("C8").key_number(), 88);
        assert_eq!(note("C4").midi(), 60);
    }

    #[test]
    fn accidentals() {
        assert_eq!(note("Bb1").key_number(), 14);
        assert_eq!(note("C#4").key_number(), note("Db4").key_number());
        // Cb4 is enharmonic with B3
        assert_eq!(note("Cb4").key_number(), note("B3").key_number());
    }

    #[test]
    fn octave_boundary_is_at_c() {
        assert_eq!(note("C4").key_number() - note("B3").key_number(), 1);
        assert_eq!(note("C5").key_number() - note("C4").key_number(), 12);
    }

    #[test]
    fn negative_and_wide_octaves() {
        assert_eq!(note("C-1").midi(), 0);
        assert_eq!(note("A11").key_number(), 49 + 7 * 12);
    }

    #[test]
    fn display_keeps_spelling() {
        for s in ["Bb3", "C#4", "G7", "E1", "A-1"] {
            assert_eq!(note(s).to_string(), s);
        }
    }

    #[test]
    fn nearest_key() {
        assert_eq!(NoteName::nearest(49.0).to_string(), "A4");
        assert_eq!(NoteName::nearest(88.0).to_string(), "C8");
        assert_eq!(NoteName::nearest(13.93).to_string(), "Bb1");
        assert_eq!(NoteName::nearest(1.2).to_string(), "A0");
        assert_eq!(NoteName::nearest(-8.0).to_string(), "C0");
    }

    #[test]
    fn parse_errors() {
        assert_eq!("".parse::<NoteName>(), Err(NoteParseError::Empty));
        assert_eq!("   ".parse::<NoteName>(), Err(NoteParseError::Empty));
        assert_eq!("H4".parse::<NoteName>(), Err(NoteParseError::InvalidLetter('H')));
        assert_eq!(
            "C".parse::<NoteName>(),
            Err(NoteParseError::InvalidOctave("C".to_string()))
        );
        assert_eq!(
            "Bx3".parse::<NoteName>(),
            Err(NoteParseError::InvalidOctave("Bx3".to_string()))
        );
    }

    #[test]
    fn lowercase_letter_is_accepted() {
        assert_eq!(note("g3"), note("G3"));
    }

    #[test]
    fn nearest_saturates_far_off_axis() {
        // Position of an infinite frequency
        let high = NoteName::nearest(f64::INFINITY);
        assert_eq!(high, NoteName::nearest(1e300));
        assert!(high.octave() > 100_000_000);

        let low = NoteName::nearest(f64::NEG_INFINITY);
        assert!(low.octave() < -100_000_000);

        assert_eq!(NoteName::nearest(f64::NAN).to_string(), "Ab0");
    }

    #[test]
    fn midi_saturates_on_extreme_octaves() {
        assert_eq!(note("C2147483647").midi(), i32::MAX);
        assert_eq!(note("C-2147483648").midi(), i32::MIN);
        assert_eq!(note("C-2147483648").key_number(), i32::MIN);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_goes_through_the_parser() {
        assert_eq!(serde_json::to_string(&note("Bb1")).unwrap(), "\"Bb1\"");
        assert_eq!(serde_json::from_str::<NoteName>("\"C#4\"").unwrap(), note("C#4"));

        assert!(serde_json::from_str::<NoteName>("\"Z4\"").is_err());
        assert!(serde_json::from_str::<NoteName>("\"\"").is_err());
        // The field layout is not accepted either
        let fields = r#"{"letter":"Z","accidental":"Natural","octave":4}"#;
        assert!(serde_json::from_str::<NoteName>(fields).is_err());
    }
}
