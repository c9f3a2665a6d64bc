// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note names, pitch classes and spelling.
//!
//! A [`Note`] is a letter, an accidental and an octave. Pitch classes use
//! the fixed ascending order C, C#, D, D#, E, F, F#, G, G#, A, A#, B with
//! C = 0, and the absolute value of a note is `octave * 12 + pitch_class`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Pitch class (0-11)
pub type PitchClass = u8;

/// Semitone offset or pitch index
pub type Semitones = i32;

/// Absolute semitone value (`octave * 12 + pitch_class`).
///
/// Wider than an octave number so that every `i32` octave and every
/// `i32` shift has an exact absolute value.
pub type Pitch = i64;

/// Octave assumed when a note name does not carry one
pub const DEFAULT_OCTAVE: i32 = 4;

/// Letter names (natural notes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    /// All letters in ascending order, starting at C
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Pitch class of the natural note with this letter
    pub fn natural_pitch_class(self) -> PitchClass {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Position in the letter sequence (C = 0 ... B = 6)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Letter at a position in the letter sequence, wrapping every 7
    pub fn from_index(index: usize) -> Self {
        Letter::ALL[index % 7]
    }

    /// Parse an uppercase letter name
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'C' => Some(Letter::C),
            'D' => Some(Letter::D),
            'E' => Some(Letter::E),
            'F' => Some(Letter::F),
            'G' => Some(Letter::G),
            'A' => Some(Letter::A),
            'B' => Some(Letter::B),
            _ => None,
        }
    }

    fn as_char(self) -> char {
        match self {
            Letter::C => 'C',
            Letter::D => 'D',
            Letter::E => 'E',
            Letter::F => 'F',
            Letter::G => 'G',
            Letter::A => 'A',
            Letter::B => 'B',
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Accidentals, up to a double sharp or double flat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    /// Semitone adjustment applied to the natural letter
    pub fn offset(self) -> Semitones {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// Accidental for a semitone adjustment, if one exists
    pub fn from_offset(offset: Semitones) -> Option<Self> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }

    /// Written form ("", "#", "##", "b", "bb")
    pub fn symbol(self) -> &'static str {
        match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        }
    }

    /// Parse the written form; sharps and flats cannot be mixed
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "" => Some(Accidental::Natural),
            "#" => Some(Accidental::Sharp),
            "##" => Some(Accidental::DoubleSharp),
            "b" => Some(Accidental::Flat),
            "bb" => Some(Accidental::DoubleFlat),
            _ => None,
        }
    }
}

/// Fixed sharp spelling for each pitch class
const SHARP_SPELLINGS: [(Letter, Accidental); 12] = [
    (Letter::C, Accidental::Natural),
    (Letter::C, Accidental::Sharp),
    (Letter::D, Accidental::Natural),
    (Letter::D, Accidental::Sharp),
    (Letter::E, Accidental::Natural),
    (Letter::F, Accidental::Natural),
    (Letter::F, Accidental::Sharp),
    (Letter::G, Accidental::Natural),
    (Letter::G, Accidental::Sharp),
    (Letter::A, Accidental::Natural),
    (Letter::A, Accidental::Sharp),
    (Letter::B, Accidental::Natural),
];

/// Sharp spelling of a pitch class (taken modulo 12)
pub fn sharp_spelling(pitch_class: Semitones) -> (Letter, Accidental) {
    SHARP_SPELLINGS[pitch_class.rem_euclid(12) as usize]
}

/// Pitch class of a letter with an accidental, normalized into 0-11
pub fn note_index(letter: Letter, accidental: Accidental) -> PitchClass {
    (letter.natural_pitch_class() as Semitones + accidental.offset()).rem_euclid(12) as PitchClass
}

/// Spell a pitch class using a given letter.
///
/// The signed distance from the natural letter is folded into [-6, 6].
/// Distances beyond a double accidental fall back to the sharp spelling.
pub fn spell(target: PitchClass, letter: Letter) -> (Letter, Accidental) {
    let mut distance =
        (target as Semitones - letter.natural_pitch_class() as Semitones).rem_euclid(12);
    if distance > 6 {
        distance -= 12;
    }

    match Accidental::from_offset(distance) {
        Some(accidental) => (letter, accidental),
        None => {
            debug!(pitch_class = target, %letter, distance, "no spelling within a double accidental, using sharps");
            sharp_spelling(target as Semitones)
        }
    }
}

/// Errors from strict note parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoteParseError {
    #[error("empty note name")]
    Empty,
    #[error("invalid note letter '{0}'")]
    InvalidLetter(char),
    #[error("invalid accidental '{0}'")]
    InvalidAccidental(String),
    #[error("invalid octave '{0}'")]
    InvalidOctave(String),
}

/// A spelled note with an octave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Note {
    pub letter: Letter,
    pub accidental: Accidental,
    pub octave: i32,
}

impl Note {
    /// Middle C, also the value unparseable note names resolve to
    pub const C4: Note = Note::new(Letter::C, Accidental::Natural, DEFAULT_OCTAVE);

    /// Create a note
    pub const fn new(letter: Letter, accidental: Accidental, octave: i32) -> Self {
        Self {
            letter,
            accidental,
            octave,
        }
    }

    /// Parse a note name, resolving anything unparseable to C4
    pub fn parse(text: &str) -> Self {
        match text.parse::<Note>() {
            Ok(note) => note,
            Err(e) => {
                debug!(text, error = %e, "unparseable note, defaulting to C4");
                Note::C4
            }
        }
    }

    /// Render an index as a sharp-spelled note.
    ///
    /// The index may be a pitch class or an absolute value; anything outside
    /// 0-11 carries into the octave (floored), added to `octave_base`.
    pub fn from_index(index: Semitones, octave_base: i32) -> Self {
        let (letter, accidental) = sharp_spelling(index);
        Note::new(letter, accidental, octave_base.saturating_add(index.div_euclid(12)))
    }

    /// Sharp-spelled note for an absolute value.
    ///
    /// Octaves past the `i32` range saturate at `i32::MIN` / `i32::MAX`.
    pub fn from_absolute(absolute: Pitch) -> Self {
        let (letter, accidental) = sharp_spelling(absolute.rem_euclid(12) as Semitones);
        let octave = absolute
            .div_euclid(12)
            .clamp(i32::MIN as Pitch, i32::MAX as Pitch) as i32;
        Note::new(letter, accidental, octave)
    }

    /// Note for a pitch class spelled with `letter` where possible
    pub fn spelled(pitch_class: PitchClass, letter: Letter, octave: i32) -> Self {
        let (letter, accidental) = spell(pitch_class, letter);
        Note::new(letter, accidental, octave)
    }

    /// Pitch class (0-11)
    pub fn pitch_class(&self) -> PitchClass {
        note_index(self.letter, self.accidental)
    }

    /// Absolute semitone value
    pub fn absolute(&self) -> Pitch {
        self.octave as Pitch * 12 + self.pitch_class() as Pitch
    }

    /// Shift by semitones; the result uses sharp spelling
    pub fn transpose(&self, semitones: Semitones) -> Self {
        Note::from_absolute(self.absolute() + semitones as Pitch)
    }

    /// Letter and accidental without the octave (e.g. "Eb")
    pub fn name(&self) -> String {
        format!("{}{}", self.letter, self.accidental.symbol())
    }
}

impl Default for Note {
    fn default() -> Self {
        Note::C4
    }
}

impl FromStr for Note {
    type Err = NoteParseError;

    /// Strict parse of `<Letter>[#|##|b|bb][octave]`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(NoteParseError::Empty)?;
        let letter = Letter::from_char(first).ok_or(NoteParseError::InvalidLetter(first))?;

        let rest = chars.as_str();
        let accidental_len = rest.bytes().take_while(|&b| b == b'#' || b == b'b').count();
        let (symbol, octave_text) = rest.split_at(accidental_len);
        let accidental = Accidental::from_symbol(symbol)
            .ok_or_else(|| NoteParseError::InvalidAccidental(symbol.to_string()))?;

        let octave = if octave_text.is_empty() {
            DEFAULT_OCTAVE
        } else {
            parse_octave(octave_text)?
        };

        Ok(Note::new(letter, accidental, octave))
    }
}

fn parse_octave(text: &str) -> Result<i32, NoteParseError> {
    let digits = text.strip_prefix('-').unwrap_or(text);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NoteParseError::InvalidOctave(text.to_string()));
    }
    text.parse::<i32>()
        .map_err(|_| NoteParseError::InvalidOctave(text.to_string()))
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental.symbol(), self.octave)
    }
}
