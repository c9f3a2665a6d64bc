// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale modes and scale generation.
//!
//! Diatonic scales are spelled so that every letter appears once per
//! octave, anchored on the root's letter; the chromatic scale uses the
//! fixed sharp spelling.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::{Letter, Note, PitchClass, Semitones};

/// Scale modes supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleMode {
    Ionian,
    Dorian,
    Phrygian,
    Lydian,
    Mixolydian,
    Aeolian,
    Locrian,
    Chromatic,
}

impl ScaleMode {
    /// All modes, diatonic rotations first
    pub const ALL: [ScaleMode; 8] = [
        ScaleMode::Ionian,
        ScaleMode::Dorian,
        ScaleMode::Phrygian,
        ScaleMode::Lydian,
        ScaleMode::Mixolydian,
        ScaleMode::Aeolian,
        ScaleMode::Locrian,
        ScaleMode::Chromatic,
    ];

    /// Semitone offsets from the root, strictly increasing from 0
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleMode::Ionian => &[0, 2, 4, 5, 7, 9, 11],
            ScaleMode::Dorian => &[0, 2, 3, 5, 7, 9, 10],
            ScaleMode::Phrygian => &[0, 1, 3, 5, 7, 8, 10],
            ScaleMode::Lydian => &[0, 2, 4, 6, 7, 9, 11],
            ScaleMode::Mixolydian => &[0, 2, 4, 5, 7, 9, 10],
            ScaleMode::Aeolian => &[0, 2, 3, 5, 7, 8, 10],
            ScaleMode::Locrian => &[0, 1, 3, 5, 6, 8, 10],
            ScaleMode::Chromatic => &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
        }
    }

    /// True for the seven rotations of the major scale
    pub fn is_diatonic(self) -> bool {
        self != ScaleMode::Chromatic
    }

    /// Parse a mode name
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase().replace([' ', '-', '_'], "");
        match s.as_str() {
            "ionian" | "major" => Some(ScaleMode::Ionian),
            "dorian" => Some(ScaleMode::Dorian),
            "phrygian" => Some(ScaleMode::Phrygian),
            "lydian" => Some(ScaleMode::Lydian),
            "mixolydian" => Some(ScaleMode::Mixolydian),
            "aeolian" | "minor" | "naturalminor" => Some(ScaleMode::Aeolian),
            "locrian" => Some(ScaleMode::Locrian),
            "chromatic" => Some(ScaleMode::Chromatic),
            _ => None,
        }
    }

    /// Get a human-readable name for this mode
    pub fn name(self) -> &'static str {
        match self {
            ScaleMode::Ionian => "Ionian",
            ScaleMode::Dorian => "Dorian",
            ScaleMode::Phrygian => "Phrygian",
            ScaleMode::Lydian => "Lydian",
            ScaleMode::Mixolydian => "Mixolydian",
            ScaleMode::Aeolian => "Aeolian",
            ScaleMode::Locrian => "Locrian",
            ScaleMode::Chromatic => "Chromatic",
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Notes of `mode` rooted at `root`, repeated over `octaves` octaves.
///
/// Output is in scale-degree order and always starts with the root.
pub fn scale_notes(root: Note, mode: ScaleMode, octaves: usize) -> Vec<Note> {
    let intervals = mode.intervals();
    let root_pc = root.pitch_class() as Semitones;
    let mut notes = Vec::with_capacity(intervals.len() * octaves);

    if !mode.is_diatonic() {
        for octave in 0..octaves {
            let base = root.octave.saturating_add(octave as i32);
            for &interval in intervals {
                notes.push(Note::from_index(root_pc + interval as Semitones, base));
            }
        }
        return notes;
    }

    let root_letter = root.letter.index();
    for octave in 0..octaves {
        let base = root.octave.saturating_add(octave as i32);
        for (degree, &interval) in intervals.iter().enumerate() {
            let pitch_class = (root_pc + interval as Semitones).rem_euclid(12) as PitchClass;
            let letter_index = (root_letter + degree) % 7;
            // Passing B -> C inside one statement of the scale moves up an octave
            let note_octave = if letter_index < root_letter {
                base.saturating_add(1)
            } else {
                base
            };
            notes.push(Note::spelled(
                pitch_class,
                Letter::from_index(letter_index),
                note_octave,
            ));
        }
    }

    notes
}

/// A generated scale with its root and mode
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    root: Note,
    mode: ScaleMode,
    notes: Vec<Note>,
}

impl Scale {
    /// Generate a scale spanning `octaves` octaves
    pub fn new(root: Note, mode: ScaleMode, octaves: usize) -> Self {
        Self {
            root,
            mode,
            notes: scale_notes(root, mode, octaves),
        }
    }

    /// Get the root note
    pub fn root(&self) -> Note {
        self.root
    }

    /// Get the mode
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    /// Get the notes in scale-degree order
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Get the number of notes
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if the scale has no notes (zero octaves requested)
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Check if a pitch class belongs to the scale
    pub fn contains(&self, pitch_class: PitchClass) -> bool {
        self.notes.iter().any(|n| n.pitch_class() == pitch_class % 12)
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.root.name(), self.mode)
    }
}
