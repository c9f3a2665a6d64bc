// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The seven diatonic chords of a key, ready to show or play.

use std::fmt;

use super::chord::ChordType;
use super::detect::detect_chord_name;
use super::diatonic::{diatonic_chord, diatonic_chord_type, roman_numeral};
use super::pitch::Note;
use super::scale::{Scale, ScaleMode};

/// One diatonic chord of a palette
#[derive(Debug, Clone, PartialEq)]
pub struct PaletteEntry {
    /// 0-based scale degree
    pub degree: usize,
    /// Roman numeral label (e.g. "vii°")
    pub numeral: String,
    /// Measured triad quality
    pub quality: ChordType,
    /// Voiced notes
    pub notes: Vec<Note>,
    /// Chord symbol detected from the voiced notes
    pub name: String,
}

/// Diatonic chords on every degree of a mode
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    root: Note,
    mode: ScaleMode,
    entries: Vec<PaletteEntry>,
}

impl Palette {
    /// Build the palette for `root` and `mode`.
    ///
    /// Triads are taken from a two-octave scale so every degree is complete.
    /// Chromatic mode has no diatonic degrees and yields an empty palette.
    pub fn new(root: Note, mode: ScaleMode, compact_voicing: bool) -> Self {
        let entries = if mode.is_diatonic() {
            let scale = Scale::new(root, mode, 2);
            (0..7)
                .map(|degree| {
                    let quality = diatonic_chord_type(scale.notes(), degree);
                    let notes = diatonic_chord(scale.notes(), degree, compact_voicing);
                    PaletteEntry {
                        degree,
                        numeral: roman_numeral(degree, quality),
                        quality,
                        name: detect_chord_name(&notes),
                        notes,
                    }
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            root,
            mode,
            entries,
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

    /// Get all entries in degree order
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Get the entry for a 0-based degree
    pub fn get(&self, degree: usize) -> Option<&PaletteEntry> {
        self.entries.get(degree)
    }
}

impl fmt::Display for PaletteEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let notes: Vec<String> = self.notes.iter().map(|n| n.to_string()).collect();
        write!(f, "{:<6} {:<8} {}", self.numeral, self.name, notes.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_c_major_palette() {
        let palette = Palette::new(Note::C4, ScaleMode::Ionian, false);
        let numerals: Vec<&str> = palette.entries().iter().map(|e| e.numeral.as_str()).collect();
        assert_eq!(numerals, ["I", "ii", "iii", "IV", "V", "vi", "vii°"]);

        let names: Vec<&str> = palette.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["C", "Dm", "Em", "F", "G", "Am", "Bdim"]);
    }

    #[test]
    fn test_compact_palette_names_inversions() {
        let palette = Palette::new(Note::C4, ScaleMode::Ionian, true);
        assert_eq!(palette.get(2).unwrap().name, "Em");
        assert_eq!(palette.get(3).unwrap().name, "F/C");
        assert_eq!(palette.get(4).unwrap().name, "G/D");
    }

    #[test]
    fn test_minor_palette() {
        let palette = Palette::new(Note::parse("A3"), ScaleMode::Aeolian, false);
        let numerals: Vec<&str> = palette.entries().iter().map(|e| e.numeral.as_str()).collect();
        assert_eq!(numerals, ["i", "ii°", "III", "iv", "v", "VI", "VII"]);
        assert_eq!(palette.root().to_string(), "A3");
        assert_eq!(palette.mode(), ScaleMode::Aeolian);
    }

    #[test]
    fn test_chromatic_palette_is_empty() {
        let palette = Palette::new(Note::C4, ScaleMode::Chromatic, true);
        assert!(palette.entries().is_empty());
        assert!(palette.get(0).is_none());
    }

    #[test]
    fn test_entry_display() {
        let palette = Palette::new(Note::C4, ScaleMode::Ionian, false);
        let line = palette.get(0).unwrap().to_string();
        assert!(line.starts_with("I "));
        assert!(line.ends_with("C4 E4 G4"));
    }
}
