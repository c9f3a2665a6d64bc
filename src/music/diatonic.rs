// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Diatonic triads built by stacking thirds within a scale.
//!
//! Quality is measured from the intervals the scale actually produces, so
//! the same code covers every diatonic mode. Octave placement of the triad
//! is delegated to a [`VoicingPolicy`].

use tracing::debug;

use super::chord::ChordType;
use super::pitch::Note;

/// Scale degree from which [`CompactVoicing`] drops the fifth
pub const COMPACT_VOICING_FROM_DEGREE: usize = 3;

const NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Quality of the triad on `degree`, wrapping around the scale
pub fn diatonic_chord_type(scale: &[Note], degree: usize) -> ChordType {
    if scale.is_empty() {
        return ChordType::Major;
    }

    let len = scale.len();
    let root = scale[degree % len];
    let third = scale[(degree + 2) % len];
    let fifth = scale[(degree + 4) % len];

    let third_interval = (third.absolute() - root.absolute()).rem_euclid(12);
    let fifth_interval = (fifth.absolute() - root.absolute()).rem_euclid(12);

    match (fifth_interval, third_interval) {
        (7, 4) => ChordType::Major,
        (7, 3) => ChordType::Minor,
        (6, 3) => ChordType::Diminished,
        (8, 4) => ChordType::Augmented,
        _ => {
            debug!(degree, third_interval, fifth_interval, "unclassified triad, treating as major");
            ChordType::Major
        }
    }
}

/// Decides the octave layout of a diatonic triad
pub trait VoicingPolicy {
    /// Arrange the root, third and fifth found on `degree`
    fn voice(&self, degree: usize, root: Note, third: Note, fifth: Note) -> Vec<Note>;
}

/// Root, third, fifth as they occur in the scale
#[derive(Debug, Clone, Copy, Default)]
pub struct RootPosition;

impl VoicingPolicy for RootPosition {
    fn voice(&self, _degree: usize, root: Note, third: Note, fifth: Note) -> Vec<Note> {
        vec![root, third, fifth]
    }
}

/// Keeps upper-degree triads in the register of the lower ones.
///
/// From [`COMPACT_VOICING_FROM_DEGREE`] upward the fifth is dropped an
/// octave below the root: `[fifth - 12, root, third]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactVoicing;

impl VoicingPolicy for CompactVoicing {
    fn voice(&self, degree: usize, root: Note, third: Note, fifth: Note) -> Vec<Note> {
        if degree < COMPACT_VOICING_FROM_DEGREE {
            return vec![root, third, fifth];
        }
        vec![fifth.transpose(-12), root, third]
    }
}

/// Triad on `degree`, optionally with the compact voicing rule.
///
/// Indices are not wrapped: the scale must hold `degree + 5` notes for a
/// full triad, otherwise only the root is returned.
pub fn diatonic_chord(scale: &[Note], degree: usize, compact_voicing: bool) -> Vec<Note> {
    if compact_voicing {
        diatonic_chord_with(scale, degree, &CompactVoicing)
    } else {
        diatonic_chord_with(scale, degree, &RootPosition)
    }
}

/// Triad on `degree` voiced by an arbitrary policy
pub fn diatonic_chord_with(scale: &[Note], degree: usize, policy: &dyn VoicingPolicy) -> Vec<Note> {
    let Some(&root) = scale.get(degree) else {
        debug!(degree, len = scale.len(), "degree outside scale");
        return Vec::new();
    };

    match (scale.get(degree + 2), scale.get(degree + 4)) {
        (Some(&third), Some(&fifth)) => policy.voice(degree, root, third, fifth),
        _ => {
            debug!(degree, len = scale.len(), "scale too short for a triad, returning root only");
            vec![root]
        }
    }
}

/// Roman numeral label for a 0-based degree, empty outside 0-6.
///
/// Minor and diminished qualities lower-case the numeral. Triads take
/// `°` (diminished), `+` (augmented) or no suffix, and dominant 7ths
/// append `7`. The other seventh and suspended suffixes are additions on
/// top of that scheme: minor 7ths read `ii7`, major 7ths `IVmaj7`, and
/// suspended chords `Vsus4` / `Isus2`.
pub fn roman_numeral(degree: usize, chord_type: ChordType) -> String {
    let Some(numeral) = NUMERALS.get(degree) else {
        return String::new();
    };

    let numeral = match chord_type {
        ChordType::Minor | ChordType::Minor7 | ChordType::Diminished => numeral.to_lowercase(),
        _ => numeral.to_string(),
    };

    let suffix = match chord_type {
        ChordType::Major | ChordType::Minor => "",
        ChordType::Diminished => "°",
        ChordType::Augmented => "+",
        ChordType::Dominant7 | ChordType::Minor7 => "7",
        ChordType::Major7 => "maj7",
        ChordType::Sus2 => "sus2",
        ChordType::Sus4 => "sus4",
    };

    format!("{}{}", numeral, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::music::scale::{scale_notes, ScaleMode};

    fn names(notes: &[Note]) -> Vec<String> {
        notes.iter().map(|n| n.to_string()).collect()
    }

    fn c_major(octaves: usize) -> Vec<Note> {
        scale_notes(Note::C4, ScaleMode::Ionian, octaves)
    }

    #[test]
    fn test_major_scale_qualities() {
        let scale = c_major(1);
        let qualities: Vec<ChordType> = (0..7).map(|d| diatonic_chord_type(&scale, d)).collect();
        assert_eq!(
            qualities,
            [
                ChordType::Major,
                ChordType::Minor,
                ChordType::Minor,
                ChordType::Major,
                ChordType::Major,
                ChordType::Minor,
                ChordType::Diminished,
            ]
        );
    }

    #[test]
    fn test_modes_rotate_major_qualities() {
        let ionian = c_major(1);
        let reference: Vec<ChordType> = (0..7).map(|d| diatonic_chord_type(&ionian, d)).collect();

        let modes = [
            ScaleMode::Ionian,
            ScaleMode::Dorian,
            ScaleMode::Phrygian,
            ScaleMode::Lydian,
            ScaleMode::Mixolydian,
            ScaleMode::Aeolian,
            ScaleMode::Locrian,
        ];
        for (rotation, mode) in modes.iter().enumerate() {
            for root in ["C4", "Eb3", "F#4"] {
                let scale = scale_notes(Note::parse(root), *mode, 1);
                for degree in 0..7 {
                    assert_eq!(
                        diatonic_chord_type(&scale, degree),
                        reference[(degree + rotation) % 7],
                        "{} {} degree {}",
                        root,
                        mode,
                        degree
                    );
                }
            }
        }
    }

    #[test]
    fn test_unclassified_falls_back_to_major() {
        let chromatic = scale_notes(Note::C4, ScaleMode::Chromatic, 1);
        assert_eq!(diatonic_chord_type(&chromatic, 0), ChordType::Major);
        assert_eq!(diatonic_chord_type(&[], 3), ChordType::Major);
    }

    #[test]
    fn test_augmented_detected() {
        let notes = ["C4", "D4", "E4", "F4", "G#4"].map(Note::parse);
        assert_eq!(diatonic_chord_type(&notes, 0), ChordType::Augmented);
    }

    #[test]
    fn test_root_position_below_boundary() {
        let scale = c_major(2);
        assert_eq!(names(&diatonic_chord(&scale, 0, true)), ["C4", "E4", "G4"]);
        assert_eq!(names(&diatonic_chord(&scale, 2, true)), ["E4", "G4", "B4"]);
    }

    #[test]
    fn test_compact_voicing_from_fourth_degree() {
        let scale = c_major(2);
        assert_eq!(names(&diatonic_chord(&scale, 3, true)), ["C4", "F4", "A4"]);
        assert_eq!(names(&diatonic_chord(&scale, 4, true)), ["D4", "G4", "B4"]);
        assert_eq!(names(&diatonic_chord(&scale, 6, true)), ["F4", "B4", "D5"]);
    }

    #[test]
    fn test_voicing_rule_disabled() {
        let scale = c_major(2);
        assert_eq!(names(&diatonic_chord(&scale, 3, false)), ["F4", "A4", "C5"]);
        assert_eq!(
            names(&diatonic_chord_with(&scale, 5, &RootPosition)),
            ["A4", "C5", "E5"]
        );
    }

    #[test]
    fn test_short_scale_returns_root() {
        let scale = c_major(1);
        assert_eq!(names(&diatonic_chord(&scale, 3, true)), ["F4"]);
        assert_eq!(names(&diatonic_chord(&scale, 2, false)), ["E4", "G4", "B4"]);
        assert!(diatonic_chord(&scale, 7, true).is_empty());
    }

    #[test]
    fn test_custom_policy() {
        struct Shell;
        impl VoicingPolicy for Shell {
            fn voice(&self, _degree: usize, root: Note, third: Note, _fifth: Note) -> Vec<Note> {
                vec![root, third]
            }
        }

        let scale = c_major(2);
        assert_eq!(names(&diatonic_chord_with(&scale, 4, &Shell)), ["G4", "B4"]);
    }

    #[test]
    fn test_roman_numerals() {
        assert_eq!(roman_numeral(0, ChordType::Major), "I");
        assert_eq!(roman_numeral(1, ChordType::Minor), "ii");
        assert_eq!(roman_numeral(6, ChordType::Diminished), "vii°");
        assert_eq!(roman_numeral(2, ChordType::Augmented), "III+");
        assert_eq!(roman_numeral(4, ChordType::Dominant7), "V7");
        assert_eq!(roman_numeral(1, ChordType::Minor7), "ii7");
        assert_eq!(roman_numeral(3, ChordType::Major7), "IVmaj7");
        assert_eq!(roman_numeral(4, ChordType::Sus4), "Vsus4");
        assert_eq!(roman_numeral(0, ChordType::Sus2), "Isus2");
        assert_eq!(roman_numeral(7, ChordType::Major), "");
    }

    #[test]
    fn test_extreme_octave_scale() {
        let low = scale_notes(Note::C4, ScaleMode::Ionian, 2);
        let high = scale_notes(Note::parse(&format!("C{}", i32::MAX)), ScaleMode::Ionian, 2);
        for degree in 0..7 {
            assert_eq!(diatonic_chord_type(&high, degree), diatonic_chord_type(&low, degree));
        }

        let chord = diatonic_chord(&high, 3, true);
        assert_eq!(chord[0].to_string(), format!("C{}", i32::MAX - 1));
        assert_eq!(chord.len(), 3);
    }
}
