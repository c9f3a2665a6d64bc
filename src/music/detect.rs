// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord naming from a set of sounding notes.
//!
//! Every distinct pitch class is tried as the root in ascending pitch-class
//! order and the first one whose interval set matches a known signature
//! wins. Symmetric chords (augmented, diminished 7th) therefore name the
//! candidate with the lowest pitch class, not the bass.

use std::fmt;

use tracing::debug;

use super::pitch::{Note, PitchClass};

/// Interval sets from the root and the suffix they produce
const SIGNATURES: [(&[u8], &str); 11] = [
    (&[0, 4, 7], ""),
    (&[0, 3, 7], "m"),
    (&[0, 3, 6], "dim"),
    (&[0, 4, 8], "aug"),
    (&[0, 2, 7], "sus2"),
    (&[0, 5, 7], "sus4"),
    (&[0, 4, 7, 11], "maj7"),
    (&[0, 4, 7, 10], "7"),
    (&[0, 3, 7, 10], "m7"),
    (&[0, 3, 6, 9], "dim7"),
    (&[0, 3, 6, 10], "m7b5"),
];

/// Preferred root spellings (flats for black keys, except F#)
const ROOT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "F#", "G", "Ab", "A", "Bb", "B",
];

/// A chord recognised from sounding notes
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedChord {
    /// Pitch class of the root
    pub root: PitchClass,
    /// Chord-symbol suffix ("", "m", "7", ...)
    pub quality: &'static str,
    /// Lowest sounding note, as spelled in the input
    pub bass: Note,
}

impl DetectedChord {
    /// Root name from the preferred spelling table
    pub fn root_name(&self) -> &'static str {
        ROOT_NAMES[self.root as usize % 12]
    }

    /// True when the bass is not the root
    pub fn is_inversion(&self) -> bool {
        self.bass.pitch_class() != self.root
    }
}

impl fmt::Display for DetectedChord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.root_name(), self.quality)?;
        if self.is_inversion() {
            write!(f, "/{}", self.bass.name())?;
        }
        Ok(())
    }
}

/// Match sounding notes against the known signatures
pub fn detect_chord(notes: &[Note]) -> Option<DetectedChord> {
    let bass = *notes.iter().min_by_key(|n| n.absolute())?;

    let mut present = [false; 12];
    for note in notes {
        present[note.pitch_class() as usize] = true;
    }
    let pitch_classes: Vec<PitchClass> = (0..12u8).filter(|&pc| present[pc as usize]).collect();

    for &root in &pitch_classes {
        let mut intervals: Vec<u8> = pitch_classes
            .iter()
            .map(|&pc| (pc + 12 - root) % 12)
            .collect();
        intervals.sort_unstable();

        if let Some(&(_, quality)) = SIGNATURES.iter().find(|(sig, _)| *sig == intervals.as_slice()) {
            return Some(DetectedChord {
                root,
                quality,
                bass,
            });
        }
    }

    debug!(?pitch_classes, "no chord signature matched");
    None
}

/// Chord symbol for sounding notes: "" when empty, "?" when unrecognised
pub fn detect_chord_name(notes: &[Note]) -> String {
    if notes.is_empty() {
        return String::new();
    }
    detect_chord(notes)
        .map(|chord| chord.to_string())
        .unwrap_or_else(|| "?".to_string())
}
