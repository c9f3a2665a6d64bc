// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Chord types, chord construction and inversion.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::pitch::{Note, Pitch};

/// Chord qualities supported by the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChordType {
    Major,
    Minor,
    Diminished,
    Augmented,
    Sus2,
    Sus4,
    Dominant7,
    Major7,
    Minor7,
}

impl ChordType {
    /// All chord types, triads first
    pub const ALL: [ChordType; 9] = [
        ChordType::Major,
        ChordType::Minor,
        ChordType::Diminished,
        ChordType::Augmented,
        ChordType::Sus2,
        ChordType::Sus4,
        ChordType::Dominant7,
        ChordType::Major7,
        ChordType::Minor7,
    ];

    /// Semitone offsets from the root, strictly increasing from 0
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ChordType::Major => &[0, 4, 7],
            ChordType::Minor => &[0, 3, 7],
            ChordType::Diminished => &[0, 3, 6],
            ChordType::Augmented => &[0, 4, 8],
            ChordType::Sus2 => &[0, 2, 7],
            ChordType::Sus4 => &[0, 5, 7],
            ChordType::Dominant7 => &[0, 4, 7, 10],
            ChordType::Major7 => &[0, 4, 7, 11],
            ChordType::Minor7 => &[0, 3, 7, 10],
        }
    }

    /// Parse a chord type tag or common alias
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim().replace([' ', '-', '_'], "");
        // Case separates minor ("m7") from major ("M7")
        match s.as_str() {
            "m" => return Some(ChordType::Minor),
            "m7" => return Some(ChordType::Minor7),
            "M7" => return Some(ChordType::Major7),
            _ => {}
        }
        match s.to_lowercase().as_str() {
            "maj" | "major" | "" => Some(ChordType::Major),
            "min" | "minor" => Some(ChordType::Minor),
            "dim" | "diminished" | "°" => Some(ChordType::Diminished),
            "aug" | "augmented" | "+" => Some(ChordType::Augmented),
            "sus2" => Some(ChordType::Sus2),
            "sus4" | "sus" => Some(ChordType::Sus4),
            "7" | "dom7" | "dominant7" => Some(ChordType::Dominant7),
            "maj7" | "major7" => Some(ChordType::Major7),
            "min7" | "minor7" => Some(ChordType::Minor7),
            _ => None,
        }
    }

    /// Short tag ("maj", "min", "dom7", ...)
    pub fn tag(self) -> &'static str {
        match self {
            ChordType::Major => "maj",
            ChordType::Minor => "min",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Dominant7 => "dom7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "min7",
        }
    }

    /// Suffix used in chord symbols (e.g. "m" in "Am")
    pub fn suffix(self) -> &'static str {
        match self {
            ChordType::Major => "",
            ChordType::Minor => "m",
            ChordType::Diminished => "dim",
            ChordType::Augmented => "aug",
            ChordType::Sus2 => "sus2",
            ChordType::Sus4 => "sus4",
            ChordType::Dominant7 => "7",
            ChordType::Major7 => "maj7",
            ChordType::Minor7 => "m7",
        }
    }

    /// Get a human-readable name for this chord type
    pub fn name(self) -> &'static str {
        match self {
            ChordType::Major => "Major",
            ChordType::Minor => "Minor",
            ChordType::Diminished => "Diminished",
            ChordType::Augmented => "Augmented",
            ChordType::Sus2 => "Suspended 2nd",
            ChordType::Sus4 => "Suspended 4th",
            ChordType::Dominant7 => "Dominant 7th",
            ChordType::Major7 => "Major 7th",
            ChordType::Minor7 => "Minor 7th",
        }
    }
}

impl fmt::Display for ChordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Build a chord on `root` and invert it by `inversion` steps.
///
/// The root-position chord is rendered with sharp spelling in ascending
/// pitch order before the inversion is applied.
pub fn chord_notes(root: Note, chord_type: ChordType, inversion: i32) -> Vec<Note> {
    let base = root.absolute();
    let notes: Vec<Note> = chord_type
        .intervals()
        .iter()
        .map(|&interval| Note::from_absolute(base + interval as Pitch))
        .collect();

    apply_inversion(&notes, inversion)
}

/// Rotate a voicing by whole octaves.
///
/// Positive steps move the lowest note up an octave, negative steps move
/// the highest note down an octave, once per step. The result is sorted by
/// pitch and sharp-spelled; zero steps return the input untouched.
pub fn apply_inversion(notes: &[Note], steps: i32) -> Vec<Note> {
    if steps == 0 || notes.is_empty() {
        return notes.to_vec();
    }

    let mut pitches: Vec<Pitch> = notes.iter().map(Note::absolute).collect();
    let count = Pitch::from(steps.unsigned_abs());

    if steps > 0 {
        raise_lowest(&mut pitches, count);
    } else {
        // Dropping the highest note is raising the lowest of the negated voicing
        pitches.iter_mut().for_each(|p| *p = -*p);
        raise_lowest(&mut pitches, count);
        pitches.iter_mut().for_each(|p| *p = -*p);
    }
    pitches.sort_unstable();

    pitches.into_iter().map(Note::from_absolute).collect()
}

/// Entries of the chain `pitch, pitch + 12, ...` lying below `threshold`
fn raises_below(pitch: Pitch, threshold: Pitch) -> Pitch {
    if threshold <= pitch {
        0
    } else {
        (threshold - pitch + 11) / 12
    }
}

/// Raise the lowest note by an octave `count` times, in closed form.
///
/// Each raise lifts the current minimum, so the raised values are the
/// `count` smallest entries of the chains `p, p + 12, p + 24, ...` taken
/// over every note. A binary search finds the highest threshold whose
/// chain entries below it number at most `count`; the leftover raises go
/// to notes whose chain lands exactly on that threshold.
fn raise_lowest(pitches: &mut [Pitch], count: Pitch) {
    let (Some(&low), Some(&high)) = (pitches.iter().min(), pitches.iter().max()) else {
        return;
    };
    let total = |threshold: Pitch| -> Pitch {
        pitches.iter().map(|&p| raises_below(p, threshold)).sum()
    };

    // total(lo) <= count < total(hi)
    let mut lo = low;
    let mut hi = high + 12 * (count + 1);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if total(mid) <= count {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    let mut leftover = count - total(lo);
    for pitch in pitches.iter_mut() {
        let mut raises = raises_below(*pitch, lo);
        if leftover > 0 && *pitch <= lo && (lo - *pitch) % 12 == 0 {
            raises += 1;
            leftover -= 1;
        }
        *pitch += 12 * raises;
    }
}
