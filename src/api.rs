// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! String boundary for front ends.
//!
//! Callers hand in note names and get note names back. Each function parses
//! its inputs once (unparseable names become C4), runs the typed engine in
//! [`crate::music`], and renders the result.

use crate::music::{self, ChordType, Letter, Note, PitchClass, ScaleMode, Semitones};

fn parse_all<S: AsRef<str>>(notes: &[S]) -> Vec<Note> {
    notes.iter().map(|n| Note::parse(n.as_ref())).collect()
}

fn render(notes: &[Note]) -> Vec<String> {
    notes.iter().map(|n| n.to_string()).collect()
}

/// Parse a note name, defaulting to C4
pub fn parse(text: &str) -> Note {
    Note::parse(text)
}

/// Pitch class of a note name's letter and accidental
pub fn note_index(text: &str) -> PitchClass {
    parse(text).pitch_class()
}

/// Sharp-spelled name for a pitch class or absolute index
pub fn from_index(index: Semitones, octave_base: i32) -> String {
    Note::from_index(index, octave_base).to_string()
}

/// Spelling of a pitch class on a letter, without octave (e.g. "Eb")
pub fn spell(pitch_class: PitchClass, letter: Letter) -> String {
    let (letter, accidental) = music::spell(pitch_class, letter);
    format!("{}{}", letter, accidental.symbol())
}

/// Shift a note by semitones
pub fn transpose(note: &str, semitones: Semitones) -> String {
    parse(note).transpose(semitones).to_string()
}

/// Scale note names in degree order
pub fn scale_notes(root: &str, mode: ScaleMode, octaves: usize) -> Vec<String> {
    render(&music::scale_notes(parse(root), mode, octaves))
}

/// Chord note names after `inversion` steps
pub fn chord_notes(root: &str, chord_type: ChordType, inversion: i32) -> Vec<String> {
    render(&music::chord_notes(parse(root), chord_type, inversion))
}

/// Invert a voicing by octave rotation; zero steps echo the input
pub fn apply_generic_inversion<S: AsRef<str>>(notes: &[S], steps: i32) -> Vec<String> {
    if steps == 0 {
        return notes.iter().map(|n| n.as_ref().to_string()).collect();
    }
    render(&music::apply_inversion(&parse_all(notes), steps))
}

/// Quality of the triad on a scale degree
pub fn diatonic_chord_type<S: AsRef<str>>(scale: &[S], degree: usize) -> ChordType {
    music::diatonic_chord_type(&parse_all(scale), degree)
}

/// Triad on a scale degree, optionally compact-voiced
pub fn diatonic_chord<S: AsRef<str>>(scale: &[S], degree: usize, compact_voicing: bool) -> Vec<String> {
    render(&music::diatonic_chord(&parse_all(scale), degree, compact_voicing))
}

/// Roman numeral for a 0-based degree
pub fn roman_numeral(degree: usize, chord_type: ChordType) -> String {
    music::roman_numeral(degree, chord_type)
}

/// Chord symbol for sounding notes
pub fn detect_chord_name<S: AsRef<str>>(notes: &[S]) -> String {
    music::detect_chord_name(&parse_all(notes))
}
