// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Music theory engine.
//!
//! This module provides note spelling, scale generation, chord building
//! and inversion, diatonic harmony and chord naming. Everything here is a
//! pure function of its inputs.

pub mod chord;
pub mod detect;
pub mod diatonic;
pub mod palette;
pub mod pitch;
pub mod scale;

pub use chord::{apply_inversion, chord_notes, ChordType};
pub use detect::{detect_chord, detect_chord_name, DetectedChord};
pub use diatonic::{
    diatonic_chord, diatonic_chord_type, diatonic_chord_with, roman_numeral, CompactVoicing,
    RootPosition, VoicingPolicy,
};
pub use palette::{Palette, PaletteEntry};
pub use pitch::{
    note_index, spell, Accidental, Letter, Note, NoteParseError, Pitch, PitchClass, Semitones,
};
pub use scale::{scale_notes, Scale, ScaleMode};
