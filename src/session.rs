// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! A resolved instrument session and everything a front end draws from it.

use std::fmt;

use crate::music::{chord_notes, detect_chord_name, scale_notes, ChordType, Note, Palette, ScaleMode};

/// Typed session settings
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub root: Note,
    pub mode: ScaleMode,
    pub octaves: usize,
    pub chord: ChordType,
    pub inversion: i32,
    pub compact_voicing: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            root: Note::C4,
            mode: ScaleMode::Ionian,
            octaves: 1,
            chord: ChordType::Major,
            inversion: 0,
            compact_voicing: true,
        }
    }
}

impl Session {
    /// Compute the scale, selected chord and diatonic palette
    pub fn render(&self) -> SessionView {
        let chord = chord_notes(self.root, self.chord, self.inversion);
        SessionView {
            scale: scale_notes(self.root, self.mode, self.octaves),
            chord_name: detect_chord_name(&chord),
            chord,
            palette: Palette::new(self.root, self.mode, self.compact_voicing),
        }
    }
}

/// Rendered output of a session
#[derive(Debug, Clone, PartialEq)]
pub struct SessionView {
    pub scale: Vec<Note>,
    pub chord: Vec<Note>,
    pub chord_name: String,
    pub palette: Palette,
}

fn join(notes: &[Note]) -> String {
    notes.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Scale: {} {}",
            self.palette.root().name(),
            self.palette.mode()
        )?;
        writeln!(f, "  {}", join(&self.scale))?;
        writeln!(f, "Chord: {}", self.chord_name)?;
        writeln!(f, "  {}", join(&self.chord))?;
        if !self.palette.entries().is_empty() {
            writeln!(f, "Diatonic chords:")?;
            for entry in self.palette.entries() {
                writeln!(f, "  {}", entry)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_render() {
        let view = Session::default().render();
        assert_eq!(view.scale.len(), 7);
        assert_eq!(join(&view.chord), "C4 E4 G4");
        assert_eq!(view.chord_name, "C");
        assert_eq!(view.palette.entries().len(), 7);
    }

    #[test]
    fn test_inverted_chord_name() {
        let session = Session {
            root: Note::parse("A3"),
            mode: ScaleMode::Aeolian,
            chord: ChordType::Minor,
            inversion: 1,
            ..Session::default()
        };
        let view = session.render();
        assert_eq!(join(&view.chord), "C4 E4 A4");
        assert_eq!(view.chord_name, "Am/C");
    }

    #[test]
    fn test_chromatic_session_has_no_palette() {
        let session = Session {
            mode: ScaleMode::Chromatic,
            octaves: 2,
            ..Session::default()
        };
        let view = session.render();
        assert_eq!(view.scale.len(), 24);
        assert!(view.palette.entries().is_empty());

        let text = view.to_string();
        assert!(text.contains("Chromatic"));
        assert!(!text.contains("Diatonic chords"));
    }

    #[test]
    fn test_view_display() {
        let text = Session::default().render().to_string();
        assert!(text.starts_with("Scale: C Ionian"));
        assert!(text.contains("C4 D4 E4 F4 G4 A4 B4"));
        assert!(text.contains("vii°"));
    }
}
