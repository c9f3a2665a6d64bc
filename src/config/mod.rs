// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Session configuration files.
//!
//! A session file records the instrument state a front end works from:
//! root, mode, selected chord and voicing options. Files are YAML or TOML,
//! chosen by extension.

pub mod watcher;

pub use watcher::{validate_config, ConfigEvent, ConfigWatcher};

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::{ChordType, Note, ScaleMode};
use crate::session::Session;

/// Root of a session file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionFile {
    /// Session settings
    #[serde(default)]
    pub session: SessionConfig,
}

impl SessionFile {
    /// Load a session from a YAML or TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&contents),
            _ => Self::from_yaml(&contents),
        }
    }

    /// Parse a session from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse YAML session")
    }

    /// Parse a session from TOML string
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML session")
    }

    /// Serialize to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize session to YAML")
    }

    /// Save the session to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = self.to_yaml()?;
        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write session file: {:?}", path.as_ref()))
    }

    /// Validate names and build a typed session
    pub fn resolve(&self) -> Result<Session> {
        self.session.resolve()
    }
}

/// Instrument settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Root note with octave (e.g., "C4", "Eb3")
    #[serde(default = "default_root")]
    pub root: String,
    /// Scale mode (e.g., "ionian", "dorian", "chromatic")
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Number of octaves of scale to generate
    #[serde(default = "default_octaves")]
    pub octaves: usize,
    /// Chord type tag (e.g., "maj", "min7")
    #[serde(default = "default_chord")]
    pub chord: String,
    /// Inversion steps applied to the chord
    #[serde(default)]
    pub inversion: i32,
    /// Drop the fifth of upper-degree diatonic chords
    #[serde(default = "default_compact_voicing")]
    pub compact_voicing: bool,
}

fn default_root() -> String {
    "C4".to_string()
}
fn default_mode() -> String {
    "ionian".to_string()
}
fn default_octaves() -> usize {
    1
}
fn default_chord() -> String {
    "maj".to_string()
}
fn default_compact_voicing() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            mode: default_mode(),
            octaves: default_octaves(),
            chord: default_chord(),
            inversion: 0,
            compact_voicing: default_compact_voicing(),
        }
    }
}

impl SessionConfig {
    /// Validate names and build a typed session.
    ///
    /// Unlike the engine, a session file is strict: a bad root, mode or
    /// chord name is an error rather than a silent default.
    pub fn resolve(&self) -> Result<Session> {
        let root = self
            .root
            .parse::<Note>()
            .with_context(|| format!("Invalid root note: {:?}", self.root))?;
        let mode = ScaleMode::from_str(&self.mode)
            .ok_or_else(|| anyhow!("Unknown scale mode: {:?}", self.mode))?;
        let chord = ChordType::from_str(&self.chord)
            .ok_or_else(|| anyhow!("Unknown chord type: {:?}", self.chord))?;

        Ok(Session {
            root,
            mode,
            octaves: self.octaves,
            chord,
            inversion: self.inversion,
            compact_voicing: self.compact_voicing,
        })
    }
}
