// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

use std::env;

use anyhow::{anyhow, Result};
use chordpad::config::{ConfigEvent, ConfigWatcher, SessionFile};
use chordpad::music::{
    apply_inversion, chord_notes, detect_chord_name, scale_notes, ChordType, Note, Palette,
    ScaleMode,
};
use tracing::{info, warn, Level};

fn print_usage() {
    println!("Chordpad - Scale and Chord Engine");
    println!();
    println!("Usage: chordpad [--verbose] <COMMAND>");
    println!();
    println!("Commands:");
    println!("  --scale <ROOT> <MODE> [OCTAVES]    List scale notes (e.g. --scale D4 dorian 2)");
    println!("  --chord <ROOT> <TYPE> [INVERSION]  Build a chord (e.g. --chord C4 maj7 1)");
    println!("  --invert <STEPS> <NOTES...>        Invert a voicing by octave rotation");
    println!("  --transpose <NOTE> <SEMITONES>     Shift a note by semitones");
    println!("  --diatonic <ROOT> <MODE> [--root-position]");
    println!("                                     List the diatonic chords of a mode");
    println!("  --detect <NOTES...>                Name the chord formed by the notes");
    println!("  --session <FILE>                   Render a session file (YAML or TOML)");
    println!("  --watch <FILE>                     Render a session file on every change");
    println!("  --help                             Show this help message");
}

fn join(notes: &[Note]) -> String {
    notes.iter().map(|n| n.to_string()).collect::<Vec<_>>().join(" ")
}

/// Parse a note name strictly; the CLI reports typos instead of using C4
fn note_arg(text: &str) -> Result<Note> {
    text.parse::<Note>()
        .map_err(|e| anyhow!("Invalid note {:?}: {}", text, e))
}

fn mode_arg(text: &str) -> Result<ScaleMode> {
    ScaleMode::from_str(text).ok_or_else(|| anyhow!("Unknown scale mode: {}", text))
}

fn chord_arg(text: &str) -> Result<ChordType> {
    ChordType::from_str(text).ok_or_else(|| anyhow!("Unknown chord type: {}", text))
}

fn int_arg<T: std::str::FromStr>(args: &[String], index: usize, default: T, what: &str) -> Result<T> {
    match args.get(index) {
        Some(text) => text
            .parse::<T>()
            .map_err(|_| anyhow!("Invalid {}: {}", what, text)),
        None => Ok(default),
    }
}

fn require(args: &[String], count: usize, usage: &str) -> Result<()> {
    if args.len() < count {
        return Err(anyhow!("Usage: chordpad {}", usage));
    }
    Ok(())
}

fn render_session(path: &str) -> Result<()> {
    let session = SessionFile::load(path)?.resolve()?;
    print!("{}", session.render());
    Ok(())
}

fn watch_session(path: &str) -> Result<()> {
    render_session(path)?;

    let watcher = ConfigWatcher::new(path, None)?;
    info!(path, "watching session file (press Ctrl+C to stop)");

    while let Some(event) = watcher.recv() {
        match event {
            ConfigEvent::Reloaded(file) => match file.resolve() {
                Ok(session) => {
                    println!();
                    print!("{}", session.render());
                }
                Err(e) => warn!("{:#}", e),
            },
            ConfigEvent::Error(message) => warn!("{}", message),
            ConfigEvent::FileCreated(p) => info!(path = ?p, "file created"),
            ConfigEvent::FileDeleted(p) => info!(path = ?p, "file deleted"),
        }
    }

    Ok(())
}

fn run(args: &[String]) -> Result<()> {
    match args[0].as_str() {
        "--scale" => {
            require(args, 3, "--scale <ROOT> <MODE> [OCTAVES]")?;
            let octaves = int_arg(args, 3, 1usize, "octave count")?;
            let notes = scale_notes(note_arg(&args[1])?, mode_arg(&args[2])?, octaves);
            println!("{}", join(&notes));
        }
        "--chord" => {
            require(args, 3, "--chord <ROOT> <TYPE> [INVERSION]")?;
            let inversion = int_arg(args, 3, 0i32, "inversion")?;
            let notes = chord_notes(note_arg(&args[1])?, chord_arg(&args[2])?, inversion);
            println!("{}  ({})", join(&notes), detect_chord_name(&notes));
        }
        "--invert" => {
            require(args, 3, "--invert <STEPS> <NOTES...>")?;
            let steps = int_arg(args, 1, 0i32, "step count")?;
            let notes = args[2..]
                .iter()
                .map(|n| note_arg(n))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", join(&apply_inversion(&notes, steps)));
        }
        "--transpose" => {
            require(args, 3, "--transpose <NOTE> <SEMITONES>")?;
            let semitones = int_arg(args, 2, 0i32, "semitone count")?;
            println!("{}", note_arg(&args[1])?.transpose(semitones));
        }
        "--diatonic" => {
            require(args, 3, "--diatonic <ROOT> <MODE> [--root-position]")?;
            let compact = args.get(3).map(String::as_str) != Some("--root-position");
            let palette = Palette::new(note_arg(&args[1])?, mode_arg(&args[2])?, compact);
            if palette.entries().is_empty() {
                println!("{} has no diatonic chords", palette.mode());
            }
            for entry in palette.entries() {
                println!("{}", entry);
            }
        }
        "--detect" => {
            require(args, 2, "--detect <NOTES...>")?;
            let notes = args[1..]
                .iter()
                .map(|n| note_arg(n))
                .collect::<Result<Vec<_>>>()?;
            println!("{}", detect_chord_name(&notes));
        }
        "--session" => {
            require(args, 2, "--session <FILE>")?;
            render_session(&args[1])?;
        }
        "--watch" => {
            require(args, 2, "--watch <FILE>")?;
            watch_session(&args[1])?;
        }
        "--help" | "-h" => {
            print_usage();
        }
        other => {
            eprintln!("Unknown option: {}", other);
            print_usage();
            std::process::exit(1);
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let mut args: Vec<String> = env::args().skip(1).collect();

    let verbose = args.iter().any(|a| a == "--verbose" || a == "-v");
    args.retain(|a| a != "--verbose" && a != "-v");

    tracing_subscriber::fmt()
        .with_max_level(if verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    if args.is_empty() {
        println!("Chordpad - Scale and Chord Engine");
        println!("Run with --help for usage information");
        return Ok(());
    }

    run(&args)
}
