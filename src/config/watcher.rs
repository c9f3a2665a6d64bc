// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Hot reload of session files.
//!
//! Watches a session file (or a directory of them), debounces bursts of
//! modifications and reloads the file once writes settle.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tracing::{debug, warn};

use super::SessionFile;

/// Events emitted by the session watcher
#[derive(Debug, Clone)]
pub enum ConfigEvent {
    /// Session file was modified and successfully reloaded
    Reloaded(Box<SessionFile>),
    /// Session file was modified but failed to load
    Error(String),
    /// A new file was created in the watch directory
    FileCreated(PathBuf),
    /// A file was deleted from the watch directory
    FileDeleted(PathBuf),
}

/// Session file watcher with debouncing
pub struct ConfigWatcher {
    _watcher: RecommendedWatcher,
    event_receiver: Receiver<ConfigEvent>,
    watched_path: PathBuf,
}

fn is_session_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml" | "yml" | "toml")
    )
}

fn reload(path: &Path) -> ConfigEvent {
    match SessionFile::load(path) {
        Ok(file) => {
            debug!(?path, "session reloaded");
            ConfigEvent::Reloaded(Box::new(file))
        }
        Err(e) => {
            warn!(?path, error = %e, "session reload failed");
            ConfigEvent::Error(format!("Failed to load {:?}: {:#}", path, e))
        }
    }
}

impl ConfigWatcher {
    /// Watch a session file or directory.
    ///
    /// Modifications are reported once no further write has been seen for
    /// `debounce_ms` milliseconds (500 when `None`).
    pub fn new<P: AsRef<Path>>(path: P, debounce_ms: Option<u64>) -> Result<Self> {
        let watched_path = path.as_ref().to_path_buf();
        let debounce = Duration::from_millis(debounce_ms.unwrap_or(500));

        let (event_tx, event_rx): (Sender<ConfigEvent>, Receiver<ConfigEvent>) = mpsc::channel();
        let (notify_tx, notify_rx): (Sender<Event>, Receiver<Event>) = mpsc::channel();

        let mut watcher = RecommendedWatcher::new(
            move |res: Result<Event, notify::Error>| {
                if let Ok(event) = res {
                    let _ = notify_tx.send(event);
                }
            },
            Config::default(),
        )
        .map_err(|e| anyhow!("Failed to create file watcher: {}", e))?;

        let mode = if watched_path.is_dir() {
            RecursiveMode::Recursive
        } else {
            RecursiveMode::NonRecursive
        };
        watcher
            .watch(&watched_path, mode)
            .map_err(|e| anyhow!("Failed to watch path {:?}: {}", watched_path, e))?;

        let target = watched_path.clone();
        std::thread::spawn(move || {
            let mut last_event_time: Option<Instant> = None;
            let mut pending: Vec<PathBuf> = Vec::new();

            loop {
                match notify_rx.recv_timeout(Duration::from_millis(100)) {
                    Ok(event) => match event.kind {
                        EventKind::Create(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(ConfigEvent::FileCreated(path));
                            }
                        }
                        EventKind::Remove(_) => {
                            for path in event.paths {
                                let _ = event_tx.send(ConfigEvent::FileDeleted(path));
                            }
                        }
                        EventKind::Modify(_) => {
                            for path in event.paths {
                                if !pending.contains(&path) {
                                    pending.push(path);
                                }
                            }
                            last_event_time = Some(Instant::now());
                        }
                        _ => {}
                    },
                    Err(mpsc::RecvTimeoutError::Timeout) => {
                        let settled = last_event_time.is_some_and(|t| t.elapsed() >= debounce);
                        if settled {
                            for path in pending.drain(..) {
                                if is_session_file(&path) || path == target {
                                    let _ = event_tx.send(reload(&path));
                                }
                            }
                            last_event_time = None;
                        }
                    }
                    Err(mpsc::RecvTimeoutError::Disconnected) => break,
                }
            }
        });

        Ok(Self {
            _watcher: watcher,
            event_receiver: event_rx,
            watched_path,
        })
    }

    /// Try to receive the next event (non-blocking)
    pub fn try_recv(&self) -> Option<ConfigEvent> {
        self.event_receiver.try_recv().ok()
    }

    /// Receive all pending events
    pub fn recv_all(&self) -> Vec<ConfigEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }

    /// Block until the next event is received
    pub fn recv(&self) -> Option<ConfigEvent> {
        self.event_receiver.recv().ok()
    }

    /// Get the path being watched
    pub fn watched_path(&self) -> &Path {
        &self.watched_path
    }
}

/// Load and resolve a session file without applying it
pub fn validate_config<P: AsRef<Path>>(path: P) -> Result<SessionFile> {
    let file = SessionFile::load(path)?;
    file.resolve()?;
    Ok(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_validate_config() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("session.yaml");
        fs::write(&file_path, "session:\n  root: \"D4\"\n  mode: \"dorian\"\n").unwrap();

        let file = validate_config(&file_path).unwrap();
        assert_eq!(file.session.root, "D4");
    }

    #[test]
    fn test_validate_invalid_config() {
        let dir = tempdir().unwrap();

        let broken = dir.path().join("broken.yaml");
        fs::write(&broken, "this is not valid yaml: [").unwrap();
        assert!(validate_config(&broken).is_err());

        let unknown_mode = dir.path().join("unknown.yaml");
        fs::write(&unknown_mode, "session:\n  mode: \"bebop\"\n").unwrap();
        assert!(validate_config(&unknown_mode).is_err());
    }

    #[test]
    fn test_session_file_extensions() {
        assert!(is_session_file(Path::new("a/b.yaml")));
        assert!(is_session_file(Path::new("b.yml")));
        assert!(is_session_file(Path::new("b.toml")));
        assert!(!is_session_file(Path::new("b.txt")));
        assert!(!is_session_file(Path::new("session")));
    }

    #[test]
    fn test_reload_reports_errors() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "session: [").unwrap();
        assert!(matches!(reload(&path), ConfigEvent::Error(_)));

        fs::write(&path, "session:\n  root: \"G3\"\n").unwrap();
        assert!(matches!(reload(&path), ConfigEvent::Reloaded(_)));
    }

    #[test]
    fn test_watcher_creation() {
        let dir = tempdir().unwrap();
        let watcher = ConfigWatcher::new(dir.path(), Some(100)).unwrap();
        assert_eq!(watcher.watched_path(), dir.path());
    }

    #[test]
    fn test_watcher_missing_path() {
        let dir = tempdir().unwrap();
        assert!(ConfigWatcher::new(dir.path().join("nope"), Some(100)).is_err());
    }

    #[test]
    fn test_watcher_detects_changes() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("live.yaml");
        fs::write(&file_path, "session:\n  root: \"C4\"\n").unwrap();

        let watcher = ConfigWatcher::new(dir.path(), Some(100)).unwrap();
        std::thread::sleep(Duration::from_millis(50));

        let mut file = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&file_path)
            .unwrap();
        file.write_all(b"session:\n  root: \"A2\"\n  mode: \"locrian\"\n")
            .unwrap();
        file.flush().unwrap();
        drop(file);

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut reloaded = None;
        while reloaded.is_none() && Instant::now() < deadline {
            reloaded = watcher.recv_all().into_iter().find_map(|e| match e {
                ConfigEvent::Reloaded(file) => Some(file),
                _ => None,
            });
            std::thread::sleep(Duration::from_millis(50));
        }

        let file = reloaded.expect("no reload within the deadline");
        assert_eq!(file.session.root, "A2");
        assert_eq!(file.session.mode, "locrian");
    }
}
