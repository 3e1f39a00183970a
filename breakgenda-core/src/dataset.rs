//! Loading the speaker and session datasets.
//!
//! A default dataset is compiled into the binary. A data directory holding
//! `speakers.json` and `sessions.json` can be used instead.

use std::path::{Path, PathBuf};

use crate::constants::{SESSIONS_FILE, SPEAKERS_FILE};
use crate::error::{BreakgendaError, BreakgendaResult};
use crate::session::{RawSession, SessionsDocument};
use crate::speaker::Speaker;

const BUNDLED_SPEAKERS: &str = include_str!("../data/speakers.json");
const BUNDLED_SESSIONS: &str = include_str!("../data/sessions.json");

/// Where the data came from, for display.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetSource {
    Bundled,
    Directory(PathBuf),
}

#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: DatasetSource,
    pub speakers: Vec<Speaker>,
    pub sessions: Vec<RawSession>,
}

impl Dataset {
    pub fn bundled() -> BreakgendaResult<Self> {
        let speakers = parse_speakers(BUNDLED_SPEAKERS, Path::new(SPEAKERS_FILE))?;
        let sessions = parse_sessions(BUNDLED_SESSIONS, Path::new(SESSIONS_FILE))?;

        Ok(Dataset {
            source: DatasetSource::Bundled,
            speakers,
            sessions,
        })
    }

    pub fn from_dir(dir: &Path) -> BreakgendaResult<Self> {
        let speakers_path = dir.join(SPEAKERS_FILE);
        let sessions_path = dir.join(SESSIONS_FILE);

        let speakers = parse_speakers(&read(&speakers_path)?, &speakers_path)?;
        let sessions = parse_sessions(&read(&sessions_path)?, &sessions_path)?;

        tracing::info!(
            dir = %dir.display(),
            speakers = speakers.len(),
            sessions = sessions.len(),
            "loaded dataset"
        );

        Ok(Dataset {
            source: DatasetSource::Directory(dir.to_path_buf()),
            speakers,
            sessions,
        })
    }

    /// Load from `dir` when given, otherwise use the bundled data.
    pub fn load(dir: Option<&Path>) -> BreakgendaResult<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::bundled(),
        }
    }
}

fn read(path: &Path) -> BreakgendaResult<String> {
    std::fs::read_to_string(path).map_err(|e| BreakgendaError::Dataset {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn parse_speakers(content: &str, path: &Path) -> BreakgendaResult<Vec<Speaker>> {
    serde_json::from_str(content).map_err(|e| BreakgendaError::Dataset {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn parse_sessions(content: &str, path: &Path) -> BreakgendaResult<Vec<RawSession>> {
    let doc: SessionsDocument =
        serde_json::from_str(content).map_err(|e| BreakgendaError::Dataset {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    if let Some(session) = doc.sessions.iter().find(|s| !s.has_valid_window()) {
        return Err(BreakgendaError::Dataset {
            path: path.to_path_buf(),
            message: format!("session {} has a time offset out of range", session.id),
        });
    }

    Ok(doc.sessions)
}
