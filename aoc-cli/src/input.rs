//! Local store of puzzle inputs

use crate::error::InputError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads puzzle inputs from a directory.
///
/// Directory structure: `{dir}/{year}_day{day:02}.txt`. A single puzzle may
/// be pointed at an explicit file instead.
#[derive(Debug, Clone)]
pub struct InputStore {
    dir: PathBuf,
    override_file: Option<(u16, u8, PathBuf)>,
}

impl InputStore {
    pub fn new(dir: PathBuf) -> Self {
        Self {
            dir,
            override_file: None,
        }
    }

    /// Serve `year`/`day` from `path` rather than the directory
    pub fn with_override(mut self, year: u16, day: u8, path: PathBuf) -> Self {
        self.override_file = Some((year, day, path));
        self
    }

    /// Where the input for a specific year/day is read from
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        match &self.override_file {
            Some((y, d, path)) if *y == year && *d == day => path.clone(),
            _ => self.dir.join(format!("{}_day{:02}.txt", year, day)),
        }
    }

    /// Check if an input file exists
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.input_path(year, day).is_file()
    }

    /// Read the input for a year/day
    pub fn get(&self, year: u16, day: u8) -> Result<String, InputError> {
        let path = self.input_path(year, day);
        debug!(year, day, path = %path.display(), "reading input");
        read_input(&path)
    }
}

fn read_input(path: &Path) -> Result<String, InputError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => InputError::NotFound(path.to_path_buf()),
        _ => InputError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}
