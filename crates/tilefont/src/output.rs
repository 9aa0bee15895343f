//! All-or-nothing output of the generated blobs.
//!
//! Every artifact is first written to `<name>.tmp` next to its destination.
//! Only when all of them are on disk are they renamed into place. When
//! anything fails, temporaries and existing destinations are removed so the
//! firmware build never picks up a stale or truncated blob.
use std::ffi::OsString;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{Result, TileFontError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifact {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Default)]
pub struct StagedOutput {
    artifacts: Vec<Artifact>,
}

impl StagedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) {
        self.artifacts.push(Artifact {
            path: path.into(),
            bytes,
        });
    }

    pub fn artifacts(&self) -> &[Artifact] {
        &self.artifacts
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.artifacts.iter().map(|a| a.path.as_path())
    }

    /// Writes and then renames every artifact.
    pub fn commit(self) -> Result<()> {
        let mut staged = Vec::with_capacity(self.artifacts.len());
        for artifact in &self.artifacts {
            let tmp = temp_path(&artifact.path);
            if let Err(source) = write_file(&tmp, &artifact.bytes) {
                remove_files(staged.iter().chain(std::iter::once(&tmp)));
                remove_stale(self.paths());
                return Err(TileFontError::Output { path: tmp, source });
            }
            staged.push(tmp);
        }

        for (i, (tmp, artifact)) in staged.iter().zip(&self.artifacts).enumerate() {
            if let Err(source) = fs::rename(tmp, &artifact.path) {
                remove_files(&staged[i..]);
                remove_stale(self.paths());
                return Err(TileFontError::Output {
                    path: artifact.path.clone(),
                    source,
                });
            }
            debug!(
                "wrote {} ({} bytes)",
                artifact.path.display(),
                artifact.bytes.len()
            );
        }
        Ok(())
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn remove_files<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) {
    for path in paths {
        let _ = fs::remove_file(path);
    }
}

/// Deletes outputs left over from an earlier run. Missing files are fine.
pub fn remove_stale<'a>(paths: impl IntoIterator<Item = &'a Path>) {
    for path in paths {
        match fs::remove_file(path) {
            Ok(()) => warn!("removed stale output {}", path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("could not remove stale output {}: {e}", path.display()),
        }
    }
}
