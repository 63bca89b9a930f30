//! Artifact Output
//!
//! Writes the generated pair into a directory. A file whose content is
//! already identical is not rewritten, so its modification time only changes
//! when the generated code does.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{BindgenError, Result};
use crate::generator::Artifacts;
use crate::settings::OutputSettings;

/// What happened to one destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteStatus {
    Written,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteReport {
    pub interface_path: PathBuf,
    pub interface: WriteStatus,
    pub implementation_path: PathBuf,
    pub implementation: WriteStatus,
}

/// Writes both artifacts into `dir` using the configured file names.
pub fn write_artifacts(
    dir: &Path,
    output: &OutputSettings,
    artifacts: &Artifacts,
) -> Result<WriteReport> {
    let interface_path = dir.join(&output.header_file);
    let implementation_path = dir.join(&output.source_file);

    let interface = write_if_changed(&interface_path, &artifacts.interface)?;
    let implementation = write_if_changed(&implementation_path, &artifacts.implementation)?;

    Ok(WriteReport {
        interface_path,
        interface,
        implementation_path,
        implementation,
    })
}

fn write_if_changed(path: &Path, contents: &str) -> Result<WriteStatus> {
    if let Ok(existing) = fs::read(path)
        && existing == contents.as_bytes()
    {
        log::debug!("{} is up to date", path.display());
        return Ok(WriteStatus::Unchanged);
    }

    fs::write(path, contents).map_err(|source| BindgenError::WriteFailed {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Wrote {} ({} bytes)", path.display(), contents.len());
    Ok(WriteStatus::Written)
}
