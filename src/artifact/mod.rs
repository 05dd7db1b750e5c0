//! Persisting the hosting redirects file.
//!
//! Kept apart from the compiler so compilation never touches the filesystem.

use crate::config::env::BuildMode;
use crate::error::{RedirectError, Result};
use std::path::Path;

/// The filesystem operations the artifact writer needs.
pub trait ArtifactFs {
	/// Create a directory and its parents. Succeeds if it already exists.
	fn create_dir_all(&self, path: &Path) -> std::io::Result<()>;

	/// Replace the file's contents entirely.
	fn write(&self, path: &Path, contents: &str) -> std::io::Result<()>;
}

/// [`ArtifactFs`] backed by `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFs;

impl ArtifactFs for StdFs {
	fn create_dir_all(&self, path: &Path) -> std::io::Result<()> {
		std::fs::create_dir_all(path)
	}

	fn write(&self, path: &Path, contents: &str) -> std::io::Result<()> {
		std::fs::write(path, contents)
	}
}

/// Write `file_table` to `output_path` on production builds.
///
/// Returns whether the file was written. Outside production this does
/// nothing at all.
pub fn write_if_production(file_table: &str, output_path: &Path, mode: BuildMode) -> Result<bool> {
	write_if_production_with(&StdFs, file_table, output_path, mode)
}

/// [`write_if_production`] against an explicit filesystem.
pub fn write_if_production_with<F: ArtifactFs>(
	fs: &F,
	file_table: &str,
	output_path: &Path,
	mode: BuildMode,
) -> Result<bool> {
	if !mode.is_production() {
		tracing::debug!(
			path = %output_path.display(),
			%mode,
			"Skipping redirects file outside production"
		);
		return Ok(false);
	}

	if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs.create_dir_all(parent)
			.map_err(|source| RedirectError::CreateDir {
				path: parent.to_path_buf(),
				source,
			})?;
	}

	fs.write(output_path, file_table)
		.map_err(|source| RedirectError::WriteArtifact {
			path: output_path.to_path_buf(),
			source,
		})?;

	tracing::info!(
		path = %output_path.display(),
		lines = file_table.lines().count(),
		"Wrote redirects file"
	);

	Ok(true)
}
