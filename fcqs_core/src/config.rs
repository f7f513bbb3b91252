use std::ffi::OsStr;
use std::path::Path;
use std::path::PathBuf;

use directories::BaseDirs;
use serde::Deserialize;

use crate::FcqsError;
use crate::FcqsResult;

/// Environment variable holding one or more notes file paths, separated by the
/// platform path-list separator.
pub const NOTES_FILE_ENV: &str = "FCQS_NOTES_FILE";

/// Notes file used when nothing else is configured, relative to the home
/// directory.
pub const DEFAULT_NOTES_FILE: &str = "fcnotes.md";

/// Supported config file locations in discovery order (highest precedence
/// first), relative to the home directory.
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["fcqs.toml", ".fcqs.toml", ".config/fcqs.toml"];

/// Configuration loaded from an `fcqs.toml` file.
///
/// ```toml
/// [notes]
/// files = ["notes/fcnotes.md", "/srv/shared/team-notes.md"]
/// ```
#[derive(Debug, Default, Deserialize)]
pub struct FcqsConfig {
	#[serde(default)]
	pub notes: NotesConfig,
}

/// The `[notes]` section.
#[derive(Debug, Default, Deserialize)]
pub struct NotesConfig {
	/// Notes files in scanning order. Relative paths are resolved against the
	/// home directory.
	#[serde(default)]
	pub files: Vec<PathBuf>,
}

impl FcqsConfig {
	/// Resolve the config path from known discovery candidates.
	#[must_use]
	pub fn resolve_path(home: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| home.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file under `home`.
	/// Returns `None` if there is none.
	pub fn load(home: &Path) -> FcqsResult<Option<FcqsConfig>> {
		let Some(config_path) = Self::resolve_path(home) else {
			return Ok(None);
		};

		Self::load_from(&config_path).map(Some)
	}

	/// Load the config from an explicit path.
	pub fn load_from(path: &Path) -> FcqsResult<FcqsConfig> {
		let content = std::fs::read_to_string(path)?;
		let config: FcqsConfig =
			toml::from_str(&content).map_err(|e| FcqsError::ConfigParse(e.to_string()))?;

		tracing::debug!(path = %path.display(), files = config.notes.files.len(), "loaded config");

		Ok(config)
	}
}

/// The current user's home directory.
pub fn home_dir() -> FcqsResult<PathBuf> {
	BaseDirs::new()
		.map(|dirs| dirs.home_dir().to_path_buf())
		.filter(|home| !home.as_os_str().is_empty())
		.ok_or(FcqsError::HomeDirectory)
}

/// Decide which notes files to read.
///
/// `env` is the value of [`NOTES_FILE_ENV`]; a non-empty value wins. Next come
/// the files listed in `config`, then `<home>/fcnotes.md`. `home` is only
/// consulted when it is needed.
pub fn resolve_notes_files(
	env: Option<&OsStr>,
	config: Option<&FcqsConfig>,
	home: impl FnOnce() -> FcqsResult<PathBuf>,
) -> FcqsResult<Vec<PathBuf>> {
	if let Some(value) = env.filter(|value| !value.is_empty()) {
		let files: Vec<PathBuf> = std::env::split_paths(value)
			.filter(|path| !path.as_os_str().is_empty())
			.collect();
		if !files.is_empty() {
			tracing::debug!(count = files.len(), "notes files from environment");
			return Ok(files);
		}
	}

	if let Some(config) = config.filter(|config| !config.notes.files.is_empty()) {
		let files = &config.notes.files;
		if files.iter().all(|path| path.is_absolute()) {
			return Ok(files.clone());
		}

		let home = home()?;
		return Ok(files.iter().map(|path| home.join(path)).collect());
	}

	Ok(vec![home()?.join(DEFAULT_NOTES_FILE)])
}
