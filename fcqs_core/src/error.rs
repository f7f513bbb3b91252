use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum FcqsError {
	#[error(transparent)]
	#[diagnostic(code(fcqs::io_error))]
	Io(#[from] std::io::Error),

	#[error("invalid title: title must not be blank")]
	#[diagnostic(
		code(fcqs::invalid_title),
		help("pass the text that follows `# ` in the note heading")
	)]
	InvalidTitle,

	#[error("{context}: {source}")]
	#[diagnostic(code(fcqs::read_failure))]
	ReadFailure {
		context: &'static str,
		#[source]
		source: std::io::Error,
	},

	#[error("user home directory: cannot be determined")]
	#[diagnostic(
		code(fcqs::home_directory),
		help("set `FCQS_NOTES_FILE` to the path of your notes file")
	)]
	HomeDirectory,

	#[error("notes file: open {}: {source}", .path.display())]
	#[diagnostic(
		code(fcqs::notes_file),
		help("check `FCQS_NOTES_FILE` or the `[notes]` section of fcqs.toml")
	)]
	NotesFile {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(fcqs::config_parse),
		help("check that fcqs.toml is valid TOML with a [notes] section")
	)]
	ConfigParse(String),

	#[error("invalid number of arguments")]
	#[diagnostic(
		code(fcqs::invalid_number_of_arguments),
		help("run `fcqs --help` for usage")
	)]
	InvalidNumberOfArguments,
}

impl FcqsError {
	/// Tag a line source fault with the operation that was reading it.
	pub(crate) fn read_failure(context: &'static str, source: std::io::Error) -> Self {
		Self::ReadFailure { context, source }
	}
}

pub type FcqsResult<T> = Result<T, FcqsError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
