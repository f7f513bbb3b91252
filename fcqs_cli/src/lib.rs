use std::path::PathBuf;

use clap::ArgAction;
use clap::ArgGroup;
use clap::Parser;
use fcqs_core::FcqsError;
use fcqs_core::FcqsResult;
use fcqs_core::Title;

/// Environment variable holding a `tracing` filter directive, e.g.
/// `FCQS_LOG=fcqs_core=trace`.
pub const LOG_ENV: &str = "FCQS_LOG";

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Quick search for flash-card style markdown notes.",
	long_about = "fcqs (flash card quick search) looks up notes in a markdown notes file.\n\nA \
	              note starts at a `# Title` heading and runs until the next heading. Notes are \
	              read from the files listed in `FCQS_NOTES_FILE`, the `[notes]` section of \
	              fcqs.toml, or ~/fcnotes.md.\n\nQuick start:\n  fcqs           List all \
	              note titles\n  fcqs TITLE     Show a note\n  fcqs -u TITLE  Show the first \
	              URL in a note\n  fcqs -c TITLE  Show the first shell command block in a note\n  \
	              fcqs -l TITLE  Show the file and line of a note"
)]
#[command(disable_version_flag = true)]
#[command(group(ArgGroup::new("mode").args(["url", "command", "location"])))]
#[allow(clippy::struct_excessive_bools)]
pub struct FcqsCli {
	/// Title of the note. Omit to list every title.
	#[arg(value_name = "TITLE")]
	pub titles: Vec<String>,

	/// Output the first URL from the note.
	#[arg(long, short = 'u', default_value_t = false)]
	pub url: bool,

	/// Output the first shell command block from the note, without prompts.
	#[arg(long, short = 'c', default_value_t = false)]
	pub command: bool,

	/// Output the file and line number where the note starts.
	#[arg(long, short = 'l', default_value_t = false)]
	pub location: bool,

	/// Output the note without its `# Title` header line.
	#[arg(long, short = 't', default_value_t = false)]
	pub no_title: bool,

	/// Path to an fcqs.toml config file. Defaults to the first of
	/// `fcqs.toml`, `.fcqs.toml` or `.config/fcqs.toml` in the home directory.
	#[arg(long, global = true)]
	pub config: Option<PathBuf>,

	/// Enable debug logging on stderr.
	#[arg(long, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,

	/// Print version.
	#[arg(short = 'v', long = "version", action = ArgAction::Version)]
	pub version: Option<bool>,
}

/// What a single invocation should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
	/// List every note title.
	Titles,
	/// Show a note.
	Contents { title: Title, suppress_header: bool },
	/// Show the first URL in a note.
	Url(Title),
	/// Show the first shell command block in a note.
	Command(Title),
	/// Show where a note starts.
	Location(Title),
}

impl FcqsCli {
	/// Work out the requested [`Mode`] from the flags and positional titles.
	pub fn mode(&self) -> FcqsResult<Mode> {
		let wants_single_title = self.url || self.command || self.location;

		let title = match self.titles.as_slice() {
			[] if !wants_single_title => return Ok(Mode::Titles),
			[title] => Title::new(title)?,
			_ => return Err(FcqsError::InvalidNumberOfArguments),
		};

		let mode = if self.url {
			Mode::Url(title)
		} else if self.command {
			Mode::Command(title)
		} else if self.location {
			Mode::Location(title)
		} else {
			Mode::Contents {
				title,
				suppress_header: self.no_title,
			}
		};

		Ok(mode)
	}
}
