use std::fmt;
use std::io;
use std::io::Write;
use std::path::PathBuf;

use crate::FcqsError;
use crate::FcqsResult;
use crate::FenceState;
use crate::HeadingLine;
use crate::Title;

/// Where a note heading was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteLocation {
	pub file: PathBuf,
	/// 1-based line number counted across all files scanned so far, not
	/// within `file`.
	pub line: usize,
}

impl fmt::Display for NoteLocation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{:?} {}", self.file.display().to_string(), self.line)
	}
}

/// Find the first heading titled `title` across `sources`, read in order as if
/// they were one document.
///
/// The line counter and fenced block state carry over from one file to the
/// next. Scanning stops at the first match; later files are never read.
pub fn find_note_location<S, L>(sources: S, title: &Title) -> FcqsResult<Option<NoteLocation>>
where
	S: IntoIterator<Item = (PathBuf, L)>,
	L: IntoIterator<Item = io::Result<String>>,
{
	let mut line_number = 0_usize;
	let mut fence = FenceState::default();

	for (file, lines) in sources {
		for line in lines {
			let line = line.map_err(|e| FcqsError::read_failure("seek location", e))?;
			line_number += 1;

			let fenced = fence.advance(&line);
			if fenced {
				continue;
			}

			if HeadingLine::parse(&line).is_some_and(|heading| heading.equal_title(title)) {
				tracing::debug!(file = %file.display(), line = line_number, "note located");
				return Ok(Some(NoteLocation {
					file,
					line: line_number,
				}));
			}
		}
	}

	tracing::debug!(%title, lines = line_number, "note not located");

	Ok(None)
}

/// Write the location of the note titled `title` as `"<file>" <line>`, or
/// nothing when no file contains it.
pub fn write_note_location<W, S, L>(w: &mut W, sources: S, title: &Title) -> FcqsResult<()>
where
	W: Write + ?Sized,
	S: IntoIterator<Item = (PathBuf, L)>,
	L: IntoIterator<Item = io::Result<String>>,
{
	if let Some(location) = find_note_location(sources, title)? {
		writeln!(w, "{location}")?;
	}

	Ok(())
}
