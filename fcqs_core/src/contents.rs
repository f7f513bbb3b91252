use std::io;
use std::io::Write;

use crate::FcqsError;
use crate::FcqsResult;
use crate::Scanner;
use crate::Title;

/// Per-call state of the content extractor.
#[derive(Debug, Default)]
struct Extraction {
	/// Inside the body of a matching note.
	scope: bool,
	/// Blank lines were skipped since the last written line.
	pending_blank: bool,
	/// Something (header or body) has been written.
	written: bool,
}

/// Write the body of every note titled `title`, in document order.
///
/// Notes sharing the same title are merged into one body. Runs of blank lines
/// collapse into a single blank line, and blank lines are never written before
/// the first line of output. Unless `suppress_header` is set, `# <title>` is
/// written once when the first matching heading is found.
///
/// Output written before a read fault is left in `w`.
pub fn write_contents<W, L>(
	w: &mut W,
	lines: L,
	title: &Title,
	suppress_header: bool,
) -> FcqsResult<()>
where
	W: Write + ?Sized,
	L: IntoIterator<Item = io::Result<String>>,
{
	let mut state = Extraction::default();
	let mut matches = 0_usize;

	for scanned in Scanner::new(lines) {
		let scanned = scanned.map_err(|e| FcqsError::read_failure("seek contents", e))?;
		let heading = scanned.heading();

		if heading.is_some_and(|heading| heading.equal_title(title)) {
			matches += 1;
			if !state.scope {
				tracing::debug!(line = scanned.number, %title, "note opened");
			}
			if !state.written && !suppress_header {
				writeln!(w, "# {title}")?;
				state.written = true;
			}
			state.scope = true;
			continue;
		}

		if !state.scope {
			continue;
		}

		if heading.is_some() {
			tracing::debug!(line = scanned.number, "note closed");
			state.scope = false;
			continue;
		}

		if scanned.is_empty() {
			state.pending_blank = true;
			continue;
		}

		if state.pending_blank && state.written {
			writeln!(w)?;
		}
		state.pending_blank = false;

		writeln!(w, "{}", scanned.text)?;
		state.written = true;
	}

	tracing::debug!(%title, matches, "extracted contents");

	Ok(())
}

/// Run [`write_contents`] without a header and return the body as text.
pub(crate) fn read_contents<L>(lines: L, title: &Title) -> FcqsResult<String>
where
	L: IntoIterator<Item = io::Result<String>>,
{
	let mut buffer = Vec::new();
	write_contents(&mut buffer, lines, title, true)?;

	Ok(String::from_utf8_lossy(&buffer).into_owned())
}
