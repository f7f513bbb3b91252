use std::collections::HashSet;
use std::io;
use std::io::Write;

use crate::FcqsError;
use crate::FcqsResult;
use crate::Scanner;

/// Write every distinct note title, one per line, in order of first
/// appearance. Headings inside fenced blocks and blank headings are skipped.
///
/// Titles written before a read fault are left in `w`.
pub fn write_titles<W, L>(w: &mut W, lines: L) -> FcqsResult<()>
where
	W: Write + ?Sized,
	L: IntoIterator<Item = io::Result<String>>,
{
	let mut seen = HashSet::new();

	for scanned in Scanner::new(lines) {
		let scanned = scanned.map_err(|e| FcqsError::read_failure("seek titles", e))?;
		let Some(title) = scanned.heading().and_then(|heading| heading.title()) else {
			continue;
		};

		if seen.contains(&title) {
			continue;
		}

		writeln!(w, "{title}")?;
		seen.insert(title);
	}

	tracing::debug!(count = seen.len(), "listed titles");

	Ok(())
}
