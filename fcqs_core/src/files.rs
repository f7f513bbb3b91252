use std::fs::File;
use std::io;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;
use std::path::PathBuf;

use crate::FcqsError;
use crate::FcqsResult;

/// Line source over one open notes file.
pub type FileLines = LossyLines<BufReader<File>>;

/// Lines of a reader with `\n` or `\r\n` stripped.
///
/// Bytes that are not valid UTF-8 are replaced with `U+FFFD` instead of
/// failing, so one badly encoded note never hides the notes after it. Only
/// genuine read faults are yielded as errors.
#[derive(Debug)]
pub struct LossyLines<B> {
	inner: io::Split<B>,
}

pub fn lossy_lines<B: BufRead>(reader: B) -> LossyLines<B> {
	LossyLines {
		inner: reader.split(b'\n'),
	}
}

impl<B: BufRead> Iterator for LossyLines<B> {
	type Item = io::Result<String>;

	fn next(&mut self) -> Option<Self::Item> {
		let mut bytes = match self.inner.next()? {
			Ok(bytes) => bytes,
			Err(e) => return Some(Err(e)),
		};

		if bytes.last() == Some(&b'\r') {
			bytes.pop();
		}

		let line = String::from_utf8(bytes)
			.unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned());

		Some(Ok(line))
	}
}

/// Notes files opened in scanning order.
///
/// Each file can be read once: consume the set with [`NotesFiles::lines`] for
/// title and content lookups, or [`NotesFiles::sources`] for location lookups.
#[derive(Debug)]
pub struct NotesFiles {
	files: Vec<(PathBuf, BufReader<File>)>,
}

impl NotesFiles {
	/// Open every path, failing on the first one that cannot be opened.
	pub fn open<I, P>(paths: I) -> FcqsResult<Self>
	where
		I: IntoIterator<Item = P>,
		P: Into<PathBuf>,
	{
		let mut files = Vec::new();

		for path in paths {
			let path = path.into();
			let file = File::open(&path).map_err(|source| {
				FcqsError::NotesFile {
					path: path.clone(),
					source,
				}
			})?;
			files.push((path, BufReader::new(file)));
		}

		tracing::debug!(count = files.len(), "opened notes files");

		Ok(Self { files })
	}

	pub fn paths(&self) -> impl Iterator<Item = &Path> {
		self.files.iter().map(|(path, _)| path.as_path())
	}

	pub fn len(&self) -> usize {
		self.files.len()
	}

	pub fn is_empty(&self) -> bool {
		self.files.is_empty()
	}

	/// All files as one line source. Lines never run together across a file
	/// boundary, even when a file lacks a trailing newline.
	pub fn lines(self) -> impl Iterator<Item = io::Result<String>> {
		self.files.into_iter().flat_map(|(_, reader)| lossy_lines(reader))
	}

	/// Each file paired with its own line source, in order.
	pub fn sources(self) -> impl Iterator<Item = (PathBuf, FileLines)> {
		self.files
			.into_iter()
			.map(|(path, reader)| (path, lossy_lines(reader)))
	}
}
