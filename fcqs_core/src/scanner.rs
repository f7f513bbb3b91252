use std::io;

use crate::HeadingLine;
use crate::heading::is_fence_marker;

/// Fenced code block state carried along a forward pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FenceState {
	fenced: bool,
}

impl FenceState {
	/// Step over one line. The returned flag is the state at the start of the
	/// line, before the line's own fence marker (if any) flips it.
	pub fn advance(&mut self, line: &str) -> bool {
		let fenced = self.fenced;
		if is_fence_marker(line) {
			self.fenced = !self.fenced;
		}
		fenced
	}
}

/// One line of a note file together with its classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScannedLine {
	/// 1-based position within the scanned source.
	pub number: usize,
	pub text: String,
	/// Whether a fenced block was open when the line started.
	pub fenced: bool,
}

impl ScannedLine {
	/// The heading on this line, if it is one and it is not inside a fence.
	pub fn heading(&self) -> Option<HeadingLine<'_>> {
		if self.fenced {
			return None;
		}
		HeadingLine::parse(&self.text)
	}

	pub fn is_empty(&self) -> bool {
		self.text.is_empty()
	}
}

/// Single forward pass over a line source.
///
/// Read faults from the source are handed through untouched; consumers decide
/// how to tag them.
pub struct Scanner<I> {
	lines: I,
	fence: FenceState,
	number: usize,
}

impl<I> Scanner<I>
where
	I: Iterator<Item = io::Result<String>>,
{
	pub fn new(lines: impl IntoIterator<IntoIter = I, Item = io::Result<String>>) -> Self {
		Self {
			lines: lines.into_iter(),
			fence: FenceState::default(),
			number: 0,
		}
	}
}

impl<I> Iterator for Scanner<I>
where
	I: Iterator<Item = io::Result<String>>,
{
	type Item = io::Result<ScannedLine>;

	fn next(&mut self) -> Option<Self::Item> {
		let text = match self.lines.next()? {
			Ok(text) => text,
			Err(e) => return Some(Err(e)),
		};

		self.number += 1;
		let fenced = self.fence.advance(&text);
		tracing::trace!(number = self.number, fenced, "scanned line");

		Some(Ok(ScannedLine {
			number: self.number,
			text,
			fenced,
		}))
	}
}
