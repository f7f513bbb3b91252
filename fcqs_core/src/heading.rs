use crate::Title;

/// Prefix that opens or closes a fenced code block.
pub const FENCE_MARKER: &str = "```";

/// Returns `true` when the line toggles a fenced code block.
pub fn is_fence_marker(line: &str) -> bool {
	line.starts_with(FENCE_MARKER)
}

/// A physical line recognized as a note heading.
///
/// Recognition is anchored at column 0: one or more `#` followed by exactly
/// one space. `#no_space`, `  # indented` and fence lines are never headings.
/// Whether the line sits inside a fenced block is decided by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
	raw_title: &'a str,
}

impl<'a> HeadingLine<'a> {
	pub fn parse(line: &'a str) -> Option<Self> {
		if is_fence_marker(line) {
			return None;
		}

		let marker = line.bytes().take_while(|&b| b == b'#').count();
		if marker == 0 {
			return None;
		}

		let raw_title = line[marker..].strip_prefix(' ')?;

		Some(Self { raw_title })
	}

	pub fn has_valid_title(&self) -> bool {
		!self.raw_title.trim().is_empty()
	}

	/// The normalized title, or `None` for a blank heading such as `#   `.
	pub fn title(&self) -> Option<Title> {
		if !self.has_valid_title() {
			return None;
		}
		Title::new(self.raw_title).ok()
	}

	pub fn equal_title(&self, title: &Title) -> bool {
		self.has_valid_title() && title == self.raw_title.trim()
	}
}
