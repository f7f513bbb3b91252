use std::io;
use std::io::Write;
use std::sync::LazyLock;

use regex::Regex;

use crate::FcqsResult;
use crate::Title;
use crate::contents::read_contents;

/// Absolute URLs only: a scheme followed by `://` is required.
static STRICT_URL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r#"[A-Za-z][A-Za-z0-9+.\-]*://[^\s<>"`{}|\\^]+"#).expect("valid url pattern")
});

/// Characters that end a sentence rather than a URL.
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ':', ';', '!', '?', '\'', '"'];

/// Find the first absolute URL in `text`.
pub fn find_first_url(text: &str) -> Option<&str> {
	let found = STRICT_URL.find(text)?.as_str();
	let mut url = found.trim_end_matches(TRAILING_PUNCTUATION);

	// `(https://example.com)` keeps the parenthesis out, `.../Foo_(bar)` keeps it in.
	while url.ends_with(')') && url.matches(')').count() > url.matches('(').count() {
		url = url[..url.len() - 1].trim_end_matches(TRAILING_PUNCTUATION);
	}

	(!url.is_empty()).then_some(url)
}

/// Write the first URL found in the body of the note titled `title`.
pub fn write_first_url<W, L>(w: &mut W, lines: L, title: &Title) -> FcqsResult<()>
where
	W: Write + ?Sized,
	L: IntoIterator<Item = io::Result<String>>,
{
	let contents = read_contents(lines, title)?;

	let Some(url) = find_first_url(&contents) else {
		tracing::debug!(%title, "no url in note");
		return Ok(());
	};

	writeln!(w, "{url}")?;

	Ok(())
}
