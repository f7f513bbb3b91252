use std::io;
use std::io::Write;

use crate::FcqsResult;
use crate::Title;
use crate::contents::read_contents;
use crate::heading::FENCE_MARKER;
use crate::heading::is_fence_marker;

/// Fenced block languages treated as shell commands.
pub const SHELL_LANGUAGES: &[&str] = &[
	"shell",
	"sh",
	"shell-script",
	"bash",
	"zsh",
	"powershell",
	"posh",
	"pwsh",
	"shellsession",
	"console",
];

/// Returns `true` for an opening fence whose first info-string token is a
/// shell language, e.g. ```` ```sh ```` or ```` ``` bash session ````.
pub fn is_shell_block_opener(line: &str) -> bool {
	let Some(info) = line.strip_prefix(FENCE_MARKER) else {
		return false;
	};

	info.trim_start_matches('`')
		.split_whitespace()
		.next()
		.is_some_and(|language| SHELL_LANGUAGES.contains(&language))
}

/// Remove a single leading `$ ` (or bare `$`) prompt.
fn strip_prompt(line: &str) -> &str {
	line.strip_prefix("$ ")
		.or_else(|| line.strip_prefix('$'))
		.unwrap_or(line)
}

/// Write the lines of the first shell code block in the note titled `title`,
/// without prompts. Later blocks are ignored.
pub fn write_first_command_block<W, L>(w: &mut W, lines: L, title: &Title) -> FcqsResult<()>
where
	W: Write + ?Sized,
	L: IntoIterator<Item = io::Result<String>>,
{
	let contents = read_contents(lines, title)?;
	let mut copying = false;

	for line in contents.lines() {
		if !copying {
			copying = is_shell_block_opener(line);
			continue;
		}

		if is_fence_marker(line) {
			return Ok(());
		}

		writeln!(w, "{}", strip_prompt(line))?;
	}

	if !copying {
		tracing::debug!(%title, "no shell block in note");
	}

	Ok(())
}
