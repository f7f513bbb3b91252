#![allow(dead_code)]

use std::path::Path;
use std::path::PathBuf;

use assert_cmd::Command;

pub const NOTES: &str = "# title

contents

# URL

fcqs: http://github.com/yendo/fcqs/
github: http://github.com/

# command-line

```sh
ls -l | nl
```

# command-line with $

```console
$ date
```
";

pub const LOCATION: &str = "# 1st Line
2nd line

# 4th Line
# 5th Line
6th line
7th line
8th line
";

pub const LOCATION_EXTRA: &str = "# 9th Line
";

/// `fcqs` with colors off and notes discovery isolated from the developer's
/// own environment.
pub fn fcqs_cmd(home: &Path) -> Command {
	let mut cmd = Command::cargo_bin("fcqs").unwrap_or_else(|e| panic!("fcqs binary: {e}"));
	cmd.env("NO_COLOR", "1")
		.env("HOME", home)
		.env_remove("FCQS_NOTES_FILE")
		.env_remove("FCQS_LOG");
	cmd
}

/// `fcqs` reading the given notes files through `FCQS_NOTES_FILE`.
pub fn fcqs_cmd_with_notes(home: &Path, notes: &[PathBuf]) -> Command {
	let joined = std::env::join_paths(notes).unwrap_or_else(|e| panic!("notes paths: {e}"));
	let mut cmd = fcqs_cmd(home);
	cmd.env("FCQS_NOTES_FILE", joined);
	cmd
}

/// Write `content` to `name` inside `dir` and return the full path.
pub fn write_notes(dir: &Path, name: &str, content: &str) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, content).unwrap_or_else(|e| panic!("write {}: {e}", path.display()));
	path
}
