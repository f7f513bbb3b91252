use std::io;
use std::io::BufRead;
use std::io::Read;

/// A notes file exercising every heading and body rule.
pub const NOTES: &str = r"# title

contents

# Long title and contents have lines

line 1

line 2

# Regular expression meta chars in the title are ignored $

contents

# Consecutive blank lines are combined into a single line

line 1



line 2

# same title
Contents with the same title are combined into one.

## Heading levels and structures are ignored

contents

# Trailing spaces in the title are ignored  

The contents have trailing spaces.  

# same title

2nd

# Notes without content output the title only

#   Spaces before the title are ignored

contents

# Headings in fenced code blocks are ignored

```
# fenced heading
```

# There can be no blank line
contents

# Titles without a space after the # are not recognized

#no_space_title

contents

  # Titles with spaces before the # are not recognized

contents

# same title

3rd

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

#   

# blank titles are skipped above
";

/// Titles of [`NOTES`] as `write_titles` lists them.
pub const NOTES_TITLES: &str = "title
Long title and contents have lines
Regular expression meta chars in the title are ignored $
Consecutive blank lines are combined into a single line
same title
Heading levels and structures are ignored
Trailing spaces in the title are ignored
Notes without content output the title only
Spaces before the title are ignored
Headings in fenced code blocks are ignored
There can be no blank line
Titles without a space after the # are not recognized
URL
command-line
command-line with $
blank titles are skipped above
";

/// Notes whose only difference is the shell block opener.
pub const SHELL_BLOCKS: &str = r"# shell 1

```shell
ls -l | nl
```

# shell 2

``` shell
ls -l | nl
```

# shell 3

```shell title=list.sh
ls -l | nl
```

# sh

```sh
ls -l | nl
```

# shell-script

```shell-script
ls -l | nl
```

# bash

```bash
ls -l | nl
```

# zsh

```zsh
ls -l | nl
```

# powershell

```powershell
ls -l | nl
```

# posh

```posh
ls -l | nl
```

# pwsh

```pwsh
ls -l | nl
```

# shellsession

```shellsession
$ ls -l | nl
```

# bash session

```bash session
$ls -l | nl
```

# console

```console
$ ls -l | nl
```

# go

```go
ls -l | nl
```

# no identifier

```
ls -l | nl
```

# other identifier

```text
ls -l | nl
```

# second block only

```text
echo first
```

```bash
ls -l | nl
```

```bash
echo third
```
";

/// Eight lines, with `# 5th Line` on line 5 and a heading hidden in a fence
/// on line 7.
pub const LOCATION: &str = "# 1st Line
2nd line

# 4th Line
# 5th Line
```
# 7th Line
```
";

/// Continues [`LOCATION`]; its first line is line 9 overall.
pub const LOCATION_EXTRA: &str = "# 9th Line
10th line
# 5th Line
";

/// Lines of an in-memory note text, as a line source.
pub fn lines_of(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
	text.as_bytes().lines()
}

/// A reader that fails on every read.
pub struct ErrReader;

impl Read for ErrReader {
	fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
		Err(io::Error::other("scan error"))
	}
}

/// Lines of `text` followed by a read fault.
pub fn failing_lines_of(text: &str) -> impl Iterator<Item = io::Result<String>> + '_ {
	io::BufReader::new(text.as_bytes().chain(ErrReader)).lines()
}
