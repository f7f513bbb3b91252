//! `fcqs_core` is the core library for [fcqs](https://github.com/yendo/fcqs), a quick search over flash-card style markdown notes. A notes file is a loose collection of notes, each starting at a `# Title` heading and running until the next heading. The library finds notes by title and writes out their titles, bodies, first URL, first shell command block, or location.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Notes file(s)
//!   → Line source (lines with terminators stripped, read once, front to back)
//!   → Scanner (tracks fenced code blocks, classifies headings)
//!   → Title lister | Content extractor
//!   → URL extractor | Shell command extractor (post-process the extracted body)
//! ```
//!
//! The location resolver runs its own pass over the files, counting lines
//! across all of them.
//!
//! ## Modules
//!
//! - [`config`]: Discovery of notes files from `FCQS_NOTES_FILE`, `fcqs.toml`, or `~/fcnotes.md`.
//! - [`files`]: Opening notes files as line sources.
//!
//! ## Headings
//!
//! A heading is a line starting at column 0 with one or more `#` followed by exactly one space. The heading level never matters; only the trimmed text after the marker is compared, literally. Lines inside fenced code blocks (```` ``` ````) are never headings. Notes with the same title are merged.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::io::BufRead;
//!
//! use fcqs_core::Title;
//! use fcqs_core::write_contents;
//!
//! let notes = "# greeting\n\nhello\n\n\n\nworld\n# other\nignored\n";
//! let title = Title::new("greeting").unwrap();
//!
//! let mut out = Vec::new();
//! write_contents(&mut out, notes.as_bytes().lines(), &title, false).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "# greeting\n\nhello\n\nworld\n");
//! ```

pub use contents::*;
pub use error::*;
pub use files::*;
pub use heading::*;
pub use location::*;
pub use scanner::*;
pub use shell::*;
pub use title::*;
pub use titles::*;
pub use url::*;

pub mod config;
mod contents;
#[allow(unused_assignments)]
mod error;
pub mod files;
mod heading;
mod location;
mod scanner;
mod shell;
mod title;
mod titles;
mod url;

#[cfg(test)]
mod __fixtures;
