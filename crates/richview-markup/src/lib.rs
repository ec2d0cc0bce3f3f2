//! # richview markup
//!
//! Turns text written in the `<rich>` markup dialect into [`StyledText`].
//!
//! ```
//! use richview_markup::MarkupParser;
//!
//! let parsed = MarkupParser::new()
//!     .parse(r##"<rich style="b" color="#FF0000">hi</rich> there"##)
//!     .unwrap();
//! assert_eq!(parsed.as_str(), "hi there");
//! ```
//!
//! Besides `<rich>`, the usual inline HTML tags (`<b>`, `<i>`, `<u>`, `<a>`,
//! `<font>`, `<br>`, block elements) and entities are understood.
//!
//! [`StyledText`]: richview_core::StyledText

pub mod attributes;
pub mod error;
pub mod parser;
mod scanner;

pub use attributes::{parse_size, parse_style, Attributes, DEFAULT_RICH_SIZE};
pub use error::{MarkupError, MarkupResult};
pub use parser::{normalize, MarkupParser, RICH_TAG};
