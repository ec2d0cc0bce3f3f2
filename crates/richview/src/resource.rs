//! Loading text from files and readers

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Marks the end of each source line in the markup built from a reader.
const LINE_BREAK: &str = "<br/>";

/// Reads `reader` line by line into markup, each line followed by `<br/>`.
pub fn read_markup<R: BufRead>(reader: R) -> std::io::Result<String> {
    let mut markup = String::new();
    for line in reader.lines() {
        markup.push_str(&line?);
        markup.push_str(LINE_BREAK);
    }
    Ok(markup)
}

/// Reads a UTF-8 text file into markup with [`read_markup`].
pub fn load_text_resource(path: impl AsRef<Path>) -> std::io::Result<String> {
    read_markup(BufReader::new(File::open(path)?))
}
