use std::fs;
use std::io::{self, Read};

use crate::error::Result;

/// Read input text from a file or stdin
///
/// If `file` is `Some`, reads from the specified file path.
/// If `file` is `None`, reads from stdin.
pub(crate) fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write `text` to a file as is, or to stdout followed by a newline
pub(crate) fn write_output(file: Option<&str>, text: &str) -> Result<()> {
    match file {
        Some(path) => Ok(fs::write(path, text)?),
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
