use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::alphabet::MAX_LETTERS;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("word list {path:?} could not be opened")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list could not be read at line {line}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },
    #[error("line {line} has no column {column}")]
    MissingColumn { line: usize, column: usize },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Input can only be alphabetic")]
    NotAlphabetic,
    #[error("Input is limited to {} letters", MAX_LETTERS)]
    TooManyLetters,
    #[error("No lengths given")]
    NoLengths,
    #[error("{0:?} is not a word length")]
    BadLength(String),
}
