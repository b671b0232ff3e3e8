use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;

use metrics::{counter, gauge};
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::error::LoadError;
use crate::wordlist::dictionary::Dictionary;
use crate::wordlist::index::Index;

/// How a word list lays out its lines. By default each line is one word.
#[derive(TypedBuilder, Debug, Clone)]
pub struct FileFormat {
    #[builder(default, setter(strip_option))]
    delimiter: Option<char>,
    #[builder(default, setter(strip_option))]
    word_column: Option<usize>,
}

impl Default for FileFormat {
    fn default() -> Self {
        FileFormat::builder().build()
    }
}

impl FileFormat {
    fn parse_line<'a>(&self, line: &'a str, line_no: usize) -> Result<&'a str, LoadError> {
        match self.delimiter {
            None => Ok(line),
            Some(delimiter) => {
                let column = self.word_column.unwrap_or(0);
                line.split(delimiter)
                    .nth(column)
                    .ok_or(LoadError::MissingColumn { line: line_no, column })
            }
        }
    }
}

impl Dictionary {
    pub fn from_file<P: AsRef<Path>>(path: P, format: &FileFormat) -> Result<Dictionary, LoadError> {
        let path = path.as_ref();
        info!("Reading words from {:?}", path);

        let file = File::open(path).map_err(|source| LoadError::Unavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Dictionary::from_reader(BufReader::new(file), format)
    }

    pub fn from_reader<R: BufRead>(reader: R, format: &FileFormat) -> Result<Dictionary, LoadError> {
        let mut dictionary = Dictionary::new();
        let mut count: usize = 0;
        let mut skipped: usize = 0;

        let start = Instant::now();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|source| LoadError::Read { line: line_no, source })?;
            // a lone '\r' ends a row too
            for row in line.split('\r') {
                if row.is_empty() {
                    skipped += 1;
                    continue;
                }

                let word = format.parse_line(row, line_no)?;
                if word.is_empty() {
                    skipped += 1;
                    continue;
                }
                dictionary.add(word);
                count += 1;
                if count % 100000 == 0 {
                    debug!("{} {}", count, word);
                }
            }
        }

        let elapsed = start.elapsed();
        info!("Read {} words in {}s ({} skipped lines)",
              count, elapsed.as_secs_f64(), skipped);
        counter!("dictionary.words_loaded", count as u64);
        counter!("dictionary.lines_skipped", skipped as u64);
        gauge!("dictionary.load_seconds", elapsed.as_secs_f64());

        Ok(dictionary)
    }
}
