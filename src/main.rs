use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use structopt::StructOpt;
use tracing::{info, warn};

use word_puzzle::solver::validate_letters;
use word_puzzle::{Dictionary, DictionaryHandle, FileFormat, InputError, LengthFilter, Solver};

/// Find the dictionary words that can be spelled from a set of letters.
#[derive(StructOpt)]
struct Cli {
    /// Word list to read
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Letters to rearrange; asked for when missing
    letters: Option<String>,
    /// Word lengths to show: "-4" for 4 and longer, or a list such as "3 5"
    #[structopt(short, long, allow_hyphen_values = true)]
    lengths: Option<String>,
    /// Column separator, for word lists with more than one column
    #[structopt(short, long)]
    delimiter: Option<char>,
    /// Zero-based column holding the word (with --delimiter)
    #[structopt(short, long)]
    word_column: Option<usize>,
    /// Print the result as JSON
    #[structopt(long)]
    json: bool,
    /// Print every word in the dictionary and exit
    #[structopt(long)]
    dump: bool,
    /// Keep going with an empty dictionary if the word list can't be read
    #[structopt(long)]
    allow_empty: bool,
}

fn file_format(args: &Cli) -> FileFormat {
    match (args.delimiter, args.word_column) {
        (Some(delimiter), Some(column)) => FileFormat::builder().delimiter(delimiter).word_column(column).build(),
        (Some(delimiter), None) => FileFormat::builder().delimiter(delimiter).build(),
        (None, column) => {
            if column.is_some() {
                warn!("--word-column has no effect without --delimiter");
            }
            FileFormat::default()
        }
    }
}

/// Ask until `parse` accepts an answer.
fn prompt<T, I, F>(lines: &mut I, message: &str, parse: F) -> anyhow::Result<T>
    where I: Iterator<Item = io::Result<String>>,
          F: Fn(&str) -> Result<T, InputError> {
    loop {
        println!("{}", message);
        let line = lines.next().context("standard input closed")??;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(e) => println!("{}", e),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(io::stderr).init();
    let args = Cli::from_args();

    let start = Instant::now();
    let dictionary = match Dictionary::from_file(&args.path, &file_format(&args)) {
        Ok(dictionary) => dictionary,
        Err(e) if args.allow_empty => {
            warn!("{}; continuing with an empty dictionary", e);
            Dictionary::new()
        }
        Err(e) => return Err(e).with_context(|| format!("could not build dictionary from {:?}", args.path)),
    };
    info!("Dictionary Creation took: {}ms", start.elapsed().as_millis());
    let dictionary = DictionaryHandle::from(dictionary);

    if args.dump {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for word in dictionary.enumerate() {
            writeln!(out, "{}", word)?;
        }
        return Ok(());
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let letters = match &args.letters {
        Some(letters) => validate_letters(letters)?.to_string(),
        None => prompt(&mut lines, "Input char you want to check for on a single line",
                       |x: &str| validate_letters(x).map(str::to_string))?,
    };
    let filter: LengthFilter = match &args.lengths {
        Some(lengths) => lengths.parse()?,
        None => prompt(&mut lines, "Input digit len you want to check for on a single line",
                       |x: &str| x.parse())?,
    };

    let solution = Solver::new(dictionary).solve(&letters, &filter);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
    } else {
        println!("{}", solution);
    }
    Ok(())
}
