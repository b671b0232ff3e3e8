use std::fmt::{Display, Formatter};
use std::str::FromStr;

use derive_new::new;
use metrics::counter;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::alphabet::{is_alphabetic, MAX_LETTERS};
use crate::candidates::candidates;
use crate::error::InputError;
use crate::wordlist::handle::DictionaryHandle;

/// Which word lengths to report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LengthFilter {
    /// Written "-N": N and up.
    AtLeast(usize),
    /// Written "3 5 6".
    Exactly(Vec<usize>),
}

impl FromStr for LengthFilter {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InputError::NoLengths);
        }
        if let Some(rest) = s.strip_prefix('-') {
            return rest.trim().parse()
                .map(LengthFilter::AtLeast)
                .map_err(|_| InputError::BadLength(s.to_string()));
        }
        s.split_whitespace()
            .map(|x| x.parse::<usize>().map_err(|_| InputError::BadLength(x.to_string())))
            .collect::<Result<Vec<_>, _>>()
            .map(LengthFilter::Exactly)
    }
}

impl LengthFilter {
    pub fn accepts(&self, len: usize) -> bool {
        match self {
            LengthFilter::AtLeast(min) => len >= *min,
            LengthFilter::Exactly(lengths) => lengths.contains(&len),
        }
    }

    /// The filter spelled out as a list, given the longest possible word.
    pub fn lengths(&self, longest: usize) -> Vec<usize> {
        match self {
            LengthFilter::AtLeast(min) => (*min..=longest).collect(),
            LengthFilter::Exactly(lengths) => lengths.clone(),
        }
    }
}

pub fn validate_letters(input: &str) -> Result<&str, InputError> {
    let letters = input.trim();
    if !is_alphabetic(letters) {
        return Err(InputError::NotAlphabetic);
    }
    if letters.chars().count() > MAX_LETTERS {
        return Err(InputError::TooManyLetters);
    }
    Ok(letters)
}

#[derive(new, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub letters: String,
    pub lengths: Vec<usize>,
    pub words: Vec<String>,
}

impl Display for Solution {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.words.is_empty() {
            return write!(f, "There are no valid permutations for \"{}\" with lengths of {:?} :",
                          self.letters, self.lengths);
        }
        write!(f, "These are the valid permutations for \"{}\" with lengths of {:?} :",
               self.letters, self.lengths)?;
        for word in &self.words {
            write!(f, "\n{}", word)?;
        }
        Ok(())
    }
}

/// Finds the dictionary words that can be spelled from a set of letters.
#[derive(new, Debug, Clone)]
pub struct Solver {
    dictionary: DictionaryHandle,
}

impl Solver {
    pub fn solve(&self, letters: &str, filter: &LengthFilter) -> Solution {
        let candidates = candidates(letters);
        let longest = candidates.last().map(|x| x.chars().count()).unwrap_or(0);

        let words: Vec<String> = candidates.par_iter()
            .filter(|x| filter.accepts(x.chars().count()) && self.dictionary.search(x))
            .cloned()
            .collect();

        debug!("{} of {} candidates for {:?} are words", words.len(), candidates.len(), letters);
        counter!("solver.candidates", candidates.len() as u64);
        counter!("solver.matches", words.len() as u64);

        Solution::new(letters.to_string(), filter.lengths(longest), words)
    }
}
