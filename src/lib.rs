pub mod alphabet;
pub mod candidates;
pub mod error;
pub mod solver;
pub mod wordlist;

pub use crate::error::{InputError, LoadError};
pub use crate::solver::{LengthFilter, Solution, Solver};
pub use crate::wordlist::dictionary::Dictionary;
pub use crate::wordlist::handle::DictionaryHandle;
pub use crate::wordlist::index::Index;
pub use crate::wordlist::wordlist::FileFormat;
