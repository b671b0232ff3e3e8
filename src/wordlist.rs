pub mod dictionary;
pub mod handle;
pub mod index;
pub mod iterators;
pub mod trienode;
pub mod wordlist;
