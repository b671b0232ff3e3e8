use std::sync::Arc;

use delegate::delegate;

use crate::wordlist::dictionary::Dictionary;
use crate::wordlist::iterators::Words;

/// Cheaply cloneable read-only handle to a dictionary built once at startup.
#[derive(Clone, Debug, Default)]
pub struct DictionaryHandle(Arc<Dictionary>);

impl DictionaryHandle {
    delegate! {
        to self.0 {
            pub fn search(&self, word: &str) -> bool;
            pub fn enumerate(&self) -> Words<'_>;
            pub fn is_empty(&self) -> bool;
        }
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.0
    }
}

impl From<Dictionary> for DictionaryHandle {
    fn from(dictionary: Dictionary) -> Self {
        DictionaryHandle(Arc::new(dictionary))
    }
}
