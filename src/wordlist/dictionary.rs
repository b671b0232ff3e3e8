use std::fmt::{Debug, Formatter};

use crate::alphabet::fold;
use crate::wordlist::index::Index;
use crate::wordlist::iterators::{Path, Words};
use crate::wordlist::trienode::TrieNode;

/// Case-insensitive exact-match word index backed by a trie.
#[derive(Default, PartialEq, Eq)]
pub struct Dictionary {
    root: TrieNode,
}

impl Index for Dictionary {
    fn add(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.add_child(fold(c));
        }
        current.mark_end_of_word();
    }

    fn contains(&self, word: &str) -> bool {
        self.search(word)
    }
}

impl Dictionary {
    pub fn new() -> Dictionary {
        Dictionary {
            root: TrieNode::default(),
        }
    }

    pub fn from_words<I, S>(words: I) -> Dictionary
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        let mut dictionary = Dictionary::new();
        dictionary.load(words);
        dictionary
    }

    pub fn load<I, S>(&mut self, words: I)
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        self.add_all(words)
    }

    /// True only if `word` was stored; a stored prefix is not enough.
    /// Touches at most one node per letter of `word`.
    pub fn search(&self, word: &str) -> bool {
        let len = word.chars().count();
        if len == 0 {
            return false;
        }
        match self.path(word).enumerate().last() {
            Some((depth, node)) => depth + 1 == len && node.is_end_of_word(),
            None => false,
        }
    }

    pub fn path<'a, 'w>(&'a self, word: &'w str) -> Path<'a, 'w> {
        Path::new(&self.root, word)
    }

    /// Every stored word, depth first, siblings in insertion order.
    pub fn enumerate(&self) -> Words<'_> {
        Words::new(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.children().is_empty()
    }
}

impl<'a> IntoIterator for &'a Dictionary {
    type Item = String;
    type IntoIter = Words<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.enumerate()
    }
}

impl Debug for Dictionary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.enumerate()).finish()
    }
}

#[cfg(test)]
mod tests {
    use maplit::hashset;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::collections::HashSet;

    use crate::wordlist::dictionary::Dictionary;
    use crate::wordlist::index::Index;

    fn random_word(rng: &mut StdRng, max_len: usize) -> String {
        let len = rng.gen_range(1..=max_len);
        (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
    }

    #[test]
    fn finds_words_in_dictionary() {
        let dictionary = Dictionary::from_words(vec!["Man", "Mens", "Men"]);
        assert!(dictionary.search("man"));
        assert!(dictionary.search("mens"));
        assert!(dictionary.search("men"));
        assert!(!dictionary.search("me"));
        assert!(!dictionary.search("mensa"));
        assert!(!dictionary.search("a_liens"));
    }

    #[test]
    fn enumerates_in_insertion_order() {
        let dictionary = Dictionary::from_words(vec!["Man", "Mens", "Men"]);
        let words: Vec<String> = dictionary.enumerate().collect();
        assert_eq!(words, vec!["man", "men", "mens"]);
    }

    #[test]
    fn enumeration_is_not_sorted() {
        let dictionary = Dictionary::from_words(vec!["zebra", "apple", "mango", "ant"]);
        let words: Vec<String> = dictionary.enumerate().collect();
        assert_eq!(words, vec!["zebra", "apple", "ant", "mango"]);
    }

    #[test]
    fn search_ignores_case() {
        let dictionary = Dictionary::from_words(vec!["Man"]);
        assert!(dictionary.search("man"));
        assert!(dictionary.search("MAN"));
        assert!(dictionary.search("Man"));
        assert!(dictionary.search("mAn"));
        assert!(!dictionary.search("MA"));
    }

    #[test]
    fn empty_word_is_never_found() {
        let mut dictionary = Dictionary::from_words(vec!["a", ""]);
        dictionary.add("");
        assert!(!dictionary.search(""));
        assert_eq!(dictionary.enumerate().collect::<Vec<_>>(), vec!["a"]);
    }

    #[test]
    fn prefix_is_not_a_word() {
        let dictionary = Dictionary::from_words(vec!["cats"]);
        assert!(!dictionary.search("cat"));
        assert!(!dictionary.search("c"));
        assert!(dictionary.search("cats"));
        assert_eq!(dictionary.path("cat").count(), 3);
    }

    #[test]
    fn empty_dictionary_finds_nothing() {
        let words: Vec<&str> = vec![];
        let dictionary = Dictionary::from_words(words);
        assert!(dictionary.is_empty());
        assert!(!dictionary.search("a"));
        assert!(!dictionary.search("anything"));
        assert_eq!(dictionary.enumerate().next(), None);
    }

    #[test]
    fn duplicate_loads_do_not_change_contents() {
        let once = Dictionary::from_words(vec!["hello", "help", "good"]);
        let twice = Dictionary::from_words(vec!["hello", "help", "good", "HELP", "hello"]);
        assert_eq!(once, twice);
        assert_eq!(
            once.enumerate().collect::<Vec<_>>(),
            twice.enumerate().collect::<Vec<_>>()
        );
    }

    #[test]
    fn enumeration_matches_distinct_folded_words() {
        let words = vec!["HELLO", "Help", "goodbye", "GOOD", "good", "g"];
        let dictionary = Dictionary::from_words(&words);
        let listed: Vec<String> = dictionary.enumerate().collect();
        let distinct: HashSet<String> = listed.iter().cloned().collect();

        assert_eq!(listed.len(), distinct.len());
        assert_eq!(distinct, hashset! {
            "hello".to_string(), "help".to_string(), "goodbye".to_string(),
            "good".to_string(), "g".to_string(),
        });
    }

    #[test]
    fn each_enumeration_is_a_fresh_traversal() {
        let dictionary = Dictionary::from_words(vec!["ab", "ac", "b"]);
        let mut first = dictionary.enumerate();
        assert_eq!(first.next(), Some("ab".to_string()));
        let second: Vec<String> = (&dictionary).into_iter().collect();
        assert_eq!(second, vec!["ab", "ac", "b"]);
        assert_eq!(first.collect::<Vec<_>>(), vec!["ac", "b"]);
    }

    #[test]
    fn incremental_adds_extend_the_index() {
        let mut dictionary = Dictionary::from_words(vec!["cat"]);
        dictionary.add("Cats");
        assert!(dictionary.contains("cat"));
        assert!(dictionary.contains("cats"));
    }

    #[test]
    fn search_accepts_arbitrary_input() {
        let dictionary = Dictionary::from_words(vec!["don't", "naïve", "x-ray"]);
        assert!(dictionary.search("DON'T"));
        assert!(dictionary.search("Naïve"));
        assert!(dictionary.search("X-RAY"));
        assert!(!dictionary.search("NAÏVE"));
        assert!(!dictionary.search("\u{0}\n\t"));
        assert!(!dictionary.search("🦀"));
    }

    #[test]
    fn random_words_round_trip() {
        let mut rng = StdRng::seed_from_u64(7);
        let words: Vec<String> = (0..2000).map(|_| random_word(&mut rng, 8)).collect();
        let dictionary = Dictionary::from_words(&words);

        words.iter().for_each(|word| {
            assert!(dictionary.search(word));
            assert!(dictionary.search(&word.to_uppercase()));
        });

        let stored: HashSet<String> = dictionary.enumerate().collect();
        let expected: HashSet<String> = words.iter().cloned().collect();
        assert_eq!(stored, expected);

        (0..2000).map(|_| random_word(&mut rng, 10))
            .filter(|x| !expected.contains(x))
            .for_each(|x| assert!(!dictionary.search(&x)));
    }

    #[test]
    fn lookup_cost_is_bounded_by_word_length() {
        let mut rng = StdRng::seed_from_u64(11);
        let small = Dictionary::from_words(vec!["abcdefgh"]);
        let large = Dictionary::from_words((0..50_000).map(|_| random_word(&mut rng, 12)));

        for probe in ["a", "abcdefgh", "abcdefghijklmnop", "zzzzzzzzzzzzzzzzzzzz"] {
            let len = probe.chars().count();
            assert!(small.path(probe).count() <= len);
            assert!(large.path(probe).count() <= len);
        }
        // a miss on the first letter stops immediately
        assert_eq!(small.path("qqqqqqqq").count(), 0);
    }
}
