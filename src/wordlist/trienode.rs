use std::fmt::{Debug, Formatter};
use std::slice;

/// One level of branching. Children keep the order their letters were first
/// inserted in, which is the order words come back out of enumeration.
///
/// Child lookup is a linear scan, so a step costs at most the number of
/// distinct letters seen at that position. That is small for alphabetic word
/// lists but is not bounded in general, since any `char` can be a key.
#[derive(Default, PartialEq, Eq)]
pub struct TrieNode {
    letter: char,
    children: Vec<TrieNode>,
    is_end_of_word: bool,
}

impl TrieNode {
    pub(crate) fn new(letter: char) -> TrieNode {
        TrieNode {
            letter,
            children: Vec::new(),
            is_end_of_word: false,
        }
    }

    /// Meaningless for the root.
    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn is_end_of_word(&self) -> bool {
        self.is_end_of_word
    }

    pub fn children(&self) -> &[TrieNode] {
        &self.children
    }

    pub(crate) fn mark_end_of_word(&mut self) {
        self.is_end_of_word = true;
    }

    pub fn get_child(&self, c: char) -> Option<&TrieNode> {
        self.children.iter().find(|child| child.letter == c)
    }

    /// Returns the existing child for `c`, or appends a new one. Never replaces.
    pub fn add_child(&mut self, c: char) -> &mut TrieNode {
        let idx = match self.children.iter().position(|child| child.letter == c) {
            Some(idx) => idx,
            None => {
                self.children.push(TrieNode::new(c));
                self.children.len() - 1
            }
        };
        &mut self.children[idx]
    }
}

impl<'a> IntoIterator for &'a TrieNode {
    type Item = &'a TrieNode;
    type IntoIter = slice::Iter<'a, TrieNode>;

    fn into_iter(self) -> Self::IntoIter {
        self.children.iter()
    }
}

impl Debug for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrieNode")
            .field("letter", &self.letter)
            .field("is_end_of_word", &self.is_end_of_word)
            .field("children", &self.children.iter()
                .map(|x| x.letter)
                .collect::<Vec<_>>(),
            )
            .finish()
    }
}
