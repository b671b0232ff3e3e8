use std::slice;
use std::str::Chars;

use crate::alphabet::fold;
use crate::wordlist::trienode::TrieNode;

/// Depth-first walk over every stored word.
///
/// `stack` holds one child cursor per level entered and `buffer` holds one
/// letter per level below the root, so `stack.len() == buffer.len() + 1`
/// while the walk is in progress. Leaving a level pops both.
pub struct Words<'a> {
    stack: Vec<slice::Iter<'a, TrieNode>>,
    buffer: String,
}

impl<'a> Words<'a> {
    pub(crate) fn new(root: &'a TrieNode) -> Words<'a> {
        Words {
            stack: vec![root.into_iter()],
            buffer: String::new(),
        }
    }
}

impl<'a> Iterator for Words<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(cursor) = self.stack.last_mut() {
            match cursor.next() {
                Some(node) => {
                    self.buffer.push(node.letter());
                    self.stack.push(node.into_iter());
                    if node.is_end_of_word() {
                        return Some(self.buffer.clone());
                    }
                }
                None => {
                    self.stack.pop();
                    // the root level has no letter of its own
                    self.buffer.pop();
                }
            }
        }
        None
    }
}

/// The nodes a lookup of `word` passes through, one per letter, ending early
/// at the first letter with no matching child.
pub struct Path<'a, 'w> {
    node: Option<&'a TrieNode>,
    letters: Chars<'w>,
}

impl<'a, 'w> Path<'a, 'w> {
    pub(crate) fn new(root: &'a TrieNode, word: &'w str) -> Path<'a, 'w> {
        Path {
            node: Some(root),
            letters: word.chars(),
        }
    }
}

impl<'a, 'w> Iterator for Path<'a, 'w> {
    type Item = &'a TrieNode;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.node?;
        let c = self.letters.next()?;
        self.node = current.get_child(fold(c));
        self.node
    }
}
