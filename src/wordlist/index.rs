/// Word-level insert and membership, independent of how the words are stored.
pub trait Index {
    fn add(&mut self, word: &str);
    fn contains(&self, word: &str) -> bool;

    fn add_all<I, S>(&mut self, items: I)
        where I: IntoIterator<Item = S>, S: AsRef<str> {
        items.into_iter().for_each(|x| self.add(x.as_ref()));
    }
}
