use std::collections::HashSet;

use crate::alphabet::title_case;

/// Every arrangement of every non-empty subset of `letters`, title-cased,
/// without duplicates, shortest first.
///
/// Within one length, arrangements come in the order they are generated:
/// positions are picked left to right in input order.
pub fn candidates(letters: &str) -> Vec<String> {
    let letters: Vec<char> = letters.chars().collect();
    let mut seen = HashSet::new();
    let mut out = vec![];
    let mut used = vec![false; letters.len()];
    let mut current = String::with_capacity(letters.len());

    for size in 1..=letters.len() {
        arrange(&letters, size, &mut used, &mut current, &mut |word: &str| {
            let word = title_case(word);
            if seen.insert(word.clone()) {
                out.push(word);
            }
        });
    }
    out
}

/// Extends `current` by `remaining` more unused letters in every possible way.
fn arrange<F>(letters: &[char], remaining: usize, used: &mut [bool], current: &mut String, emit: &mut F)
    where F: FnMut(&str) {
    if remaining == 0 {
        emit(current.as_str());
        return;
    }
    for idx in 0..letters.len() {
        if used[idx] {
            continue;
        }
        used[idx] = true;
        current.push(letters[idx]);
        arrange(letters, remaining - 1, used, current, emit);
        current.pop();
        used[idx] = false;
    }
}
