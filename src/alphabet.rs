
/// Longest letter set the solver will permute; candidate count grows factorially.
pub const MAX_LETTERS: usize = 10;

pub fn fold(c: char) -> char {
    c.to_ascii_lowercase()
}

pub fn normalize(s: &str) -> String {
    s.chars().map(fold).collect()
}

/// "mEN" -> "Men"
pub fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_ascii_uppercase().to_string() + &normalize(chars.as_str()),
    }
}

pub fn is_alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_alphabetic())
}
