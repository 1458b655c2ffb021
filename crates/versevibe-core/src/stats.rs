//! Manuscript statistics shown under the editor

/// Reading speed used for the estimate
pub const WORDS_PER_MINUTE: usize = 200;

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Estimated reading minutes; zero only for an empty manuscript
pub fn reading_minutes(words: usize) -> usize {
    if words == 0 {
        return 0;
    }
    let minutes = (words as f64 / WORDS_PER_MINUTE as f64).round() as usize;
    minutes.max(1)
}

/// Footer label, e.g. `~3 min read`
pub fn reading_label(text: &str) -> String {
    match reading_minutes(word_count(text)) {
        0 => "Start writing…".to_string(),
        minutes => format!("~{} min read", minutes),
    }
}
