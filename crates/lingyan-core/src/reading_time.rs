//! Reading-time estimation.

/// A reading-time estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingTime {
    pub words: usize,
    pub minutes: u32,
}

impl ReadingTime {
    /// Estimate reading time for `text` at `words_per_minute`. Never below one minute.
    pub fn estimate(text: &str, words_per_minute: u32) -> Self {
        let words = count_words(text);
        let wpm = words_per_minute.max(1) as usize;
        let minutes = words.div_ceil(wpm).max(1);

        Self {
            words,
            minutes: u32::try_from(minutes).unwrap_or(u32::MAX),
        }
    }

    /// Render a label template, replacing `{minutes}`.
    pub fn label(&self, template: &str) -> String {
        template.replace("{minutes}", &self.minutes.to_string())
    }
}

/// Count words. Each CJK character is a word; elsewhere a word is a run
/// starting with an alphanumeric character and ending at whitespace.
pub fn count_words(text: &str) -> usize {
    let mut count = 0;
    let mut in_word = false;

    for c in text.chars() {
        if is_cjk(c) {
            count += 1;
            in_word = false;
        } else if c.is_whitespace() {
            in_word = false;
        } else if c.is_alphanumeric() && !in_word {
            count += 1;
            in_word = true;
        }
    }

    count
}

fn is_cjk(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{30FF}'     // Hiragana, Katakana
        | '\u{3400}'..='\u{4DBF}'   // CJK Extension A
        | '\u{4E00}'..='\u{9FFF}'   // CJK Unified Ideographs
        | '\u{AC00}'..='\u{D7AF}'   // Hangul syllables
        | '\u{F900}'..='\u{FAFF}'   // CJK Compatibility Ideographs
        | '\u{20000}'..='\u{2A6DF}' // CJK Extension B
    )
}
