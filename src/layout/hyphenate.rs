use crate::font::TextMeasure;
use crate::units::Px;

/// Convert a word into a list of possibly hyphenated fragments.
///
/// Whether and where to hyphenate is determined by the width budget in
/// `max_length` and the size of the word as reported by `measure`. A word
/// that already fits is returned whole as a single fragment. A word that
/// does not fit is split greedily: characters accumulate while the
/// accumulated text plus a trailing hyphen still fits, and each full
/// fragment is closed out with a hyphen (unless the word itself supplied
/// one at that position).
///
/// A fragment always contains at least one character of the word, so a
/// character wider than the whole budget comes back as its own over-budget
/// fragment rather than as a bare hyphen. Stripping the hyphens this
/// function added and concatenating the fragments reconstructs the word.
pub fn hyphenate_word(word: &str, measure: &impl TextMeasure, max_length: Px) -> Vec<String> {
    if measure.width_of(word) <= max_length {
        return vec![word.to_string()];
    }

    let mut fragments: Vec<String> = Vec::new();
    let mut construction = String::new();
    for character in word.chars() {
        let mut attempt = construction.clone();
        attempt.push(character);
        attempt.push('-');

        if construction.is_empty() || measure.width_of(&attempt) <= max_length {
            construction.push(character);
        } else {
            // avoid adding another hyphen where one already exists in the word
            if !construction.ends_with('-') {
                construction.push('-');
            }
            fragments.push(construction);
            construction = String::from(character);
        }
    }

    fragments.push(construction);
    fragments
}

/// Hyphenate any of the words in a list that are too long, flattening the
/// results into a single fragment sequence in word order. See
/// [hyphenate_word] for how individual words are split.
pub fn hyphenate(words: &[&str], measure: &impl TextMeasure, max_length: Px) -> Vec<String> {
    words
        .iter()
        .flat_map(|word| hyphenate_word(word, measure, max_length))
        .collect()
}
