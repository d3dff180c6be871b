/// Split `line` into words, maximal runs of ASCII letters. Everything
/// else separates words.
///
/// ```
/// let words: Vec<&str> = redblack::words("It's a tree-walk, 2x!").collect();
/// assert_eq!(words, vec!["It", "s", "a", "tree", "walk", "x"]);
/// ```
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split(|ch: char| !ch.is_ascii_alphabetic())
        .filter(|word| !word.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words() {
        let items: Vec<&str> = words("  the quick\tbrown--fox ").collect();
        assert_eq!(items, vec!["the", "quick", "brown", "fox"]);

        assert_eq!(words("").count(), 0);
        assert_eq!(words("1234 ... ;;").count(), 0);

        let items: Vec<&str> = words("naïve café").collect();
        assert_eq!(items, vec!["na", "ve", "caf"]);
    }
}
