/// Splits text into the words a text reveal animates one by one.
pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_matches_tokens() {
        let w = words("Crafting Digital Experiences That Matter");
        assert_eq!(w.len(), 5);
        assert_eq!(w[0], "Crafting");
        assert_eq!(w[4], "Matter");
    }

    #[test]
    fn test_irregular_whitespace() {
        assert_eq!(words("  Software\tDeveloper \n"), vec!["Software", "Developer"]);
        assert!(words("   ").is_empty());
        assert!(words("").is_empty());
    }
}
