pub const MASK_CHARACTER: char = '*';

/// Replaces every character with an asterisk, for display only.
pub fn mask(password: &str) -> String {
    password.chars().map(|_| MASK_CHARACTER).collect()
}

#[cfg(test)]
mod test {
    use super::mask;

    #[test]
    fn test_mask() {
        assert_eq!(mask("Pa$$w0rd"), "********");
    }

    #[test]
    fn test_mask_empty() {
        assert_eq!(mask(""), "");
    }

    #[test]
    fn test_mask_counts_characters() {
        let masked = mask("pässwörd");
        assert_eq!(masked, "********");
        assert!(masked.chars().all(|c| c == '*'));
    }
}
