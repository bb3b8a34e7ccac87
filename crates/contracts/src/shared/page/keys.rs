/// Keys that activate a focusable card like a click.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " " | "Spacebar")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("a"));
    }
}
