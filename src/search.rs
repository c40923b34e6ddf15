/// Check if a name matches a query.
/// Case-insensitive substring match; an empty (or all-blank) query matches everything.
pub fn matches_query(name: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_matches_everything() {
        assert!(matches_query("Anna", ""));
        assert!(matches_query("Anna", "   "));
    }

    #[test]
    fn substring_ignores_case() {
        assert!(matches_query("Emma de Milliano", "DE MIL"));
        assert!(matches_query("Emma de Milliano", "liano"));
        assert!(!matches_query("Emma de Milliano", "anna"));
    }
}
