//! `%`-escape substitution for user format strings.

/// Whole-output sentinel when the underlying game value can not be read
pub const NOT_AVAILABLE: &str = "(n/a)";

/// Replace every occurrence of `token` in `text`, left to right.
///
/// Scanning resumes after the inserted replacement, so a replacement that
/// contains the token is not expanded again.
pub fn replace_all(text: &mut String, token: &str, replacement: &str) {
    if token.is_empty() {
        return;
    }

    let mut from = 0;
    while let Some(found) = text[from..].find(token) {
        let start = from + found;
        text.replace_range(start..start + token.len(), replacement);
        from = start + replacement.len();
    }
}

/// Non-mutating form of [`replace_all`]
pub fn substitute(text: &str, token: &str, replacement: &str) -> String {
    let mut out = text.to_string();
    replace_all(&mut out, token, replacement);
    out
}

/// An ordered set of escapes.
///
/// Escapes are applied in insertion order. Where tokens share a prefix
/// (`%mo` and `%m`) the longer one has to be pushed first.
#[derive(Debug, Clone, Default)]
pub struct Escapes {
    entries: Vec<(&'static str, String)>,
}

impl Escapes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, token: &'static str, value: impl Into<String>) -> &mut Self {
        self.entries.push((token, value.into()));
        self
    }

    pub fn tokens(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(token, _)| *token)
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == token)
            .map(|(_, value)| value.as_str())
    }

    pub fn apply(&self, format: &str) -> String {
        let mut out = format.to_string();
        for (token, value) in &self.entries {
            replace_all(&mut out, token, value);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_every_occurrence() {
        assert_eq!(substitute("%h:%h:%h", "%h", "7"), "7:7:7");
    }

    #[test]
    fn test_no_token_is_unchanged() {
        assert_eq!(substitute("day 17 of Last Seed", "%md", "17"), "day 17 of Last Seed");
        assert_eq!(substitute("", "%md", "17"), "");
    }

    #[test]
    fn test_replacement_not_re_expanded() {
        assert_eq!(substitute("%x", "%x", "%x%x"), "%x%x");
        assert_eq!(substitute("a%xb%x", "%x", "[%x]"), "a[%x]b[%x]");
    }

    #[test]
    fn test_shrinking_replacement() {
        assert_eq!(substitute("%wn%wn", "%wn", ""), "");
        assert_eq!(substitute("%%wnn", "%wn", ""), "%n");
    }

    #[test]
    fn test_empty_token_is_noop() {
        assert_eq!(substitute("abc", "", "x"), "abc");
    }

    #[test]
    fn test_unknown_escapes_left_verbatim() {
        let mut escapes = Escapes::new();
        escapes.push("%h", "9");
        assert_eq!(escapes.apply("%q %h %"), "%q 9 %");
    }

    #[test]
    fn test_longer_token_first() {
        let mut escapes = Escapes::new();
        escapes.push("%mo", "8").push("%md", "17").push("%m", "30");
        assert_eq!(escapes.apply("%m/%mo/%md"), "30/8/17");
        assert_eq!(escapes.get("%md"), Some("17"));
        assert_eq!(escapes.tokens().collect::<Vec<_>>(), ["%mo", "%md", "%m"]);
    }

    #[test]
    fn test_multibyte_text_around_tokens() {
        assert_eq!(substitute("Düne %h ü", "%h", "12"), "Düne 12 ü");
    }
}
