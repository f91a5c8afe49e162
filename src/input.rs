/// Trims form input the way the UI does: Unicode whitespace plus U+FEFF,
/// which `str::trim` keeps.
pub fn trim_form(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_alongside_whitespace() {
        assert_eq!(trim_form("\u{feff}"), "");
        assert_eq!(trim_form(" \u{feff}Ann\u{feff}\t"), "Ann");
        assert_eq!(trim_form("\u{a0}Bob\n"), "Bob");
        assert_eq!(trim_form("Cara"), "Cara");
    }
}
