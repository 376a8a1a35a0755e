//! Presentation fields for admin list views.

/// Cuts `text` to at most `max` characters, appending `…` when something was removed.
pub fn truncate_with_ellipsis(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}…", &text[..idx]),
        None => text.to_string(),
    }
}

/// Branch label used in lists; the main branch gets a star.
pub fn branch_display_name(name: &str, is_main: bool) -> String {
    if is_main {
        format!("{name} ⭐")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_with_ellipsis("Kadıköy", 60), "Kadıköy");
        assert_eq!(truncate_with_ellipsis("", 60), "");
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        let text = "ş".repeat(75);
        let short = truncate_with_ellipsis(&text, 70);
        assert_eq!(short.chars().count(), 71);
        assert!(short.ends_with('…'));
    }

    #[test]
    fn exact_length_is_not_cut() {
        let text = "a".repeat(60);
        assert_eq!(truncate_with_ellipsis(&text, 60), text);
    }

    #[test]
    fn main_branch_has_star() {
        assert_eq!(branch_display_name("Merkez", true), "Merkez ⭐");
        assert_eq!(branch_display_name("Depo", false), "Depo");
    }
}
