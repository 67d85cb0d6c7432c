/// Copyright notice, unchanged
pub fn render_copyright_notice(notice: String) -> String {
    notice
}

/// Usage terms, one entry per source, absent ones kept
pub fn render_usageterms(terms: Vec<Option<String>>) -> Vec<Option<String>> {
    terms
}
