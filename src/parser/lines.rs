/// Join per-page texts the way the extractor hands them over: one newline after every page
/// that produced text.
pub fn join_pages<I, S>(pages: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut full = String::new();
    for page in pages {
        let page = page.as_ref();
        if page.is_empty() {
            continue;
        }
        full.push_str(page);
        full.push('\n');
    }
    full
}

/// Split raw text into trimmed, non-empty lines. Order is preserved and duplicates kept.
pub fn normalize(text: &str) -> Vec<String> {
    text.split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

// ── Tests ──
