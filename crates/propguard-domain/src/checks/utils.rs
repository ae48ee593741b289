use std::collections::BTreeSet;

/// Required sections with no matching Markdown heading (level two or deeper).
pub fn missing_sections(content: &str, required: &[String]) -> Vec<String> {
    let present: BTreeSet<String> = content
        .lines()
        .filter_map(heading_text)
        .map(|h| h.to_ascii_lowercase())
        .collect();

    required
        .iter()
        .filter(|s| !present.contains(&s.trim().to_ascii_lowercase()))
        .cloned()
        .collect()
}

fn heading_text(line: &str) -> Option<&str> {
    let line = line.trim_start();
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if !(2..=6).contains(&hashes) {
        return None;
    }
    let rest = &line[hashes..];
    if !rest.starts_with(' ') {
        return None;
    }
    Some(rest.trim().trim_end_matches('#').trim_end())
}

/// `[A, B]`, or `[]` when empty.
pub fn bracket_list(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

/// `(@a, @b)`.
pub fn handle_list<'a>(handles: impl IntoIterator<Item = &'a String>) -> String {
    let joined: Vec<String> = handles.into_iter().map(|h| format!("@{h}")).collect();
    format!("({})", joined.join(", "))
}
