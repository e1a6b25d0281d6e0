//! Master prompt extraction.

const MARKER: &str = "MASTER PROMPT";

/// Recover the master prompt paragraph.
///
/// Collects the non-empty lines after the first `MASTER PROMPT` marker up
/// to the next heading or `---` rule, strips surrounding double quotes and
/// joins them with spaces. Without a marker the first line is used.
pub fn extract_master_prompt(text: &str) -> Option<String> {
    if !text.contains(MARKER) {
        return text
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string);
    }

    let collected: Vec<&str> = text
        .lines()
        .skip_while(|line| !line.contains(MARKER))
        .filter(|line| !line.contains(MARKER))
        .take_while(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with('#') && !trimmed.contains("---")
        })
        .map(|line| line.trim().trim_matches('"'))
        .filter(|line| !line.is_empty())
        .collect();

    if collected.is_empty() {
        None
    } else {
        Some(collected.join(" "))
    }
}
