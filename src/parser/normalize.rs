/// Collapse line-ending and whitespace variance into a canonical form:
/// `\n` line endings, single spaces inside lines, runs of blank lines
/// reduced to one blank line (paragraph separator), edges trimmed.
/// Always succeeds; empty in, empty out.
pub fn normalize(input: &str) -> String {
    let unified = input.replace("\r\n", "\n").replace('\r', "\n");
    let mut out: Vec<String> = Vec::new();
    let mut blank_pending = false;

    for raw in unified.lines() {
        let line = raw.split_whitespace().collect::<Vec<_>>().join(" ");
        if line.is_empty() {
            // Only emit a separator once we have content before it
            blank_pending = !out.is_empty();
            continue;
        }
        if blank_pending {
            out.push(String::new());
            blank_pending = false;
        }
        out.push(line);
    }

    out.join("\n")
}
