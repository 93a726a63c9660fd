use regex::Regex;

/// Lines starting with these prefixes are template artifacts from the
/// upstream generator and never reach the user.
const DROPPED_PREFIXES: [&str; 3] = ["feeding frequency", "food removal", "any special considerations"];

const DEFAULT_NOTES: &str = "Feed once or twice daily, only what the fish finish \
within a couple of minutes, remove uneaten food afterwards, and keep feedings \
consistent to protect water quality.";

/// Cleans AI/DB-sourced freeform feeding-notes text into a normalized
/// line list: heading stripped, bullets and numbering removed, template
/// artifact lines dropped.
pub struct FeedingNotesFormatter {
    heading_re: Regex,
    bullet_re: Regex,
    sentence_end_re: Regex,
}

impl FeedingNotesFormatter {
    pub fn new() -> Self {
        Self {
            heading_re: Regex::new(r"(?i)^\s*feeding\s*notes\s*:?").expect("valid heading pattern"),
            bullet_re: Regex::new(r"^\s*(?:[-–•]|\d+[.)])\s*").expect("valid bullet pattern"),
            sentence_end_re: Regex::new(r"[.!?]\s").expect("valid sentence pattern"),
        }
    }

    pub fn clean(&self, notes: &str) -> Vec<String> {
        let body = self.heading_re.replace(notes, "");

        let segments: Vec<String> = if body.contains('\n') {
            body.split('\n').map(str::to_string).collect()
        } else {
            self.split_sentences(&body)
        };

        let lines: Vec<String> = segments
            .iter()
            .map(|segment| self.bullet_re.replace(segment, "").trim().to_string())
            .filter(|line| !line.is_empty() && !is_template_artifact(line))
            .collect();

        if lines.is_empty() {
            vec![DEFAULT_NOTES.to_string()]
        } else {
            lines
        }
    }

    /// Splits on sentence-ending punctuation followed by whitespace,
    /// keeping the punctuation on the sentence it ends.
    fn split_sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for m in self.sentence_end_re.find_iter(text) {
            let end = m.start() + 1;
            sentences.push(text[start..end].to_string());
            start = m.end();
        }
        sentences.push(text[start..].to_string());
        sentences
    }
}

impl Default for FeedingNotesFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn is_template_artifact(line: &str) -> bool {
    let lowered = line.to_lowercase();
    DROPPED_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}
