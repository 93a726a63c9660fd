use crate::domain::model::ParsedPortion;
use regex::Regex;

/// When no number can be extracted at all, fall back to a typical small
/// portion rather than failing the caller.
const DEFAULT_PORTION: u32 = 2;

/// Extracts a numeric portion range and the surrounding food-label text
/// from a free-text portion description such as "2-3 small pellets" or
/// "1 pinch of flakes per day".
///
/// Total over its input domain: malformed text degrades to the default
/// portion, never to an error.
pub struct PortionExpressionParser {
    range_re: Regex,
    single_re: Regex,
}

impl PortionExpressionParser {
    pub fn new() -> Self {
        Self {
            // hyphen or en-dash, optional surrounding whitespace
            range_re: Regex::new(r"(\d+)\s*[-–]\s*(\d+)").expect("valid range pattern"),
            single_re: Regex::new(r"\d+").expect("valid integer pattern"),
        }
    }

    pub fn parse(&self, text: &str) -> ParsedPortion {
        let lowered = text.to_lowercase();

        // digit runs that do not fit u32 count as "no number"; keep
        // scanning for a later run that does
        for caps in self.range_re.captures_iter(&lowered) {
            let low = caps.get(1).and_then(|m| m.as_str().parse::<u32>().ok());
            let high = caps.get(2).and_then(|m| m.as_str().parse::<u32>().ok());
            if let (Some(low), Some(high)) = (low, high) {
                let span = caps.get(0).map(|m| (m.start(), m.end())).unwrap_or((0, 0));
                return ParsedPortion {
                    low,
                    // a reversed range is malformed; prefer the lower bound
                    high: if high < low { low } else { high },
                    raw_food_label: remainder(&lowered, span),
                };
            }
        }

        for m in self.single_re.find_iter(&lowered) {
            if let Ok(n) = m.as_str().parse::<u32>() {
                return ParsedPortion {
                    low: n,
                    high: n,
                    raw_food_label: remainder(&lowered, (m.start(), m.end())),
                };
            }
        }

        ParsedPortion {
            low: DEFAULT_PORTION,
            high: DEFAULT_PORTION,
            raw_food_label: lowered.trim().to_string(),
        }
    }
}

impl Default for PortionExpressionParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Text outside the matched numeric span, rejoined and trimmed.
fn remainder(text: &str, span: (usize, usize)) -> String {
    let before = text[..span.0].trim();
    let after = text[span.1..].trim();
    if before.is_empty() {
        after.to_string()
    } else if after.is_empty() {
        before.to_string()
    } else {
        format!("{} {}", before, after)
    }
}
