use serde_json::Value as JsonValue;

type Strategy = fn(&str) -> Option<JsonValue>;

/// Parsing strategies tried in order over the raw model text; the first one
/// that yields an object with an array under the wanted key wins.
const STRATEGIES: &[Strategy] = &[parse_whole_text, parse_fenced_block, parse_brace_span];

/// Recover an array of raw question-like objects from LLM output.
///
/// The model is asked for bare JSON but routinely wraps it in prose or
/// markdown fences, so the text is probed with each strategy in turn. The
/// recovered array is truncated to `limit`. Returns an empty vector when
/// nothing recoverable is found; parse failures never propagate.
pub fn extract_items(content: &str, key: &str, limit: usize) -> Vec<JsonValue> {
    for strategy in STRATEGIES {
        let Some(value) = strategy(content) else {
            continue;
        };
        if let Some(arr) = value.get(key).and_then(JsonValue::as_array) {
            let mut items = arr.clone();
            items.truncate(limit);
            return items;
        }
    }
    Vec::new()
}

fn parse_whole_text(content: &str) -> Option<JsonValue> {
    serde_json::from_str(content.trim()).ok()
}

/// Inner text of the first triple-backtick block, with an optional `json`
/// language tag.
fn parse_fenced_block(content: &str) -> Option<JsonValue> {
    let start = content.find("```")?;
    let inner = &content[start + 3..];
    let end = inner.find("```")?;
    let inner = inner[..end].trim_start();
    let inner = match inner.get(..4) {
        Some(tag) if tag.eq_ignore_ascii_case("json") => &inner[4..],
        _ => inner,
    };
    serde_json::from_str(inner.trim()).ok()
}

/// Substring between the first `{` and the last `}`, inclusive.
fn parse_brace_span(content: &str) -> Option<JsonValue> {
    let first = content.find('{')?;
    let last = content.rfind('}')?;
    if last <= first {
        return None;
    }
    serde_json::from_str(&content[first..=last]).ok()
}
