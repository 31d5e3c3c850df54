//! Advertisement stripping.
//!
//! Ads on entry pages are injected through inline `<script>` blocks. They are
//! removed textually before the page is parsed; a script whose body contains a
//! literal `</script>` will be cut short.

use regex::Regex;
use std::sync::OnceLock;

static SCRIPT_PATTERN: OnceLock<Regex> = OnceLock::new();

fn script_regex() -> &'static Regex {
    SCRIPT_PATTERN
        .get_or_init(|| Regex::new(r"<script.*>(?:\n|.)+?</script>").expect("Invalid script regex pattern"))
}

/// Remove every script span. Returns the cleaned markup and the number of spans removed.
pub fn strip_ads(markup: &str) -> (String, usize) {
    let re = script_regex();
    let count = re.find_iter(markup).count();
    if count == 0 {
        return (markup.to_string(), 0);
    }
    (re.replace_all(markup, "").into_owned(), count)
}
