use once_cell::sync::Lazy;
use regex::Regex;

/// Arabic, Arabic Supplement and Arabic Extended-A blocks
static TARGET_SCRIPT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\x{0600}-\x{06FF}\x{0750}-\x{077F}\x{08A0}-\x{08FF}]").unwrap());

/// Whether `text` contains at least one character of the target script.
pub fn contains_target_script(text: &str) -> bool {
    TARGET_SCRIPT.is_match(text)
}
