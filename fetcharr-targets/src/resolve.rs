//! Shared resolution policy helpers
//!
//! The "take the first returned entry" rule, numeric override parsing,
//! and base-URL normalization live here as single named rules instead of
//! being duplicated inline across the target clients.

use serde_json::Value;

/// First-entry selection shared by every profile/folder lookup: the
/// target system's own listing endpoint is queried and the first entry
/// wins. `None` when the target returned nothing.
pub fn resolve_first<T>(candidates: Vec<T>) -> Option<T> {
    candidates.into_iter().next()
}

/// Parse an optional static override, accepting it only when purely
/// numeric. A non-numeric override counts as "not configured" and
/// triggers auto-resolution instead of failing the dispatch.
pub fn numeric_override(value: Option<&str>) -> Option<i64> {
    let value = value?.trim();
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}

/// Strip one trailing `/api/v3` or `/api` suffix (and any trailing
/// slash) so callers may supply either the UI base URL or an
/// already-versioned API URL.
pub fn normalize_base_url(url: &str) -> String {
    let url = url.trim_end_matches('/');
    for suffix in ["/api/v3", "/api"] {
        if let Some(stripped) = url.strip_suffix(suffix) {
            return stripped.to_string();
        }
    }
    url.to_string()
}

/// Forward a media identifier verbatim: purely numeric ids become JSON
/// numbers (what the *arr APIs expect), anything else stays a string.
/// Ids whose digits would not survive the conversion unchanged (a
/// leading zero, a sign, or more digits than i64 holds) stay strings.
pub fn media_id_value(id: &str) -> Value {
    let canonical_digits = !id.is_empty()
        && id.chars().all(|c| c.is_ascii_digit())
        && !(id.len() > 1 && id.starts_with('0'));
    if canonical_digits {
        if let Ok(number) = id.parse::<i64>() {
            return Value::from(number);
        }
    }
    Value::from(id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_first_takes_head() {
        assert_eq!(resolve_first(vec![7, 9]), Some(7));
        assert_eq!(resolve_first(Vec::<i64>::new()), None);
    }

    #[test]
    fn test_numeric_override() {
        assert_eq!(numeric_override(Some("7")), Some(7));
        assert_eq!(numeric_override(Some(" 12 ")), Some(12));
        assert_eq!(numeric_override(Some("hd-1080p")), None);
        assert_eq!(numeric_override(Some("7a")), None);
        assert_eq!(numeric_override(Some("-3")), None);
        assert_eq!(numeric_override(Some("")), None);
        assert_eq!(numeric_override(None), None);
    }

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(normalize_base_url("http://host/api/v3"), "http://host");
        assert_eq!(normalize_base_url("http://host/api"), "http://host");
        assert_eq!(normalize_base_url("http://host"), "http://host");
        assert_eq!(normalize_base_url("http://host/"), "http://host");
        assert_eq!(normalize_base_url("http://host/api/v3/"), "http://host");
    }

    #[test]
    fn test_normalize_strips_one_suffix_only() {
        // A path that legitimately ends in /api/api loses one layer.
        assert_eq!(normalize_base_url("http://host/api/api"), "http://host/api");
    }

    #[test]
    fn test_media_id_value() {
        assert_eq!(media_id_value("603"), serde_json::json!(603));
        assert_eq!(media_id_value("0"), serde_json::json!(0));
        assert_eq!(media_id_value("OL45883W"), serde_json::json!("OL45883W"));
    }

    #[test]
    fn test_media_id_value_preserves_non_canonical_digits() {
        // These would come back as 603 if converted; keep them verbatim.
        assert_eq!(media_id_value("0603"), serde_json::json!("0603"));
        assert_eq!(media_id_value("+603"), serde_json::json!("+603"));
        assert_eq!(media_id_value("-603"), serde_json::json!("-603"));
        // Wider than i64.
        assert_eq!(
            media_id_value("99999999999999999999"),
            serde_json::json!("99999999999999999999")
        );
    }
}
