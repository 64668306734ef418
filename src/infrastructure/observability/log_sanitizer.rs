const MAX_VISIBLE_LENGTH: usize = 100;

/// Shortens free text (model replies, extracted snippets) for logging and
/// redacts anything that looks like a credential.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let char_count = trimmed.chars().count();
    let sanitized = if char_count > MAX_VISIBLE_LENGTH {
        let visible: String = trimmed.chars().take(MAX_VISIBLE_LENGTH).collect();
        format!("{visible}... ({char_count} chars total)")
    } else {
        trimmed.to_string()
    };

    redact_sensitive_patterns(&sanitized.replace(['\n', '\r'], " "))
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("Client-ID ", "Client-ID [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("api-key=", "api-key=[REDACTED]"),
        ("sig=", "sig=[REDACTED]"),
        ("X-Amz-Signature=", "X-Amz-Signature=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
