use unidecode::unidecode;

pub fn clean_str(input: &str) -> String {
    unidecode(input) // Convert Unicode to ASCII
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

/// Turn an artist or album name into a safe filename fragment.
pub fn sanitize_for_filename(input: &str) -> String {
    let cleaned = clean_str(input);
    let mut sanitized = String::with_capacity(cleaned.len());
    let mut previous_was_separator = false;

    for ch in cleaned.chars() {
        if ch.is_ascii_alphanumeric() {
            sanitized.push(ch);
            previous_was_separator = false;
        } else if !previous_was_separator {
            sanitized.push('_');
            previous_was_separator = true;
        }
    }

    sanitized.trim_matches('_').to_string()
}
