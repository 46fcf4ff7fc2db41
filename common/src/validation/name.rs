/// Converts a free-text template name into the slug Meta accepts:
/// lowercase ASCII letters, digits and single underscores, starting with
/// a letter.
///
/// An empty return value means the input had nothing usable in it.
pub fn normalize_template_name(raw: &str) -> String {
    let mut slug = String::with_capacity(raw.len());
    for ch in raw.chars() {
        let mapped = if ch.is_ascii_alphanumeric() {
            ch.to_ascii_lowercase()
        } else {
            '_'
        };
        if mapped == '_' && slug.ends_with('_') {
            continue;
        }
        slug.push(mapped);
    }

    let slug = slug.trim_matches('_');
    match slug.chars().next() {
        None => String::new(),
        Some(first) if first.is_ascii_lowercase() => slug.to_string(),
        Some(_) => format!("a{slug}"),
    }
}
