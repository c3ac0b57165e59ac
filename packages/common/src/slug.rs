/// Derive a URL slug from free text.
///
/// Lowercases the input and replaces every run of whitespace with a single
/// hyphen. Other characters pass through untouched, so the backend sees
/// exactly what the blog form has always sent.
pub fn slugify(input: &str) -> String {
    let lowered = input.to_lowercase();
    let mut slug = String::with_capacity(lowered.len());
    let mut in_whitespace = false;

    for c in lowered.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
                in_whitespace = true;
            }
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }

    slug
}
