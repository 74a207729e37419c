/// Class-string helpers shared by markup builders and preview nodes
use std::collections::BTreeSet;

/// Characters that would end a `class="..."` attribute or a template literal.
/// Arbitrary variants such as `[&>*]:p-2` need `&`, `<` and `>` kept verbatim.
const FORBIDDEN_CLASS_CHARS: [char; 2] = ['"', '`'];

/// Join class fragments with single spaces, skipping empty ones
pub fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .flat_map(|part| part.split_whitespace())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalise the free-text custom classes typed into the playground.
///
/// A missing value behaves exactly like an empty one. Whitespace runs collapse
/// to a single space and characters that would close the attribute are dropped.
pub fn normalize_custom_classes(custom: Option<&str>) -> String {
    let Some(custom) = custom else {
        return String::new();
    };

    let cleaned: String = custom
        .chars()
        .filter(|c| !FORBIDDEN_CLASS_CHARS.contains(c))
        .collect();

    class_list(&[&cleaned])
}

/// Collect every class token that appears inside a `class="..."` attribute.
/// Class values are written verbatim, so tokens come back as found.
pub fn class_tokens_in_markup(markup: &str) -> BTreeSet<String> {
    const NEEDLE: &str = "class=\"";

    let mut tokens = BTreeSet::new();
    let mut rest = markup;

    while let Some(start) = rest.find(NEEDLE) {
        let after = &rest[start + NEEDLE.len()..];
        let Some(end) = after.find('"') else {
            break;
        };
        tokens.extend(after[..end].split_whitespace().map(str::to_string));
        rest = &after[end + 1..];
    }

    tokens
}

/// Escape text for use inside HTML element content or attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Class attribute value exactly as Tailwind should scan it; only a stray
/// quote is encoded so the attribute stays closed
pub fn class_attr_value(classes: &str) -> String {
    classes.replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn class_list_skips_blank_parts() {
        assert_eq!(class_list(&["flex", "", "  items-center ", "h-48  gap-4"]), "flex items-center h-48 gap-4");
        assert_eq!(class_list(&[]), "");
    }

    #[test]
    fn missing_custom_classes_become_empty() {
        assert_eq!(normalize_custom_classes(None), "");
        assert_eq!(normalize_custom_classes(Some("   ")), "");
    }

    #[test]
    fn custom_classes_are_collapsed_and_sanitized() {
        assert_eq!(normalize_custom_classes(Some("  h-48\t gap-4 \n")), "h-48 gap-4");
        assert_eq!(normalize_custom_classes(Some("p-4\" `x`")), "p-4 x");
    }

    #[test]
    fn tokens_are_read_from_every_class_attribute() {
        let markup = "<div class=\"flex items-end\">\n  <span class=\"p-2\">a</span>\n</div>";
        let tokens: Vec<_> = class_tokens_in_markup(markup).into_iter().collect();
        assert_eq!(tokens, vec!["flex", "items-end", "p-2"]);
    }

    #[test]
    fn arbitrary_variants_survive_normalization() {
        assert_eq!(normalize_custom_classes(Some("[&>*]:p-2  [&_p]:mt-4")), "[&>*]:p-2 [&_p]:mt-4");
        assert_eq!(normalize_custom_classes(Some("[&:nth-child(3)]:underline")), "[&:nth-child(3)]:underline");
    }

    #[test]
    fn class_values_are_kept_verbatim() {
        assert_eq!(class_attr_value("[&>*]:p-2 [&_p]:mt-4"), "[&>*]:p-2 [&_p]:mt-4");
        assert_eq!(class_attr_value("a\"b"), "a&quot;b");
    }

    #[test]
    fn arbitrary_variant_tokens_are_read_back_as_written() {
        let markup = format!("<div class=\"{}\"></div>", class_attr_value("[&_p]:mt-4 [&>*]:p-2 flex"));
        let tokens = class_tokens_in_markup(&markup);
        assert!(tokens.contains("[&_p]:mt-4"));
        assert!(tokens.contains("[&>*]:p-2"));
    }

    #[test]
    fn unterminated_class_attribute_is_ignored() {
        assert!(class_tokens_in_markup("<div class=\"flex").is_empty());
    }

    #[test]
    fn escapes_markup_significant_characters() {
        assert_eq!(escape_html("a < b && \"c\" > d"), "a &lt; b &amp;&amp; &quot;c&quot; &gt; d");
    }
}
