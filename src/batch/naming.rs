use crate::expand::Variant;
use std::collections::HashSet;

/// Longest excerpt kept from the variant's texts or CTA label.
pub const EXCERPT_MAX_CHARS: usize = 20;
/// Excerpt used when nothing survives sanitizing.
pub const EMPTY_EXCERPT: &str = "none";

/// Keep alphanumerics, `-` and `_`; whitespace becomes `_`; drop everything else, then collapse
/// and trim underscores.
pub fn sanitize_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        let mapped = if c.is_alphanumeric() || c == '-' || c == '_' {
            c
        } else if c.is_whitespace() {
            '_'
        } else {
            continue;
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches('_').to_string()
}

/// Sanitized, truncated excerpt, or [`EMPTY_EXCERPT`].
pub fn excerpt(s: &str) -> String {
    let cleaned = sanitize_component(s);
    let truncated: String = cleaned.chars().take(EXCERPT_MAX_CHARS).collect();
    let truncated = truncated.trim_matches('_');
    if truncated.is_empty() {
        EMPTY_EXCERPT.to_string()
    } else {
        truncated.to_string()
    }
}

/// Excerpt of a variant's concrete texts, joined with `-` before sanitizing.
pub fn text_excerpt(variant: &Variant) -> String {
    let joined = variant
        .texts
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join("-");
    excerpt(&joined)
}

/// `<prefix><image_index+1>_<platform>_<texts>_<cta>_<seq:03>.png`
pub fn file_name(
    image_prefix: &str,
    image_index: usize,
    platform_name: &str,
    variant: &Variant,
    seq: usize,
) -> String {
    let prefix = sanitize_component(image_prefix);
    let platform = match sanitize_component(platform_name) {
        p if p.is_empty() => EMPTY_EXCERPT.to_string(),
        p => p,
    };
    format!(
        "{prefix}{}_{platform}_{}_{}_{seq:03}.png",
        image_index + 1,
        text_excerpt(variant),
        excerpt(&variant.cta_text),
    )
}

/// `<prefix>_<total>_variants.zip`
pub fn archive_name(archive_prefix: &str, total: usize) -> String {
    let prefix = match sanitize_component(archive_prefix) {
        p if p.is_empty() => "archive".to_string(),
        p => p,
    };
    format!("{prefix}_{total}_variants.zip")
}

/// Names already used in one archive; later duplicates get a numeric suffix.
#[derive(Debug, Default)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    pub fn claim(&mut self, name: String) -> String {
        if self.used.insert(name.clone()) {
            return name;
        }
        let (stem, ext) = match name.rsplit_once('.') {
            Some((stem, ext)) => (stem.to_string(), format!(".{ext}")),
            None => (name.clone(), String::new()),
        };
        let mut n = 2usize;
        loop {
            let candidate = format!("{stem}-{n}{ext}");
            if self.used.insert(candidate.clone()) {
                return candidate;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/batch/naming.rs"]
mod tests;
