//! Pure string transforms shared by the section renderers.

use once_cell::sync::Lazy;
use regex::Regex;

// Whole words only: `ciCdn` stays `Ci Cdn` rather than becoming `CI/CDn`.
static CI_CD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bci\s+cd\b").expect("valid ci/cd regex"));

/// Turn a camel-case key into a display label.
///
/// A space is inserted before every uppercase ASCII letter after the first
/// character, the first character is uppercased, and the token `ci cd` (any
/// case) becomes `CI/CD`. The source key is not modified.
///
/// Keys are expected to be non-empty identifiers; an empty key yields an
/// empty label.
///
/// ```
/// use folio_render::format::format_label;
///
/// assert_eq!(format_label("programmingLanguages"), "Programming Languages");
/// assert_eq!(format_label("ciCd"), "CI/CD");
/// ```
pub fn format_label(key: &str) -> String {
    let mut spaced = String::with_capacity(key.len() + 4);
    for (i, c) in key.chars().enumerate() {
        if i > 0 && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(c);
    }

    let mut chars = spaced.chars();
    let label = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };

    CI_CD_RE.replace_all(&label, "CI/CD").into_owned()
}

/// The `tel:` link target for a formatted phone number.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("tel:{}", digits)
}

/// The `mailto:` link target for an address.
pub fn mailto_href(email: &str) -> String {
    format!("mailto:{}", email)
}

/// Default download name for a resume, e.g. `Ada_Lovelace_Resume.pdf`.
pub fn resume_file_name(name: &str) -> String {
    let stem = name
        .split_whitespace()
        .map(|part| {
            part.chars()
                .filter(|c| c.is_alphanumeric() || *c == '-' || *c == '.')
                .collect::<String>()
        })
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_");

    if stem.is_empty() {
        "Resume.pdf".to_string()
    } else {
        format!("{}_Resume.pdf", stem)
    }
}
