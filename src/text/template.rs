use std::fmt::{Display, Write};

use crate::text::constants::PLACEHOLDER;

/// Substitutes each `{}` in `template` with the next value of `args`, in order.
///
/// Literal text outside placeholders is copied verbatim. Once `args` is
/// exhausted the remainder of the template is copied as-is, so unmatched `{}`
/// markers stay in the output. Surplus arguments are ignored.
///
/// # Example
///
/// ```
/// use sitelog::text::template::format;
///
/// assert_eq!(format("{} and {}", &[&1, &2]), "1 and 2");
/// assert_eq!(format("{} and {}", &[&1]), "1 and {}");
/// ```
#[must_use]
pub fn format(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut args = args.iter();

    while let Some(pos) = rest.find(PLACEHOLDER) {
        let Some(arg) = args.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        // Writing into a String cannot fail.
        let _ = write!(out, "{arg}");
        rest = &rest[pos + PLACEHOLDER.len()..];
    }

    out.push_str(rest);
    out
}

/// Counts the `{}` markers in `template`.
#[must_use]
pub fn placeholder_count(template: &str) -> usize {
    template.matches(PLACEHOLDER).count()
}
