use std::fmt::{Display, Write};

/// Appends the text form of every value in `args`, with no separators.
///
/// ```
/// use sitelog::text::concat::concat;
///
/// assert_eq!(concat(&[&1, &"x", &2.5]), "1x2.5");
/// ```
#[must_use]
pub fn concat(args: &[&dyn Display]) -> String {
    args.iter().fold(String::new(), |mut out, arg| {
        let _ = write!(out, "{arg}");
        out
    })
}
