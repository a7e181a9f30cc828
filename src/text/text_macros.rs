//! Macro front ends for [`format`](crate::text::template::format) and
//! [`concat`](crate::text::concat::concat).
//!
//! Both accept any number of `Display` expressions and borrow them into the
//! `&[&dyn Display]` slice the functions expect.

/// Positional `{}` substitution over arbitrary `Display` values.
///
/// ```
/// let s = sitelog::format_template!("{} and {}", 1, "two");
/// assert_eq!(s, "1 and two");
/// ```
#[macro_export]
macro_rules! format_template {
    ($template:expr $(,)?) => {
        $crate::text::template::format($template, &[])
    };
    ($template:expr, $($arg:expr),+ $(,)?) => {
        $crate::text::template::format(
            $template,
            &[$(&$arg as &dyn ::std::fmt::Display),+],
        )
    };
}

/// Concatenates the text form of every argument.
///
/// ```
/// assert_eq!(sitelog::concat_values!(1, "x", 2.5), "1x2.5");
/// ```
#[macro_export]
macro_rules! concat_values {
    () => {
        ::std::string::String::new()
    };
    ($($arg:expr),+ $(,)?) => {
        $crate::text::concat::concat(&[$(&$arg as &dyn ::std::fmt::Display),+])
    };
}
