//! Format-and-colorize convenience macros.
//!
//! These supply the printf-style call shape over [`Coloris`]: the
//! format string is expanded with the standard formatting machinery
//! first, and the finished string is then fed through the marker
//! scanner. Markers may therefore come from the template or from the
//! formatted arguments themselves.
//!
//! [`Coloris`]: crate::Coloris

/// Format, expand markers, and return the resulting `String`.
///
/// ```
/// use coloris::{cformat, Coloris, Palette};
///
/// let ctx = Coloris::with_enabled(Palette::standard(), true);
/// let s = cformat!(ctx, "#GREEN#{}#RST#", "ok");
/// assert_eq!(s, "\x1b[38;5;40mok\x1b[0m");
/// ```
#[macro_export]
macro_rules! cformat {
    ($ctx:expr, $($arg:tt)*) => {
        $ctx.colorize(&::std::format!($($arg)*))
    };
}

/// Format, expand markers, and write to the given writer.
///
/// Evaluates to `Result<usize>`: the number of bytes written, after
/// flushing the writer.
///
/// ```
/// use coloris::{cwrite, Coloris, Palette};
///
/// let ctx = Coloris::with_enabled(Palette::new().with("RST", ""), true);
/// let mut out = Vec::new();
/// let n = cwrite!(ctx, &mut out, "{}#RST#!", "done").unwrap();
/// assert_eq!(out, b"done!");
/// assert_eq!(n, 5);
/// ```
#[macro_export]
macro_rules! cwrite {
    ($ctx:expr, $dst:expr, $($arg:tt)*) => {
        $ctx.write_to($dst, &::std::format!($($arg)*))
    };
}

/// [`cwrite!`] to stdout.
#[macro_export]
macro_rules! cprint {
    ($ctx:expr, $($arg:tt)*) => {{
        let mut out = ::std::io::stdout();
        $ctx.write_to(&mut out, &::std::format!($($arg)*))
    }};
}

/// [`cwrite!`] to stdout with a trailing newline.
#[macro_export]
macro_rules! cprintln {
    ($ctx:expr, $($arg:tt)*) => {{
        let mut out = ::std::io::stdout();
        let mut line = ::std::format!($($arg)*);
        line.push('\n');
        $ctx.write_to(&mut out, &line)
    }};
}
