//! Command line surface of the `matprod` binary.

use std::error::Error;
use std::io::{self, Write};

use clap::Parser;

/// Multiply two fixed integer matrices and print `A * B = C`.
#[derive(Parser, Debug)]
#[command(name = "matprod", version)]
#[command(about = "Multiply two fixed integer matrices and print them side by side", long_about = None)]
pub struct Args {
    /// Accepted for compatibility and ignored. Parsed leniently: a leading
    /// integer is taken and anything non-numeric counts as 0.
    #[arg(value_name = "N", allow_hyphen_values = true)]
    pub n: Option<String>,

    /// Anything after `N` is dropped.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub rest: Vec<String>,

    /// Also print A, B and C one after another before the side-by-side view
    #[arg(long)]
    pub stacked: bool,
}

impl Args {
    /// The positional `N` as an integer, 0 when absent or unparsable.
    pub fn n(&self) -> i64 {
        self.n.as_deref().map_or(0, parse_int_lenient)
    }
}

/// Best-effort integer parse: skips leading whitespace, takes an optional
/// sign and then as many digits as follow. Returns 0 if there are no
/// digits. Saturates instead of overflowing.
///
/// ```
/// use matprod::cli::parse_int_lenient;
///
/// assert_eq!(parse_int_lenient("  42abc"), 42);
/// assert_eq!(parse_int_lenient("-7"), -7);
/// assert_eq!(parse_int_lenient("abc"), 0);
/// ```
pub fn parse_int_lenient(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    for d in digits.bytes().take_while(u8::is_ascii_digit) {
        let d = i64::from(d - b'0');
        value = if negative {
            value.saturating_mul(10).saturating_sub(d)
        } else {
            value.saturating_mul(10).saturating_add(d)
        };
    }
    value
}

/// Write `error: <message>` for a failed run.
pub fn write_error<W: Write>(out: &mut W, err: &dyn Error) -> io::Result<()> {
    writeln!(out, "error: {}", err)
}
