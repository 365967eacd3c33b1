//! Message parts and the printf-style "format or join" renderer
//!
//! Supported directives: `%s`, `%d`, `%i`, `%f` and `%%`. Directives are only
//! interpreted when the first part is text and at least one more part follows.
//! A directive with nothing left to consume stays in the output verbatim, as
//! does any unknown directive. Parts not consumed by a directive are appended,
//! separated by single spaces.

use std::fmt;

/// One captured message part.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl Arg {
    /// Capture anything `Display` as text.
    pub fn display(value: impl fmt::Display) -> Self {
        Arg::Str(value.to_string())
    }

    /// Numeric conversion used by `%d`.
    fn to_number(&self) -> f64 {
        match self {
            Arg::Int(value) => *value as f64,
            Arg::Float(value) => *value,
            Arg::Bool(value) => f64::from(u8::from(*value)),
            Arg::Str(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }

    /// Integer-prefix conversion used by `%i`.
    fn to_integer(&self) -> Option<i64> {
        match self {
            Arg::Int(value) => Some(*value),
            Arg::Float(value) if value.is_finite() => Some(value.trunc() as i64),
            Arg::Float(_) | Arg::Bool(_) => None,
            Arg::Str(text) => leading_number(text, false).and_then(|prefix| prefix.parse().ok()),
        }
    }

    /// Float-prefix conversion used by `%f`.
    fn to_float(&self) -> f64 {
        match self {
            Arg::Int(value) => *value as f64,
            Arg::Float(value) => *value,
            Arg::Bool(_) => f64::NAN,
            Arg::Str(text) => leading_number(text, true)
                .and_then(|prefix| prefix.parse().ok())
                .unwrap_or(f64::NAN),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Str(text) => f.write_str(text),
            Arg::Int(value) => write!(f, "{}", value),
            Arg::Float(value) => f.write_str(&format_number(*value)),
            Arg::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Shortest decimal form: whole values print without a fraction.
pub(crate) fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let sign = if value > 0.0 { "" } else { "-" };
        format!("{}Infinity", sign)
    } else if value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Longest numeric prefix after leading whitespace, or `None` when there is
/// not a single digit to read.
fn leading_number(text: &str, allow_fraction: bool) -> Option<&str> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut has_digits = end > digits_start;

    if allow_fraction {
        if end < bytes.len() && bytes[end] == b'.' {
            let mut frac_end = end + 1;
            while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
                frac_end += 1;
            }
            if frac_end > end + 1 || has_digits {
                has_digits = has_digits || frac_end > end + 1;
                end = frac_end;
            }
        }
        if has_digits && end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
            let mut exp_end = end + 1;
            if exp_end < bytes.len() && matches!(bytes[exp_end], b'+' | b'-') {
                exp_end += 1;
            }
            let exp_digits = exp_end;
            while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
                exp_end += 1;
            }
            if exp_end > exp_digits {
                end = exp_end;
            }
        }
    }

    if has_digits {
        Some(text[..end].trim_end_matches('.'))
    } else {
        None
    }
}

/// Render message parts into one string.
pub fn format_parts(parts: &[Arg]) -> String {
    let (first, rest) = match parts.split_first() {
        Some((Arg::Str(first), rest)) if !rest.is_empty() => (first, rest),
        _ => return join(parts),
    };

    let mut out = String::with_capacity(first.len() + rest.len() * 8);
    let mut next = 0;
    let mut chars = first.chars();

    while let Some(ch) = chars.next() {
        if ch != '%' {
            out.push(ch);
            continue;
        }
        let Some(directive) = chars.next() else {
            out.push('%');
            break;
        };
        match directive {
            '%' => out.push('%'),
            's' | 'd' | 'i' | 'f' if next < rest.len() => {
                let arg = &rest[next];
                next += 1;
                match directive {
                    's' => out.push_str(&arg.to_string()),
                    'd' => out.push_str(&format_number(arg.to_number())),
                    'i' => match arg.to_integer() {
                        Some(value) => out.push_str(&value.to_string()),
                        None => out.push_str("NaN"),
                    },
                    _ => out.push_str(&format_number(arg.to_float())),
                }
            }
            other => {
                out.push('%');
                out.push(other);
            }
        }
    }

    for arg in &rest[next..] {
        out.push(' ');
        out.push_str(&arg.to_string());
    }
    out
}

fn join(parts: &[Arg]) -> String {
    parts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl From<&str> for Arg {
    fn from(value: &str) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<String> for Arg {
    fn from(value: String) -> Self {
        Arg::Str(value)
    }
}

impl From<&String> for Arg {
    fn from(value: &String) -> Self {
        Arg::Str(value.clone())
    }
}

impl From<char> for Arg {
    fn from(value: char) -> Self {
        Arg::Str(value.to_string())
    }
}

impl From<bool> for Arg {
    fn from(value: bool) -> Self {
        Arg::Bool(value)
    }
}

impl From<f64> for Arg {
    fn from(value: f64) -> Self {
        Arg::Float(value)
    }
}

impl From<f32> for Arg {
    fn from(value: f32) -> Self {
        Arg::Float(f64::from(value))
    }
}

macro_rules! arg_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    Arg::Int(i64::from(value))
                }
            }
        )*
    };
}

arg_from_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! arg_from_wide_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Arg {
                fn from(value: $ty) -> Self {
                    match i64::try_from(value) {
                        Ok(value) => Arg::Int(value),
                        Err(_) => Arg::Float(value as f64),
                    }
                }
            }
        )*
    };
}

arg_from_wide_int!(u64, usize, isize);
