//! Value binders: turn the text captured by the matcher into a typed slot.
//!
//! Each slot type declares one [`BinderKind`]. Text slots take the captured
//! string verbatim; every other kind reads a value from the front of the
//! text the way a formatted stream extraction does: leading whitespace is
//! skipped, the longest valid prefix is read and trailing text is ignored
//! (`"3x"` reads as `3`). Out-of-range values fail.

use std::path::PathBuf;

// ============================================================================
// BinderKind / Coerced
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinderKind {
    Text,
    Signed,
    Unsigned,
    Float,
    /// `0` or `1`.
    Boolean,
    /// First non-blank character.
    Char,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Coerced {
    Text(String),
    Signed(i128),
    Unsigned(u128),
    Float(f64),
    Boolean(bool),
    Char(char),
}

/// Coerce `text` according to `kind`. `None` means the text does not start
/// with a value of that kind.
pub fn coerce(kind: BinderKind, text: &str) -> Option<Coerced> {
    match kind {
        BinderKind::Text => Some(Coerced::Text(text.to_string())),
        BinderKind::Signed => read_signed(text).map(Coerced::Signed),
        BinderKind::Unsigned => read_unsigned(text).map(Coerced::Unsigned),
        BinderKind::Float => read_float(text).map(Coerced::Float),
        BinderKind::Boolean => match read_signed(text)? {
            0 => Some(Coerced::Boolean(false)),
            1 => Some(Coerced::Boolean(true)),
            _ => None,
        },
        BinderKind::Char => text.trim_start().chars().next().map(Coerced::Char),
    }
}

fn skip_blanks(text: &str) -> &[u8] {
    text.trim_start().as_bytes()
}

fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

fn read_signed(text: &str) -> Option<i128> {
    let bytes = skip_blanks(text);
    let (negative, rest) = match bytes.first() {
        Some(b'-') => (true, &bytes[1..]),
        Some(b'+') => (false, &bytes[1..]),
        _ => (false, bytes),
    };
    let n = digit_run(rest);
    if n == 0 {
        return None;
    }
    let mut value: i128 = 0;
    for &d in &rest[..n] {
        value = value.checked_mul(10)?.checked_add(i128::from(d - b'0'))?;
    }
    Some(if negative { -value } else { value })
}

// A leading minus is rejected rather than wrapped.
fn read_unsigned(text: &str) -> Option<u128> {
    let bytes = skip_blanks(text);
    let rest = match bytes.first() {
        Some(b'+') => &bytes[1..],
        _ => bytes,
    };
    let n = digit_run(rest);
    if n == 0 {
        return None;
    }
    let mut value: u128 = 0;
    for &d in &rest[..n] {
        value = value.checked_mul(10)?.checked_add(u128::from(d - b'0'))?;
    }
    Some(value)
}

fn read_float(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-' | b'+')) {
        end += 1;
    }
    let int_digits = digit_run(&bytes[end..]);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = digit_run(&bytes[end + 1..]);
        end += 1 + frac_digits;
    }
    if int_digits + frac_digits == 0 {
        return None;
    }
    // Exponent only counts when digits follow it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'-' | b'+')) {
            exp_end += 1;
        }
        let exp_digits = digit_run(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    let value: f64 = trimmed[..end].parse().ok()?;
    value.is_finite().then_some(value)
}

// ============================================================================
// ValueSlot — typed destinations
// ============================================================================

/// A destination the matcher can bind a value into.
pub trait ValueSlot {
    fn kind(&self) -> BinderKind;

    /// Store an already coerced value. Returns false when the value does not
    /// fit the slot (wrong variant or out of range); the slot is then left
    /// untouched.
    fn store(&mut self, value: Coerced) -> bool;

    /// Coerce `text` and store it.
    fn bind(&mut self, text: &str) -> bool {
        match coerce(self.kind(), text) {
            Some(value) => self.store(value),
            None => false,
        }
    }
}

impl ValueSlot for String {
    fn kind(&self) -> BinderKind {
        BinderKind::Text
    }

    fn store(&mut self, value: Coerced) -> bool {
        match value {
            Coerced::Text(s) => {
                *self = s;
                true
            }
            _ => false,
        }
    }
}

impl ValueSlot for PathBuf {
    fn kind(&self) -> BinderKind {
        BinderKind::Text
    }

    fn store(&mut self, value: Coerced) -> bool {
        match value {
            Coerced::Text(s) => {
                *self = PathBuf::from(s);
                true
            }
            _ => false,
        }
    }
}

macro_rules! signed_slot {
    ($($t:ty),*) => {$(
        impl ValueSlot for $t {
            fn kind(&self) -> BinderKind {
                BinderKind::Signed
            }

            fn store(&mut self, value: Coerced) -> bool {
                match value {
                    Coerced::Signed(n) => match <$t>::try_from(n) {
                        Ok(v) => {
                            *self = v;
                            true
                        }
                        Err(_) => false,
                    },
                    _ => false,
                }
            }
        }
    )*};
}

macro_rules! unsigned_slot {
    ($($t:ty),*) => {$(
        impl ValueSlot for $t {
            fn kind(&self) -> BinderKind {
                BinderKind::Unsigned
            }

            fn store(&mut self, value: Coerced) -> bool {
                match value {
                    Coerced::Unsigned(n) => match <$t>::try_from(n) {
                        Ok(v) => {
                            *self = v;
                            true
                        }
                        Err(_) => false,
                    },
                    _ => false,
                }
            }
        }
    )*};
}

signed_slot!(i8, i16, i32, i64, isize);
unsigned_slot!(u8, u16, u32, u64, usize);

impl ValueSlot for f64 {
    fn kind(&self) -> BinderKind {
        BinderKind::Float
    }

    fn store(&mut self, value: Coerced) -> bool {
        match value {
            Coerced::Float(v) => {
                *self = v;
                true
            }
            _ => false,
        }
    }
}

impl ValueSlot for f32 {
    fn kind(&self) -> BinderKind {
        BinderKind::Float
    }

    fn store(&mut self, value: Coerced) -> bool {
        match value {
            Coerced::Float(v) => {
                let narrowed = v as f32;
                if narrowed.is_infinite() {
                    return false;
                }
                *self = narrowed;
                true
            }
            _ => false,
        }
    }
}

impl ValueSlot for bool {
    fn kind(&self) -> BinderKind {
        BinderKind::Boolean
    }

    fn store(&mut self, value: Coerced) -> bool {
        match value {
            Coerced::Boolean(b) => {
                *self = b;
                true
            }
            _ => false,
        }
    }
}

impl ValueSlot for char {
    fn kind(&self) -> BinderKind {
        BinderKind::Char
    }

    fn store(&mut self, value: Coerced) -> bool {
        match value {
            Coerced::Char(c) => {
                *self = c;
                true
            }
            _ => false,
        }
    }
}

/// `None` until a value is bound.
impl<T: ValueSlot + Default> ValueSlot for Option<T> {
    fn kind(&self) -> BinderKind {
        match self {
            Some(v) => v.kind(),
            None => T::default().kind(),
        }
    }

    fn store(&mut self, value: Coerced) -> bool {
        let mut v = T::default();
        if !v.store(value) {
            return false;
        }
        *self = Some(v);
        true
    }
}

/// Repeatable options: every bound value is appended.
impl<T: ValueSlot + Default> ValueSlot for Vec<T> {
    fn kind(&self) -> BinderKind {
        T::default().kind()
    }

    fn store(&mut self, value: Coerced) -> bool {
        let mut v = T::default();
        if !v.store(value) {
            return false;
        }
        self.push(v);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_verbatim() {
        let mut s = String::new();
        assert!(s.bind("  gecode "));
        assert_eq!(s, "  gecode ");
    }

    #[test]
    fn integer_reads_leading_number() {
        let mut n = 0i32;
        assert!(n.bind("42"));
        assert_eq!(n, 42);
        assert!(n.bind("  -7"));
        assert_eq!(n, -7);
        assert!(n.bind("3abc"));
        assert_eq!(n, 3);
    }

    #[test]
    fn integer_rejects_non_numbers() {
        let mut n = 5i64;
        assert!(!n.bind("abc"));
        assert!(!n.bind(""));
        assert!(!n.bind("-"));
        assert_eq!(n, 5);
    }

    #[test]
    fn integer_out_of_range_fails() {
        let mut n = 0u8;
        assert!(!n.bind("256"));
        assert!(n.bind("255"));
        assert_eq!(n, 255);

        let mut m = 0i64;
        assert!(!m.bind("99999999999999999999999999999999999999999"));
        assert_eq!(m, 0);
    }

    #[test]
    fn unsigned_rejects_minus() {
        let mut n = 1u32;
        assert!(!n.bind("-3"));
        assert!(n.bind("+3"));
        assert_eq!(n, 3);
    }

    #[test]
    fn float_prefix_forms() {
        let mut f = 0.0f64;
        assert!(f.bind("2.5"));
        assert_eq!(f, 2.5);
        assert!(f.bind(".5s"));
        assert_eq!(f, 0.5);
        assert!(f.bind("1e3"));
        assert_eq!(f, 1000.0);
        assert!(f.bind("7e"));
        assert_eq!(f, 7.0);
        assert!(!f.bind("."));
        assert!(!f.bind("e5"));
    }

    #[test]
    fn f32_overflow_fails() {
        let mut f = 1.0f32;
        assert!(!f.bind("1e300"));
        assert_eq!(f, 1.0);
    }

    #[test]
    fn boolean_is_zero_or_one() {
        let mut b = false;
        assert!(b.bind("1"));
        assert!(b);
        assert!(b.bind("0"));
        assert!(!b);
        assert!(!b.bind("2"));
        assert!(!b.bind("true"));
    }

    #[test]
    fn char_takes_first_non_blank() {
        let mut c = ' ';
        assert!(c.bind("  xyz"));
        assert_eq!(c, 'x');
        assert!(!c.bind("   "));
    }

    #[test]
    fn option_and_vec_wrappers() {
        let mut o: Option<u32> = None;
        assert_eq!(o.kind(), BinderKind::Unsigned);
        assert!(!o.bind("x"));
        assert_eq!(o, None);
        assert!(o.bind("9"));
        assert_eq!(o, Some(9));

        let mut v: Vec<String> = Vec::new();
        assert_eq!(v.kind(), BinderKind::Text);
        assert!(v.bind("a"));
        assert!(v.bind("b"));
        assert_eq!(v, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn store_rejects_other_variants() {
        let mut n = 0i32;
        assert!(!n.store(Coerced::Text("1".into())));
        assert!(!n.store(Coerced::Unsigned(1)));
        let mut s = String::new();
        assert!(!s.store(Coerced::Signed(1)));
    }
}
