//! Comma-joined summaries of non-zero values.

use std::fmt::{Display, Write};

/// Values that count as "present" in a summary.
pub trait Truthy {
    fn is_truthy(&self) -> bool;
}

macro_rules! numeric_truthy {
    ($($t:ty),*) => {$(
        impl Truthy for $t {
            fn is_truthy(&self) -> bool {
                *self != (0 as $t)
            }
        }
    )*};
}

numeric_truthy!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl Truthy for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

impl Truthy for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthy for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Truthy + ?Sized> Truthy for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Prints a value only if it is non-zero, with `", "` before every value
/// after the first one printed.
///
/// ```
/// use cloparse::HadOne;
///
/// let mut h = HadOne::new();
/// h.push(0, None);
/// h.push(3, Some(" s"));
/// h.push(2, Some(" threads"));
/// assert_eq!(h.as_str(), "3 s, 2 threads");
/// ```
#[derive(Debug, Default, Clone)]
pub struct HadOne {
    had_one: bool,
    out: String,
}

impl HadOne {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `val` (followed by `descr`) if it is truthy. Returns the
    /// fragment produced for this call, which is also kept in the buffer.
    pub fn push<N: Truthy + Display>(&mut self, val: N, descr: Option<&str>) -> String {
        let mut fragment = String::new();
        if val.is_truthy() {
            if self.had_one {
                fragment.push_str(", ");
            }
            self.had_one = true;
            let _ = write!(fragment, "{}", val);
            if let Some(d) = descr {
                fragment.push_str(d);
            }
            self.out.push_str(&fragment);
        }
        fragment
    }

    pub fn reset(&mut self) {
        self.had_one = false;
        self.out.clear();
    }

    pub fn had_one(&self) -> bool {
        self.had_one
    }

    pub fn as_str(&self) -> &str {
        &self.out
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl From<&HadOne> for bool {
    fn from(h: &HadOne) -> bool {
        h.had_one
    }
}
