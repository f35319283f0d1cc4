//! `major.minor.patch` version numbers.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Three-part version, ordered by major, then minor, then patch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SemanticVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl SemanticVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        SemanticVersion {
            major,
            minor,
            patch,
        }
    }

    /// Lenient parse. A bare leading or trailing `.` stands for `0`
    /// (`".5"` is `0.5.0`, `"2."` is `2.0.0`). Reading stops at the first
    /// part that is not a number; the remaining parts stay `0`.
    pub fn parse(version: &str) -> Self {
        let mut normalized = String::with_capacity(version.len() + 2);
        if version.starts_with('.') {
            normalized.push('0');
        }
        normalized.push_str(version);
        if version.ends_with('.') {
            normalized.push('0');
        }

        let mut fields = [0u32; 3];
        let mut rest = normalized.as_str();
        for (n, field) in fields.iter_mut().enumerate() {
            if n > 0 {
                match rest.strip_prefix('.') {
                    Some(r) => rest = r,
                    None => break,
                }
            }
            match read_number(rest) {
                Some((value, r)) => {
                    *field = value;
                    rest = r;
                }
                None => break,
            }
        }

        let [major, minor, patch] = fields;
        SemanticVersion::new(major, minor, patch)
    }
}

fn read_number(s: &str) -> Option<(u32, &str)> {
    let s = s.trim_start();
    let digits = s.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let value = s[..digits].parse().ok()?;
    Some((value, &s[digits..]))
}

impl From<&str> for SemanticVersion {
    fn from(s: &str) -> Self {
        SemanticVersion::parse(s)
    }
}

impl FromStr for SemanticVersion {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SemanticVersion::parse(s))
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_three_parts() {
        assert_eq!(SemanticVersion::parse("1.2.3"), SemanticVersion::new(1, 2, 3));
        assert_eq!(
            SemanticVersion::parse("2.8.10"),
            SemanticVersion::new(2, 8, 10)
        );
    }

    #[test]
    fn missing_parts_are_zero() {
        assert_eq!(SemanticVersion::parse("1.2"), SemanticVersion::new(1, 2, 0));
        assert_eq!(SemanticVersion::parse("7"), SemanticVersion::new(7, 0, 0));
    }

    #[test]
    fn bare_dots_stand_for_zero() {
        assert_eq!(SemanticVersion::parse(".5"), SemanticVersion::new(0, 5, 0));
        assert_eq!(SemanticVersion::parse("2."), SemanticVersion::new(2, 0, 0));
        assert_eq!(SemanticVersion::parse("1.2."), SemanticVersion::new(1, 2, 0));
    }

    #[test]
    fn garbage_stops_reading() {
        assert_eq!(SemanticVersion::parse(""), SemanticVersion::default());
        assert_eq!(SemanticVersion::parse("abc"), SemanticVersion::default());
        assert_eq!(SemanticVersion::parse("1..3"), SemanticVersion::new(1, 0, 0));
        assert_eq!(
            SemanticVersion::parse("2.6.4-rc1"),
            SemanticVersion::new(2, 6, 4)
        );
        assert_eq!(SemanticVersion::parse("3.x.1"), SemanticVersion::new(3, 0, 0));
    }

    #[test]
    fn ordering_is_field_wise() {
        let v = SemanticVersion::new;
        assert!(v(1, 0, 0) < v(1, 0, 1));
        assert!(v(1, 9, 9) < v(2, 0, 0));
        assert!(v(2, 0, 5) > v(1, 7, 9));
        assert!(v(1, 2, 3) <= v(1, 2, 3));
        assert!(v(1, 3, 0) > v(1, 2, 9));
        assert_ne!(v(1, 2, 3), v(1, 2, 4));
    }

    #[test]
    fn display_and_from_str() {
        let v: SemanticVersion = "0.4.".parse().unwrap();
        assert_eq!(v.to_string(), "0.4.0");
        assert_eq!(SemanticVersion::from("10.1.2").to_string(), "10.1.2");
    }
}
