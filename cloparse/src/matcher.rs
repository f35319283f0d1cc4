//! Per-token command-line option matcher.
//!
//! A [`CloParser`] borrows the caller's token list and cursor. The caller
//! loops over the tokens, tries each option spec in turn and steps the
//! cursor once per iteration:
//!
//! ```
//! use cloparse::CloParser;
//!
//! let argv: Vec<String> = ["-v", "-p4", "--time-limit", "500"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let (mut verbose, mut threads, mut limit) = (false, 1u32, 0u64);
//! let mut i = 0;
//! while i < argv.len() {
//!     let mut cop = CloParser::new(&mut i, &argv);
//!     if cop.get("-v --verbose") {
//!         verbose = true;
//!     } else if cop.get_value("-p --parallel", &mut threads, false) {
//!     } else if cop.get_value("-t --time-limit", &mut limit, false) {
//!     }
//!     cop.advance();
//! }
//! assert!(verbose);
//! assert_eq!((threads, limit), (4, 500));
//! ```
//!
//! After a successful match the cursor rests on the last token that belongs
//! to the option (the value token for `--opt VALUE`, the option itself
//! otherwise), so the caller's single step moves past it.

use crate::binder::{BinderKind, Coerced, ValueSlot};
use crate::words::begins_with;

/// Matching policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchPolicy {
    /// Keywords up to this many bytes may carry a glued value (`-Ggecode`)
    /// when a value slot is supplied. Longer keywords, and every keyword in
    /// flag form, must equal the token exactly.
    pub short_keyword_len: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        MatchPolicy {
            short_keyword_len: 2,
        }
    }
}

pub struct CloParser<'a> {
    cursor: &'a mut usize,
    argv: &'a [String],
    policy: MatchPolicy,
}

impl<'a> CloParser<'a> {
    pub fn new(cursor: &'a mut usize, argv: &'a [String]) -> Self {
        debug_assert!(*cursor <= argv.len());
        CloParser {
            cursor,
            argv,
            policy: MatchPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn position(&self) -> usize {
        *self.cursor
    }

    pub fn at_end(&self) -> bool {
        *self.cursor >= self.argv.len()
    }

    /// Token under the cursor.
    pub fn current(&self) -> Option<&'a str> {
        self.argv.get(*self.cursor).map(String::as_str)
    }

    /// Step past the current token.
    pub fn advance(&mut self) {
        if *self.cursor < self.argv.len() {
            *self.cursor += 1;
        }
    }

    /// Match a flag against the space-separated alias list `names`.
    ///
    /// Only an exact token match counts; the cursor never moves.
    pub fn get(&mut self, names: &str) -> bool {
        self.get_option(names, None, false)
    }

    /// Match an option carrying a value and bind the value into `slot`.
    ///
    /// The value is either glued to a short keyword (`-p4`) or the next
    /// token (`--parallel 4`). When there is no next token, or it does not
    /// coerce into the slot, the cursor is put back and `value_optional` is
    /// returned; `slot` is left untouched in both cases.
    pub fn get_value<T: ValueSlot>(
        &mut self,
        names: &str,
        slot: &mut T,
        value_optional: bool,
    ) -> bool {
        self.get_option(names, Some(slot as &mut dyn ValueSlot), value_optional)
    }

    fn get_option(
        &mut self,
        names: &str,
        mut slot: Option<&mut dyn ValueSlot>,
        value_optional: bool,
    ) -> bool {
        debug_assert!(!names.contains(','), "alias list uses spaces: {}", names);
        debug_assert!(!names.contains(';'), "alias list uses spaces: {}", names);

        let Some(arg) = self.current() else {
            return false;
        };
        let has_slot = slot.is_some();

        for keyword in names.split_whitespace() {
            let exact_only = keyword.len() > self.policy.short_keyword_len || !has_slot;
            if !begins_with(arg, keyword) || (exact_only && arg != keyword) {
                continue;
            }

            let combined = keyword.len() < arg.len();
            let value = if combined {
                if !has_slot {
                    continue;
                }
                &arg[keyword.len()..]
            } else {
                if !has_slot {
                    tracing::trace!(keyword, position = *self.cursor, "flag matched");
                    return true;
                }
                *self.cursor += 1;
                match self.current() {
                    Some(next) => next,
                    None => {
                        *self.cursor -= 1;
                        tracing::trace!(keyword, value_optional, "option value missing");
                        return value_optional;
                    }
                }
            };

            let Some(slot) = slot.as_deref_mut() else {
                return false;
            };
            if slot.kind() == BinderKind::Text {
                slot.store(Coerced::Text(value.to_string()));
                tracing::trace!(keyword, value, combined, "text option matched");
                return true;
            }
            if slot.bind(value) {
                tracing::trace!(keyword, value, combined, "option matched");
                return true;
            }
            if !combined {
                *self.cursor -= 1;
            }
            tracing::debug!(keyword, value, value_optional, "option value rejected");
            return value_optional;
        }
        false
    }
}
