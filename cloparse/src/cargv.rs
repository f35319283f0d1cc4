//! C-style argument vectors for handing command lines to foreign code.

use std::ffi::{c_char, CString};

use crate::{Error, Result};

/// Owned `argv` array. The pointers returned by [`CArgv::as_ptr`] stay valid
/// as long as the `CArgv` is alive and unmodified.
#[derive(Debug)]
pub struct CArgv {
    // Kept alive for the pointers in `ptrs`.
    _owned: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl CArgv {
    pub fn new(args: &[String]) -> Result<Self> {
        let owned = args
            .iter()
            .enumerate()
            .map(|(index, a)| CString::new(a.as_str()).map_err(|_| Error::InteriorNul { index }))
            .collect::<Result<Vec<_>>>()?;
        let mut ptrs: Vec<*const c_char> = owned.iter().map(|s| s.as_ptr()).collect();
        ptrs.push(std::ptr::null());
        Ok(CArgv {
            _owned: owned,
            ptrs,
        })
    }

    /// NULL-terminated array of NUL-terminated strings.
    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }

    pub fn len(&self) -> usize {
        self.ptrs.len() - 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
