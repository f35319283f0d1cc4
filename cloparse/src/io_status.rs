//! Reporting failed I/O operations.

use std::io;

use crate::{Error, Result};

/// Report a failed I/O result on stderr as `"\n  <msg>:   <error>."`.
///
/// With `hard` the failure is returned as [`Error::Io`]; otherwise it is
/// only reported and `Ok(None)` comes back.
pub fn check_io_status<T>(result: io::Result<T>, msg: &str, hard: bool) -> Result<Option<T>> {
    match result {
        Ok(v) => Ok(Some(v)),
        Err(e) => {
            report(msg, &e);
            if hard {
                Err(Error::Io {
                    context: msg.to_string(),
                    source: e,
                })
            } else {
                Ok(None)
            }
        }
    }
}

/// Like [`check_io_status`] for calls that only signal success, taking the
/// error from the last OS error (`errno`).
pub fn check_errno(ok: bool, msg: &str, hard: bool) -> Result<()> {
    if ok {
        return Ok(());
    }
    let e = io::Error::last_os_error();
    report(msg, &e);
    if hard {
        return Err(Error::Io {
            context: msg.to_string(),
            source: e,
        });
    }
    Ok(())
}

fn report(msg: &str, e: &io::Error) {
    tracing::warn!(error = %e, "{}", msg);
    eprintln!("\n  {}:   {}.", msg, e);
}
