//! Rendering a parsed command line.

use std::fmt::Write;

use cloparse::HadOne;

use crate::arguments::Cmdline;

fn joined(items: &[String]) -> String {
    let mut h = HadOne::new();
    for item in items {
        h.push(item, None);
    }
    if h.had_one() {
        h.into_string()
    } else {
        "(none)".to_string()
    }
}

/// One `key: value` line per setting, then the `limits:` and `flags:`
/// summaries.
pub fn render(cmd: &Cmdline) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "solver: {}", cmd.solver.as_deref().unwrap_or("(default)"));
    let _ = writeln!(out, "files: {}", joined(&cmd.files));
    if let Some(dir) = &cmd.globals_dir {
        let _ = writeln!(out, "globals-dir: {}", dir);
    }
    let _ = writeln!(out, "search-dirs: {}", joined(&cmd.search_dirs));
    let _ = writeln!(out, "data: {}", joined(&cmd.cmdline_data));
    let _ = writeln!(out, "optimisation-level: {}", cmd.optimisation_level);
    if let Some(seed) = cmd.random_seed {
        let _ = writeln!(out, "random-seed: {}", seed);
    }
    if let Some(v) = cmd.min_version {
        let _ = writeln!(out, "min-version: {}", v);
    }

    let mut limits = HadOne::new();
    limits.push(cmd.time_limit_ms.unwrap_or(0), Some(" ms"));
    limits.push(if cmd.parallel > 1 { cmd.parallel } else { 0 }, Some(" threads"));
    limits.push(cmd.num_solutions.unwrap_or(0), Some(" solutions"));
    let _ = writeln!(
        out,
        "limits: {}",
        if limits.had_one() { limits.as_str() } else { "none" }
    );

    let mut flags = HadOne::new();
    flags.push(if cmd.verbose { "verbose" } else { "" }, None);
    flags.push(if cmd.statistics { "statistics" } else { "" }, None);
    flags.push(if cmd.all_solutions { "all-solutions" } else { "" }, None);
    let _ = writeln!(
        out,
        "flags: {}",
        if flags.had_one() { flags.as_str() } else { "none" }
    );
    out
}
