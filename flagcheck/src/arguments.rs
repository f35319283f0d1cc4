use std::fs;

use cloparse::{assert_hard_msg, check_io_status, round_to_i64, words, CloParser, SemanticVersion};

use crate::error::{FlagError, Result};

/// Environment variable holding default options, placed before the command
/// line.
pub const OPTIONS_ENV: &str = "FLAGCHECK_OPTIONS";

const MAX_ARGS_FILES: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct Cmdline {
    pub verbose: bool,
    pub statistics: bool,
    pub all_solutions: bool,
    pub num_solutions: Option<u32>,
    pub parallel: u32,
    pub time_limit_ms: Option<u64>,
    pub random_seed: Option<i64>,
    pub optimisation_level: u32,
    pub globals_dir: Option<String>,
    pub search_dirs: Vec<String>,
    pub cmdline_data: Vec<String>,
    pub solver: Option<String>,
    pub min_version: Option<SemanticVersion>,
    pub files: Vec<String>,
}

impl Default for Cmdline {
    fn default() -> Self {
        Cmdline {
            verbose: false,
            statistics: false,
            all_solutions: false,
            num_solutions: None,
            parallel: 1,
            time_limit_ms: None,
            random_seed: None,
            optimisation_level: 1,
            globals_dir: None,
            search_dirs: Vec::new(),
            cmdline_data: Vec::new(),
            solver: None,
            min_version: None,
            files: Vec::new(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum Action {
    Help,
    Version,
    Run(Cmdline),
}

pub const USAGE: &str = r#"Usage: flagcheck [OPTION]... [FILE]...
Check a solver command line and print the resolved configuration.

General options:
  -h, --help                   This help.
      --version                Print version and exit.
  -v, --verbose                Report progress.
  -s, --statistics             Print solver statistics.
      --solver ID              Solver to use.
      --min-version X.Y.Z      Fail unless this tool is at least X.Y.Z.
      --args-file FILE         Read further options from FILE.

Search options:
  -a, --all-solutions          Report all solutions.
  -n, --num-solutions N        Stop after N solutions.
  -p, --parallel N             Use N threads (also -pN).
  -t, --time-limit MS          Time limit in milliseconds.
      --time-limit-sec SEC     Time limit in seconds.
  -r, --random-seed N          Random seed.
  -O, --optimisation-level [N] Optimisation level (also -ON), default 1.

Model options:
  -G, --globals-dir DIR        Solver-specific globals (also -GDIR).
  -I, --search-dir DIR         Add DIR to the include path.  Can be repeated.
  -D, --cmdline-data TEXT      Extra data.  Can be repeated.

A lone -- ends option processing.

Environment variables: FLAGCHECK_OPTIONS, FLAGCHECK_LOG.
"#;

const HELP: &str = "-h --help";
const VERSION: &str = "--version";
const VERBOSE: &str = "-v --verbose";
const STATISTICS: &str = "-s --statistics";
const ALL_SOLUTIONS: &str = "-a --all-solutions";
const NUM_SOLUTIONS: &str = "-n --num-solutions";
const PARALLEL: &str = "-p --parallel";
const TIME_LIMIT: &str = "-t --time-limit";
const TIME_LIMIT_SEC: &str = "--time-limit-sec";
const RANDOM_SEED: &str = "-r --random-seed";
const OPTIMISATION_LEVEL: &str = "-O --optimisation-level";
const GLOBALS_DIR: &str = "-G --globals-dir --mzn-globals-dir";
const SEARCH_DIR: &str = "-I --search-dir";
const CMDLINE_DATA: &str = "-D --cmdline-data";
const SOLVER: &str = "--solver";
const MIN_VERSION: &str = "--min-version";
const ARGS_FILE: &str = "--args-file";

// Options whose value is mandatory, for diagnosing a failed match.
const VALUE_OPTIONS: &[&str] = &[
    NUM_SOLUTIONS,
    PARALLEL,
    TIME_LIMIT,
    TIME_LIMIT_SEC,
    RANDOM_SEED,
    GLOBALS_DIR,
    SEARCH_DIR,
    CMDLINE_DATA,
    SOLVER,
    MIN_VERSION,
    ARGS_FILE,
];

/// Version this tool reports and checks `--min-version` against.
pub fn tool_version() -> SemanticVersion {
    SemanticVersion::parse(env!("CARGO_PKG_VERSION"))
}

/// Default options from `env_options` (see [`OPTIONS_ENV`]) followed by the
/// command-line arguments.
pub fn collect_tokens(
    env_options: Option<&str>,
    cli: impl IntoIterator<Item = String>,
) -> Vec<String> {
    let mut tokens = Vec::new();
    if let Some(defaults) = env_options {
        words::split_into(defaults, &mut tokens);
    }
    tokens.extend(cli);
    tokens
}

pub fn parse_args() -> Result<Action> {
    let env_options = std::env::var(OPTIONS_ENV).ok();
    let tokens = collect_tokens(env_options.as_deref(), std::env::args().skip(1));
    parse_tokens(tokens)
}

fn read_args_file(path: &str) -> Result<Vec<String>> {
    let content = check_io_status(
        fs::read_to_string(path),
        &format!("cannot read args file {}", path),
        true,
    )?
    .unwrap_or_default();
    Ok(words::split(&content))
}

/// Explain why the token under the cursor matched nothing.
fn unmatched(argv: &[String], i: usize) -> FlagError {
    let arg = argv[i].as_str();
    for spec in VALUE_OPTIONS {
        if spec.split_whitespace().any(|k| k == arg) {
            return match argv.get(i + 1) {
                Some(value) => FlagError::BadValue {
                    option: arg.to_string(),
                    value: value.clone(),
                },
                None => FlagError::MissingValue(arg.to_string()),
            };
        }
    }
    // A glued value that did not parse, e.g. -pX.
    for spec in VALUE_OPTIONS {
        if let Some(k) = spec
            .split_whitespace()
            .find(|k| k.len() <= 2 && arg.starts_with(*k))
        {
            return FlagError::BadValue {
                option: k.to_string(),
                value: arg[k.len()..].to_string(),
            };
        }
    }
    FlagError::UnknownOption(arg.to_string())
}

pub fn parse_tokens(mut argv: Vec<String>) -> Result<Action> {
    let mut cmd = Cmdline::default();
    let mut seconds = 0.0f64;
    let mut min_version = String::new();
    let mut args_files = 0;
    let mut only_files = false;

    let mut i = 0;
    while i < argv.len() {
        let mut args_file = None::<String>;
        {
            let mut cop = CloParser::new(&mut i, &argv);
            if only_files {
                if let Some(tok) = cop.current() {
                    cmd.files.push(tok.to_string());
                }
            } else if cop.get("--") {
                only_files = true;
            } else if cop.get(HELP) {
                return Ok(Action::Help);
            } else if cop.get(VERSION) {
                return Ok(Action::Version);
            } else if cop.get(VERBOSE) {
                cmd.verbose = true;
            } else if cop.get(STATISTICS) {
                cmd.statistics = true;
            } else if cop.get(ALL_SOLUTIONS) {
                cmd.all_solutions = true;
            } else if cop.get_value(NUM_SOLUTIONS, &mut cmd.num_solutions, false) {
            } else if cop.get_value(PARALLEL, &mut cmd.parallel, false) {
            } else if cop.get_value(TIME_LIMIT, &mut cmd.time_limit_ms, false) {
            } else if cop.get_value(TIME_LIMIT_SEC, &mut seconds, false) {
                let ms = round_to_i64(seconds * 1000.0);
                match u64::try_from(ms) {
                    Ok(ms) => cmd.time_limit_ms = Some(ms),
                    Err(_) => {
                        return Err(FlagError::BadValue {
                            option: "--time-limit-sec".to_string(),
                            value: seconds.to_string(),
                        })
                    }
                }
            } else if cop.get_value(RANDOM_SEED, &mut cmd.random_seed, false) {
            } else if cop.get_value(OPTIMISATION_LEVEL, &mut cmd.optimisation_level, true) {
            } else if cop.get_value(GLOBALS_DIR, &mut cmd.globals_dir, false) {
            } else if cop.get_value(SEARCH_DIR, &mut cmd.search_dirs, false) {
            } else if cop.get_value(CMDLINE_DATA, &mut cmd.cmdline_data, false) {
            } else if cop.get_value(SOLVER, &mut cmd.solver, false) {
            } else if cop.get_value(MIN_VERSION, &mut min_version, false) {
                cmd.min_version = Some(SemanticVersion::parse(&min_version));
            } else if cop.get_value(ARGS_FILE, &mut args_file, false) {
            } else if let Some(tok) = cop.current() {
                if tok.starts_with('-') && tok != "-" {
                    return Err(unmatched(&argv, cop.position()));
                }
                cmd.files.push(tok.to_string());
            }
            cop.advance();
        }

        if let Some(path) = args_file {
            args_files += 1;
            if args_files > MAX_ARGS_FILES {
                return Err(FlagError::ArgsFileDepth(MAX_ARGS_FILES));
            }
            let words = read_args_file(&path)?;
            tracing::debug!(path = %path, count = words.len(), "splicing args file");
            let rest = argv.split_off(i);
            argv.extend(words);
            argv.extend(rest);
        }
    }
    assert_hard_msg!(i == argv.len(), "cursor {} ran past {} tokens", i, argv.len());

    if let Some(required) = cmd.min_version {
        let actual = tool_version();
        if required > actual {
            return Err(FlagError::VersionTooOld { required, actual });
        }
    }
    tracing::debug!(?cmd, "command line parsed");
    Ok(Action::Run(cmd))
}
