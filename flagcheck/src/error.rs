use cloparse::SemanticVersion;

#[derive(Debug, thiserror::Error)]
pub enum FlagError {
    #[error("option {0} requires an argument")]
    MissingValue(String),

    #[error("invalid argument '{value}' for option {option}")]
    BadValue { option: String, value: String },

    #[error("unrecognized option '{0}'")]
    UnknownOption(String),

    #[error("version {required} or later required, this is {actual}")]
    VersionTooOld {
        required: SemanticVersion,
        actual: SemanticVersion,
    },

    #[error("too many nested --args-file expansions (limit {0})")]
    ArgsFileDepth(usize),

    #[error(transparent)]
    Lib(#[from] cloparse::Error),
}

pub type Result<T> = std::result::Result<T, FlagError>;

/// Fatal user-facing error: print and exit with status 1.
pub fn fatal(err: &FlagError) -> ! {
    tracing::debug!(?err, "exiting on error");
    eprintln!("flagcheck: {}", err);
    std::process::exit(1);
}
