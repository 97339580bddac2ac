//! # PTPKit
//!
//! Project persistence and undo/redo core for a point-to-point robot path
//! planner.
//!
//! ## Architecture
//!
//! PTPKit is organized as a workspace with multiple crates:
//!
//! 1. **ptpkit-core** - Path model, path codec contract, shared type aliases
//! 2. **ptpkit-settings** - Project config record and the durable settings store
//! 3. **ptpkit-project** - Directory resolution, recent projects, project manager
//! 4. **ptpkit-history** - Edit commands and the undo/redo manager
//! 5. **ptpkit** - Logging setup and a headless binary that opens a project

pub use ptpkit_core::{
    example_paths, shared, ChangeCallback, CodecError, CodecResult, ConstraintKind, Constraints,
    JsonPathCodec, Path, PathCodec, PathElement, RangedConstraint, RotationTarget, Shared,
    TranslationTarget,
};
pub use ptpkit_history::{
    CallbackId, Command, CompoundCommand, ConfigCommand, EditCommand, PathCommand,
    UndoRedoManager,
};
pub use ptpkit_project::{
    resolve_project_dir, DirProbe, FsProbe, ProjectError, ProjectManager, ProjectResult,
    RecentProjects,
};
pub use ptpkit_settings::{
    keys, ConfigPatch, JsonSettingsStore, MemorySettingsStore, ProjectConfig, SettingsError,
    SettingsResult, SettingsStore,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable selecting the log output format (`pretty` or `json`).
pub const LOG_FORMAT_ENV: &str = "PTPKIT_LOG_FORMAT";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    /// Read the format from [`LOG_FORMAT_ENV`], falling back to pretty output.
    pub fn from_env() -> Self {
        std::env::var(LOG_FORMAT_ENV)
            .map(|value| Self::parse(&value))
            .unwrap_or_default()
    }

    fn parse(value: &str) -> Self {
        if value.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Pretty
        }
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Console output, pretty or JSON per [`LOG_FORMAT_ENV`]
/// - RUST_LOG environment variable support (defaults to `info`)
pub fn init_logging() -> anyhow::Result<()> {
    init_logging_with(LogFormat::from_env())
}

/// Initialize logging with an explicit output format.
pub fn init_logging_with(format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match format {
        LogFormat::Pretty => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .with_line_number(true)
                .pretty();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stdout)
                .with_target(true)
                .with_level(true)
                .json();
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}
