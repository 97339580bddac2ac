//! # PTPKit Project
//!
//! Persistence layer for a path-planning project directory.
//!
//! ## Layout
//!
//! ```text
//! <project dir>/
//!   config.json      ProjectConfig, every field written
//!   paths/
//!     example.json   one JSON document per saved path
//! ```
//!
//! ## Components
//!
//! - **Directory resolution**: [`resolve_project_dir`] maps the directory a
//!   user picked to the project directory actually used, redirecting robot
//!   code repositories to their `src/main/deploy/autos` folder.
//! - **Recent projects**: [`RecentProjects`], a bounded most-recently-used list
//!   kept in the settings store.
//! - **Project manager**: [`ProjectManager`], which bootstraps the directory
//!   structure, loads and saves `config.json`, and lists, loads, saves and
//!   deletes path files while tracking the currently open one.
//!
//! ## Failure policy
//!
//! Bootstrap and config IO are best effort: failures are logged and the last
//! good in-memory state is kept. Path IO returns a [`ProjectResult`] and
//! leaves the manager untouched on failure.

pub mod error;
pub mod manager;
pub mod recent;
pub mod resolver;

pub use error::{ProjectError, ProjectResult};
pub use manager::{ProjectManager, CONFIG_FILE, DEFAULT_PATH_FILE, PATHS_DIR};
pub use recent::{RecentProjects, MAX_RECENT_PROJECTS};
pub use resolver::{resolve_project_dir, DirProbe, FsProbe, PATHS_LEAF_DIR, REPO_DEPLOY_CHAIN};
