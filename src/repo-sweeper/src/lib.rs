#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod clone;
pub mod config;
pub mod discovery;
pub mod github;
pub mod pipeline;
pub mod runner;
pub mod summary;

pub use clone::{authenticated_url, CloneError, GitCloner, RepositoryCloner};
pub use config::{
    resolve_run_config, Actions, ConfigError, FileConfig, RunConfig, Visibility, DEFAULT_TIMEOUT,
};
pub use discovery::{discover_repositories, is_owned_by, EnumerationError, RepositoryRef};
pub use github::{
    ApiError, OctocrabHost, PageInfo, PageRequest, RepositoryHost, RepositoryNode, RepositoryPage,
    PAGE_SIZE,
};
pub use pipeline::{planned_steps, process_repository, ActionError, ActionOutcome, Step};
pub use runner::{Runner, RunnerError};
pub use summary::RunSummary;
