//! In-memory GitHub and clone doubles that record every call in order.

#![allow(dead_code)]

use repo_sweeper::{
    ApiError, CloneError, PageInfo, PageRequest, RepositoryCloner, RepositoryHost, RepositoryNode,
    RepositoryPage, RunConfig, Visibility,
};
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// A call observed by one of the doubles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    FetchPage { cursor: Option<String> },
    UpdateVisibility { repo: String, private: bool },
    CloneStarted { url: String, destination: PathBuf },
    CloneFinished { url: String },
    Delete { repo: String },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn new_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<Call> {
    log.lock().unwrap().clone()
}

/// How the fake answers a visibility update for a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityBehaviour {
    Apply,
    Reject,
    Ignore,
}

pub struct FakeGitHub {
    log: CallLog,
    pages: Mutex<VecDeque<Result<RepositoryPage, ApiError>>>,
    rejected_visibility: HashSet<String>,
    ignored_visibility: HashSet<String>,
    rejected_delete: HashSet<String>,
}

impl FakeGitHub {
    pub fn new(log: CallLog, pages: Vec<Result<RepositoryPage, ApiError>>) -> Self {
        Self {
            log,
            pages: Mutex::new(pages.into()),
            rejected_visibility: HashSet::new(),
            ignored_visibility: HashSet::new(),
            rejected_delete: HashSet::new(),
        }
    }

    pub fn with_visibility(mut self, repo: &str, behaviour: VisibilityBehaviour) -> Self {
        match behaviour {
            VisibilityBehaviour::Apply => {}
            VisibilityBehaviour::Reject => {
                self.rejected_visibility.insert(repo.to_string());
            }
            VisibilityBehaviour::Ignore => {
                self.ignored_visibility.insert(repo.to_string());
            }
        }
        self
    }

    pub fn rejecting_delete(mut self, repo: &str) -> Self {
        self.rejected_delete.insert(repo.to_string());
        self
    }

    fn record(&self, call: Call) {
        self.log.lock().unwrap().push(call);
    }
}

impl RepositoryHost for FakeGitHub {
    async fn fetch_repository_page(
        &self,
        request: &PageRequest<'_>,
    ) -> Result<RepositoryPage, ApiError> {
        self.record(Call::FetchPage {
            cursor: request.cursor.map(str::to_string),
        });
        self.pages
            .lock()
            .unwrap()
            .pop_front()
            .expect("more page requests than pages")
    }

    async fn update_visibility(
        &self,
        name_with_owner: &str,
        visibility: Visibility,
    ) -> Result<bool, ApiError> {
        self.record(Call::UpdateVisibility {
            repo: name_with_owner.to_string(),
            private: visibility.is_private(),
        });

        if self.rejected_visibility.contains(name_with_owner) {
            return Err(ApiError::GitHub {
                status: Some(403),
                message: "Must have admin rights to Repository.".to_string(),
            });
        }
        if self.ignored_visibility.contains(name_with_owner) {
            return Ok(!visibility.is_private());
        }
        Ok(visibility.is_private())
    }

    async fn delete_repository(&self, name_with_owner: &str) -> Result<(), ApiError> {
        self.record(Call::Delete {
            repo: name_with_owner.to_string(),
        });
        tokio::task::yield_now().await;

        if self.rejected_delete.contains(name_with_owner) {
            let body = r#"{"message":"Must have admin rights to Repository."}"#;
            return repo_sweeper::github::parse_delete_response(403, body);
        }
        repo_sweeper::github::parse_delete_response(204, "")
    }
}

pub struct FakeCloner {
    log: CallLog,
    failing_urls: HashSet<String>,
}

impl FakeCloner {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            failing_urls: HashSet::new(),
        }
    }

    pub fn failing(mut self, url: &str) -> Self {
        self.failing_urls.insert(url.to_string());
        self
    }
}

impl RepositoryCloner for FakeCloner {
    async fn clone_repository(&self, url: &str, destination: &Path) -> Result<(), CloneError> {
        self.log.lock().unwrap().push(Call::CloneStarted {
            url: url.to_string(),
            destination: destination.to_path_buf(),
        });
        tokio::task::yield_now().await;

        if self.failing_urls.contains(url) {
            return Err(CloneError::Failed {
                action: "clone",
                message: "fatal: repository not found".to_string(),
            });
        }

        self.log.lock().unwrap().push(Call::CloneFinished {
            url: url.to_string(),
        });
        Ok(())
    }
}

pub fn node(name_with_owner: &str) -> RepositoryNode {
    let (_, name) = name_with_owner.split_once('/').unwrap();
    RepositoryNode {
        name: name.to_string(),
        name_with_owner: name_with_owner.to_string(),
        url: repo_url(name_with_owner),
    }
}

pub fn repo_url(name_with_owner: &str) -> String {
    format!("https://github.com/{name_with_owner}")
}

pub fn page(names: &[&str], end_cursor: Option<&str>, has_next_page: bool) -> RepositoryPage {
    RepositoryPage {
        page_info: PageInfo {
            end_cursor: end_cursor.map(str::to_string),
            has_next_page,
        },
        nodes: names.iter().map(|name| node(name)).collect(),
    }
}

pub fn config(account: &str, output_dir: &Path) -> RunConfig {
    RunConfig::new(account, "ghp_test")
        .unwrap()
        .with_output_dir(output_dir.to_path_buf())
}
