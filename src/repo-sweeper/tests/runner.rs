mod common;

use common::{calls, config, new_log, page, repo_url, Call, FakeCloner, FakeGitHub, VisibilityBehaviour};
use repo_sweeper::{Actions, ApiError, EnumerationError, Runner, RunnerError};
use tempfile::TempDir;

#[tokio::test]
async fn clone_only_run_clones_each_repository_once() {
    let temp = TempDir::new().unwrap();
    let log = new_log();
    let host = FakeGitHub::new(log.clone(), vec![Ok(page(&["org/a", "org/b"], Some("c1"), false))]);
    let cloner = FakeCloner::new(log.clone());
    let config = config("org", temp.path())
        .with_organization(true)
        .with_actions(Actions {
            clone: true,
            ..Actions::default()
        });

    let runner = Runner::with_transport(config, host, cloner);
    let summary = runner.run().await.unwrap();

    assert!(temp.path().join("org").is_dir());
    assert_eq!(
        calls(&log),
        vec![
            Call::FetchPage { cursor: None },
            Call::CloneStarted {
                url: repo_url("org/a"),
                destination: temp.path().join("org").join("a"),
            },
            Call::CloneFinished { url: repo_url("org/a") },
            Call::CloneStarted {
                url: repo_url("org/b"),
                destination: temp.path().join("org").join("b"),
            },
            Call::CloneFinished { url: repo_url("org/b") },
        ]
    );
    assert_eq!(summary.repositories_discovered, 2);
    assert_eq!(summary.cloned, 2);
    assert_eq!(summary.repositories_succeeded, 2);
    assert!(!summary.has_failures());
}

#[tokio::test]
async fn failing_repository_does_not_stop_the_next() {
    let temp = TempDir::new().unwrap();
    let log = new_log();
    let host = FakeGitHub::new(log.clone(), vec![Ok(page(&["acme/a", "acme/b"], None, false))])
        .with_visibility("acme/a", VisibilityBehaviour::Reject);
    let cloner = FakeCloner::new(log.clone());
    let config = config("acme", temp.path()).with_actions(Actions {
        make_private: true,
        clone: true,
        delete: true,
        ..Actions::default()
    });

    let summary = Runner::with_transport(config, host, cloner)
        .run()
        .await
        .unwrap();

    assert_eq!(
        calls(&log),
        vec![
            Call::FetchPage { cursor: None },
            Call::UpdateVisibility {
                repo: "acme/a".to_string(),
                private: true
            },
            Call::UpdateVisibility {
                repo: "acme/b".to_string(),
                private: true
            },
            Call::CloneStarted {
                url: repo_url("acme/b"),
                destination: temp.path().join("acme").join("b"),
            },
            Call::CloneFinished { url: repo_url("acme/b") },
            Call::Delete {
                repo: "acme/b".to_string()
            },
        ]
    );
    assert_eq!(summary.repositories_failed, 1);
    assert_eq!(summary.repositories_succeeded, 1);
    assert_eq!(summary.visibility_updated, 1);
    assert_eq!(summary.deleted, 1);
}

#[tokio::test]
async fn enumerates_all_pages_and_skips_foreign_repositories() {
    let temp = TempDir::new().unwrap();
    let log = new_log();

    let first: Vec<String> = (0..100).map(|i| format!("acme/repo-{i}")).collect();
    let first: Vec<&str> = first.iter().map(String::as_str).collect();
    let second = ["acme/repo-100", "partner/shared", "ACME/repo-101"];
    let host = FakeGitHub::new(
        log.clone(),
        vec![
            Ok(page(&first, Some("c1"), true)),
            Ok(page(&second, Some("c2"), false)),
        ],
    );
    let cloner = FakeCloner::new(log.clone());
    let config = config("acme", temp.path()).with_actions(Actions {
        delete: true,
        ..Actions::default()
    });

    let summary = Runner::with_transport(config, host, cloner)
        .run()
        .await
        .unwrap();

    let calls = calls(&log);
    let pages: Vec<_> = calls
        .iter()
        .filter(|call| matches!(call, Call::FetchPage { .. }))
        .collect();
    let deletes: Vec<_> = calls
        .iter()
        .filter_map(|call| match call {
            Call::Delete { repo } => Some(repo.as_str()),
            _ => None,
        })
        .collect();

    assert_eq!(pages.len(), 2);
    assert_eq!(summary.repositories_discovered, 102);
    assert_eq!(deletes.len(), 102);
    assert!(!deletes.contains(&"partner/shared"));
    assert_eq!(deletes.last(), Some(&"ACME/repo-101"));
    assert!(!temp.path().join("acme").exists());
}

#[tokio::test]
async fn enumeration_failure_is_fatal() {
    let temp = TempDir::new().unwrap();
    let log = new_log();
    let host = FakeGitHub::new(
        log.clone(),
        vec![
            Ok(page(&["acme/a"], Some("c1"), true)),
            Err(ApiError::GitHub {
                status: Some(401),
                message: "Bad credentials".to_string(),
            }),
        ],
    );
    let cloner = FakeCloner::new(log.clone());
    let config = config("acme", temp.path()).with_actions(Actions {
        clone: true,
        delete: true,
        ..Actions::default()
    });

    let error = Runner::with_transport(config, host, cloner)
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        RunnerError::Enumeration(EnumerationError::Page { page: 2, .. })
    ));
    assert!(error.to_string().contains("Bad credentials"));
    assert_eq!(calls(&log).len(), 2);
    assert!(!temp.path().join("acme").exists());
}

#[tokio::test]
async fn dry_run_makes_no_changes() {
    let temp = TempDir::new().unwrap();
    let log = new_log();
    let host = FakeGitHub::new(log.clone(), vec![Ok(page(&["acme/a", "acme/b"], None, false))]);
    let cloner = FakeCloner::new(log.clone());
    let config = config("acme", temp.path())
        .with_dry_run(true)
        .with_actions(Actions {
            make_public: true,
            clone: true,
            delete: true,
            ..Actions::default()
        });

    let summary = Runner::with_transport(config, host, cloner)
        .run()
        .await
        .unwrap();

    assert_eq!(calls(&log), vec![Call::FetchPage { cursor: None }]);
    assert!(summary.dry_run);
    assert_eq!(summary.repositories_discovered, 2);
    assert_eq!(summary.repositories_succeeded, 0);
    assert!(!temp.path().join("acme").exists());
}

#[tokio::test]
async fn existing_account_directory_is_reused() {
    let temp = TempDir::new().unwrap();
    std::fs::create_dir_all(temp.path().join("acme")).unwrap();
    let log = new_log();
    let host = FakeGitHub::new(log.clone(), vec![Ok(page(&["acme/a"], None, false))]);
    let cloner = FakeCloner::new(log.clone());
    let config = config("acme", temp.path()).with_actions(Actions {
        clone: true,
        ..Actions::default()
    });

    let summary = Runner::with_transport(config, host, cloner)
        .run()
        .await
        .unwrap();

    assert_eq!(summary.cloned, 1);
}

#[tokio::test]
async fn clone_directory_is_created_for_empty_account() {
    let temp = TempDir::new().unwrap();
    let log = new_log();
    let host = FakeGitHub::new(log.clone(), vec![Ok(page(&[], None, false))]);
    let cloner = FakeCloner::new(log.clone());
    let config = config("acme", temp.path()).with_actions(Actions {
        clone: true,
        ..Actions::default()
    });

    let summary = Runner::with_transport(config, host, cloner)
        .run()
        .await
        .unwrap();

    assert!(temp.path().join("acme").is_dir());
    assert_eq!(summary.repositories_discovered, 0);
    assert_eq!(calls(&log), vec![Call::FetchPage { cursor: None }]);
}
