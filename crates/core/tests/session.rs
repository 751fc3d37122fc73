mod common;

use common::{MemoryWorkspace, RecordingPresenter, Shown};
use snipscope_api::ScanConfig;
use snipscope_core::session::{STATUS_INCLUDED, STATUS_NOT_INCLUDED};
use snipscope_core::{Session, StatusReport};
use std::sync::Arc;
use tokio::sync::Notify;

fn theme_corpus() -> MemoryWorkspace {
    MemoryWorkspace::new(
        Some("/repo"),
        &[
            ("/repo/snippets/card.liquid", Some("<div>{{ product.title }}</div>")),
            ("/repo/snippets/orphan.liquid", Some("<span></span>")),
            ("/repo/sections/product.liquid", Some(r#"{% render "card" %}"#)),
            ("/repo/templates/index.liquid", Some("no match here")),
        ],
    )
}

fn session(workspace: MemoryWorkspace) -> (Arc<Session>, Arc<RecordingPresenter>) {
    let presenter = Arc::new(RecordingPresenter::default());
    let session = Session::new(Arc::new(workspace), presenter.clone(), ScanConfig::default());
    (Arc::new(session), presenter)
}

#[tokio::test]
async fn test_included_snippet() {
    let (session, presenter) = session(theme_corpus().with_active("/repo/snippets/card.liquid"));

    let report = session.refresh().await;
    assert_eq!(
        report,
        StatusReport::Included(vec!["sections/product.liquid".to_string()])
    );

    let includes = session.show_includes().await;
    assert_eq!(includes, vec!["sections/product.liquid"]);
    assert_eq!(
        presenter.events(),
        vec![
            Shown::Active(STATUS_INCLUDED.to_string()),
            Shown::Message("Included in: sections/product.liquid".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_orphan_snippet() {
    let (session, presenter) = session(theme_corpus().with_active("/repo/snippets/orphan.liquid"));

    assert_eq!(session.refresh().await, StatusReport::NotIncluded);
    assert!(session.show_includes().await.is_empty());
    assert_eq!(
        presenter.events(),
        vec![Shown::Warning(STATUS_NOT_INCLUDED.to_string())]
    );
}

#[tokio::test]
async fn test_non_fragment_hides_indicator() {
    let (session, presenter) = session(theme_corpus().with_active("/repo/templates/index.liquid"));

    assert_eq!(session.refresh().await, StatusReport::Hidden);
    assert!(session.show_includes().await.is_empty());
    assert_eq!(presenter.events(), vec![Shown::Hidden]);
}

#[tokio::test]
async fn test_no_active_file_hides_indicator() {
    let (session, presenter) = session(theme_corpus());

    assert_eq!(session.refresh().await, StatusReport::Hidden);
    assert_eq!(presenter.events(), vec![Shown::Hidden]);
}

#[tokio::test]
async fn test_without_root_paths_stay_absolute() {
    let mut workspace = theme_corpus().with_active("/repo/snippets/card.liquid");
    workspace.root = None;
    let (session, _) = session(workspace);

    let (_, includes) = session.includes().await;
    assert_eq!(includes, vec!["/repo/sections/product.liquid"]);
}

#[tokio::test]
async fn test_stale_refresh_is_not_presented() {
    let entered = Arc::new(Notify::new());
    let release = Arc::new(Notify::new());
    let mut workspace = theme_corpus().with_active("/repo/snippets/orphan.liquid");
    workspace.hold_first_listing = Some((entered.clone(), release.clone()));
    let workspace = Arc::new(workspace);

    let presenter = Arc::new(RecordingPresenter::default());
    let session = Arc::new(Session::new(
        workspace.clone(),
        presenter.clone(),
        ScanConfig::default(),
    ));

    // First refresh starts for the orphan and stalls during discovery.
    let slow = tokio::spawn({
        let session = session.clone();
        async move { session.refresh().await }
    });
    entered.notified().await;

    // Focus moves on; the newer refresh completes first.
    workspace.set_active(Some("/repo/snippets/card.liquid"));
    let fresh = session.refresh().await;
    assert!(matches!(fresh, StatusReport::Included(_)));

    release.notify_one();
    let stale = slow.await.unwrap();
    assert_eq!(stale, StatusReport::NotIncluded);

    assert_eq!(
        presenter.events(),
        vec![Shown::Active(STATUS_INCLUDED.to_string())]
    );
}
