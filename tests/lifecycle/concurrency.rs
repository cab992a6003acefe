//! One manager shared by many tasks.

use std::collections::HashSet;
use std::sync::Arc;

use certplane::backends::InMemoryCertificateBackend;
use certplane::events::EventReason;
use certplane::naming::random_name;

use super::support::*;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_creates_emit_one_event_each() {
    let backend = Arc::new(InMemoryCertificateBackend::with_quota(20));
    let (manager, events) = manager_with(backend.clone());

    let handles: Vec<_> = (0..50)
        .map(|_| {
            let manager = manager.clone();
            tokio::spawn(async move {
                let name = random_name().expect("name");
                manager.create(&name, &mcrt()).await.map(|()| name)
            })
        })
        .collect();

    let mut created = HashSet::new();
    let mut rejected = 0;
    for handle in handles {
        match handle.await.expect("task") {
            Ok(name) => {
                created.insert(name);
            }
            Err(_) => rejected += 1,
        }
    }

    assert_eq!(created.len(), 20);
    assert_eq!(rejected, 30);
    assert_eq!(backend.len(), 20);
    assert_eq!(events.count(EventReason::Create), 20);
    assert_eq!(events.count(EventReason::TooManyCertificates), 30);
    assert_eq!(events.len(), 50);

    // Sweep everything as orphans: no owner, no events.
    events.clear();
    let sweeps: Vec<_> = created
        .into_iter()
        .map(|name| {
            let manager = manager.clone();
            tokio::spawn(async move { manager.delete(&name, None).await })
        })
        .collect();
    for sweep in sweeps {
        sweep.await.expect("task").expect("delete");
    }

    assert!(backend.is_empty());
    assert!(events.is_empty());
}
