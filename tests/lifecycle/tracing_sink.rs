//! Manager wired to the tracing sink.

use std::sync::Arc;

use certplane::backends::InMemoryCertificateBackend;
use certplane::events::TracingEventSink;
use certplane::CertificateLifecycleManager;
use tracing_test::traced_test;

use super::support::*;

#[traced_test]
#[tokio::test]
async fn events_are_logged_with_owner() {
    let manager = CertificateLifecycleManager::new(
        Arc::new(InMemoryCertificateBackend::with_quota(0)),
        Arc::new(TracingEventSink::new()),
    );

    let _ = manager.create("mcrt-1", &mcrt()).await;

    assert!(logs_contain("TooManyCertificates"));
    assert!(logs_contain("default/shop"));
}
