//! Outcome/event properties of each lifecycle operation.

use std::collections::HashSet;
use std::sync::Arc;

use certplane::backends::{ApiError, BackendError};
use certplane::events::EventReason;
use certplane::naming::random_name;
use proptest::prelude::*;

use super::support::*;

fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread().enable_all().build().unwrap()
}

/// Any backend error that is neither a 404 nor a 403 quota failure.
fn other_error() -> impl Strategy<Value = BackendError> {
    prop_oneof![
        (100u16..600, "[a-z ]{0,24}", proptest::collection::vec("[a-zA-Z]{1,12}", 0..3))
            .prop_filter("not a classified status", |(code, _, reasons)| {
                *code != 404 && !(*code == 403 && reasons.iter().any(|r| r == "quotaExceeded"))
            })
            .prop_map(|(code, message, reasons)| {
                let mut err = ApiError::new(code, message);
                for reason in reasons {
                    err = err.with_item(reason, "");
                }
                BackendError::from(err)
            }),
        "[a-z ]{1,24}".prop_map(BackendError::transport),
        "[a-z ]{1,24}".prop_map(BackendError::other),
    ]
}

proptest! {
    #[test]
    fn create_success_emits_one_create_event(name in "[a-z][a-z0-9-]{0,40}") {
        let (manager, events) = manager_with(Arc::new(ScriptedBackend::ok()));

        let result = runtime().block_on(manager.create(&name, &mcrt()));

        prop_assert!(result.is_ok());
        prop_assert_eq!(events.len(), 1);
        prop_assert_eq!(events.count(EventReason::Create), 1);
        prop_assert_eq!(&events.events()[0].message, &format!("Create SslCertificate {}", name));
    }

    #[test]
    fn create_other_error_emits_one_backend_error(err in other_error()) {
        let (manager, events) = manager_with(Arc::new(ScriptedBackend::failing(err.clone())));

        let result = runtime().block_on(manager.create("mcrt-1", &mcrt()));

        prop_assert_eq!(result, Err(err));
        prop_assert_eq!(events.len(), 1);
        prop_assert_eq!(events.count(EventReason::BackendError), 1);
    }

    #[test]
    fn delete_other_error_emits_iff_owner_present(err in other_error(), owned in any::<bool>()) {
        let (manager, events) = manager_with(Arc::new(ScriptedBackend::failing(err.clone())));
        let owner = mcrt();
        let desired = owned.then_some(&owner);

        let result = runtime().block_on(manager.delete("mcrt-1", desired));

        prop_assert_eq!(result, Err(err));
        prop_assert_eq!(events.count(EventReason::BackendError), usize::from(owned));
        prop_assert_eq!(events.len(), usize::from(owned));
    }

    #[test]
    fn exists_and_get_errors_drop_the_value(err in other_error(), owned in any::<bool>()) {
        let backend = Arc::new(ScriptedBackend {
            err: Some(err.clone()),
            exists: true,
            certificate: Some(issued("mcrt-1")),
            ..ScriptedBackend::default()
        });
        let (manager, events) = manager_with(backend);
        let owner = mcrt();
        let desired = owned.then_some(&owner);

        let rt = runtime();
        prop_assert_eq!(rt.block_on(manager.exists("mcrt-1", desired)), Err(err.clone()));
        prop_assert_eq!(rt.block_on(manager.get("mcrt-1", desired)), Err(err));
        prop_assert_eq!(events.count(EventReason::BackendError), 2 * usize::from(owned));
        prop_assert_eq!(events.len(), 2 * usize::from(owned));
    }
}

#[tokio::test]
async fn create_quota_exceeded_emits_only_too_many_certificates() {
    let (manager, events) = manager_with(Arc::new(ScriptedBackend::failing(quota_exceeded())));

    let result = manager.create("mcrt-1", &mcrt()).await;

    assert_eq!(result, Err(quota_exceeded()));
    assert_eq!(events.len(), 1);
    assert_eq!(events.count(EventReason::TooManyCertificates), 1);

    let event = &events.events()[0];
    assert_eq!(event.object.to_string(), "default/shop");
    assert!(event.message.starts_with("Too many certificates: "));
}

#[tokio::test]
async fn delete_not_found_is_silent_success() {
    for desired in [None, Some(mcrt())] {
        let (manager, events) = manager_with(Arc::new(ScriptedBackend::failing(not_found())));

        assert_eq!(manager.delete("mcrt-1", desired.as_ref()).await, Ok(()));
        assert!(events.is_empty(), "owner present: {}", desired.is_some());
    }
}

#[tokio::test]
async fn delete_success_emits_only_with_owner() {
    let (manager, events) = manager_with(Arc::new(ScriptedBackend::ok()));
    assert_eq!(manager.delete("mcrt-1", None).await, Ok(()));
    assert!(events.is_empty());

    let owner = mcrt();
    assert_eq!(manager.delete("mcrt-1", Some(&owner)).await, Ok(()));
    assert_eq!(events.len(), 1);
    assert_eq!(events.count(EventReason::Delete), 1);
}

#[tokio::test]
async fn exists_and_get_pass_values_through_without_events() {
    let backend = Arc::new(ScriptedBackend {
        exists: true,
        certificate: Some(issued("mcrt-1")),
        ..ScriptedBackend::default()
    });
    let (manager, events) = manager_with(backend);
    let owner = mcrt();

    for desired in [None, Some(&owner)] {
        assert_eq!(manager.exists("mcrt-1", desired).await, Ok(true));
        assert_eq!(manager.get("mcrt-1", desired).await, Ok(Some(issued("mcrt-1"))));
    }
    assert!(events.is_empty());

    let (manager, events) = manager_with(Arc::new(ScriptedBackend::ok()));
    assert_eq!(manager.exists("mcrt-1", Some(&owner)).await, Ok(false));
    assert_eq!(manager.get("mcrt-1", Some(&owner)).await, Ok(None));
    assert!(events.is_empty());
}

#[tokio::test]
async fn each_operation_calls_the_backend_once() {
    let backend = Arc::new(ScriptedBackend::failing(normal()));
    let (manager, _events) = manager_with(backend.clone());
    let owner = mcrt();

    let _ = manager.create("mcrt-1", &owner).await;
    let _ = manager.delete("mcrt-1", Some(&owner)).await;
    let _ = manager.exists("mcrt-1", Some(&owner)).await;
    let _ = manager.get("mcrt-1", Some(&owner)).await;

    assert_eq!(backend.calls(), 4);
}

#[test]
fn thousand_random_names_are_well_formed_and_distinct() {
    let mut seen = HashSet::new();
    let mut previous = String::new();

    for _ in 0..1000 {
        let name = random_name().expect("entropy available");
        assert!(!name.is_empty() && name.len() < 64, "bad name {}", name);
        assert_ne!(name, previous);
        previous = name.clone();
        seen.insert(name);
    }

    assert_eq!(seen.len(), 1000);
}
