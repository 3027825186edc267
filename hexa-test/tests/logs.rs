use std::sync::Arc;

use hexa_core::failure::{self, NOT_AVAILABLE};
use hexa_core::{Cause, ErrorCategory};
use hexa_data::prelude::*;
use hexa_test::{LogCapture, MemoryStore};

fn io_cause(msg: &str) -> Cause {
    Arc::new(std::io::Error::new(std::io::ErrorKind::Other, msg.to_string()))
}

#[test]
fn failure_is_logged_once_at_error_level() {
    let logs = LogCapture::new();
    let _guard = logs.install();

    let err = failure::validation_fmt("order {} has no lines", &[&42]);
    assert_eq!(err.category(), ErrorCategory::Validation);

    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "{lines:?}");
    let line = &lines[0];
    assert!(line.contains("ERROR"), "{line}");
    assert!(line.contains("order 42 has no lines"), "{line}");
    assert!(line.contains("category=VALIDATION"), "{line}");
    assert!(line.contains(NOT_AVAILABLE), "{line}");
}

#[test]
fn cause_is_logged_when_present() {
    let logs = LogCapture::new();
    let _guard = logs.install();

    failure::database_caused(io_cause("disk full"), "cannot write {}", &[&"orders"]);

    assert!(logs.contains("category=DATABASE"));
    assert!(logs.contains("cannot write orders"));
    assert!(logs.contains("cause=disk full"));
    assert!(!logs.contains(NOT_AVAILABLE));
}

#[test]
fn cause_only_failure_logs_default_message() {
    let logs = LogCapture::new();
    let _guard = logs.install();

    failure::general_cause(io_cause("socket closed"));

    assert!(logs.contains("category=GENERAL"));
    assert!(logs.contains(hexa_core::DEFAULT_MESSAGE));
    assert!(logs.contains("socket closed"));
}

#[test]
fn every_category_is_logged_under_its_name() {
    let logs = LogCapture::new();
    let _guard = logs.install();

    for category in ErrorCategory::ALL {
        failure::of(category, "probe");
        assert!(logs.contains(&format!("category={category}")), "{category}");
        logs.clear();
    }
}

#[test]
fn constructing_a_service_error_directly_logs_nothing() {
    let logs = LogCapture::new();
    let _guard = logs.install();

    hexa_core::ServiceError::categorized(ErrorCategory::Service, "quiet");
    assert!(logs.contents().is_empty());
}

#[tokio::test]
async fn guard_rejections_are_logged_as_validation() {
    let logs = LogCapture::new();
    let _guard = logs.install();

    let store = MemoryStore::<Probe>::sequential();
    store.find_by_id(None).await.unwrap_err();

    assert!(logs.contains("category=VALIDATION"));
    assert!(logs.contains("must be present"));
}

#[derive(Debug, Clone)]
struct Probe {
    id: Option<u64>,
}

impl Entity for Probe {
    type Id = u64;

    fn id(&self) -> Option<&u64> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: u64) {
        self.id = Some(id);
    }
}
