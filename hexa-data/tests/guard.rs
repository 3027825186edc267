use hexa_core::ErrorCategory;
use hexa_data::guard::{require, require_each};

#[test]
fn require_passes_present_values_through() {
    assert_eq!(require(Some(5), "id").unwrap(), 5);
}

#[test]
fn require_rejects_absent_values() {
    let err = require::<u32>(None, "id").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(err.message(), "id must be present");
}

#[test]
fn require_each_unwraps_every_element() {
    let values = require_each(Some(vec![Some(1), Some(2), Some(3)]), "ids").unwrap();
    assert_eq!(values, vec![1, 2, 3]);
}

#[test]
fn require_each_accepts_empty_collections() {
    let values = require_each::<u8>(Some(Vec::new()), "ids").unwrap();
    assert!(values.is_empty());
}

#[test]
fn require_each_rejects_absent_collection() {
    let err = require_each::<u8>(None, "ids").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(err.message(), "ids must be present");
}

#[test]
fn require_each_reports_first_absent_element() {
    let err = require_each(Some(vec![Some(1), None, Some(3), None]), "ids").unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Validation);
    assert_eq!(err.message(), "ids contains an absent element at index 1");
}
