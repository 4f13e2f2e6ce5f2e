use crate::common::*;
use app_errors::{new_multi_error, registry, wrap, wrap_context, AppError, AppErrors, BaseError, ErrorConfig};
use std::sync::Arc;

#[test]
fn add_returns_same_error_and_normalizes() {
    let e1 = BaseError::shared("ErrTokenInvalid");

    let e2 = registry::add(e1.clone(), ErrorConfig::default());
    let cfg = registry::get_error_config(&*e1).unwrap();

    assert!(Arc::ptr_eq(&e1, &e2));
    assert_eq!(cfg.code, "ErrTokenInvalid");
    assert_eq!(cfg.trans_key, "ErrTokenInvalid");
    registry::remove(&e1);
}

#[test]
fn add_keeps_explicit_code_as_trans_key() {
    let e1 = BaseError::shared("redis: nil");

    registry::add(e1.clone(), ErrorConfig::default().with_status(404).with_code("ErrKeyNotFound"));
    let cfg = registry::get_error_config(&*e1).unwrap();

    assert_eq!(cfg.status, 404);
    assert_eq!(cfg.code, "ErrKeyNotFound");
    assert_eq!(cfg.trans_key, "ErrKeyNotFound");
    registry::remove(&e1);
}

#[test]
fn create_makes_distinct_errors() {
    let e1 = registry::create("ErrTokenInvalid", ErrorConfig::default().with_trans_key("TokenInvalid"));
    let e2 = registry::create("ErrTokenInvalid", ErrorConfig::default().with_status(401));

    assert_eq!(e1.to_string(), "ErrTokenInvalid");
    assert!(!Arc::ptr_eq(&e1, &e2));
    assert_eq!(registry::get_error_config(&*e1).unwrap().trans_key, "TokenInvalid");
    assert_eq!(registry::get_error_config(&*e2).unwrap().status, 401);
    registry::remove(&e1);
    registry::remove(&e2);
}

#[test]
#[should_panic(expected = "error code must not be empty")]
fn create_rejects_empty_code() {
    let _ = registry::create("", ErrorConfig::default());
}

#[test]
fn remove_forgets_entry() {
    registry::remove(&err_test1());

    let e = registry::create("ErrBadProductSKU", ErrorConfig::default());
    assert!(registry::get_error_config(&*e).is_some());
    registry::remove(&e);
    assert!(registry::get_error_config(&*e).is_none());
}

#[test]
fn lookup_follows_chain() {
    let e1 = err_test1();
    let _m = map_error(&e1, ErrorConfig::default().with_status(1234));

    let direct = registry::get_error_config(&*e1).unwrap();
    let w1 = wrap(e1.clone());
    let w2 = wrap(w1.clone());
    let w3 = wrap_context(w2, "blah");
    let found = registry::get_error_config(&*w3).unwrap();

    assert_eq!(direct.status, 1234);
    assert!(Arc::ptr_eq(&direct, &found));
    assert!(registry::get_error_config(&AppError::new(w3)).is_some());
}

#[test]
fn lookup_misses_unregistered_and_same_message() {
    let e1 = err_test1();
    let _m = map_error(&e1, ErrorConfig::default().with_status(1234));

    assert!(registry::get_error_config(&*err_test2()).is_none());
    assert!(registry::get_error_config(&*err_test1()).is_none());
}

#[test]
fn lookup_does_not_descend_into_aggregates() {
    let e1 = err_test1();
    let _m = map_error(&e1, ErrorConfig::default().with_status(1234));

    let joined: AppErrors = [AppError::new(e1.clone()), AppError::new(err_test2())].into_iter().collect();
    let multi = new_multi_error(joined.iter().cloned()).unwrap();

    assert!(registry::get_error_config(&joined).is_none());
    assert!(registry::get_error_config(&multi).is_none());
}
