use crate::common::*;
use app_errors::{chain, stack_trace, wrap, wrap_context, wrapf, AppError, StackError};
use serial_test::serial;
use std::sync::Arc;

#[test]
#[serial]
fn wrap_adds_stack_once() {
    init_config(ok_config());
    let e1 = err_test1();

    let ae1 = wrap(e1.clone());
    let ae2 = wrap(ae1.clone());

    assert!(ae1.is::<StackError>());
    assert!(Arc::ptr_eq(&ae1, &ae2));
    assert!(chain::is(&*ae1, &*e1));
    assert!(chain::is(&*ae2, &*ae1));
    assert_eq!(ae1.to_string(), "ErrTest1");
}

#[test]
#[serial]
fn wrap_fn_replaces_stack_capture() {
    init_config(no_stack_trace_config());
    let e1 = err_test1();

    let ae1 = wrap(e1.clone());
    let ae2 = wrap(ae1.clone());

    assert!(Arc::ptr_eq(&ae1, &e1));
    assert!(chain::is(&*ae2, &*ae1));
    assert!(stack_trace(&*ae1).is_empty());
    assert!(stack_trace(&AppError::new(e1)).is_empty());
}

#[test]
#[serial]
fn wrapf_formats_and_wraps() {
    init_config(ok_config());
    let e1 = err_test1();

    let ae1 = wrapf!(e1.clone(), "step {}", 1);
    let ae2 = wrap_context(ae1.clone(), "outer");

    assert_eq!(ae1.to_string(), "step 1: ErrTest1");
    assert_eq!(ae2.to_string(), "outer: step 1: ErrTest1");
    assert!(chain::is(&*ae1, &*e1));
    assert!(chain::is(&*ae2, &*ae1));
    assert_eq!(wrapf!("plain {}", "message").to_string(), "plain message");
}

#[test]
#[serial]
fn stack_trace_is_found_through_layers() {
    init_config(ok_config());
    let e1 = err_test1();

    let ae1 = wrap(e1.clone());
    let ae2 = wrap_context(ae1.clone(), "ctx");

    assert!(!stack_trace(&*ae1).is_empty());
    assert!(!stack_trace(&*ae2).is_empty());
    assert!(!stack_trace(&AppError::new(e1.clone())).is_empty());
    assert!(stack_trace(&*e1).is_empty());
    assert!(stack_trace(&*err_test2()).is_empty());
}

#[test]
#[serial]
fn stack_depth_is_bounded() {
    init_config(app_errors::Config { max_stack_depth: 2, ..ok_config() });

    let frames = stack_trace(&*wrap(err_test1()));

    assert!(!frames.is_empty());
    assert!(frames.len() <= 2);
}

#[test]
#[serial]
fn stack_starts_at_caller() {
    init_config(app_errors::Config { max_stack_depth: 3, ..ok_config() });

    let frames = stack_trace(&AppError::new(err_test1()));

    assert!(!frames.is_empty());
    assert!(frames.len() <= 3);
    assert!(frames.iter().all(|frame| !frame.contains("app_errors::")), "{frames:?}");
    assert!(frames[0].contains("stack_starts_at_caller"), "{frames:?}");
}
