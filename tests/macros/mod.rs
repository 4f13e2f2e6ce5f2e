use crate::common::*;
use app_errors::{app_error, chain, wrapf, Language};
use serial_test::serial;

#[test]
#[serial]
fn app_error_records_debug_message() {
    init_config(ok_config());
    let e1 = err_test1();

    let plain = app_error!(e1.clone());
    let with_debug = app_error!(e1.clone(), "user {} at {}", 42, "checkout");

    assert_eq!(plain.debug(), "");
    assert_eq!(with_debug.debug(), "user 42 at checkout");
    assert!(with_debug.is(&*e1));
    assert_eq!(with_debug.build(&Language::EN, &[]).error_info.debug, "user 42 at checkout");
}

#[test]
#[serial]
fn wrapf_keeps_root_reachable() {
    init_config(ok_config());
    let e1 = err_test1();

    let wrapped = wrapf!(e1.clone(), "loading {}", "cart");
    let err = app_error!(wrapped.clone());

    assert_eq!(err.to_string(), "loading cart: ErrTest1");
    assert!(err.is(&*wrapped));
    assert_eq!(chain::unwrap_to_root(&err).to_string(), "ErrTest1");
    // code comes from the root, the message from the whole chain
    let info = err.build(&Language::EN, &[app_errors::BuildOption::no_translation()]).error_info;
    assert_eq!(info.code, "ErrTest1");
    assert_eq!(info.message, "loading cart: ErrTest1");
}
