use crate::common::*;
use app_errors::{chain, new_multi_error, wrap, AppError, AppErrors, BaseError};
use serial_test::serial;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
struct Leaf;

impl fmt::Display for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("leaf")
    }
}

impl Error for Leaf {}

#[derive(Debug)]
struct Layer(Option<Box<dyn Error + Send + Sync>>);

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("layer")
    }
}

impl Error for Layer {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.0.as_deref().map(|e| e as &(dyn Error + 'static))
    }
}

#[test]
fn unwrap_multi_shapes() {
    assert!(chain::unwrap_multi(&Leaf).is_empty());
    assert!(chain::unwrap_multi(&Layer(None)).is_empty());

    let layer = Layer(Some(Box::new(BaseError::new("ErrTest1"))));
    let next = chain::unwrap_multi(&layer);
    assert_eq!(next.len(), 1);
    assert_eq!(next[0].to_string(), "ErrTest1");

    assert!(chain::unwrap_multi(&AppErrors::new()).is_empty());
}

#[test]
#[serial]
fn unwrap_multi_yields_children_of_aggregates() {
    init_config(ok_config());

    let joined: AppErrors = [AppError::new(err_test1()), AppError::new(err_test2())].into_iter().collect();
    let next = chain::unwrap_multi(&joined);
    assert_eq!(next.iter().map(|e| e.to_string()).collect::<Vec<_>>(), ["ErrTest1", "ErrTest2"]);

    let multi = new_multi_error(joined.iter().cloned()).unwrap();
    assert_eq!(chain::unwrap_multi(&multi).len(), 2);
}

#[test]
#[serial]
fn unwrap_to_root_follows_first_branch() {
    init_config(ok_config());
    let e1 = err_test1();

    let e3 = wrap(wrap(wrap(e1.clone())));
    assert!(std::ptr::addr_eq(chain::unwrap_to_root(&*e3), &*e1));

    let multi = new_multi_error([AppError::new(e1.clone()), AppError::new(err_test2())]).unwrap();
    assert!(std::ptr::addr_eq(chain::unwrap_to_root(&multi), &*e1));

    assert_eq!(chain::unwrap_to_root(&Leaf).to_string(), "leaf");
}

#[test]
#[serial]
fn find_locates_type_in_chain() {
    init_config(ok_config());

    let ae = AppError::new(err_test1());
    let layer = Layer(Some(Box::new(ae)));

    assert_eq!(chain::find::<AppError>(&layer).map(|e| e.to_string()), Some("ErrTest1".to_owned()));
    assert!(chain::find::<BaseError>(&layer).is_some());
    assert!(chain::find::<Leaf>(&layer).is_none());
}
