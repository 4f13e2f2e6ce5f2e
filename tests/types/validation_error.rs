use crate::common::*;
use app_errors::{
    info_builder, new_validation_error, new_validation_error_with_builder, AppError, BaseError,
    BuildResult, Config, ErrorInfo, InfoBuilderFn, Language, SharedError,
};
use serial_test::serial;

fn item_builder() -> InfoBuilderFn {
    info_builder(|err, cfg| {
        let message = cfg
            .translation_fn
            .as_ref()
            .and_then(|translate| translate(&cfg.language, &err.to_string(), &Default::default()).ok())
            .unwrap_or_default();
        BuildResult::new(ErrorInfo {
            status: 400,
            code: "ErrValidationItem".into(),
            message,
            ..Default::default()
        })
    })
}

fn third_party_errors() -> Vec<SharedError> {
    vec![
        BaseError::shared("ErrValidation1"),
        BaseError::shared("ErrValidation2"),
        BaseError::shared("ErrValidation3"),
    ]
}

fn assert_items(result: &BuildResult) {
    let info = &result.error_info;
    assert!(result.trans_missing_keys.is_empty());
    assert_eq!(info.status, 400);
    assert_eq!(info.code, "ErrValidation");
    assert_eq!(info.message, "(ErrValidation)-in-en");
    assert_eq!(info.title, "(Bad Request)-in-en");
    assert_eq!(info.inner_errors.len(), 3);
    for (i, item) in info.inner_errors.iter().enumerate() {
        assert_eq!(item.status, 400);
        assert_eq!(item.code, "ErrValidationItem");
        assert_eq!(item.message, format!("(ErrValidation{})-in-en", i + 1));
    }
}

#[test]
#[serial]
fn builder_applies_to_every_item() {
    init_config(ok_config());

    assert!(new_validation_error_with_builder(Some(item_builder()), Vec::new()).is_none());
    let err = new_validation_error_with_builder(Some(item_builder()), third_party_errors()).unwrap();

    assert_items(&err.build(&Language::EN, &[]));
}

#[test]
#[serial]
fn decorated_items_with_own_builders() {
    init_config(ok_config());

    assert!(new_validation_error(Vec::new()).is_none());
    let err = new_validation_error(
        third_party_errors().into_iter().map(|e| AppError::new(e).with_custom_builder(item_builder())),
    )
    .unwrap();

    assert_items(&err.build(&Language::EN, &[]));
}

#[test]
#[serial]
fn process_defaults_drive_status_and_code() {
    init_config(Config {
        default_validation_error_status: 422,
        default_validation_error_code: "ErrUnprocessable".into(),
        ..ok_config()
    });

    let err = new_validation_error_with_builder(None, third_party_errors()).unwrap();
    let info = err.build(&Language::EN, &[]).error_info;

    assert_eq!(info.status, 422);
    assert_eq!(info.code, "ErrUnprocessable");
    assert_eq!(info.message, "(ErrUnprocessable)-in-en");
    assert_eq!(info.inner_errors[2].code, "ErrValidation3");
    assert_eq!(info.inner_errors[2].message, "(ErrValidation3)-in-en");
}
