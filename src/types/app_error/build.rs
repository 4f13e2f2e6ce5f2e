use super::AppError;
use crate::chain;
use crate::config;
use crate::types::{
    multi_error, BuildConfig, BuildOption, BuildResult, ErrorInfo, Language, Params,
};
use http::StatusCode;
use tracing::{debug, trace};

impl AppError {
    /// Resolves everything a build needs, then applies `options` in order.
    ///
    /// Unset status, code and log level are filled from the process config
    /// and the root error message. The resolved config is a copy, so
    /// registry entries are never touched.
    pub fn build_config(&self, language: &Language, options: &[BuildOption]) -> BuildConfig {
        let process = config::current();

        let mut error_config = self.config().map(|cfg| (*cfg).clone()).unwrap_or_default();
        if error_config.status == 0 {
            error_config.status = process.default_error_status;
        }
        if error_config.code.is_empty() {
            error_config.code = chain::unwrap_to_root(&*self.err).to_string();
        }
        if error_config.log_level.is_none() {
            error_config.log_level = process.default_log_level;
        }

        let mut build_config = BuildConfig {
            error_config,
            builder: self.custom_builder.clone(),
            language: language.clone(),
            separator: process.multi_error_separator.clone(),
            translation_fn: process.translation_fn.clone(),
            fallback_to_error_content: process.fallback_to_error_content,
        };
        for option in options {
            option.apply(&mut build_config);
        }
        build_config
    }

    /// Builds the client-facing info of this error in `language`.
    ///
    /// Aggregates additionally build each child with its own resolution and
    /// merge the children's missing translation keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use app_errors::{AppError, BaseError, BuildOption, Language};
    ///
    /// let err = AppError::new(BaseError::shared("ErrPaymentDeclined"));
    /// let result = err.build(&Language::EN, &[BuildOption::no_translation()]);
    ///
    /// assert_eq!(result.error_info.status, 500);
    /// assert_eq!(result.error_info.title, "Internal Server Error");
    /// assert_eq!(result.error_info.message, "ErrPaymentDeclined");
    /// assert!(result.trans_missing_keys.is_empty());
    /// ```
    pub fn build(&self, language: &Language, options: &[BuildOption]) -> BuildResult {
        let build_config = self.build_config(language, options);
        let mut result = self.build_with(&build_config);
        if let Some(children) = self.inner_errors() {
            multi_error::build_children(children, language, &build_config, &mut result);
        }
        result
    }

    /// Builds this error alone from an already resolved config.
    ///
    /// A builder in `build_config` takes over completely.
    pub fn build_with(&self, build_config: &BuildConfig) -> BuildResult {
        if let Some(builder) = &build_config.builder {
            return builder(self, build_config);
        }

        let error_config = &build_config.error_config;
        let mut result = BuildResult::new(ErrorInfo {
            status: error_config.status,
            code: error_config.code.clone(),
            log_level: error_config.log_level,
            associated_error: Some(Box::new(self.clone())),
            ..Default::default()
        });

        let (message, title) = self.build_message(build_config, &mut result);
        result.error_info.message = message;
        result.error_info.title = title;

        if config::current().debug {
            result.error_info.debug = self.debug.clone();
            if let Some(cause) = &self.cause {
                result.error_info.cause = cause.to_string();
            }
        }

        result
    }

    fn build_message(
        &self,
        build_config: &BuildConfig,
        result: &mut BuildResult,
    ) -> (String, String) {
        let error_config = &build_config.error_config;
        let mut title = if error_config.title.is_empty() {
            status_text(result.error_info.status).to_owned()
        } else {
            error_config.title.clone()
        };

        if build_config.translation_fn.is_none() {
            return (self.to_string(), title);
        }

        let params = self.build_params(build_config, result);

        let trans_key = if !error_config.trans_key.is_empty() {
            error_config.trans_key.clone()
        } else if !error_config.code.is_empty() {
            error_config.code.clone()
        } else {
            chain::unwrap_to_root(&*self.err).to_string()
        };

        let message = match build_config.translate(&trans_key, &params) {
            Some(Ok(message)) => message,
            _ => {
                debug!(
                    key = %trans_key,
                    language = %build_config.language,
                    "main message key is missing"
                );
                result.trans_missing_main_key = true;
                result.trans_missing_keys.push(trans_key);
                if build_config.fallback_to_error_content {
                    self.to_string()
                } else {
                    String::new()
                }
            }
        };

        if !title.is_empty() {
            title = match build_config.translate(&title, &params) {
                Some(Ok(translated)) => translated,
                _ => {
                    trace!(key = %title, language = %build_config.language, "title is missing");
                    result.trans_missing_keys.push(title);
                    String::new()
                }
            };
        }

        (message, title)
    }

    /// Merges plain params with translated `trans_params` into a fresh map.
    fn build_params(&self, build_config: &BuildConfig, result: &mut BuildResult) -> Params {
        let mut params = self.params.clone();
        let empty = Params::new();
        for (key, trans_key) in &self.trans_params {
            let value = match build_config.translate(trans_key, &empty) {
                Some(Ok(translated)) => translated,
                _ => {
                    trace!(key = %trans_key, language = %build_config.language, "param is missing");
                    result.trans_missing_keys.push(trans_key.clone());
                    trans_key.clone()
                }
            };
            params.insert(key.clone(), value.into());
        }
        params
    }
}

/// Standard reason phrase of `status`, empty when unknown.
fn status_text(status: u16) -> &'static str {
    StatusCode::from_u16(status).ok().and_then(|s| s.canonical_reason()).unwrap_or_default()
}
