//! Language identifiers and `Accept-Language` parsing.

use crate::types::{AppError, ErrorConfig};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt::{self, Display};

/// Identifier of the language an error message is rendered in.
///
/// The value is opaque to this crate and handed verbatim to the translation
/// function, so any tag scheme the translator understands can be used.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Language(Cow<'static, str>);

impl Language {
    pub const EN: Language = Language(Cow::Borrowed("en"));
    pub const FR: Language = Language(Cow::Borrowed("fr"));
    pub const DE: Language = Language(Cow::Borrowed("de"));
    pub const ES: Language = Language(Cow::Borrowed("es"));
    pub const IT: Language = Language(Cow::Borrowed("it"));
    pub const PT: Language = Language(Cow::Borrowed("pt"));
    pub const RU: Language = Language(Cow::Borrowed("ru"));
    pub const ZH: Language = Language(Cow::Borrowed("zh"));
    pub const JA: Language = Language(Cow::Borrowed("ja"));
    pub const KO: Language = Language(Cow::Borrowed("ko"));
    pub const AR: Language = Language(Cow::Borrowed("ar"));
    pub const HI: Language = Language(Cow::Borrowed("hi"));
    /// "Any/multiple languages", what a `*` preference maps to.
    pub const MUL: Language = Language(Cow::Borrowed("mul"));

    #[inline]
    pub fn new<S: Into<Cow<'static, str>>>(tag: S) -> Self {
        Self(tag.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::EN
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for Language {
    fn from(tag: &'static str) -> Self {
        Self::new(tag)
    }
}

impl From<String> for Language {
    fn from(tag: String) -> Self {
        Self::new(tag)
    }
}

/// Why an `Accept-Language` value was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AcceptLanguageError {
    #[error("invalid language tag `{0}`")]
    InvalidTag(String),
    #[error("invalid quality value `{0}`")]
    InvalidQuality(String),
}

/// Code of the error returned for a malformed `Accept-Language` value.
pub const ERR_INVALID_ACCEPT_LANGUAGE: &str = "ErrInvalidAcceptLanguage";

/// Parses an `Accept-Language` header value into languages by descending
/// preference.
///
/// Entries of equal quality keep their order, duplicates keep their first
/// (highest ranked) occurrence, `*` becomes [`Language::MUL`] and entries
/// with `q=0` are dropped. A malformed value is reported as an [`AppError`]
/// with status 400.
///
/// # Examples
///
/// ```
/// use app_errors::{parse_accept_language, Language};
///
/// let langs = parse_accept_language("fr-CH, fr;q=0.9, en;q=0.8, *;q=0.5").unwrap();
/// assert_eq!(
///     langs,
///     vec![Language::new("fr-CH"), Language::FR, Language::EN, Language::MUL]
/// );
///
/// assert!(parse_accept_language("abc123").is_err());
/// ```
pub fn parse_accept_language(header: &str) -> Result<Vec<Language>, AppError> {
    parse_entries(header).map_err(|err| {
        AppError::from_error(err).with_custom_config(ErrorConfig {
            status: 400,
            code: ERR_INVALID_ACCEPT_LANGUAGE.to_owned(),
            ..Default::default()
        })
    })
}

fn parse_entries(header: &str) -> Result<Vec<Language>, AcceptLanguageError> {
    let mut entries: Vec<(Language, f32)> = Vec::new();

    for part in header.split(',') {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }

        let mut pieces = part.split(';');
        let tag = pieces.next().unwrap_or_default().trim();
        let mut quality = 1.0_f32;
        for param in pieces {
            let param = param.trim();
            match param.split_once('=') {
                Some((name, value)) if name.trim().eq_ignore_ascii_case("q") => {
                    quality = parse_quality(value.trim())?;
                }
                Some(_) => {}
                None => return Err(AcceptLanguageError::InvalidQuality(param.to_owned())),
            }
        }

        let language = parse_tag(tag)?;
        if quality > 0.0 {
            entries.push((language, quality));
        }
    }

    // stable: equal qualities keep header order
    entries.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut languages: Vec<Language> = Vec::with_capacity(entries.len());
    for (language, _) in entries {
        if !languages.iter().any(|seen| seen.as_str().eq_ignore_ascii_case(language.as_str())) {
            languages.push(language);
        }
    }
    Ok(languages)
}

fn parse_quality(value: &str) -> Result<f32, AcceptLanguageError> {
    value
        .parse::<f32>()
        .ok()
        .filter(|q| (0.0..=1.0).contains(q))
        .ok_or_else(|| AcceptLanguageError::InvalidQuality(value.to_owned()))
}

fn parse_tag(tag: &str) -> Result<Language, AcceptLanguageError> {
    if tag == "*" {
        return Ok(Language::MUL);
    }

    let mut subtags = tag.split('-');
    let primary = subtags.next().unwrap_or_default();
    let primary_ok =
        (1..=8).contains(&primary.len()) && primary.bytes().all(|b| b.is_ascii_alphabetic());
    let rest_ok = subtags
        .all(|s| (1..=8).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_alphanumeric()));

    if primary_ok && rest_ok {
        Ok(Language::new(tag.to_owned()))
    } else {
        Err(AcceptLanguageError::InvalidTag(tag.to_owned()))
    }
}
