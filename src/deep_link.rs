//! Deep-link resolution.
//!
//! Links have the form `<scheme>://<host>[?<key>=<value>&...]`. The
//! scheme is not checked; the host picks the destination and the query
//! carries its payload:
//!
//! | host       | parameter          | route                 |
//! |------------|--------------------|-----------------------|
//! | `home`     |                    | `Route::Home`         |
//! | `profile`  | `userId` (string)  | `Route::Profile`      |
//! | `settings` |                    | `Route::Settings`     |
//! | `detail`   | `itemId` (integer) | `Route::Detail`       |

use std::num::ParseIntError;

use percent_encoding::percent_decode_str;
use thiserror::Error;
use url::Url;

use crate::route::Route;

pub const HOST_HOME: &str = "home";
pub const HOST_PROFILE: &str = "profile";
pub const HOST_SETTINGS: &str = "settings";
pub const HOST_DETAIL: &str = "detail";

pub const PARAM_USER_ID: &str = "userId";
pub const PARAM_ITEM_ID: &str = "itemId";

/// Reasons a link resolves to no navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeepLinkError {
    #[error("Malformed deep link: {source}")]
    Malformed {
        #[source]
        source: url::ParseError,
    },

    #[error("Deep link has no host")]
    MissingHost,

    #[error("Unrecognized deep link host '{host}'")]
    UnknownHost { host: String },

    #[error("Deep link '{host}' is missing required parameter '{param}'")]
    MissingParam {
        host: &'static str,
        param: &'static str,
    },

    #[error("Deep link parameter '{param}' has invalid value '{value}': {source}")]
    InvalidParam {
        param: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// A link split into its host and decoded query items.
///
/// Items keep their order. An item written without `=` has no value,
/// which is distinct from an empty one (`key=`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeepLink {
    host: String,
    query: Vec<(String, Option<String>)>,
}

impl DeepLink {
    pub fn parse(uri: &str) -> Result<Self, DeepLinkError> {
        let url = Url::parse(uri.trim()).map_err(|source| DeepLinkError::Malformed { source })?;
        let host = match url.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => return Err(DeepLinkError::MissingHost),
        };
        let query = url.query().map(parse_query).unwrap_or_default();
        Ok(Self { host, query })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Value of the first query item named `name`.
    ///
    /// `None` when no item has that name, or the first one has no `=`.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_deref())
    }

    /// Map host and parameters onto a [`Route`].
    pub fn route(&self) -> Result<Route, DeepLinkError> {
        match self.host.as_str() {
            HOST_HOME => Ok(Route::Home),
            HOST_PROFILE => {
                let user_id = self
                    .param(PARAM_USER_ID)
                    .ok_or(DeepLinkError::MissingParam {
                        host: HOST_PROFILE,
                        param: PARAM_USER_ID,
                    })?;
                Ok(Route::profile(user_id))
            }
            HOST_SETTINGS => Ok(Route::Settings),
            HOST_DETAIL => {
                let raw = self
                    .param(PARAM_ITEM_ID)
                    .ok_or(DeepLinkError::MissingParam {
                        host: HOST_DETAIL,
                        param: PARAM_ITEM_ID,
                    })?;
                let item_id = raw
                    .parse::<i64>()
                    .map_err(|source| DeepLinkError::InvalidParam {
                        param: PARAM_ITEM_ID,
                        value: raw.to_string(),
                        source,
                    })?;
                Ok(Route::detail(item_id))
            }
            other => Err(DeepLinkError::UnknownHost {
                host: other.to_string(),
            }),
        }
    }
}

/// Split a raw query into items, percent-decoding names and values.
///
/// `+` is kept literally; this is not form decoding.
fn parse_query(raw: &str) -> Vec<(String, Option<String>)> {
    raw.split('&')
        .filter(|item| !item.is_empty())
        .map(|item| match item.split_once('=') {
            Some((key, value)) => (decode(key), Some(decode(value))),
            None => (decode(item), None),
        })
        .collect()
}

fn decode(component: &str) -> String {
    percent_decode_str(component).decode_utf8_lossy().into_owned()
}

/// Resolve `uri` to the route it names.
pub fn resolve(uri: &str) -> Result<Route, DeepLinkError> {
    DeepLink::parse(uri)?.route()
}
