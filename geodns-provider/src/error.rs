use serde::{Deserialize, Serialize};

/// Unified error type for record set construction and all provider operations.
///
/// Provider-scoped variants carry a `provider` field identifying which provider produced
/// the error. All variants are serializable for structured error reporting.
///
/// # Upstream Failures
///
/// [`NetworkError`](Self::NetworkError), [`Timeout`](Self::Timeout),
/// [`RateLimited`](Self::RateLimited), [`InvalidCredentials`](Self::InvalidCredentials),
/// [`PermissionDenied`](Self::PermissionDenied) and [`Unknown`](Self::Unknown) are raised by
/// vendor collaborators. They are passed through unchanged: listing pipelines never retry
/// and never swap a failure for a default value.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ProviderError {
    /// A required argument was missing or empty.
    InvalidParameter {
        /// Provider that rejected the argument.
        provider: String,
        /// Parameter name.
        param: String,
        /// Error details.
        detail: String,
    },

    /// A record set violated a construction invariant (name length, ttl range, rdata shape).
    InvalidRecordSet {
        /// Owner name of the offending record set, if it was set.
        name: Option<String>,
        /// Error details.
        detail: String,
    },

    /// The requested zone does not exist.
    ZoneNotFound {
        /// Provider that produced the error.
        provider: String,
        /// Zone name that was not found.
        zone: String,
    },

    /// A network-level error occurred while talking to the vendor.
    NetworkError {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// A vendor request timed out.
    Timeout {
        /// Provider that produced the error.
        provider: String,
        /// Error details.
        detail: String,
    },

    /// The vendor rate-limited the request.
    RateLimited {
        /// Provider that produced the error.
        provider: String,
        /// Seconds to wait before retrying, if the vendor said so.
        retry_after: Option<u64>,
        /// Original error message from the vendor, if available.
        raw_message: Option<String>,
    },

    /// The vendor session or credentials are invalid.
    InvalidCredentials {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the vendor, if available.
        raw_message: Option<String>,
    },

    /// The authenticated account lacks permission for the requested operation.
    PermissionDenied {
        /// Provider that produced the error.
        provider: String,
        /// Original error message from the vendor, if available.
        raw_message: Option<String>,
    },

    /// Vendor data could not be interpreted (unknown rdata layout, record without a group, ...).
    ParseError {
        /// Provider that produced the error.
        provider: String,
        /// Details about the parse failure.
        detail: String,
    },

    /// An unrecognized error from the vendor.
    Unknown {
        /// Provider that produced the error.
        provider: String,
        /// Raw error code, if available.
        raw_code: Option<String>,
        /// Raw error message.
        raw_message: String,
    },
}

impl ProviderError {
    /// 是否为预期行为（用户输入、资源不存在等），用于日志分级。
    ///
    /// 返回 `true` 时应使用 `warn` 级别，`false` 时使用 `error` 级别。
    /// **新增变体时请同步更新此方法。**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::InvalidParameter { .. }
                | Self::InvalidRecordSet { .. }
                | Self::ZoneNotFound { .. }
                | Self::InvalidCredentials { .. }
                | Self::PermissionDenied { .. }
        )
    }

    /// Shortcut for a precondition failure on a required argument.
    pub(crate) fn missing(provider: &str, param: &str) -> Self {
        Self::InvalidParameter {
            provider: provider.to_string(),
            param: param.to_string(),
            detail: "must not be empty".to_string(),
        }
    }
}

impl std::fmt::Display for ProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidParameter {
                provider,
                param,
                detail,
            } => {
                write!(f, "[{provider}] Invalid parameter '{param}': {detail}")
            }
            Self::InvalidRecordSet { name, detail } => {
                if let Some(name) = name {
                    write!(f, "Invalid record set '{name}': {detail}")
                } else {
                    write!(f, "Invalid record set: {detail}")
                }
            }
            Self::ZoneNotFound { provider, zone } => {
                write!(f, "[{provider}] Zone '{zone}' not found")
            }
            Self::NetworkError { provider, detail } => {
                write!(f, "[{provider}] Network error: {detail}")
            }
            Self::Timeout { provider, detail } => {
                write!(f, "[{provider}] Request timeout: {detail}")
            }
            Self::RateLimited {
                provider,
                retry_after,
                ..
            } => {
                if let Some(secs) = retry_after {
                    write!(f, "[{provider}] Rate limited (retry after {secs}s)")
                } else {
                    write!(f, "[{provider}] Rate limited")
                }
            }
            Self::InvalidCredentials {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Invalid credentials: {msg}")
                } else {
                    write!(f, "[{provider}] Invalid credentials")
                }
            }
            Self::PermissionDenied {
                provider,
                raw_message,
            } => {
                if let Some(msg) = raw_message {
                    write!(f, "[{provider}] Permission denied: {msg}")
                } else {
                    write!(f, "[{provider}] Permission denied")
                }
            }
            Self::ParseError { provider, detail } => {
                write!(f, "[{provider}] Parse error: {detail}")
            }
            Self::Unknown {
                provider,
                raw_message,
                ..
            } => {
                write!(f, "[{provider}] {raw_message}")
            }
        }
    }
}

impl std::error::Error for ProviderError {}

/// Convenience type alias for `Result<T, ProviderError>`.
pub type Result<T> = std::result::Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn display_invalid_parameter() {
        let e = ProviderError::missing("mock", "name");
        assert_eq!(
            e.to_string(),
            "[mock] Invalid parameter 'name': must not be empty"
        );
    }

    #[test]
    fn display_invalid_record_set_with_name() {
        let e = ProviderError::InvalidRecordSet {
            name: Some("www.example.com.".to_string()),
            detail: "ttl out of range".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid record set 'www.example.com.': ttl out of range"
        );
    }

    #[test]
    fn display_invalid_record_set_without_name() {
        let e = ProviderError::InvalidRecordSet {
            name: None,
            detail: "name is required".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid record set: name is required");
    }

    #[test]
    fn display_zone_not_found() {
        let e = ProviderError::ZoneNotFound {
            provider: "mock".to_string(),
            zone: "example.com.".to_string(),
        };
        assert_eq!(e.to_string(), "[mock] Zone 'example.com.' not found");
    }

    #[test]
    fn display_rate_limited_with_retry() {
        let e = ProviderError::RateLimited {
            provider: "dynect".to_string(),
            retry_after: Some(30),
            raw_message: None,
        };
        assert_eq!(e.to_string(), "[dynect] Rate limited (retry after 30s)");
    }

    #[test]
    fn display_unknown() {
        let e = ProviderError::Unknown {
            provider: "ultradns".to_string(),
            raw_code: Some("2142".to_string()),
            raw_message: "No Pool or Multiple pools of same type exists".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "[ultradns] No Pool or Multiple pools of same type exists"
        );
    }

    #[test]
    fn serialize_carries_code_tag() {
        let e = ProviderError::Timeout {
            provider: "dynect".to_string(),
            detail: "30s elapsed".to_string(),
        };
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"Timeout\""));
        let back: ProviderError = serde_json::from_str(&json).unwrap();
        assert_eq!(back.to_string(), e.to_string());
    }

    #[test]
    fn expected_variants() {
        assert!(ProviderError::missing("t", "type").is_expected());
        assert!(
            ProviderError::ZoneNotFound {
                provider: "t".into(),
                zone: "z.".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::NetworkError {
                provider: "t".into(),
                detail: "refused".into(),
            }
            .is_expected()
        );
        assert!(
            !ProviderError::ParseError {
                provider: "t".into(),
                detail: "bad".into(),
            }
            .is_expected()
        );
    }
}
