//! Macro for implementing Display and FromStr for wire-level status enums
//!
//! Backend status codes are transmitted verbatim (e.g. `IN_PROGRESS`), so the
//! Display side writes the wire string as given while FromStr accepts any
//! casing. That lets CLI users type `--status ok` and still send `OK`.
//!
//! # Example
//!
//! ```rust
//! use plantview_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum RunState {
//!     Queued,
//!     Running,
//! }
//!
//! impl_domain_status_conversions!(RunState {
//!     Queued => "QUEUED",
//!     Running => "RUNNING",
//! });
//!
//! assert_eq!(RunState::Running.to_string(), "RUNNING");
//! assert_eq!("queued".parse::<RunState>().unwrap(), RunState::Queued);
//! ```

/// Implements `Display`, `FromStr` and `as_str` for status enums
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $str` - Mapping of enum variants to their wire strings
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl $enum_name {
            /// Wire representation of the status.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($str) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestStatus {
        Pending,
        InProgress,
        Done,
    }

    impl_domain_status_conversions!(TestStatus {
        Pending => "PENDING",
        InProgress => "IN_PROGRESS",
        Done => "DONE",
    });

    #[test]
    fn test_display_uses_wire_string() {
        assert_eq!(TestStatus::Pending.to_string(), "PENDING");
        assert_eq!(TestStatus::InProgress.to_string(), "IN_PROGRESS");
        assert_eq!(TestStatus::Done.as_str(), "DONE");
    }

    #[test]
    fn test_fromstr_any_case() {
        assert_eq!(TestStatus::from_str("in_progress").unwrap(), TestStatus::InProgress);
        assert_eq!(TestStatus::from_str("Done").unwrap(), TestStatus::Done);
        assert_eq!(TestStatus::from_str(" PENDING ").unwrap(), TestStatus::Pending);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestStatus::from_str("invalid");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestStatus: invalid"));
    }

    #[test]
    fn test_fromstr_empty() {
        assert!(TestStatus::from_str("").is_err());
    }
}
