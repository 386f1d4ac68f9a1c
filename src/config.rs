//! Assertion input.

use crate::types::RecordType;

/// Parameters for
/// [`assert_record_exists_in_hosted_zone`](crate::assert_record_exists_in_hosted_zone).
///
/// Names must be given in the form the provider returns them, which for
/// Route53 is fully-qualified with a trailing dot.
///
/// # Example
///
/// ```
/// use route53_assert::{AssertRecordInput, RecordType};
///
/// let input = AssertRecordInput::new("www.example.com.", "example.com.")
///     .with_record_type(RecordType::A);
///
/// assert_eq!(input.zone_name, "example.com.");
/// assert_eq!(input.record_type, Some(RecordType::A));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssertRecordInput {
    /// Name of the record set to look for.
    pub record_name: String,

    /// Name of the hosted zone holding the record.
    pub zone_name: String,

    /// Type filter. `None` accepts a record of any type.
    pub record_type: Option<RecordType>,
}

impl AssertRecordInput {
    /// Creates an input with no type filter.
    #[must_use]
    pub fn new(record_name: impl Into<String>, zone_name: impl Into<String>) -> Self {
        Self {
            record_name: record_name.into(),
            zone_name: zone_name.into(),
            record_type: None,
        }
    }

    /// Restricts the match to records of `record_type`.
    #[must_use]
    pub const fn with_record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = Some(record_type);
        self
    }

    /// Returns `true` if `name` and `record_type` satisfy this input.
    #[must_use]
    pub fn matches(&self, name: &str, record_type: RecordType) -> bool {
        self.record_name == name && self.record_type.is_none_or(|t| t == record_type)
    }
}
