//! Sub-rules over the shared domain-registration record.
//!
//! The record is fetched once per classification and passed in read-only;
//! a missing record or missing dates degrade to neutral.

use crate::net::RegistrationRecord;
use chrono::{DateTime, Utc};

/// Registration length (feature 9): a year or more between creation and
/// expiry is safe, less is suspicious, unknown is neutral.
pub fn registration_length(record: Option<&RegistrationRecord>) -> i8 {
    let Some(record) = record else {
        return 0;
    };

    match (record.created, record.expires) {
        (Some(created), Some(expires)) => {
            if (expires - created).num_days() >= 365 {
                -1
            } else {
                1
            }
        }
        _ => 0,
    }
}

/// Domain age (feature 24): 180 days or older is safe, younger suspicious,
/// unknown neutral.
pub fn domain_age(record: Option<&RegistrationRecord>, now: DateTime<Utc>) -> i8 {
    let Some(record) = record else {
        return 0;
    };

    match record.created {
        Some(created) => {
            if (now - created).num_days() >= 180 {
                -1
            } else {
                1
            }
        }
        None => 0,
    }
}
