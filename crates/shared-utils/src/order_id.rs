//! # Order IDs
//!
//! Human-readable, roughly time-ordered order identifiers.
//!
//! ## Format
//! ```text
//! ORD-LQU5M2O0-K3Z9QA
//! ─┬─ ────┬─── ──┬───
//!  │      │      └── 6 random base-36 chars (zero-padded)
//!  │      └───────── UTC milliseconds since epoch, base 36
//!  └──────────────── prefix
//!
//! Everything is upper-cased.
//! ```
//!
//! ## Uniqueness
//! Probabilistic only: two IDs minted in the same millisecond collide with
//! probability 1 / 36^6. The suffix comes from a non-cryptographic PRNG, so
//! IDs must not be used as secrets. There is no retry or collision check;
//! storage layers that need a hard guarantee keep a unique index.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::base36;
use crate::error::{UtilsError, UtilsResult};
use crate::ORDER_ID_PREFIX;

/// Length of the random fragment.
pub const SUFFIX_LEN: usize = 6;

/// Number of distinct suffixes (36^6).
const SUFFIX_SPACE: u64 = 2_176_782_336;

// =============================================================================
// Generation
// =============================================================================

/// Generates a new order ID from the wall clock and the thread-local PRNG.
///
/// ## Example
/// ```rust
/// use shared_utils::generate_order_id;
///
/// let id = generate_order_id();
/// assert!(id.starts_with("ORD-"));
/// assert_eq!(id, id.to_uppercase());
/// ```
pub fn generate_order_id() -> String {
    generate_order_id_with(Utc::now(), &mut rand::rng())
}

/// Generates an order ID from an explicit clock reading and RNG.
pub fn generate_order_id_with<R: Rng>(now: DateTime<Utc>, rng: &mut R) -> String {
    generate_order_id_with_prefix(ORDER_ID_PREFIX, now, rng)
}

/// Generates an order ID with a custom prefix.
///
/// Pre-epoch clock readings are clamped to zero.
pub fn generate_order_id_with_prefix<R: Rng>(
    prefix: &str,
    now: DateTime<Utc>,
    rng: &mut R,
) -> String {
    let millis = u64::try_from(now.timestamp_millis()).unwrap_or(0);
    let suffix = rng.random_range(0..SUFFIX_SPACE);

    let id = format!(
        "{}-{}-{}",
        prefix,
        base36::encode(millis),
        base36::encode_padded(suffix, SUFFIX_LEN)
    )
    .to_uppercase();

    debug!(order_id = %id, "Generated order ID");
    id
}

// =============================================================================
// Parsing
// =============================================================================

/// A parsed order ID.
///
/// ## Example
/// ```rust
/// use shared_utils::order_id::OrderId;
///
/// let id: OrderId = "ORD-LQU5M2O0-00000Z".parse().unwrap();
/// assert_eq!(id.prefix(), "ORD");
/// assert_eq!(id.created_at().timestamp_millis(), 1_704_067_200_000);
/// assert_eq!(id.suffix(), "00000Z");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderId {
    prefix: String,
    created_at: DateTime<Utc>,
    suffix: String,
}

impl OrderId {
    /// Parses an upper-case order ID token.
    pub fn parse(id: &str) -> UtilsResult<Self> {
        let mut parts = id.split('-');
        let (Some(prefix), Some(timestamp), Some(suffix), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(UtilsError::invalid_format(
                "order_id",
                "expected PREFIX-TIMESTAMP-SUFFIX",
            ));
        };

        let segments = [("prefix", prefix), ("timestamp", timestamp), ("suffix", suffix)];
        for (name, part) in segments {
            let upper_base36 = part
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase());
            if part.is_empty() || !upper_base36 {
                return Err(UtilsError::invalid_format(
                    "order_id",
                    format!("{name} must be non-empty upper-case base 36"),
                ));
            }
        }

        if timestamp.len() > 1 && timestamp.starts_with('0') {
            return Err(UtilsError::invalid_format(
                "order_id",
                "timestamp must not have leading zeros",
            ));
        }

        if suffix.len() != SUFFIX_LEN {
            return Err(UtilsError::invalid_format(
                "order_id",
                format!("suffix must be {SUFFIX_LEN} characters"),
            ));
        }

        let created_at = base36::decode(timestamp)
            .and_then(|millis| i64::try_from(millis).ok())
            .and_then(DateTime::from_timestamp_millis)
            .ok_or_else(|| UtilsError::invalid_format("order_id", "timestamp out of range"))?;

        Ok(OrderId {
            prefix: prefix.to_string(),
            created_at,
            suffix: suffix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// When the ID was minted (millisecond precision).
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let millis = u64::try_from(self.created_at.timestamp_millis()).unwrap_or(0);
        write!(
            f,
            "{}-{}-{}",
            self.prefix,
            base36::encode(millis).to_uppercase(),
            self.suffix
        )
    }
}

impl FromStr for OrderId {
    type Err = UtilsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderId::parse(s)
    }
}

impl TryFrom<String> for OrderId {
    type Error = UtilsError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        OrderId::parse(&value)
    }
}

impl From<OrderId> for String {
    fn from(id: OrderId) -> Self {
        id.to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
