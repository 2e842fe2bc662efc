//! Stay model.
//!
//! This module contains the [`Stay`] type, the validated parking interval
//! every tariff is applied to.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::error::{TariffError, TariffResult};

/// A parking session from entry to exit, in naive local wall-clock time.
///
/// A `Stay` can only be built through [`Stay::new`], which guarantees
/// `start <= end`.
///
/// # Example
///
/// ```
/// use parking_tariff::models::Stay;
/// use chrono::NaiveDateTime;
///
/// let start = NaiveDateTime::parse_from_str("2026-01-14 09:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
/// let end = NaiveDateTime::parse_from_str("2026-01-14 17:00:00", "%Y-%m-%d %H:%M:%S").unwrap();
///
/// let stay = Stay::new(start, end).unwrap();
/// assert_eq!(stay.duration().num_hours(), 8);
///
/// assert!(Stay::new(end, start).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stay {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl Stay {
    /// Creates a stay, rejecting one that ends before it starts.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> TariffResult<Self> {
        if end < start {
            return Err(TariffError::InvalidStay { start, end });
        }
        Ok(Self { start, end })
    }

    /// The moment the vehicle entered.
    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    /// The moment the vehicle left.
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The elapsed wall-clock time of the stay.
    pub fn duration(&self) -> chrono::Duration {
        self.end - self.start
    }
}
