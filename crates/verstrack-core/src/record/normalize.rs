use chrono::DateTime;

use super::{Record, Scalar};
use crate::errors::RecordError;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;

/// Replace the epoch-seconds value of `field` with a UTC date-time.
///
/// Absent fields, nulls, and values that are already date-times pass through
/// unchanged, so applying this twice is the same as applying it once.
pub fn normalize_datetime(mut record: Record, field: &str) -> Result<Record, RecordError> {
    let converted = match record.get(field) {
        None | Some(Scalar::Null) | Some(Scalar::DateTime(_)) => None,
        Some(value) => Some(epoch_to_datetime(field, value)?),
    };
    if let Some(converted) = converted {
        record.insert(field, converted);
    }
    Ok(record)
}

/// Convert an integer or fractional epoch-seconds value into `Scalar::DateTime`.
pub fn epoch_to_datetime(field: &str, value: &Scalar) -> Result<Scalar, RecordError> {
    let out_of_range = || RecordError::TimestampOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
    };
    let converted = match value {
        Scalar::Int(secs) => DateTime::from_timestamp(*secs, 0),
        Scalar::Float(secs) => {
            if !secs.is_finite() || *secs < i64::MIN as f64 || *secs >= i64::MAX as f64 {
                return Err(out_of_range());
            }
            let whole = secs.floor();
            let mut nanos = ((secs - whole) * NANOS_PER_SEC).round() as u32;
            let mut whole = whole as i64;
            if nanos >= 1_000_000_000 {
                whole += 1;
                nanos = 0;
            }
            DateTime::from_timestamp(whole, nanos)
        }
        Scalar::DateTime(dt) => Some(*dt),
        Scalar::Text(_) | Scalar::Null => {
            return Err(RecordError::InvalidTimestamp {
                field: field.to_string(),
                found: value.type_name().to_string(),
            })
        }
    };
    converted.map(Scalar::DateTime).ok_or_else(out_of_range)
}
