use std::fmt::Display;
use std::ops::RangeInclusive;

/// `Err` carries a message naming the key, the accepted range and the value
pub(crate) fn within<T>(key: &str, value: T, bounds: RangeInclusive<T>) -> Result<(), String>
where
    T: PartialOrd + Display,
{
    if bounds.contains(&value) {
        return Ok(());
    }

    Err(format!(
        "{key} must be {}-{}, got {value}",
        bounds.start(),
        bounds.end()
    ))
}
