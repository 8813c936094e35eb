use chrono::NaiveTime;
use serde::{Deserialize, Deserializer, Serializer};

/// Deserialize an optional string-backed value, treating `""` as absent.
///
/// Form-driven backends send empty strings for cleared optional fields.
pub fn deserialize_optional_nonempty<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => Ok(Some(T::from(s))),
        None => Ok(None),
    }
}

/// Wall-clock times, as used by class schedules.
///
/// Written as `HH:MM`. Read leniently: single-digit hours, seconds and
/// 12-hour times with an AM/PM marker are all accepted.
pub mod hour_minute {
    use super::*;

    const FORMAT: &str = "%H:%M";
    const ACCEPTED: [&str; 4] = ["%H:%M", "%H:%M:%S", "%I:%M %p", "%I:%M%p"];

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        let trimmed = raw.trim();
        ACCEPTED
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(trimmed, format).ok())
            .ok_or_else(|| serde::de::Error::custom(format!("invalid time of day: {raw}")))
    }
}
