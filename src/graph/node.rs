//! Derived graph nodes: display name decoding and age derivation.

use chrono::{DateTime, NaiveDate, Utc};

use crate::decode::HtmlDecoder;
use crate::model::{GraphNode, Person};

/// Year length used for age derivation. Ages only need whole-year
/// granularity, so this is an approximation rather than calendar math.
pub const DAYS_PER_YEAR: f64 = 365.25;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

/// Date-only formats the CRM has been seen to emit.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y%m%d", "%d/%m/%Y"];

/// Parse a birth date into a UTC instant (midnight for date-only input).
pub fn parse_birth_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Whole years between `birth_date` and `now`.
/// Returns `None` for a missing, unparseable or future birth date.
pub fn age_from_birth_date(birth_date: Option<&str>, now: DateTime<Utc>) -> Option<u32> {
    let born = parse_birth_date(birth_date?)?;
    let elapsed_ms = (now - born).num_milliseconds();
    if elapsed_ms < 0 {
        return None;
    }
    let years = elapsed_ms as f64 / (DAYS_PER_YEAR * MILLIS_PER_DAY);
    Some(years.floor() as u32)
}

/// Build the graph node for `person`.
pub fn materialize_node(person: &Person, decoder: &dyn HtmlDecoder, now: DateTime<Utc>) -> GraphNode {
    let birth_date = person
        .acf
        .birth_date
        .clone()
        .filter(|d| !d.is_empty());

    GraphNode {
        id: person.id,
        name: decoder.decode(person.display_name()),
        gender: person.acf.gender.clone().unwrap_or_default(),
        photo: person.thumbnail.clone().unwrap_or_default(),
        age: age_from_birth_date(birth_date.as_deref(), now),
        birth_date,
    }
}
