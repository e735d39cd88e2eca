//! Field-name normalization shared by every input format
//!
//! Source files spell the same column in several ways (`latitude`,
//! `Latitude`, `LAT`). Each logical field owns an ordered list of candidate
//! keys; the first candidate the source provides wins.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// A logical import field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalField {
    Latitude,
    Longitude,
    Name,
    Location,
    Country,
    Region,
    Notes,
    Reserves,
    Grade,
    Year,
    Confidence,
    Status,
    ClaimId,
    Company,
    Area,
    ClaimType,
}

impl LogicalField {
    /// Candidate keys in priority order
    pub fn candidates(self) -> &'static [&'static str] {
        match self {
            LogicalField::Latitude => &["latitude", "Latitude", "LAT", "lat"],
            LogicalField::Longitude => &["longitude", "Longitude", "LON", "lng"],
            LogicalField::Name => &["name", "Name", "NAME"],
            LogicalField::Location => &["location", "Location", "LOCATION"],
            LogicalField::Country => &["country", "Country", "COUNTRY"],
            LogicalField::Region => &["region", "Region", "REGION"],
            LogicalField::Notes => &["notes", "Notes", "NOTES"],
            LogicalField::Reserves => &["reserves", "Reserves", "RESERVES"],
            LogicalField::Grade => &["grade", "Grade", "GRADE"],
            LogicalField::Year => &["year", "Year", "YEAR"],
            LogicalField::Confidence => &["confidence", "Confidence", "CONFIDENCE"],
            LogicalField::Status => &["status", "Status", "STATUS"],
            LogicalField::ClaimId => &["claim_id", "Claim_ID", "CLAIM_ID"],
            LogicalField::Company => &["company", "Company", "COMPANY"],
            LogicalField::Area => &["area", "Area", "AREA"],
            LogicalField::ClaimType => &["claim_type", "Claim_Type", "CLAIM_TYPE"],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.candidates()[0]
    }
}

impl fmt::Display for LogicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A row of key/value pairs from some input format
pub trait FieldSource {
    /// Value stored under `key`, or `None` when the key is absent
    fn raw(&self, key: &str) -> Option<Cow<'_, str>>;
}

/// A present value that could not be converted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidValue {
    pub field: LogicalField,
    pub value: String,
}

impl fmt::Display for InvalidValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid value {:?} for field {}", self.value, self.field)
    }
}

/// Resolves logical fields against a source row
pub struct FieldAliases<'a, S: FieldSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: FieldSource + ?Sized> FieldAliases<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// First candidate that is present
    pub fn text(&self, field: LogicalField) -> Option<String> {
        field
            .candidates()
            .iter()
            .find_map(|key| self.source.raw(key))
            .map(Cow::into_owned)
    }

    /// Like [`text`](Self::text) with a fallback
    pub fn text_or(&self, field: LogicalField, default: &str) -> String {
        self.text(field).unwrap_or_else(|| default.to_string())
    }

    /// First candidate with a non-blank value, parsed.
    ///
    /// Blank or missing yields `Ok(None)`; a value that does not parse is an
    /// error so the caller can drop the row.
    pub fn number<T: FromStr>(&self, field: LogicalField) -> Result<Option<T>, InvalidValue> {
        for key in field.candidates() {
            let Some(value) = self.source.raw(key) else {
                continue;
            };
            let trimmed = value.trim();
            if trimmed.is_empty() {
                continue;
            }
            return parse_number(trimmed).map(Some).ok_or_else(|| InvalidValue {
                field,
                value: trimmed.to_string(),
            });
        }
        Ok(None)
    }
}

/// Parse `text` as `T`, accepting whole decimals such as `1957.0` for integer types
fn parse_number<T: FromStr>(text: &str) -> Option<T> {
    if let Ok(value) = text.parse::<T>() {
        return Some(value);
    }

    let whole = text
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && v.fract() == 0.0)?;
    format!("{}", whole as i64).parse::<T>().ok()
}
