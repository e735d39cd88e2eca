//! Point-feature GeoJSON reader

use serde::Deserialize;
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::debug;

use super::error::ImportError;
use super::fields::{FieldAliases, FieldSource};
use super::record::{ImportRecord, ParsedBatch, Position};

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    properties: Option<Map<String, Value>>,
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    coordinates: Value,
}

struct Properties<'a>(Option<&'a Map<String, Value>>);

impl FieldSource for Properties<'_> {
    fn raw(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.0?.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            other => Some(Cow::Owned(other.to_string())),
        }
    }
}

/// `[lng, lat, ..]` with at least two numbers
fn point_position(coordinates: &Value) -> Option<Position> {
    let coords = coordinates.as_array()?;
    let longitude = coords.first()?.as_f64()?;
    let latitude = coords.get(1)?.as_f64()?;
    Position::new(latitude, longitude)
}

/// Parse a FeatureCollection; only `Point` features are used.
///
/// Non-point features are ignored without counting them. A point feature with
/// missing, non-finite or out-of-range coordinates counts as skipped, as does
/// one with an unparseable numeric property.
pub(super) fn parse<R: ImportRecord>(bytes: &[u8]) -> Result<ParsedBatch<R>, ImportError> {
    let document: Value = serde_json::from_slice(bytes)
        .map_err(|e| ImportError::MalformedDocument(format!("Invalid GeoJSON format: {}", e)))?;

    let Value::Object(root) = document else {
        return Err(ImportError::MalformedDocument(
            "GeoJSON document must be an object".to_string(),
        ));
    };

    let features = match root.get("features") {
        None | Some(Value::Null) => return Ok(ParsedBatch::default()),
        Some(Value::Array(features)) => features,
        Some(_) => {
            return Err(ImportError::MalformedDocument(
                "GeoJSON `features` must be an array".to_string(),
            ));
        }
    };

    let mut batch = ParsedBatch::default();
    for value in features {
        let feature = match Feature::deserialize(value) {
            Ok(feature) => feature,
            Err(e) => {
                debug!("Ignoring unreadable feature: {}", e);
                continue;
            }
        };

        if feature.kind.as_deref() != Some("Feature") {
            continue;
        }
        let Some(geometry) = feature.geometry else {
            continue;
        };
        if geometry.kind.as_deref() != Some("Point") {
            continue;
        }

        let Some(position) = point_position(&geometry.coordinates) else {
            batch.skipped += 1;
            continue;
        };

        let properties = Properties(feature.properties.as_ref());
        match R::from_fields(&FieldAliases::new(&properties), position, batch.rows.len()) {
            Ok(row) => batch.rows.push(row),
            Err(invalid) => {
                debug!("Skipping feature: {}", invalid);
                batch.skipped += 1;
            }
        }
    }

    Ok(batch)
}
