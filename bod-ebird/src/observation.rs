use crate::error::Result;
use bod_utils::dates;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// A raw observation as returned by the eBird JSON API.
///
/// The upstream source enforces no schema, so every field is optional here.
/// Raw observations exist only at the decode boundary; `normalize` turns
/// them into [`ObservationRecord`]s before anything downstream sees them.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct RawObservation {
    #[serde(rename = "speciesCode")]
    pub species_code: Option<String>,
    #[serde(rename = "comName")]
    pub com_name: Option<String>,
    #[serde(rename = "sciName")]
    pub sci_name: Option<String>,
    #[serde(rename = "locId")]
    pub loc_id: Option<String>,
    #[serde(rename = "locName")]
    pub loc_name: Option<String>,
    #[serde(rename = "obsDt")]
    pub obs_dt: Option<String>,
    #[serde(rename = "howMany", deserialize_with = "lenient_count")]
    pub how_many: Option<u32>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    #[serde(rename = "obsValid")]
    pub obs_valid: Option<bool>,
    #[serde(rename = "obsReviewed")]
    pub obs_reviewed: Option<bool>,
    #[serde(rename = "locationPrivate")]
    pub location_private: Option<bool>,
    #[serde(rename = "subId")]
    pub sub_id: Option<String>,
}

/// Accept any JSON value for `howMany`, keeping it only when it is a
/// non-negative integer that fits a count. Anything else normalizes to
/// "not reported".
fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value
        .and_then(|v| v.as_u64())
        .and_then(|n| u32::try_from(n).ok()))
}

/// One normalized sighting report.
///
/// Immutable after construction and scoped to a single fetch-and-render
/// cycle. `common_name` is non-empty and `observed_at` parsed successfully;
/// records failing either rule never get this far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub species_code: String,
    pub common_name: String,
    pub scientific_name: Option<String>,
    pub location_id: String,
    pub location_name: String,
    pub observed_at: NaiveDate,
    /// Reported head count. Reports without a count collapse to 0, a
    /// documented lossy simplification of "not reported".
    pub population: u32,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub is_valid: bool,
    pub is_reviewed: bool,
    pub is_private_location: bool,
    pub submission_id: String,
}

impl TryFrom<RawObservation> for ObservationRecord {
    type Error = ();

    fn try_from(raw: RawObservation) -> std::result::Result<Self, Self::Error> {
        let common_name = raw.com_name.filter(|s| !s.is_empty()).ok_or(())?;
        let observed_at = raw
            .obs_dt
            .as_deref()
            .and_then(|s| dates::parse_observation_date(s).ok())
            .ok_or(())?;
        Ok(ObservationRecord {
            species_code: raw.species_code.unwrap_or_default(),
            common_name,
            scientific_name: raw.sci_name,
            location_id: raw.loc_id.unwrap_or_default(),
            location_name: raw.loc_name.unwrap_or_default(),
            observed_at,
            population: raw.how_many.unwrap_or(0),
            latitude: raw.lat,
            longitude: raw.lng,
            is_valid: raw.obs_valid.unwrap_or(false),
            is_reviewed: raw.obs_reviewed.unwrap_or(false),
            is_private_location: raw.location_private.unwrap_or(false),
            submission_id: raw.sub_id.unwrap_or_default(),
        })
    }
}

/// Decode an eBird response body into raw observations.
pub fn decode_observations(body: &str) -> Result<Vec<RawObservation>> {
    Ok(serde_json::from_str(body)?)
}

/// Normalize raw observations into typed records.
///
/// Records missing a common name or a parseable observation date are
/// dropped silently; upstream data quality varies and per-record errors
/// would drown the caller. Pure function of its input.
pub fn normalize(raw_records: Vec<RawObservation>) -> Vec<ObservationRecord> {
    raw_records
        .into_iter()
        .filter_map(|raw| raw.try_into().ok())
        .collect()
}

#[cfg(test)]
mod test {
    use super::{decode_observations, normalize};
    use chrono::NaiveDate;

    // Trimmed from https://api.ebird.org/v2/data/obs/US/recent
    const JSON_RESULT: &str = r#"[
        {"speciesCode":"blujay","comName":"Blue Jay","sciName":"Cyanocitta cristata",
         "locId":"L123","locName":"Central Park","obsDt":"2024-05-01 09:23","howMany":3,
         "lat":40.78,"lng":-73.97,"obsValid":true,"obsReviewed":false,
         "locationPrivate":false,"subId":"S111"},
        {"speciesCode":"blujay","comName":"Blue Jay","sciName":"Cyanocitta cristata",
         "locId":"L124","locName":"Prospect Park","obsDt":"2024-05-02","howMany":5,
         "lat":40.66,"lng":-73.97,"obsValid":true,"obsReviewed":false,
         "locationPrivate":false,"subId":"S112"},
        {"speciesCode":"amerob","comName":"American Robin","sciName":"Turdus migratorius",
         "locId":"L125","locName":"Golden Gate Park","obsDt":"2024-05-01"},
        {"speciesCode":"x","sciName":"Mystery species","obsDt":"2024-05-01","howMany":1},
        {"speciesCode":"norcar","comName":"Northern Cardinal","obsDt":"yesterday","howMany":2},
        {"speciesCode":"houspa","comName":"House Sparrow","howMany":9}
    ]"#;

    #[test]
    fn test_decode_observations() {
        let raw = decode_observations(JSON_RESULT).unwrap();
        assert_eq!(raw.len(), 6);
        assert_eq!(raw[0].com_name.as_deref(), Some("Blue Jay"));
        assert_eq!(raw[0].how_many, Some(3));
        assert_eq!(raw[2].how_many, None);
    }

    #[test]
    fn test_decode_observations_bad_body() {
        assert!(decode_observations("<html>gateway timeout</html>").is_err());
    }

    #[test]
    fn test_normalize_drops_invalid_records() {
        let raw = decode_observations(JSON_RESULT).unwrap();
        let input_len = raw.len();
        let records = normalize(raw);
        // missing comName, unparseable obsDt, and missing obsDt are dropped
        assert_eq!(records.len(), 3);
        assert!(records.len() <= input_len);
        for record in &records {
            assert!(!record.common_name.is_empty());
        }
    }

    #[test]
    fn test_normalize_population_defaults_to_zero() {
        let records = normalize(decode_observations(JSON_RESULT).unwrap());
        let robin = records
            .iter()
            .find(|r| r.common_name == "American Robin")
            .unwrap();
        assert_eq!(robin.population, 0);
        assert_eq!(robin.location_name, "Golden Gate Park");
    }

    #[test]
    fn test_normalize_parses_datetime_observation() {
        let records = normalize(decode_observations(JSON_RESULT).unwrap());
        assert_eq!(
            records[0].observed_at,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()
        );
        assert_eq!(records[0].population, 3);
        assert!(records[0].is_valid);
        assert!(!records[0].is_reviewed);
    }

    #[test]
    fn test_normalize_fractional_count_collapses_to_zero() {
        let body = r#"[{"comName":"Mallard","obsDt":"2024-05-03","howMany":2.5}]"#;
        let records = normalize(decode_observations(body).unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].population, 0);
    }
}
