//! Column-projected table views of the record set, plus CSV export.

use bod_ebird::error::{EbirdError, Result};
use bod_ebird::observation::ObservationRecord;
use bod_utils::dates;

/// One displayable field of an observation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    SpeciesCode,
    CommonName,
    ScientificName,
    LocationId,
    LocationName,
    DateObserved,
    Population,
    Latitude,
    Longitude,
    Valid,
    Reviewed,
    Private,
    SubmissionId,
}

impl Column {
    /// Display name used for table headers and the CSV header row.
    pub fn display_name(self) -> &'static str {
        match self {
            Column::SpeciesCode => "Species Code",
            Column::CommonName => "Common Name",
            Column::ScientificName => "Scientific Name",
            Column::LocationId => "Location ID",
            Column::LocationName => "Location Observed",
            Column::DateObserved => "Date Observed",
            Column::Population => "Population",
            Column::Latitude => "Latitude",
            Column::Longitude => "Longitude",
            Column::Valid => "Valid Observation",
            Column::Reviewed => "Reviewed Observation",
            Column::Private => "Location Private",
            Column::SubmissionId => "Sub ID",
        }
    }

    /// Whether any record in the set carries a value for this column.
    /// Required fields are present whenever the set is non-empty.
    fn present_in(self, records: &[ObservationRecord]) -> bool {
        match self {
            Column::ScientificName => records.iter().any(|r| r.scientific_name.is_some()),
            Column::Latitude => records.iter().any(|r| r.latitude.is_some()),
            Column::Longitude => records.iter().any(|r| r.longitude.is_some()),
            _ => !records.is_empty(),
        }
    }

    fn render(self, record: &ObservationRecord) -> String {
        match self {
            Column::SpeciesCode => record.species_code.clone(),
            Column::CommonName => record.common_name.clone(),
            Column::ScientificName => record.scientific_name.clone().unwrap_or_default(),
            Column::LocationId => record.location_id.clone(),
            Column::LocationName => record.location_name.clone(),
            Column::DateObserved => dates::format_date(&record.observed_at),
            Column::Population => record.population.to_string(),
            Column::Latitude => record
                .latitude
                .map(|v| v.to_string())
                .unwrap_or_default(),
            Column::Longitude => record
                .longitude
                .map(|v| v.to_string())
                .unwrap_or_default(),
            Column::Valid => record.is_valid.to_string(),
            Column::Reviewed => record.is_reviewed.to_string(),
            Column::Private => record.is_private_location.to_string(),
            Column::SubmissionId => record.submission_id.clone(),
        }
    }
}

/// The six display columns of the simplified table.
pub const SIMPLIFIED_COLUMNS: &[Column] = &[
    Column::CommonName,
    Column::ScientificName,
    Column::LocationName,
    Column::Population,
    Column::Latitude,
    Column::Longitude,
];

/// The six display columns of the notable-observations table: what was
/// seen, where, when, and how many.
pub const NOTABLE_COLUMNS: &[Column] = &[
    Column::CommonName,
    Column::LocationName,
    Column::DateObserved,
    Column::Population,
    Column::Latitude,
    Column::Longitude,
];

/// All thirteen mapped display columns.
pub const FULL_COLUMNS: &[Column] = &[
    Column::SpeciesCode,
    Column::CommonName,
    Column::ScientificName,
    Column::LocationId,
    Column::LocationName,
    Column::DateObserved,
    Column::Population,
    Column::Latitude,
    Column::Longitude,
    Column::Valid,
    Column::Reviewed,
    Column::Private,
    Column::SubmissionId,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableMode {
    Simplified,
    Notable,
    Full,
}

impl TableMode {
    fn columns(self) -> &'static [Column] {
        match self {
            TableMode::Simplified => SIMPLIFIED_COLUMNS,
            TableMode::Notable => NOTABLE_COLUMNS,
            TableMode::Full => FULL_COLUMNS,
        }
    }
}

/// A column-subset, renamed projection of the record set for display.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.display_name()).collect()
    }

    /// Encode the view as UTF-8 CSV: header row of display names, one row
    /// per record, no trailing summary row.
    pub fn to_csv(&self) -> Result<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(self.headers())?;
        for row in &self.rows {
            writer.write_record(row)?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| EbirdError::InvalidFormat(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| EbirdError::InvalidFormat(e.to_string()))
    }
}

/// Project records into a display table.
///
/// Only columns actually present in the record set are emitted; absent
/// columns are omitted entirely rather than rendered empty. An empty
/// intersection (including an empty record set) is NoDisplayableColumns,
/// which the renderer turns into a user-facing message.
pub fn project(records: &[ObservationRecord], mode: TableMode) -> Result<TableView> {
    let columns: Vec<Column> = mode
        .columns()
        .iter()
        .copied()
        .filter(|column| column.present_in(records))
        .collect();
    if columns.is_empty() {
        return Err(EbirdError::NoDisplayableColumns);
    }
    let rows = records
        .iter()
        .map(|record| columns.iter().map(|column| column.render(record)).collect())
        .collect();
    Ok(TableView { columns, rows })
}
