// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

pub mod loader;
pub mod record;
pub use loader::PREVIEW_ROWS;
pub use record::{BookingRecord, Selection, StayField};

use crate::error::{DataError, DataResult};
use chrono::{DateTime, Utc};
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::info;
use uuid::Uuid;

/// Index of the distinct-country entry dropped from the dropdown at
/// startup. Inherited behaviour; see DESIGN.md before touching it.
const DROPPED_COUNTRY_INDEX: usize = 6;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetId(String);
impl DatasetId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}
impl Default for DatasetId {
    fn default() -> Self {
        Self::new()
    }
}
impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub id: DatasetId,
    pub name: String,
    pub row_count: usize,
    pub column_count: usize,
    pub created_at: DateTime<Utc>,
    pub source_path: Option<PathBuf>,
}
/// Header and first rows of the raw CSV, rendered as the static table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TablePreview {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}
/// Observed `arrival_date_year` bounds and the distinct years between
/// them, in ascending order. Feeds the slider marks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearRange {
    pub min: i32,
    pub max: i32,
    pub years: Vec<i32>,
}
impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        self.years.contains(&year)
    }
}
/// The in-memory booking table plus its derived control summaries.
/// Immutable after construction; shared read-only across sessions.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<BookingRecord>,
    countries: Vec<String>,
    year_range: YearRange,
    preview: TablePreview,
    metadata: DatasetMetadata,
}
impl Dataset {
    /// Reads the bookings CSV once. Any failure here is fatal to the
    /// caller: the process must not start without its dataset.
    pub fn load<P: AsRef<Path>>(path: P) -> DataResult<Self> {
        let path = path.as_ref();
        let loaded = loader::read_bookings_csv(path)?;
        let name = path
            .file_stem()
            .map_or_else(|| "bookings".to_string(), |s| s.to_string_lossy().into_owned());
        let dataset = Self::build(
            loaded.records,
            loaded.preview,
            loaded.column_count,
            name,
            Some(path.to_path_buf()),
        )?;
        info!(
            rows = dataset.metadata.row_count,
            countries = dataset.countries.len(),
            years = ?dataset.year_range.years,
            "dataset loaded"
        );
        Ok(dataset)
    }
    /// Explicit constructor for injection and tests; the preview is
    /// synthesised from the typed columns.
    pub fn from_records(records: Vec<BookingRecord>) -> DataResult<Self> {
        let header: Vec<String> = [
            "hotel",
            "country",
            "arrival_date_year",
            "arrival_date_month",
            "stays_in_weekend_nights",
            "stays_in_week_nights",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        let rows = records
            .iter()
            .take(PREVIEW_ROWS)
            .map(|r| {
                vec![
                    r.hotel.clone(),
                    r.country.clone(),
                    r.arrival_date_year.to_string(),
                    r.arrival_date_month.clone(),
                    r.stays_in_weekend_nights.to_string(),
                    r.stays_in_week_nights.to_string(),
                ]
            })
            .collect();
        let column_count = header.len();
        Self::build(
            records,
            TablePreview { header, rows },
            column_count,
            "in-memory".to_string(),
            None,
        )
    }
    fn build(
        records: Vec<BookingRecord>,
        preview: TablePreview,
        column_count: usize,
        name: String,
        source_path: Option<PathBuf>,
    ) -> DataResult<Self> {
        if records.is_empty() {
            return Err(DataError::EmptyDataset);
        }
        let mut countries: Vec<String> = records
            .iter()
            .map(|r| r.country.as_str())
            .unique()
            .map(ToString::to_string)
            .collect();
        if countries.len() > DROPPED_COUNTRY_INDEX {
            countries.remove(DROPPED_COUNTRY_INDEX);
        }
        let years: Vec<i32> = records
            .par_iter()
            .map(|r| r.arrival_date_year)
            .collect::<Vec<_>>()
            .into_iter()
            .unique()
            .sorted()
            .collect();
        let year_range = YearRange {
            min: years[0],
            max: years[years.len() - 1],
            years,
        };
        let metadata = DatasetMetadata {
            id: DatasetId::new(),
            name,
            row_count: records.len(),
            column_count,
            created_at: Utc::now(),
            source_path,
        };
        Ok(Self {
            records,
            countries,
            year_range,
            preview,
            metadata,
        })
    }
    pub fn records(&self) -> &[BookingRecord] {
        &self.records
    }
    /// Distinct `country` values in first-seen row order, minus the
    /// dropped entry.
    pub fn distinct_countries(&self) -> &[String] {
        &self.countries
    }
    pub fn year_range(&self) -> &YearRange {
        &self.year_range
    }
    pub fn preview(&self) -> &TablePreview {
        &self.preview
    }
    pub fn metadata(&self) -> &DatasetMetadata {
        &self.metadata
    }
}
