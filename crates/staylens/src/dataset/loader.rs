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

use crate::dataset::record::BookingRecord;
use crate::dataset::TablePreview;
use crate::error::{DataError, DataResult};
use std::path::Path;
use tracing::debug;

pub const PREVIEW_ROWS: usize = 10;
const REQUIRED_COLUMNS: [&str; 6] = [
    "hotel",
    "country",
    "arrival_date_year",
    "arrival_date_month",
    "stays_in_weekend_nights",
    "stays_in_week_nights",
];
/// Everything one pass over the CSV yields: typed rows in file order plus
/// the raw header/rows kept for the static table.
#[derive(Debug)]
pub struct LoadedCsv {
    pub records: Vec<BookingRecord>,
    pub preview: TablePreview,
    pub column_count: usize,
}
pub fn read_bookings_csv(path: &Path) -> DataResult<LoadedCsv> {
    let mut reader =
        csv::Reader::from_path(path).map_err(|source| DataError::DataFileError {
            path: path.display().to_string(),
            source,
        })?;
    let headers = reader
        .headers()
        .map_err(|source| DataError::DataFileError {
            path: path.display().to_string(),
            source,
        })?
        .clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DataError::ColumnNotFound {
                column: column.to_string(),
            });
        }
    }
    let mut records = Vec::new();
    let mut preview_rows: Vec<Vec<String>> = Vec::with_capacity(PREVIEW_ROWS);
    for (index, raw) in reader.records().enumerate() {
        let raw = raw.map_err(|source| DataError::RowParseError {
            row: index + 1,
            source,
        })?;
        let record: BookingRecord =
            raw.deserialize(Some(&headers))
                .map_err(|source| DataError::RowParseError {
                    row: index + 1,
                    source,
                })?;
        if preview_rows.len() < PREVIEW_ROWS {
            preview_rows.push(raw.iter().map(str::to_string).collect());
        }
        records.push(record);
    }
    debug!(rows = records.len(), path = %path.display(), "bookings CSV read");
    Ok(LoadedCsv {
        column_count: headers.len(),
        preview: TablePreview {
            header: headers.iter().map(str::to_string).collect(),
            rows: preview_rows,
        },
        records,
    })
}
