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

use thiserror::Error;
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Dataset error: {0}")]
    Data(#[from] DataError),
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
#[derive(Error, Debug)]
pub enum DataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read bookings file '{path}': {source}")]
    DataFileError {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("Row {row} could not be parsed: {source}")]
    RowParseError {
        row: usize,
        #[source]
        source: csv::Error,
    },
    #[error("Required column '{column}' is missing from the header")]
    ColumnNotFound { column: String },
    #[error("Empty dataset: the year slider has no bounds without at least one row")]
    EmptyDataset,
}
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Figure dispatcher is no longer running")]
    DispatcherClosed,
    #[error("Unknown stay field '{value}'")]
    UnknownStayField { value: String },
}
pub type Result<T> = std::result::Result<T, DashboardError>;
pub type DataResult<T> = std::result::Result<T, DataError>;
pub type ChartResult<T> = std::result::Result<T, ChartError>;
impl DashboardError {
    pub fn is_fatal(&self) -> bool {
        matches!(self, DashboardError::Data(_) | DashboardError::Io(_))
    }
    pub fn category(&self) -> &'static str {
        match self {
            DashboardError::Data(_) => "Data",
            DashboardError::Chart(_) => "Chart",
            DashboardError::Io(_) => "I/O",
        }
    }
}
