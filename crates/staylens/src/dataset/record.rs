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

use crate::error::ChartError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One booking row. Only the columns the dashboard reads are typed;
/// everything else in the source CSV survives solely in the raw preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub hotel: String,
    pub country: String,
    pub arrival_date_year: i32,
    pub arrival_date_month: String,
    pub stays_in_weekend_nights: u32,
    pub stays_in_week_nights: u32,
}
impl BookingRecord {
    pub fn stay_value(&self, field: StayField) -> u32 {
        match field {
            StayField::WeekendNights => self.stays_in_weekend_nights,
            StayField::WeekNights => self.stays_in_week_nights,
        }
    }
}
/// Closed two-value choice of which night-count column is plotted.
/// Wire names match the source columns so control values round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StayField {
    #[serde(rename = "stays_in_weekend_nights")]
    WeekendNights,
    #[serde(rename = "stays_in_week_nights")]
    WeekNights,
}
impl StayField {
    pub const ALL: [StayField; 2] = [StayField::WeekendNights, StayField::WeekNights];
    pub fn column_name(self) -> &'static str {
        match self {
            StayField::WeekendNights => "stays_in_weekend_nights",
            StayField::WeekNights => "stays_in_week_nights",
        }
    }
    /// Human-readable label for the radio control.
    pub fn label(self) -> &'static str {
        match self {
            StayField::WeekendNights => "Weekend Nights",
            StayField::WeekNights => "Week Nights",
        }
    }
    /// Axis title: the column name with underscores replaced by spaces.
    pub fn axis_title(self) -> String {
        self.column_name().replace('_', " ")
    }
}
impl Default for StayField {
    fn default() -> Self {
        StayField::WeekendNights
    }
}
impl fmt::Display for StayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}
impl FromStr for StayField {
    type Err = ChartError;
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "stays_in_weekend_nights" => Ok(StayField::WeekendNights),
            "stays_in_week_nights" => Ok(StayField::WeekNights),
            other => Err(ChartError::UnknownStayField {
                value: other.to_string(),
            }),
        }
    }
}
/// The three control values a figure is built from. Received by value on
/// every invocation; nothing remembers a previous selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub country: String,
    pub stay_field: StayField,
    pub year: i32,
}
impl Selection {
    pub fn new(country: impl Into<String>, stay_field: StayField, year: i32) -> Self {
        Self {
            country: country.into(),
            stay_field,
            year,
        }
    }
}
