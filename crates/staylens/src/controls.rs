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

use crate::dataset::{Dataset, Selection, StayField, YearRange};
use serde::{Deserialize, Serialize};

pub const DEFAULT_COUNTRY: &str = "PRT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StayOption {
    pub label: String,
    pub value: StayField,
}
/// Everything the three controls need, derived once from the dataset:
/// dropdown options, radio options, slider bounds and marks, defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ControlPanel {
    pub countries: Vec<String>,
    pub default_country: String,
    pub stay_options: Vec<StayOption>,
    pub default_stay_field: StayField,
    pub year: YearRange,
    pub default_year: i32,
}
impl ControlPanel {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        let countries = dataset.distinct_countries().to_vec();
        let default_country = if countries.iter().any(|c| c == DEFAULT_COUNTRY) {
            DEFAULT_COUNTRY.to_string()
        } else {
            // The default must be an entry the dropdown actually shows.
            countries.first().cloned().unwrap_or_default()
        };
        let year = dataset.year_range().clone();
        Self {
            countries,
            default_country,
            stay_options: StayField::ALL
                .iter()
                .map(|&value| StayOption {
                    label: value.label().to_string(),
                    value,
                })
                .collect(),
            default_stay_field: StayField::default(),
            default_year: year.min,
            year,
        }
    }
    /// The selection shown before any control has been touched.
    pub fn default_selection(&self) -> Selection {
        Selection::new(
            self.default_country.clone(),
            self.default_stay_field,
            self.default_year,
        )
    }
}
