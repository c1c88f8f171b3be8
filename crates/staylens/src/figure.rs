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

use crate::dataset::{BookingRecord, Dataset, Selection};
use itertools::Itertools;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

const MARKER_SIZE: u32 = 15;
const MARKER_OPACITY: f64 = 0.7;
const MARKER_LINE_WIDTH: f64 = 0.5;
const MARKER_LINE_COLOUR: &str = "white";
const Y_AXIS_RANGE: [f64; 2] = [0.0, 50.0];
const TRANSITION_MS: u64 = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerLine {
    pub width: f64,
    pub color: String,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub size: u32,
    pub line: MarkerLine,
}
impl Default for Marker {
    fn default() -> Self {
        Self {
            size: MARKER_SIZE,
            line: MarkerLine {
                width: MARKER_LINE_WIDTH,
                color: MARKER_LINE_COLOUR.to_string(),
            },
        }
    }
}
/// One named scatter series: parallel month/value/hover sequences for a
/// single hotel category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trace {
    pub x: Vec<String>,
    pub y: Vec<u32>,
    pub text: Vec<String>,
    pub mode: String,
    pub opacity: f64,
    pub marker: Marker,
    pub name: String,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Axis {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub x: f64,
    pub y: f64,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration: u64,
}
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
    pub hovermode: String,
    pub transition: Transition,
}
/// Figure description in the plotly `{ data, layout }` shape. Rebuilt
/// from scratch on every invocation, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FigureSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}
/// Builds the chart for one control selection. Pure over the dataset:
/// filters and projects, never mutates.
///
/// The x sequence of each trace is taken from the hotel partition before
/// the country filter, while y/text come from the country-filtered
/// subset. An absent country therefore yields empty y/text against a
/// non-empty x. Inherited behaviour, kept deliberately.
pub fn build_figure(dataset: &Dataset, selection: &Selection) -> FigureSpec {
    let year_rows: Vec<&BookingRecord> = dataset
        .records()
        .par_iter()
        .filter(|r| r.arrival_date_year == selection.year)
        .collect();
    let hotels: Vec<&str> = year_rows.iter().map(|r| r.hotel.as_str()).unique().collect();
    let data = hotels
        .into_iter()
        .map(|hotel| {
            let partition: Vec<&BookingRecord> = year_rows
                .iter()
                .copied()
                .filter(|r| r.hotel == hotel)
                .collect();
            let x = partition
                .iter()
                .map(|r| r.arrival_date_month.clone())
                .collect();
            let matched: Vec<&BookingRecord> = partition
                .iter()
                .copied()
                .filter(|r| r.country == selection.country)
                .collect();
            Trace {
                x,
                y: matched
                    .iter()
                    .map(|r| r.stay_value(selection.stay_field))
                    .collect(),
                text: matched.iter().map(|r| r.country.clone()).collect(),
                mode: "markers".to_string(),
                opacity: MARKER_OPACITY,
                marker: Marker::default(),
                name: hotel.to_string(),
            }
        })
        .collect();
    FigureSpec {
        data,
        layout: Layout {
            xaxis: Axis {
                title: "Arrival Month".to_string(),
                range: None,
            },
            yaxis: Axis {
                title: selection.stay_field.axis_title(),
                range: Some(Y_AXIS_RANGE),
            },
            legend: Legend { x: 1.0, y: 0.0 },
            hovermode: "closest".to_string(),
            transition: Transition {
                duration: TRANSITION_MS,
            },
        },
    }
}
