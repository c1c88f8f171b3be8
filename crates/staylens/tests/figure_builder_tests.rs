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

use itertools::Itertools;
use proptest::prelude::*;
use staylens::{build_figure, BookingRecord, Dataset, Selection, StayField};

fn rec(hotel: &str, country: &str, year: i32, month: &str, weekend: u32, week: u32) -> BookingRecord {
    BookingRecord {
        hotel: hotel.to_string(),
        country: country.to_string(),
        arrival_date_year: year,
        arrival_date_month: month.to_string(),
        stays_in_weekend_nights: weekend,
        stays_in_week_nights: week,
    }
}

fn mixed_dataset() -> Dataset {
    Dataset::from_records(vec![
        rec("City Hotel", "PRT", 2016, "January", 1, 4),
        rec("Resort Hotel", "PRT", 2016, "July", 2, 5),
        rec("Resort Hotel", "GBR", 2016, "August", 0, 3),
        rec("City Hotel", "GBR", 2016, "March", 2, 2),
        rec("Resort Hotel", "PRT", 2015, "June", 1, 1),
        rec("Hostel", "PRT", 2015, "June", 3, 0),
    ])
    .expect("dataset")
}

#[test]
fn one_trace_per_hotel_present_in_the_selected_year() {
    let dataset = mixed_dataset();
    let figure = build_figure(
        &dataset,
        &Selection::new("PRT", StayField::WeekendNights, 2016),
    );
    // Hostel only appears in 2015 and must not produce a trace.
    let names: Vec<&str> = figure.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["City Hotel", "Resort Hotel"]);
}

#[test]
fn legend_order_is_first_occurrence_not_alphabetical() {
    let dataset = Dataset::from_records(vec![
        rec("Resort Hotel", "PRT", 2016, "July", 1, 1),
        rec("City Hotel", "PRT", 2016, "July", 1, 1),
        rec("Resort Hotel", "PRT", 2016, "August", 1, 1),
    ])
    .expect("dataset");
    let figure = build_figure(
        &dataset,
        &Selection::new("PRT", StayField::WeekendNights, 2016),
    );
    let names: Vec<&str> = figure.data.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Resort Hotel", "City Hotel"]);
}

#[test]
fn out_of_range_year_yields_zero_traces() {
    let dataset = mixed_dataset();
    let figure = build_figure(
        &dataset,
        &Selection::new("PRT", StayField::WeekendNights, 1999),
    );
    assert!(figure.data.is_empty());
}

#[test]
fn absent_country_leaves_x_populated_and_y_text_empty() {
    let dataset = mixed_dataset();
    let figure = build_figure(
        &dataset,
        &Selection::new("ZZZ", StayField::WeekendNights, 2016),
    );
    assert_eq!(figure.data.len(), 2);
    for trace in &figure.data {
        // Months come from the hotel partition before the country filter,
        // so the sequences deliberately misalign for an absent country.
        assert!(!trace.x.is_empty());
        assert!(trace.y.is_empty());
        assert!(trace.text.is_empty());
    }
}

#[test]
fn stay_field_switch_changes_only_y_values_and_y_axis_title() {
    let dataset = mixed_dataset();
    let weekend = build_figure(
        &dataset,
        &Selection::new("PRT", StayField::WeekendNights, 2016),
    );
    let week = build_figure(&dataset, &Selection::new("PRT", StayField::WeekNights, 2016));
    assert_eq!(weekend.layout.yaxis.title, "stays in weekend nights");
    assert_eq!(week.layout.yaxis.title, "stays in week nights");
    assert_eq!(weekend.data.len(), week.data.len());
    for (a, b) in weekend.data.iter().zip(week.data.iter()) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.x, b.x);
        assert_eq!(a.text, b.text);
        assert_ne!(a.y, b.y);
    }
}

#[test]
fn single_resort_row_example() {
    let dataset =
        Dataset::from_records(vec![rec("Resort Hotel", "PRT", 2016, "July", 2, 5)]).expect("dataset");
    let figure = build_figure(
        &dataset,
        &Selection::new("PRT", StayField::WeekendNights, 2016),
    );
    assert_eq!(figure.data.len(), 1);
    let trace = &figure.data[0];
    assert_eq!(trace.name, "Resort Hotel");
    assert_eq!(trace.x, vec!["July"]);
    assert_eq!(trace.y, vec![2]);
    assert_eq!(trace.text, vec!["PRT"]);
    assert_eq!(trace.mode, "markers");
    assert_eq!(trace.marker.size, 15);
    assert!((trace.opacity - 0.7).abs() < f64::EPSILON);
}

#[test]
fn layout_is_fixed_scale_regardless_of_data() {
    let dataset =
        Dataset::from_records(vec![rec("Resort Hotel", "PRT", 2016, "July", 49, 120)]).expect("dataset");
    let figure = build_figure(&dataset, &Selection::new("PRT", StayField::WeekNights, 2016));
    assert_eq!(figure.layout.xaxis.title, "Arrival Month");
    assert_eq!(figure.layout.yaxis.range, Some([0.0, 50.0]));
    assert_eq!(figure.layout.hovermode, "closest");
    assert_eq!(figure.layout.transition.duration, 500);
}

#[test]
fn figure_serialises_to_the_plotly_shape() {
    let dataset =
        Dataset::from_records(vec![rec("Resort Hotel", "PRT", 2016, "July", 2, 5)]).expect("dataset");
    let figure = build_figure(
        &dataset,
        &Selection::new("PRT", StayField::WeekendNights, 2016),
    );
    let value = serde_json::to_value(&figure).expect("serialise");
    assert_eq!(value["data"][0]["marker"]["line"]["color"], "white");
    assert_eq!(value["layout"]["legend"]["x"], 1.0);
    assert_eq!(value["layout"]["yaxis"]["title"], "stays in weekend nights");
    // No range key is emitted for the free x axis.
    assert!(value["layout"]["xaxis"].get("range").is_none());
}

fn arb_record() -> impl Strategy<Value = BookingRecord> {
    (
        prop::sample::select(vec!["Resort Hotel", "City Hotel", "Hostel"]),
        prop::sample::select(vec!["PRT", "GBR", "ESP"]),
        2015i32..=2017,
        prop::sample::select(vec!["January", "July", "December"]),
        0u32..10,
        0u32..10,
    )
        .prop_map(|(hotel, country, year, month, weekend, week)| {
            rec(hotel, country, year, month, weekend, week)
        })
}

proptest! {
    #[test]
    fn trace_count_matches_distinct_hotels_in_year(
        records in prop::collection::vec(arb_record(), 1..40),
        country in prop::sample::select(vec!["PRT", "GBR", "ESP", "ZZZ"]),
        year in 2014i32..=2018,
    ) {
        let dataset = Dataset::from_records(records.clone()).expect("dataset");
        let selection = Selection::new(country, StayField::WeekNights, year);
        let figure = build_figure(&dataset, &selection);
        let expected: Vec<&str> = records
            .iter()
            .filter(|r| r.arrival_date_year == year)
            .map(|r| r.hotel.as_str())
            .unique()
            .collect();
        let names: Vec<&str> = figure.data.iter().map(|t| t.name.as_str()).collect();
        prop_assert_eq!(names, expected);
    }

    #[test]
    fn identical_inputs_produce_identical_figures(
        records in prop::collection::vec(arb_record(), 1..40),
        year in 2015i32..=2017,
    ) {
        let dataset = Dataset::from_records(records).expect("dataset");
        let selection = Selection::new("PRT", StayField::WeekendNights, year);
        let first = build_figure(&dataset, &selection);
        let second = build_figure(&dataset, &selection);
        prop_assert_eq!(first, second);
    }
}
