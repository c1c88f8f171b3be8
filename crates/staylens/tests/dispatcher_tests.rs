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

use staylens::{build_figure, BookingRecord, Dataset, FigureService, Selection, StayField};
use std::sync::Arc;

fn dataset() -> Arc<Dataset> {
    Arc::new(
        Dataset::from_records(vec![
            BookingRecord {
                hotel: "Resort Hotel".to_string(),
                country: "PRT".to_string(),
                arrival_date_year: 2016,
                arrival_date_month: "July".to_string(),
                stays_in_weekend_nights: 2,
                stays_in_week_nights: 5,
            },
            BookingRecord {
                hotel: "City Hotel".to_string(),
                country: "GBR".to_string(),
                arrival_date_year: 2016,
                arrival_date_month: "March".to_string(),
                stays_in_weekend_nights: 0,
                stays_in_week_nights: 2,
            },
        ])
        .expect("dataset"),
    )
}

#[tokio::test]
async fn dispatched_figures_match_direct_builds() {
    let dataset = dataset();
    let service = FigureService::spawn(dataset.clone());
    let selection = Selection::new("PRT", StayField::WeekendNights, 2016);
    let dispatched = service.render(selection.clone()).await.expect("render");
    assert_eq!(dispatched, build_figure(&dataset, &selection));
}

#[tokio::test]
async fn requests_are_independent_and_stateless() {
    let service = FigureService::spawn(dataset());
    let a = Selection::new("PRT", StayField::WeekendNights, 2016);
    let b = Selection::new("GBR", StayField::WeekNights, 2016);
    let first_a = service.render(a.clone()).await.expect("render");
    let _ = service.render(b).await.expect("render");
    let second_a = service.render(a).await.expect("render");
    // An interleaved request must not leak into a later figure.
    assert_eq!(first_a, second_a);
}
