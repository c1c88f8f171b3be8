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

use staylens::{ControlPanel, TablePreview};
use std::fmt::Write;

const STYLESHEET: &str = "https://codepen.io/chriddyp/pen/bWLwgP.css";
const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
const INTRO: &str = "Have you ever wondered when the best time of year to book a hotel room is? \
Or the optimal length of stay in order to get the best daily rate? What if you wanted to predict \
whether or not a hotel was likely to receive a disproportionately high number of special requests? \
This hotel booking dataset can help you explore those questions!";
const CHART_NOTE: &str = "This Dashboard represents the data for number of hotel stays in a \
particular month in a particular country and the type of hotel preferred.";

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn country_options(controls: &ControlPanel) -> String {
    let mut out = String::new();
    for country in &controls.countries {
        let selected = if *country == controls.default_country {
            " selected"
        } else {
            ""
        };
        let c = escape(country);
        let _ = write!(out, "<option value=\"{c}\"{selected}>{c}</option>");
    }
    out
}

fn stay_radios(controls: &ControlPanel) -> String {
    let mut out = String::new();
    for option in &controls.stay_options {
        let checked = if option.value == controls.default_stay_field {
            " checked"
        } else {
            ""
        };
        let _ = write!(
            out,
            "<label><input type=\"radio\" name=\"stay_type\" value=\"{}\"{checked}> {}</label>",
            option.value.column_name(),
            escape(&option.label)
        );
    }
    out
}

fn year_marks(controls: &ControlPanel) -> String {
    let mut out = String::new();
    for year in &controls.year.years {
        let _ = write!(out, "<option value=\"{year}\" label=\"{year}\"></option>");
    }
    out
}

fn preview_table(preview: &TablePreview) -> String {
    let mut out = String::from("<table><thead><tr>");
    for column in &preview.header {
        let _ = write!(out, "<th>{}</th>", escape(column));
    }
    out.push_str("</tr></thead><tbody>");
    for row in &preview.rows {
        out.push_str("<tr>");
        for cell in row {
            let _ = write!(out, "<td>{}</td>", escape(cell));
        }
        out.push_str("</tr>");
    }
    out.push_str("</tbody></table>");
    out
}

/// Server-side render of the whole dashboard: controls pre-populated
/// from the dataset, a plotly chart area, and the static preview table.
pub fn render_page(controls: &ControlPanel, preview: &TablePreview) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>Hotel Bookings</title>
<link rel="stylesheet" href="{STYLESHEET}">
<script src="{PLOTLY_JS}"></script>
</head>
<body>
<div style="padding-left:100px;padding-right:100px;text-align:center"><h1>Hotel Bookings</h1></div>
<div>{intro}</div>
<div style="padding-top:30px;padding-bottom:30px">{chart_note}</div>
<div>
  <div style="width:30%;display:inline-block;padding-left:100px">
    <label>Select Country</label>
    <select id="country">{countries}</select>
  </div>
  <div style="width:45%;float:right;display:inline-block">
    <label>Select Stay Type</label>
    {stays}
  </div>
  <div style="width:80%;font-size:20px;padding:30px 100px;display:inline-block">
    <div id="graph"></div>
    <label>Year</label>
    <input type="range" id="year-slider" min="{year_min}" max="{year_max}" step="1" value="{year_default}" list="year-marks">
    <datalist id="year-marks">{marks}</datalist>
    <span id="year-value">{year_default}</span>
  </div>
</div>
<div style="width:90%;text-align:center;padding:20px">
  <h4>Hotel Bookings Data</h4>
  {table}
</div>
<script>
function currentSelection() {{
  return {{
    country: document.getElementById('country').value,
    stay_type: document.querySelector('input[name="stay_type"]:checked').value,
    year: document.getElementById('year-slider').value,
  }};
}}
function refresh() {{
  const s = currentSelection();
  document.getElementById('year-value').textContent = s.year;
  const params = new URLSearchParams(s);
  fetch('/api/figure?' + params.toString())
    .then((r) => r.json())
    .then((figure) => Plotly.react('graph', figure.data, figure.layout));
}}
document.getElementById('country').addEventListener('change', refresh);
document.getElementById('year-slider').addEventListener('input', refresh);
document.querySelectorAll('input[name="stay_type"]').forEach((el) =>
  el.addEventListener('change', refresh));
refresh();
</script>
</body>
</html>
"#,
        intro = escape(INTRO),
        chart_note = escape(CHART_NOTE),
        countries = country_options(controls),
        stays = stay_radios(controls),
        year_min = controls.year.min,
        year_max = controls.year.max,
        year_default = controls.default_year,
        marks = year_marks(controls),
        table = preview_table(preview),
    )
}
