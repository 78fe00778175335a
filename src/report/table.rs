// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Plain-text table rendering for usage reports.

use std::io::Write;

use crate::report::builder::ReportRow;

const HEADERS: [&str; 6] = [
    "Name",
    "Size",
    "Used",
    "Used (%)",
    "Provisioned",
    "Provisioned(%)",
];

/// Render one host's report: a header line identifying the host, then the
/// table. `Name` is left-aligned, every other column right-aligned, columns
/// separated by two spaces.
pub fn render_table<W: Write>(out: &mut W, host: &str, rows: &[ReportRow]) -> std::io::Result<()> {
    writeln!(out, "Datastore usage for host {host}")?;

    let mut widths: [usize; 6] = [0; 6];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in rows {
        for (i, cell) in row.cells().iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    write_line(out, &HEADERS, &widths)?;
    for row in rows {
        write_line(out, &row.cells(), &widths)?;
    }
    writeln!(out)?;

    Ok(())
}

fn write_line<W: Write>(out: &mut W, cells: &[&str; 6], widths: &[usize; 6]) -> std::io::Result<()> {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        if i == 0 {
            line.push_str(&format!("{cell:<width$}", width = widths[i]));
        } else {
            line.push_str(&format!("{cell:>width$}", width = widths[i]));
        }
    }
    writeln!(out, "{}", line.trim_end())
}
