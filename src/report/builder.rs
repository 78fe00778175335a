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

//! Per-volume metric computation.
//!
//! Builds one [`ReportRow`] per datastore attached to a host. Volumes are
//! processed strictly in listing order, one listing call plus one
//! storage-info refresh per volume, with no caching between invocations.

use crate::error::Result;
use crate::inventory::InventoryClient;
use crate::units::{select_unit, UnitRequest};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

/// One rendered table row. All fields are display strings, computed fresh
/// each run and discarded after printing.
#[derive(Debug, Clone)]
pub struct ReportRow {
    pub name: String,
    pub size: String,
    pub used: String,
    pub used_percent: String,
    pub provisioned: String,
    pub provisioned_percent: String,
}

impl ReportRow {
    pub(crate) fn cells(&self) -> [&str; 6] {
        [
            &self.name,
            &self.size,
            &self.used,
            &self.used_percent,
            &self.provisioned,
            &self.provisioned_percent,
        ]
    }
}

/// Build the usage report for one host, one row per datastore.
///
/// Any listing, refresh, or formatting failure aborts the whole report for
/// this host; no partial row set is returned.
pub async fn build_report(
    client: &dyn InventoryClient,
    host: &str,
    unit: Option<UnitRequest>,
) -> Result<Vec<ReportRow>> {
    let datastores = client.list_datastores(host).await?;
    tracing::debug!("host {host}: {} datastore(s)", datastores.len());

    let mut rows = Vec::with_capacity(datastores.len());
    for datastore in datastores {
        let capacity_mb = datastore.capacity_mb as f64;
        let used_mb = capacity_mb - datastore.free_space_mb as f64;

        // Live refresh so the thin-provisioning figures are current.
        let info = client.refresh_storage_info(host, &datastore.name).await?;
        let actual_used_mb = (info.capacity_bytes as f64 - info.free_space_bytes as f64
            + info.uncommitted_bytes as f64)
            / BYTES_PER_MB;

        rows.push(ReportRow {
            name: datastore.name,
            size: format_magnitude(capacity_mb, unit),
            used: format_magnitude(used_mb, unit),
            used_percent: format_percent(used_mb, capacity_mb),
            provisioned: format_magnitude(actual_used_mb, unit),
            provisioned_percent: format_percent(actual_used_mb, capacity_mb),
        });
    }

    Ok(rows)
}

fn format_magnitude(size_mb: f64, request: Option<UnitRequest>) -> String {
    let (value, unit) = select_unit(size_mb, request);
    format!("{value:.1} {unit}")
}

fn format_percent(part_mb: f64, capacity_mb: f64) -> String {
    // Zero-capacity datastores report 0.00 instead of NaN.
    let percent = if capacity_mb > 0.0 {
        (part_mb / capacity_mb) * 100.0
    } else {
        0.0
    };
    format!("{percent:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::Unit;

    #[test]
    fn test_format_magnitude() {
        assert_eq!(
            format_magnitude(102400.0, Some(UnitRequest::Fixed(Unit::Gb))),
            "100.0 GB"
        );
        assert_eq!(format_magnitude(102400.0, None), "102400.0 MB");
        assert_eq!(
            format_magnitude(2097152.0, Some(UnitRequest::Auto)),
            "2.0 TB"
        );
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(51200.0, 102400.0), "50.00");
        assert_eq!(format_percent(1.0, 3.0), "33.33");
        assert_eq!(format_percent(0.0, 102400.0), "0.00");
    }

    #[test]
    fn test_format_percent_zero_capacity() {
        assert_eq!(format_percent(100.0, 0.0), "0.00");
    }
}
