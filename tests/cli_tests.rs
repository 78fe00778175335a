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

//! Argument-surface tests for the ds-usage CLI.

use std::io::Write;

use clap::Parser;
use ds_usage::cli::Cli;
use ds_usage::units::{Unit, UnitRequest};
use ds_usage::Error;

#[test]
fn unit_defaults_to_passthrough_megabytes() {
    let cli = Cli::try_parse_from(["ds-usage", "esx01"]).unwrap();
    assert_eq!(cli.unit_request().unwrap(), None);
}

#[test]
fn explicit_units_parse_case_insensitively() {
    for (value, expected) in [
        ("MB", UnitRequest::Fixed(Unit::Mb)),
        ("gb", UnitRequest::Fixed(Unit::Gb)),
        ("Tb", UnitRequest::Fixed(Unit::Tb)),
        ("HUMAN", UnitRequest::Auto),
        ("human", UnitRequest::Auto),
    ] {
        let cli = Cli::try_parse_from(["ds-usage", "--unit", value, "esx01"]).unwrap();
        assert_eq!(cli.unit_request().unwrap(), Some(expected), "unit {value}");
    }
}

#[test]
fn unknown_unit_reports_the_offending_value() {
    let cli = Cli::try_parse_from(["ds-usage", "--unit", "PB", "esx01"]).unwrap();
    match cli.unit_request().unwrap_err() {
        Error::UnknownUnit(value) => assert_eq!(value, "PB"),
        other => panic!("expected UnknownUnit, got {other:?}"),
    }
}

#[test]
fn human_flag_takes_precedence() {
    let cli = Cli::try_parse_from(["ds-usage", "--unit", "tb", "--human", "esx01"]).unwrap();
    assert_eq!(cli.unit_request().unwrap(), Some(UnitRequest::Auto));
}

#[test]
fn hostfile_extends_positional_hosts() {
    let mut hostfile = tempfile::NamedTempFile::new().unwrap();
    writeln!(hostfile, "# production cluster").unwrap();
    writeln!(hostfile, "esx02").unwrap();
    writeln!(hostfile).unwrap();
    writeln!(hostfile, "  esx03  ").unwrap();
    hostfile.flush().unwrap();

    let path = hostfile.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["ds-usage", "--hostfile", path, "esx01"]).unwrap();

    assert_eq!(cli.resolve_hosts().unwrap(), vec!["esx01", "esx02", "esx03"]);
}

#[test]
fn empty_hostfile_without_hosts_is_an_error() {
    let hostfile = tempfile::NamedTempFile::new().unwrap();
    let path = hostfile.path().to_str().unwrap();

    let cli = Cli::try_parse_from(["ds-usage", "--hostfile", path]).unwrap();
    assert!(cli.resolve_hosts().is_err());
}

#[test]
fn missing_hostfile_propagates_io_error() {
    let cli =
        Cli::try_parse_from(["ds-usage", "--hostfile", "/nonexistent/hosts.txt", "esx01"])
            .unwrap();
    assert!(matches!(cli.resolve_hosts(), Err(Error::Io(_))));
}
