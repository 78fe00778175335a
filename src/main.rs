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

use std::io::Write;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ds_usage::cli::Cli;
use ds_usage::inventory::HttpInventoryClient;
use ds_usage::report::{build_report, render_table};
use ds_usage::Result;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ds_usage=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}

/// Run the report for every host. Returns `Ok(false)` when any host failed;
/// hosts after a failed one are still attempted, and tables already printed
/// stay printed.
async fn run(cli: &Cli) -> Result<bool> {
    let unit = cli.unit_request()?;
    let hosts = cli.resolve_hosts()?;
    let client = HttpInventoryClient::new(&cli.endpoint)?;

    let mut stdout = std::io::stdout().lock();
    let mut all_succeeded = true;

    for host in &hosts {
        match build_report(&client, host, unit).await {
            Ok(rows) => {
                render_table(&mut stdout, host, &rows)?;
                stdout.flush()?;
            }
            Err(e) => {
                tracing::error!("failed to report on host {host}: {e}");
                all_succeeded = false;
            }
        }
    }

    Ok(all_succeeded)
}
