// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;
use std::io::{self, Write};
use std::time::Duration;
use tokio::time::sleep;

use kube_sandbox::cli::Args;
use kube_sandbox::constants::poll::INTERVAL_SECS;
use kube_sandbox::kubernetes::{create_client, list_namespaces};
use kube_sandbox::listing::{render_namespace_listing, CLEAR_SCREEN};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let client = create_client(args.kubeconfig.as_deref()).await?;

    // Serial poll loop, no exit condition. Any listing error aborts the process.
    loop {
        let namespaces = list_namespaces(&client).await?;

        let mut stdout = io::stdout();
        stdout.write_all(CLEAR_SCREEN.as_bytes())?;
        stdout.write_all(render_namespace_listing(&namespaces).as_bytes())?;
        stdout.flush()?;

        sleep(Duration::from_secs(INTERVAL_SECS)).await;
    }
}
