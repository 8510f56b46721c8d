// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use clap::Parser;

use kube_sandbox::cli::Args;
use kube_sandbox::constants::{NAMESPACE, POD_IMAGE, POD_NAME};
use kube_sandbox::kubernetes::{create_client, ensure_namespace, ensure_pod, EnsureOutcome};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let client = create_client(args.kubeconfig.as_deref()).await?;

    // Check for the namespace, create if it doesn't exist
    match ensure_namespace(&client, NAMESPACE).await? {
        EnsureOutcome::Created => {
            println!("The \"{}\" namespace has been created", NAMESPACE);
        }
        EnsureOutcome::AlreadyExists => {
            println!("The \"{}\" namespace already exists", NAMESPACE);
        }
    }

    // Check for the pod in the namespace, create it if it doesn't exist
    match ensure_pod(&client, POD_NAME, NAMESPACE, POD_IMAGE).await? {
        EnsureOutcome::Created => {
            println!(
                "The \"{}\" pod has been created in the \"{}\" namespace",
                POD_NAME, NAMESPACE
            );
        }
        EnsureOutcome::AlreadyExists => {
            println!(
                "The \"{}\" pod already exists in the \"{}\" namespace",
                POD_NAME, NAMESPACE
            );
        }
    }

    Ok(())
}
