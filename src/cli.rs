// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0

//! Command line arguments shared by both sandbox binaries.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Args {
    /// Absolute path to the kubeconfig file. Falls back to the standard
    /// lookup (KUBECONFIG, then ~/.kube/config, then in-cluster) when omitted.
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,
}
