// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0

/// Name of the sandbox namespace both tools operate on
pub const NAMESPACE: &str = "kube-sandbox";
/// Name of the single pod created by the sandbox
pub const POD_NAME: &str = "kube-sandbox-nginx-pod";
/// Container image run by the sandbox pod
pub const POD_IMAGE: &str = "nginx:latest";

/// Namespace poller configuration
pub mod poll {
    /// Seconds between namespace listings
    pub const INTERVAL_SECS: u64 = 3;
}
