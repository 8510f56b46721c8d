// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes utilities for client creation and namespace/pod management.

pub mod client;
pub mod namespaces;
pub mod pods;

pub use client::create_client;
pub use namespaces::{ensure_namespace, list_namespaces};
pub use pods::ensure_pod;

/// Result of a get-or-create call against the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsureOutcome {
    /// The resource was missing and exactly one create call was issued
    Created,
    /// The lookup succeeded and no create call was issued
    AlreadyExists,
}
