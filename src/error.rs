// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Namespace lookup failed: {0}")]
    NamespaceError(String),

    #[error("Pod lookup failed: {0}")]
    PodError(String),
}

pub type Result<T> = std::result::Result<T, SandboxError>;
