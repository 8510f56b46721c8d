// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig path or inferred configuration

use crate::error::{Result, SandboxError};
use kube::{
    config::{KubeConfigOptions, Kubeconfig},
    Client, Config,
};
use std::path::Path;
use tracing::{debug, info};

/// Create a Kubernetes client.
///
/// With a path, the kubeconfig file at that location is used. Without one,
/// configuration is inferred (KUBECONFIG, then the home directory kubeconfig,
/// then in-cluster service account credentials).
pub async fn create_client(kubeconfig: Option<&Path>) -> Result<Client> {
    let config = match kubeconfig {
        Some(path) => {
            info!("Loading kubeconfig from {}", path.display());
            create_config_from_file(path).await?
        }
        None => {
            debug!("No kubeconfig path given, inferring configuration");
            Config::infer().await.map_err(|e| {
                SandboxError::KubeconfigError(format!("Failed to infer config: {}", e))
            })?
        }
    };

    Client::try_from(config).map_err(SandboxError::KubeError)
}

async fn create_config_from_file(path: &Path) -> Result<Config> {
    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        SandboxError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })?;

    Config::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| SandboxError::KubeconfigError(format!("Failed to create config: {}", e)))
}
