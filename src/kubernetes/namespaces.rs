// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0

//! Namespace management utilities

use crate::error::{Result, SandboxError};
use crate::kubernetes::EnsureOutcome;
use k8s_openapi::api::core::v1::Namespace;
use kube::{
    api::{ListParams, ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// Ensure a namespace exists in the cluster, create if it doesn't
#[instrument(skip(client))]
pub async fn ensure_namespace(client: &Client, name: &str) -> Result<EnsureOutcome> {
    let namespaces: Api<Namespace> = Api::all(client.clone());

    match namespaces.get(name).await {
        Ok(_) => {
            debug!("Namespace {} already exists", name);
            Ok(EnsureOutcome::AlreadyExists)
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating namespace {}", name);
            let ns = Namespace {
                metadata: ObjectMeta {
                    name: Some(name.to_string()),
                    ..Default::default()
                },
                ..Default::default()
            };
            namespaces.create(&PostParams::default(), &ns).await?;
            info!("Namespace {} created successfully", name);
            Ok(EnsureOutcome::Created)
        }
        Err(e) => Err(SandboxError::NamespaceError(format!(
            "Failed to check namespace {}: {}",
            name, e
        ))),
    }
}

/// List all namespaces in the cluster
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client) -> Result<Vec<Namespace>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let list = namespaces.list(&ListParams::default()).await?;
    Ok(list.items)
}
