// Copyright 2026, The kube-sandbox authors
// SPDX-License-Identifier: Apache-2.0

//! Pod management utilities

use crate::error::{Result, SandboxError};
use crate::kubernetes::EnsureOutcome;
use k8s_openapi::api::core::v1::{Container, Pod, PodSpec};
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client,
};
use tracing::{debug, info, instrument};

/// Ensure a single-container pod exists in the namespace, create if it doesn't
#[instrument(skip(client, image))]
pub async fn ensure_pod(
    client: &Client,
    name: &str,
    namespace: &str,
    image: &str,
) -> Result<EnsureOutcome> {
    let pods: Api<Pod> = Api::namespaced(client.clone(), namespace);

    match pods.get(name).await {
        Ok(_) => {
            debug!("Pod {}/{} already exists", namespace, name);
            Ok(EnsureOutcome::AlreadyExists)
        }
        Err(kube::Error::Api(err)) if err.code == 404 => {
            info!("Creating pod {}/{} with image {}", namespace, name, image);
            let pod = sandbox_pod(name, namespace, image);
            pods.create(&PostParams::default(), &pod).await?;
            info!("Pod {}/{} created successfully", namespace, name);
            Ok(EnsureOutcome::Created)
        }
        Err(e) => Err(SandboxError::PodError(format!(
            "Failed to check pod {}/{}: {}",
            namespace, name, e
        ))),
    }
}

/// Build the pod object: one container, no further spec
fn sandbox_pod(name: &str, namespace: &str, image: &str) -> Pod {
    Pod {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: "nginx".to_string(),
                image: Some(image.to_string()),
                ..Default::default()
            }],
            ..Default::default()
        }),
        ..Default::default()
    }
}
