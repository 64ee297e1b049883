// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Client creation from the environment or a kubeconfig document

use crate::config::Config;
use crate::error::{BuilderError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use tracing::{debug, info, instrument};

/// Create the client handed to the builders.
///
/// Uses the kubeconfig file from `config` when set, otherwise the
/// in-cluster or default kubeconfig is inferred.
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let Some(path) = config.kubeconfig.as_ref() else {
        debug!("No kubeconfig path configured, inferring client configuration");
        let c = KConfig::infer()
            .await
            .map_err(|e| BuilderError::KubeconfigError(format!("Failed to infer config: {}", e)))?;
        return Client::try_from(c).map_err(|e| {
            BuilderError::KubeconfigError(format!("Failed to create client: {}", e))
        });
    };

    info!("Loading kubeconfig from {}", path.display());

    let kubeconfig = tokio::fs::read_to_string(path).await.map_err(|e| {
        BuilderError::KubeconfigError(format!(
            "Failed to read kubeconfig {}: {}",
            path.display(),
            e
        ))
    })?;

    create_client_from_kubeconfig(&kubeconfig, config.context.as_deref()).await
}

/// Create a Kubernetes client from a kubeconfig string
pub async fn create_client_from_kubeconfig(kubeconfig: &str, context: Option<&str>) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| BuilderError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let options = KubeConfigOptions {
        context: context.map(str::to_string),
        ..Default::default()
    };

    let client_config = KConfig::from_custom_kubeconfig(kubeconfig_parsed, &options)
        .await
        .map_err(|e| BuilderError::KubeconfigError(format!("Failed to create config: {}", e)))?;

    debug!("Using cluster {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| BuilderError::KubeconfigError(format!("Failed to create client: {}", e)))
}
