// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Client configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a kubeconfig file; the in-cluster or default config is inferred when unset
    pub kubeconfig: Option<PathBuf>,
    /// Kubeconfig context to use instead of the current one
    pub context: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let kubeconfig = lookup("KUBECONFIG")
            .filter(|v| !v.is_empty())
            .map(|v| {
                // KUBECONFIG may hold a list of paths, only the first one is used
                v.split(':')
                    .next()
                    .filter(|p| !p.is_empty())
                    .map(PathBuf::from)
                    .context("KUBECONFIG environment variable starts with an empty path")
            })
            .transpose()?;
        let context = lookup("KUBE_CONTEXT").filter(|v| !v.is_empty());

        Ok(Config {
            kubeconfig,
            context,
        })
    }
}
