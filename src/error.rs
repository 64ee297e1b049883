// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuilderError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    /// A precondition failed, or the builder carries a pending error.
    #[error("{0}")]
    Invalid(String),

    #[error("{kind} builder cannot have nil apiClient")]
    MissingClient { kind: String },

    #[error("{display} object {name} doesn't exist in namespace {namespace}")]
    NotFound {
        display: String,
        name: String,
        namespace: String,
    },

    #[error("cannot delete {display}: {source}")]
    DeleteFailed {
        display: String,
        #[source]
        source: kube::Error,
    },

    #[error("Kubeconfig error: {0}")]
    KubeconfigError(String),
}

impl BuilderError {
    /// Whether this error is a 404 from the API server.
    pub fn is_not_found(&self) -> bool {
        matches!(self, BuilderError::KubeError(kube::Error::Api(err)) if err.code == 404)
    }
}

pub type Result<T> = std::result::Result<T, BuilderError>;
