// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generic resource builder: a desired definition, the last object read from the
//! cluster, and a sticky error recorded by configuration calls.

use crate::error::{BuilderError, Result};
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{DeleteParams, ObjectMeta, PostParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{debug, info, instrument, warn};

/// A namespaced kind that can be managed through a [`Builder`].
pub trait BuildableResource:
    Resource<Scope = NamespaceResourceScope, DynamicType = ()>
    + Clone
    + Debug
    + Serialize
    + DeserializeOwned
    + Send
    + Sync
    + 'static
{
    /// Name used in error messages, e.g. `networkPolicy`
    const DISPLAY_NAME: &'static str;

    /// Build an empty definition carrying only the given metadata
    fn from_metadata(metadata: ObjectMeta) -> Self;
}

/// Builder for a single namespaced object.
///
/// Configuration methods never fail: the first invalid input is stored and
/// every later call, including lifecycle operations, short-circuits with it.
#[derive(Clone)]
pub struct Builder<K: BuildableResource> {
    /// Desired state, used by create and update
    pub definition: K,
    /// Object as last read from the cluster
    pub object: Option<K>,
    client: Option<Client>,
    error_msg: Option<String>,
}

impl<K: BuildableResource> Builder<K> {
    /// Create a builder for `name` in `namespace`.
    ///
    /// An empty name or namespace is recorded as the pending error.
    pub fn new(client: impl Into<Option<Client>>, name: &str, namespace: &str) -> Self {
        debug!(
            "Initializing new {} builder with the following params: name: {}, namespace: {}",
            K::DISPLAY_NAME,
            name,
            namespace
        );

        let mut builder = Self::with_definition(client.into(), name, namespace);

        if name.is_empty() {
            debug!("The name of the {} is empty", K::DISPLAY_NAME);
            builder.record_error(format!("The {} 'name' cannot be empty", K::DISPLAY_NAME));
        } else if namespace.is_empty() {
            debug!("The namespace of the {} is empty", K::DISPLAY_NAME);
            builder.record_error(format!(
                "The {} 'namespace' cannot be empty",
                K::DISPLAY_NAME
            ));
        }

        builder
    }

    /// Load an existing object from the cluster into a new builder.
    ///
    /// The definition of the returned builder is the fetched object.
    #[instrument(skip(client))]
    pub async fn pull(
        client: impl Into<Option<Client>>,
        name: &str,
        namespace: &str,
    ) -> Result<Self> {
        let Some(client) = client.into() else {
            debug!("The apiClient is nil");
            return Err(BuilderError::Invalid("apiClient cannot be nil".to_string()));
        };

        debug!(
            "Pulling existing {} name: {} namespace: {}",
            K::DISPLAY_NAME,
            name,
            namespace
        );

        if name.is_empty() {
            return Err(BuilderError::Invalid(format!(
                "{} 'name' cannot be empty",
                K::DISPLAY_NAME
            )));
        }

        if namespace.is_empty() {
            return Err(BuilderError::Invalid(format!(
                "{} 'namespace' cannot be empty",
                K::DISPLAY_NAME
            )));
        }

        let mut builder = Self::with_definition(Some(client), name, namespace);

        // Only a definition read from the cluster may be handed back, so lookup
        // errors other than not-found fail the pull.
        let found = builder.try_exists().await?;

        let Some(object) = builder.object.clone().filter(|_| found) else {
            debug!(
                "Failed to pull {} object {} from namespace {}. Object doesn't exist",
                K::DISPLAY_NAME,
                name,
                namespace
            );
            return Err(BuilderError::NotFound {
                display: K::DISPLAY_NAME.to_string(),
                name: name.to_string(),
                namespace: namespace.to_string(),
            });
        };

        builder.definition = object;
        Ok(builder)
    }

    fn with_definition(client: Option<Client>, name: &str, namespace: &str) -> Self {
        Self {
            definition: K::from_metadata(ObjectMeta {
                name: Some(name.to_string()),
                namespace: Some(namespace.to_string()),
                ..Default::default()
            }),
            object: None,
            client,
            error_msg: None,
        }
    }

    /// The pending error, if any configuration step failed
    pub fn error_msg(&self) -> Option<&str> {
        self.error_msg.as_deref()
    }

    pub fn name(&self) -> String {
        self.definition.name_any()
    }

    pub fn namespace(&self) -> String {
        self.definition.namespace().unwrap_or_default()
    }

    /// Store `msg` as the pending error unless one is already set
    pub(crate) fn record_error(&mut self, msg: impl Into<String>) {
        if self.error_msg.is_none() {
            self.error_msg = Some(msg.into());
        }
    }

    /// Check that the builder is usable and hand out its client.
    pub(crate) fn validate(&self) -> Result<&Client> {
        let kind = K::kind(&());

        let Some(client) = self.client.as_ref() else {
            debug!("The {} builder apiclient is nil", kind);
            return Err(BuilderError::MissingClient {
                kind: kind.to_string(),
            });
        };

        if let Some(msg) = &self.error_msg {
            debug!("The {} builder has error message: {}", kind, msg);
            return Err(BuilderError::Invalid(msg.clone()));
        }

        Ok(client)
    }

    fn api(&self) -> Result<Api<K>> {
        let client = self.validate()?;
        Ok(Api::namespaced(client.clone(), &self.namespace()))
    }

    /// Check whether the object exists on the cluster, storing it when found.
    ///
    /// Any error other than not-found is reported as existing, so callers
    /// never recreate an object they merely failed to read. Use
    /// [`Builder::try_exists`] to observe those errors.
    pub async fn exists(&mut self) -> bool {
        match self.try_exists().await {
            Ok(found) => found,
            Err(BuilderError::KubeError(e)) => {
                warn!(
                    "Could not determine whether {} {} exists in namespace {}: {}",
                    K::DISPLAY_NAME,
                    self.name(),
                    self.namespace(),
                    e
                );
                true
            }
            Err(_) => false,
        }
    }

    /// Strict existence check: not-found is `Ok(false)`, other errors are returned.
    pub async fn try_exists(&mut self) -> Result<bool> {
        let api = self.api()?;
        let name = self.name();

        debug!(
            "Checking if {} {} exists in namespace {}",
            K::DISPLAY_NAME,
            name,
            self.namespace()
        );

        match api.get(&name).await {
            Ok(object) => {
                self.object = Some(object);
                Ok(true)
            }
            Err(kube::Error::Api(err)) if err.code == 404 => {
                self.object = None;
                Ok(false)
            }
            Err(e) => {
                self.object = None;
                Err(e.into())
            }
        }
    }

    /// Create the object unless it already exists, storing the created object.
    #[instrument(skip(self), fields(name = %self.name(), namespace = %self.namespace()))]
    pub async fn create(&mut self) -> Result<&mut Self> {
        let api = self.api()?;

        debug!("Creating the {}", K::DISPLAY_NAME);

        if !self.exists().await {
            let created = api.create(&PostParams::default(), &self.definition).await?;
            info!("Created {} {}", K::DISPLAY_NAME, created.name_any());
            self.object = Some(created);
        }

        Ok(self)
    }

    /// Replace the object on the cluster with the current definition.
    #[instrument(skip(self), fields(name = %self.name(), namespace = %self.namespace()))]
    pub async fn update(&mut self) -> Result<&mut Self> {
        let api = self.api()?;
        let name = self.name();

        debug!("Updating {}", K::DISPLAY_NAME);

        let result = api
            .replace(&name, &PostParams::default(), &self.definition)
            .await;

        match result {
            Ok(updated) => {
                info!("Updated {} {}", K::DISPLAY_NAME, name);
                self.object = Some(updated);
                Ok(self)
            }
            Err(e) => {
                self.object = None;
                Err(e.into())
            }
        }
    }

    /// Delete the object; deleting an absent object succeeds.
    #[instrument(skip(self), fields(name = %self.name(), namespace = %self.namespace()))]
    pub async fn delete(&mut self) -> Result<()> {
        let api = self.api()?;
        let name = self.name();

        debug!("Deleting the {}", K::DISPLAY_NAME);

        if !self.exists().await {
            debug!("The {} {} doesn't exist", K::DISPLAY_NAME, name);
            self.object = None;
            return Ok(());
        }

        match api.delete(&name, &DeleteParams::default()).await {
            Ok(_) => info!("Deleted {} {}", K::DISPLAY_NAME, name),
            Err(kube::Error::Api(err)) if err.code == 404 => {
                debug!("The {} {} was already gone", K::DISPLAY_NAME, name);
            }
            Err(e) => {
                return Err(BuilderError::DeleteFailed {
                    display: K::DISPLAY_NAME.to_string(),
                    source: e,
                })
            }
        }

        self.object = None;
        Ok(())
    }
}
