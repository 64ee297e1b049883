// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Builders to create, pull, update and delete Kubernetes resources.
//!
//! Every builder follows the same lifecycle: construct with [`builder::Builder::new`]
//! or [`builder::Builder::pull`], chain `with_*` configuration calls, then call
//! `create`, `update`, `delete` or `exists`. The first configuration error is
//! kept and returned by every later lifecycle call.

pub mod builder;
pub mod config;
pub mod constants;
pub mod error;
pub mod far;
pub mod kubernetes;
pub mod networkpolicy;
pub mod types;

#[cfg(test)]
pub mod test_utils;

pub use builder::{BuildableResource, Builder};
pub use error::{BuilderError, Result};
pub use far::{FenceAgentsRemediationBuilder, FenceAgentsRemediationTemplateBuilder};
pub use networkpolicy::NetworkPolicyBuilder;
