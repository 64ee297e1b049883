// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Typed custom resources managed by the builders.

pub mod far;

pub use far::{
    FenceAgentsRemediation, FenceAgentsRemediationSpec, FenceAgentsRemediationTemplate,
    FenceAgentsRemediationTemplateSpec, RemediationStrategy,
};
