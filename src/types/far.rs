// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::far::{CONDITION_PROCESSING, CONDITION_SUCCEEDED};
use kube::CustomResource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Desired state of a fence agents remediation. The json names follow the
/// upstream CRD, which mixes lowercase and camelCase keys.
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "fence-agents-remediation.medik8s.io",
    version = "v1alpha1",
    kind = "FenceAgentsRemediation",
    plural = "fenceagentsremediations",
    shortname = "far"
)]
#[kube(namespaced)]
#[kube(status = "FenceAgentsRemediationStatus")]
pub struct FenceAgentsRemediationSpec {
    /// Name of the fence agent executable, e.g. fence_ipmilan
    #[serde(default)]
    pub agent: String,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sharedparameters: BTreeMap<String, String>,
    /// Parameter name to node name to value
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub nodeparameters: BTreeMap<String, BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retrycount: Option<i32>,
    /// Go duration string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retryinterval: Option<String>,
    /// Go duration string
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<String>,
    #[serde(rename = "remediationStrategy", skip_serializing_if = "Option::is_none")]
    pub remediation_strategy: Option<RemediationStrategy>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, schemars::JsonSchema)]
pub enum RemediationStrategy {
    ResourceDeletion,
    OutOfServiceTaint,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FenceAgentsRemediationStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<Vec<Condition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, schemars::JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Condition {
    #[serde(rename = "type")]
    pub condition_type: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_transition_time: Option<String>,
}

impl FenceAgentsRemediation {
    fn has_true_condition(&self, condition_type: &str) -> bool {
        self.status
            .as_ref()
            .and_then(|s| s.conditions.as_ref())
            .is_some_and(|conditions| {
                conditions
                    .iter()
                    .any(|c| c.condition_type == condition_type && c.status == "True")
            })
    }

    /// Check whether the remediation finished fencing the node
    pub fn is_succeeded(&self) -> bool {
        self.has_true_condition(CONDITION_SUCCEEDED)
    }

    /// Check whether the remediation is still being processed
    pub fn is_processing(&self) -> bool {
        self.has_true_condition(CONDITION_PROCESSING)
    }
}

#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(
    group = "fence-agents-remediation.medik8s.io",
    version = "v1alpha1",
    kind = "FenceAgentsRemediationTemplate",
    plural = "fenceagentsremediationtemplates",
    shortname = "fartemplate"
)]
#[kube(namespaced)]
pub struct FenceAgentsRemediationTemplateSpec {
    #[serde(default)]
    pub template: FenceAgentsRemediationTemplateResource,
}

/// Spec stamped onto every remediation created from the template
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
pub struct FenceAgentsRemediationTemplateResource {
    #[serde(default)]
    pub spec: FenceAgentsRemediationSpec,
}
