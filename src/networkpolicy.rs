// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! NetworkPolicy builder

use crate::builder::{BuildableResource, Builder};
use k8s_openapi::api::networking::v1::{
    NetworkPolicy, NetworkPolicyIngressRule, NetworkPolicyPeer, NetworkPolicySpec,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::LabelSelector;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::debug;

pub type NetworkPolicyBuilder = Builder<NetworkPolicy>;

impl BuildableResource for NetworkPolicy {
    const DISPLAY_NAME: &'static str = "networkPolicy";

    fn from_metadata(metadata: ObjectMeta) -> Self {
        NetworkPolicy {
            metadata,
            spec: Some(NetworkPolicySpec::default()),
            ..Default::default()
        }
    }
}

fn match_labels(labels: BTreeMap<String, String>) -> Option<LabelSelector> {
    Some(LabelSelector {
        match_labels: Some(labels),
        ..Default::default()
    })
}

impl Builder<NetworkPolicy> {
    fn spec_mut(&mut self) -> &mut NetworkPolicySpec {
        self.definition.spec.get_or_insert_with(Default::default)
    }

    /// Append an ingress rule allowing traffic from the selected namespaces and/or pods.
    pub fn with_namespace_ingress_rule(
        mut self,
        namespace_ingress_match_labels: BTreeMap<String, String>,
        pod_ingress_match_labels: BTreeMap<String, String>,
    ) -> Self {
        if self.validate().is_err() {
            return self;
        }

        debug!(
            "Applying Ingress rule to networkPolicy {} in namespace {}",
            self.name(),
            self.namespace()
        );

        if namespace_ingress_match_labels.is_empty() && pod_ingress_match_labels.is_empty() {
            debug!("At least one type of the selector for NetworkPolicy ingress rule should be defined");
            self.record_error(
                "Both namespaceIngressMatchLabels and podIngressMatchLabels parameters are empty maps",
            );
            return self;
        }

        let mut peer = NetworkPolicyPeer::default();

        if !namespace_ingress_match_labels.is_empty() {
            debug!(
                "Applying Ingress rule with namespaceIngressMatchLabels {:?}",
                namespace_ingress_match_labels
            );
            peer.namespace_selector = match_labels(namespace_ingress_match_labels);
        }

        if !pod_ingress_match_labels.is_empty() {
            debug!(
                "Applying Ingress rule with podIngressMatchLabels {:?}",
                pod_ingress_match_labels
            );
            peer.pod_selector = match_labels(pod_ingress_match_labels);
        }

        self.spec_mut()
            .ingress
            .get_or_insert_with(Vec::new)
            .push(NetworkPolicyIngressRule {
                from: Some(vec![peer]),
                ..Default::default()
            });

        self
    }

    /// Add a policy type, see [`crate::constants::policy_types`].
    pub fn with_policy_type(mut self, policy_type: &str) -> Self {
        if self.validate().is_err() {
            return self;
        }

        debug!(
            "Creating networkPolicy {} in {} namespace with the policyType defined: {}",
            self.name(),
            self.namespace(),
            policy_type
        );

        if policy_type.is_empty() {
            debug!("The policyType value has to be provided");
            self.record_error("The policyType is an empty string");
            return self;
        }

        self.spec_mut()
            .policy_types
            .get_or_insert_with(Vec::new)
            .push(policy_type.to_string());

        self
    }

    /// Select the pods the policy applies to.
    pub fn with_pod_selector(mut self, pod_selector_match_labels: BTreeMap<String, String>) -> Self {
        if self.validate().is_err() {
            return self;
        }

        debug!(
            "Creating networkPolicy {} in {} namespace with podSelector defined: {:?}",
            self.name(),
            self.namespace(),
            pod_selector_match_labels
        );

        if pod_selector_match_labels.is_empty() {
            debug!("The podSelector could not be empty");
            self.record_error("The podSelector is an empty string");
            return self;
        }

        self.spec_mut().pod_selector = LabelSelector {
            match_labels: Some(pod_selector_match_labels),
            ..Default::default()
        };

        self
    }
}
