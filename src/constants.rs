// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// API coordinates of the medik8s fence agents remediation CRDs
pub mod far {
    pub const GROUP: &str = "fence-agents-remediation.medik8s.io";
    pub const VERSION: &str = "v1alpha1";
    /// Condition type set once the node has been fenced and its workloads removed
    pub const CONDITION_SUCCEEDED: &str = "Succeeded";
    /// Condition type set while fencing is being processed
    pub const CONDITION_PROCESSING: &str = "Processing";
}

/// NetworkPolicy policy types
pub mod policy_types {
    pub const INGRESS: &str = "Ingress";
    pub const EGRESS: &str = "Egress";
}
