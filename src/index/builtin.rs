//! Built-in Kubernetes resources known to the default resolver.
//!
//! The table is derived from the `k8s-openapi` type metadata so group,
//! version and plural resource names match the API server exactly.

use k8s_openapi::Resource;
use k8s_openapi::api::core::v1 as core_v1;
use k8s_openapi::api::{
    admissionregistration, apps, autoscaling, batch, certificates, coordination, events,
    networking, policy, rbac, scheduling, storage,
};
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions;

/// A resource served by the Kubernetes API server itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinResource {
    /// API group, empty for the core group
    pub group: &'static str,
    pub version: &'static str,
    /// Lowercase plural name used in API paths (e.g. "deployments")
    pub resource: &'static str,
    pub kind: &'static str,
}

const fn builtin<K: Resource>() -> BuiltinResource {
    BuiltinResource {
        group: K::GROUP,
        version: K::VERSION,
        resource: K::URL_PATH_SEGMENT,
        kind: K::KIND,
    }
}

static BUILTIN_RESOURCES: &[BuiltinResource] = &[
    builtin::<core_v1::ConfigMap>(),
    builtin::<core_v1::Endpoints>(),
    builtin::<core_v1::Event>(),
    builtin::<core_v1::LimitRange>(),
    builtin::<core_v1::Namespace>(),
    builtin::<core_v1::Node>(),
    builtin::<core_v1::PersistentVolume>(),
    builtin::<core_v1::PersistentVolumeClaim>(),
    builtin::<core_v1::Pod>(),
    builtin::<core_v1::ReplicationController>(),
    builtin::<core_v1::ResourceQuota>(),
    builtin::<core_v1::Secret>(),
    builtin::<core_v1::Service>(),
    builtin::<core_v1::ServiceAccount>(),
    builtin::<apps::v1::ControllerRevision>(),
    builtin::<apps::v1::DaemonSet>(),
    builtin::<apps::v1::Deployment>(),
    builtin::<apps::v1::ReplicaSet>(),
    builtin::<apps::v1::StatefulSet>(),
    builtin::<batch::v1::CronJob>(),
    builtin::<batch::v1::Job>(),
    builtin::<rbac::v1::ClusterRole>(),
    builtin::<rbac::v1::ClusterRoleBinding>(),
    builtin::<rbac::v1::Role>(),
    builtin::<rbac::v1::RoleBinding>(),
    builtin::<networking::v1::Ingress>(),
    builtin::<networking::v1::IngressClass>(),
    builtin::<networking::v1::NetworkPolicy>(),
    builtin::<policy::v1::PodDisruptionBudget>(),
    builtin::<autoscaling::v2::HorizontalPodAutoscaler>(),
    builtin::<storage::v1::CSIDriver>(),
    builtin::<storage::v1::StorageClass>(),
    builtin::<admissionregistration::v1::MutatingWebhookConfiguration>(),
    builtin::<admissionregistration::v1::ValidatingWebhookConfiguration>(),
    builtin::<events::v1::Event>(),
    builtin::<coordination::v1::Lease>(),
    builtin::<certificates::v1::CertificateSigningRequest>(),
    builtin::<scheduling::v1::PriorityClass>(),
    builtin::<apiextensions::v1::CustomResourceDefinition>(),
];

/// All built-in resources.
pub fn builtin_resources() -> &'static [BuiltinResource] {
    BUILTIN_RESOURCES
}

/// Map a kind or resource name (any case) to the built-in plural name.
///
/// "Deployment", "deployments" and "DEPLOYMENTS" all yield "deployments".
pub fn normalize_resource(name: &str) -> Option<&'static str> {
    BUILTIN_RESOURCES
        .iter()
        .find(|r| r.kind.eq_ignore_ascii_case(name) || r.resource.eq_ignore_ascii_case(name))
        .map(|r| r.resource)
}
