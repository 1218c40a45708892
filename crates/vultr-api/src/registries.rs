//! Container registry endpoints.
//!
//! Registry subscriptions and their repositories, Docker credentials, and the
//! regions and plans a registry can use. Credential endpoints use `OPTIONS`,
//! so their parameters travel in the query string.
//!
//! <https://www.vultr.com/api/#tag/Container-Registry>

use vultr_core::{Endpoint, Parameter, RequestType, ValueKind};

/// List registry subscriptions.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/list-registries>
pub static LIST_REGISTRIES: Endpoint = Endpoint {
    name: "registries.list_registries",
    url: "/registries",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("per_page", ValueKind::String),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Create a registry subscription.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/create-registry>
pub static CREATE_REGISTRY: Endpoint = Endpoint {
    name: "registries.create_registry",
    url: "/registry",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("name", ValueKind::String).required(),
        Parameter::new("public", ValueKind::Boolean).required(),
        Parameter::new("region", ValueKind::String).required(),
        Parameter::new("plan", ValueKind::String).required(),
    ],
};

/// Get one registry subscription.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/read-registry>
pub static READ_REGISTRY: Endpoint = Endpoint {
    name: "registries.read_registry",
    url: "/registry/{registry-id}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("registry-id", ValueKind::String)
        .path()
        .required()],
};

/// Change the visibility or plan of a registry.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/update-registry>
pub static UPDATE_REGISTRY: Endpoint = Endpoint {
    name: "registries.update_registry",
    url: "/registry/{registry-id}",
    request_type: RequestType::Put,
    api_key_required: true,
    parameters: &[
        Parameter::new("registry-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("public", ValueKind::Boolean),
        Parameter::new("plan", ValueKind::String),
    ],
};

/// Delete a registry subscription.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/delete-registry>
pub static DELETE_REGISTRY: Endpoint = Endpoint {
    name: "registries.delete_registry",
    url: "/registry/{registry-id}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[Parameter::new("registry-id", ValueKind::String)
        .path()
        .required()],
};

/// List the repositories of a registry.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/list-registry-repositories>
pub static LIST_REPOSITORIES: Endpoint = Endpoint {
    name: "registries.list_repositories",
    url: "/registry/{registry-id}/repositories",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("registry-id", ValueKind::String)
        .path()
        .required()],
};

/// Get one repository.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/read-registry-repository>
pub static READ_REPOSITORY: Endpoint = Endpoint {
    name: "registries.read_repository",
    url: "/registry/{registry-id}/repository/{repository-image}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("registry-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("repository-image", ValueKind::String)
            .path()
            .required(),
    ],
};

/// Update the description of a repository.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/update-repository>
pub static UPDATE_REPOSITORY: Endpoint = Endpoint {
    name: "registries.update_repository",
    url: "/registry/{registry-id}/repository/{repository-image}",
    request_type: RequestType::Put,
    api_key_required: true,
    parameters: &[
        Parameter::new("registry-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("repository-image", ValueKind::String)
            .path()
            .required(),
        Parameter::new("description", ValueKind::String),
    ],
};

/// Delete a repository.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/delete-repository>
pub static DELETE_REPOSITORY: Endpoint = Endpoint {
    name: "registries.delete_repository",
    url: "/registry/{registry-id}/repository/{repository-image}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[
        Parameter::new("registry-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("repository-image", ValueKind::String)
            .path()
            .required(),
    ],
};

/// Generate Docker credentials for a registry.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/create-registry-docker-credentials>
pub static CREATE_REGISTRY_DOCKER_CREDENTIALS: Endpoint = Endpoint {
    name: "registries.create_registry_docker_credentials",
    url: "/registry/{registry-id}/docker-credentials",
    request_type: RequestType::Options,
    api_key_required: true,
    parameters: &[
        Parameter::new("registry-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("expiry_seconds", ValueKind::Number),
        Parameter::new("read_write", ValueKind::Boolean),
    ],
};

/// Generate Docker credentials as a Kubernetes secret.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/create-registry-kubernetes-docker-credentials>
pub static CREATE_REGISTRY_DOCKER_CREDENTIALS_KUBERNETES: Endpoint = Endpoint {
    name: "registries.create_registry_docker_credentials_kubernetes",
    url: "/registry/{registry-id}/docker-credentials/kubernetes",
    request_type: RequestType::Options,
    api_key_required: true,
    parameters: &[
        Parameter::new("registry-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("expiry_seconds", ValueKind::Number),
        Parameter::new("read_write", ValueKind::Boolean),
        Parameter::new("base64_encode", ValueKind::Boolean),
    ],
};

/// List regions where a registry can be deployed.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/list-registry-regions>
pub static LIST_REGISTRY_REGIONS: Endpoint = Endpoint {
    name: "registries.list_registry_regions",
    url: "/registry/region/list",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[],
};

/// List registry plans.
///
/// <https://www.vultr.com/api/#tag/Container-Registry/operation/list-registry-plans>
pub static LIST_REGISTRY_PLANS: Endpoint = Endpoint {
    name: "registries.list_registry_plans",
    url: "/registry/plan/list",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[],
};
