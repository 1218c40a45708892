//! Block storage endpoints.
//!
//! Volumes are created in a region and attached to, or detached from, instances.
//!
//! <https://www.vultr.com/api/#block>

use vultr_core::{Endpoint, Parameter, RequestType, ValueKind};

/// List block storage volumes.
///
/// <https://www.vultr.com/api/#operation/list-blocks>
pub static LIST_STORAGES: Endpoint = Endpoint {
    name: "block_storage.list_storages",
    url: "/blocks",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("per_page", ValueKind::String),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Create a block storage volume.
///
/// <https://www.vultr.com/api/#operation/create-block>
pub static CREATE_STORAGE: Endpoint = Endpoint {
    name: "block_storage.create_storage",
    url: "/blocks",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("region", ValueKind::String).required(),
        Parameter::new("size_gb", ValueKind::Number).required(),
        Parameter::new("label", ValueKind::String),
        Parameter::new("block_type", ValueKind::String),
    ],
};

/// Get one block storage volume.
///
/// <https://www.vultr.com/api/#operation/get-block>
pub static GET_STORAGE: Endpoint = Endpoint {
    name: "block_storage.get_storage",
    url: "/blocks/{block-id}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("block-id", ValueKind::String)
        .path()
        .required()],
};

/// Delete a block storage volume.
///
/// <https://www.vultr.com/api/#operation/delete-block>
pub static DELETE_STORAGE: Endpoint = Endpoint {
    name: "block_storage.delete_storage",
    url: "/blocks/{block-id}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[Parameter::new("block-id", ValueKind::String)
        .path()
        .required()],
};

/// Update the label or size of a volume.
///
/// <https://www.vultr.com/api/#operation/update-block>
pub static UPDATE_STORAGE: Endpoint = Endpoint {
    name: "block_storage.update_storage",
    url: "/blocks/{block-id}",
    request_type: RequestType::Patch,
    api_key_required: true,
    parameters: &[
        Parameter::new("block-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("label", ValueKind::String),
        Parameter::new("size_gb", ValueKind::Number),
    ],
};

/// Attach a volume to an instance.
///
/// <https://www.vultr.com/api/#operation/attach-block>
pub static ATTACH_STORAGE: Endpoint = Endpoint {
    name: "block_storage.attach_storage",
    url: "/blocks/{block-id}/attach",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("block-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("instance_id", ValueKind::String).required(),
        Parameter::new("live", ValueKind::Boolean),
    ],
};

/// Detach a volume from its instance.
///
/// <https://www.vultr.com/api/#operation/detach-block>
pub static DETACH_STORAGE: Endpoint = Endpoint {
    name: "block_storage.detach_storage",
    url: "/blocks/{block-id}/detach",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("block-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("live", ValueKind::Boolean),
    ],
};
