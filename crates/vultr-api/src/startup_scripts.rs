//! Startup script endpoints.
//!
//! <https://www.vultr.com/api/#tag/startup>

use vultr_core::{Endpoint, Parameter, RequestType, ValueKind};

/// Get one startup script.
///
/// The remote route is declared as `POST`; the script id is sent both in the
/// path and in the body.
///
/// <https://www.vultr.com/api/#operation/get-startup-script>
pub static GET_STARTUP_SCRIPT: Endpoint = Endpoint {
    name: "startup_scripts.get_startup_script",
    url: "/startup-scripts/{startup-id}",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[Parameter::new("startup-id", ValueKind::String)
        .path()
        .required()],
};

/// Delete a startup script.
///
/// <https://www.vultr.com/api/#operation/delete-startup-script>
pub static DELETE_STARTUP_SCRIPT: Endpoint = Endpoint {
    name: "startup_scripts.delete_startup_script",
    url: "/startup-scripts/{startup-id}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[Parameter::new("startup-id", ValueKind::String)
        .path()
        .required()],
};

/// Update a startup script.
///
/// <https://www.vultr.com/api/#operation/update-startup-script>
pub static UPDATE_STARTUP_SCRIPT: Endpoint = Endpoint {
    name: "startup_scripts.update_startup_script",
    url: "/startup-scripts/{startup-id}",
    request_type: RequestType::Patch,
    api_key_required: true,
    parameters: &[
        Parameter::new("startup-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("name", ValueKind::String),
        Parameter::new("script", ValueKind::String),
        Parameter::new("type", ValueKind::String),
    ],
};

/// List startup scripts.
///
/// <https://www.vultr.com/api/#operation/list-startup-scripts>
pub static LIST_STARTUP_SCRIPTS: Endpoint = Endpoint {
    name: "startup_scripts.list_startup_scripts",
    url: "/startup-scripts",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("per_page", ValueKind::String),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Create a startup script.
///
/// <https://www.vultr.com/api/#operation/create-startup-script>
pub static CREATE_STARTUP_SCRIPT: Endpoint = Endpoint {
    name: "startup_scripts.create_startup_script",
    url: "/startup-scripts",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("name", ValueKind::String).required(),
        Parameter::new("script", ValueKind::String).required(),
        Parameter::new("type", ValueKind::String),
    ],
};
