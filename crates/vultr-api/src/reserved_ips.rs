//! Reserved IP endpoints.
//!
//! <https://www.vultr.com/api/#tag/reserved-ip>

use vultr_core::{Endpoint, Parameter, RequestType, ValueKind};

/// Get one reserved IP.
///
/// <https://www.vultr.com/api/#operation/get-reserved-ip>
pub static GET_RESERVED_IP: Endpoint = Endpoint {
    name: "reserved_ips.get_reserved_ip",
    url: "/reserved-ips/{reserved-ip}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("reserved-ip", ValueKind::String)
        .path()
        .required()],
};

/// Delete a reserved IP.
///
/// <https://www.vultr.com/api/#operation/delete-reserved-ip>
pub static DELETE_RESERVED_IP: Endpoint = Endpoint {
    name: "reserved_ips.delete_reserved_ip",
    url: "/reserved-ips/{reserved-ip}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[Parameter::new("reserved-ip", ValueKind::String)
        .path()
        .required()],
};

/// Change the label of a reserved IP.
///
/// <https://www.vultr.com/api/#operation/patch-reserved-ips-reserved-ip>
pub static UPDATE_RESERVED_IP: Endpoint = Endpoint {
    name: "reserved_ips.update_reserved_ip",
    url: "/reserved-ips/{reserved-ip}",
    request_type: RequestType::Patch,
    api_key_required: true,
    parameters: &[
        Parameter::new("reserved-ip", ValueKind::String)
            .path()
            .required(),
        Parameter::new("label", ValueKind::String).required(),
    ],
};

/// List reserved IPs.
///
/// <https://www.vultr.com/api/#operation/list-reserved-ips>
pub static LIST_RESERVED_IPS: Endpoint = Endpoint {
    name: "reserved_ips.list_reserved_ips",
    url: "/reserved-ips",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("per_page", ValueKind::String),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Reserve a new IP in a region.
///
/// <https://www.vultr.com/api/#operation/create-reserved-ip>
pub static CREATE_RESERVED_IP: Endpoint = Endpoint {
    name: "reserved_ips.create_reserved_ip",
    url: "/reserved-ips",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("region", ValueKind::String).required(),
        Parameter::new("ip_type", ValueKind::String).required(),
        Parameter::new("label", ValueKind::String),
    ],
};

/// Attach a reserved IP to an instance.
///
/// <https://www.vultr.com/api/#operation/attach-reserved-ip>
pub static ATTACH_RESERVED_IP: Endpoint = Endpoint {
    name: "reserved_ips.attach_reserved_ip",
    url: "/reserved-ips/{reserved-ip}/attach",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("reserved-ip", ValueKind::String)
            .path()
            .required(),
        Parameter::new("instance_id", ValueKind::String).required(),
    ],
};

/// Detach a reserved IP from its instance.
///
/// <https://www.vultr.com/api/#operation/detach-reserved-ip>
pub static DETACH_RESERVED_IP: Endpoint = Endpoint {
    name: "reserved_ips.detach_reserved_ip",
    url: "/reserved-ips/{reserved-ip}/detach",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[Parameter::new("reserved-ip", ValueKind::String)
        .path()
        .required()],
};

/// Convert an instance IP into a reserved IP.
///
/// <https://www.vultr.com/api/#operation/convert-reserved-ip>
pub static CONVERT_INSTANCE_IP_TO_RESERVED_IP: Endpoint = Endpoint {
    name: "reserved_ips.convert_instance_ip_to_reserved_ip",
    url: "/reserved-ips/convert",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("ip_address", ValueKind::String).required(),
        Parameter::new("label", ValueKind::String),
    ],
};
