//! Load balancer endpoints.
//!
//! Includes the forwarding rules and firewall rules attached to a load balancer.
//!
//! <https://www.vultr.com/api/#tag/load-balancer>

use vultr_core::{Endpoint, Parameter, RequestType, ValueKind};

/// List load balancers.
///
/// <https://www.vultr.com/api/#operation/list-load-balancers>
pub static LIST_LOAD_BALANCERS: Endpoint = Endpoint {
    name: "load_balancers.list_load_balancers",
    url: "/load-balancers",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("per_page", ValueKind::String),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Create a load balancer in a region.
///
/// <https://www.vultr.com/api/#operation/create-load-balancer>
pub static CREATE_LOAD_BALANCER: Endpoint = Endpoint {
    name: "load_balancers.create_load_balancer",
    url: "/load-balancers",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("region", ValueKind::String).required(),
        Parameter::new("balancing_algorithm", ValueKind::String),
        Parameter::new("ssl_redirect", ValueKind::Boolean),
        Parameter::new("http2", ValueKind::Boolean),
        Parameter::new("nodes", ValueKind::Number),
        Parameter::new("proxy_protocol", ValueKind::Boolean),
        Parameter::new("health_check", ValueKind::Object),
        Parameter::new("forwarding_rules", ValueKind::Array),
        Parameter::new("sticky_session", ValueKind::Object),
        Parameter::new("ssl", ValueKind::Object),
        Parameter::new("label", ValueKind::String),
        Parameter::new("instances", ValueKind::Array),
        Parameter::new("firewall_rules", ValueKind::Array),
        Parameter::new("vpc", ValueKind::String),
    ],
};

/// Get one load balancer.
///
/// <https://www.vultr.com/api/#operation/get-load-balancer>
pub static GET_LOAD_BALANCER: Endpoint = Endpoint {
    name: "load_balancers.get_load_balancer",
    url: "/load-balancers/{load-balancer-id}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("load-balancer-id", ValueKind::String)
        .path()
        .required()],
};

/// Update a load balancer.
///
/// <https://www.vultr.com/api/#operation/update-load-balancer>
pub static UPDATE_LOAD_BALANCER: Endpoint = Endpoint {
    name: "load_balancers.update_load_balancer",
    url: "/load-balancers/{load-balancer-id}",
    request_type: RequestType::Patch,
    api_key_required: true,
    parameters: &[
        Parameter::new("load-balancer-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("ssl", ValueKind::Object),
        Parameter::new("sticky_session", ValueKind::Object),
        Parameter::new("forwarding_rules", ValueKind::Array),
        Parameter::new("health_check", ValueKind::Object),
        Parameter::new("proxy_protocol", ValueKind::Boolean),
        Parameter::new("ssl_redirect", ValueKind::Boolean),
        Parameter::new("http2", ValueKind::Boolean),
        Parameter::new("nodes", ValueKind::Number),
        Parameter::new("balancing_algorithm", ValueKind::String),
        Parameter::new("instances", ValueKind::Array),
        Parameter::new("label", ValueKind::String),
        Parameter::new("vpc", ValueKind::String),
        Parameter::new("firewall_rules", ValueKind::Array),
    ],
};

/// Delete a load balancer.
///
/// <https://www.vultr.com/api/#operation/delete-load-balancer>
pub static DELETE_LOAD_BALANCER: Endpoint = Endpoint {
    name: "load_balancers.delete_load_balancer",
    url: "/load-balancers/{load-balancer-id}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[Parameter::new("load-balancer-id", ValueKind::String)
        .path()
        .required()],
};

/// List the forwarding rules of a load balancer.
///
/// <https://www.vultr.com/api/#operation/list-load-balancer-forwarding-rules>
pub static LIST_FORWARDING_RULES: Endpoint = Endpoint {
    name: "load_balancers.list_forwarding_rules",
    url: "/load-balancers/{load-balancer-id}/forwarding-rules",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("load-balancer-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("per_page", ValueKind::String),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Add a forwarding rule to a load balancer.
///
/// <https://www.vultr.com/api/#operation/create-load-balancer-forwarding-rules>
pub static CREATE_FORWARDING_RULE: Endpoint = Endpoint {
    name: "load_balancers.create_forwarding_rule",
    url: "/load-balancers/{load-balancer-id}/forwarding-rules",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("load-balancer-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("frontend_protocol", ValueKind::String)
            .required(),
        Parameter::new("frontend_port", ValueKind::String)
            .required(),
        Parameter::new("backend_protocol", ValueKind::String)
            .required(),
        Parameter::new("backend_port", ValueKind::String).required(),
    ],
};

/// Get one forwarding rule.
///
/// <https://www.vultr.com/api/#operation/get-load-balancer-forwarding-rule>
pub static GET_FORWARDING_RULE: Endpoint = Endpoint {
    name: "load_balancers.get_forwarding_rule",
    url: "/load-balancers/{load-balancer-id}/forwarding-rules/{forwarding-rule-id}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("load-balancer-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("forwarding-rule-id", ValueKind::String)
            .path()
            .required(),
    ],
};

/// Remove a forwarding rule.
///
/// <https://www.vultr.com/api/#operation/delete-load-balancer-forwarding-rule>
pub static DELETE_FORWARDING_RULE: Endpoint = Endpoint {
    name: "load_balancers.delete_forwarding_rule",
    url: "/load-balancers/{load-balancer-id}/forwarding-rules/{forwarding-rule-id}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[
        Parameter::new("load-balancer-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("forwarding-rule-id", ValueKind::String)
            .path()
            .required(),
    ],
};

/// List the firewall rules of a load balancer.
///
/// <https://www.vultr.com/api/#operation/list-loadbalancer-firewall-rules>
pub static LIST_FIREWALL_RULES: Endpoint = Endpoint {
    name: "load_balancers.list_firewall_rules",
    url: "/load-balancers/{load-balancer-id}/firewall-rules",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("load-balancer-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("per_page", ValueKind::String),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Get one firewall rule.
///
/// <https://www.vultr.com/api/#operation/get-loadbalancer-firewall-rule>
pub static GET_FIREWALL_RULE: Endpoint = Endpoint {
    name: "load_balancers.get_firewall_rule",
    url: "/load-balancers/{load-balancer-id}/firewall-rules/{firewall-rule-id}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("load-balancer-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("firewall-rule-id", ValueKind::String)
            .path()
            .required(),
    ],
};
