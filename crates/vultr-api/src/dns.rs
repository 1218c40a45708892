//! DNS endpoints.
//!
//! Covers domains, their SOA and DNSSEC information, and the records inside a domain.
//!
//! <https://www.vultr.com/api/#tag/dns>

use vultr_core::{Endpoint, Parameter, RequestType, ValueKind};

/// List DNS domains.
///
/// <https://www.vultr.com/api/#operation/list-dns-domains>
pub static LIST_DOMAINS: Endpoint = Endpoint {
    name: "dns.list_domains",
    url: "/domains",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("per_page", ValueKind::Number),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Create a DNS domain. Without `ip`, the domain starts with no records.
///
/// <https://www.vultr.com/api/#operation/create-dns-domain>
pub static CREATE_DOMAIN: Endpoint = Endpoint {
    name: "dns.create_domain",
    url: "/domains",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("domain", ValueKind::String).required(),
        Parameter::new("ip", ValueKind::String),
        Parameter::new("dns_sec", ValueKind::String),
    ],
};

/// Get one DNS domain.
///
/// <https://www.vultr.com/api/#operation/get-dns-domain>
pub static GET_DOMAIN: Endpoint = Endpoint {
    name: "dns.get_domain",
    url: "/domains/{dns-domain}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("dns-domain", ValueKind::String)
        .path()
        .required()],
};

/// Delete a DNS domain and its records.
///
/// <https://www.vultr.com/api/#operation/delete-dns-domain>
pub static DELETE_DOMAIN: Endpoint = Endpoint {
    name: "dns.delete_domain",
    url: "/domains/{dns-domain}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[Parameter::new("dns-domain", ValueKind::String)
        .path()
        .required()],
};

/// Enable or disable DNSSEC for a domain.
///
/// <https://www.vultr.com/api/#operation/update-dns-domain>
pub static UPDATE_DOMAIN: Endpoint = Endpoint {
    name: "dns.update_domain",
    url: "/domains/{dns-domain}",
    request_type: RequestType::Put,
    api_key_required: true,
    parameters: &[
        Parameter::new("dns-domain", ValueKind::String)
            .path()
            .required(),
        Parameter::new("dns_sec", ValueKind::String).required(),
    ],
};

/// Get SOA information for a domain.
///
/// <https://www.vultr.com/api/#operation/get-dns-domain-soa>
pub static GET_SOA_INFO: Endpoint = Endpoint {
    name: "dns.get_soa_info",
    url: "/domains/{dns-domain}/soa",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("dns-domain", ValueKind::String)
        .path()
        .required()],
};

/// Update SOA information for a domain.
///
/// <https://www.vultr.com/api/#operation/update-dns-domain-soa>
pub static UPDATE_SOA_INFO: Endpoint = Endpoint {
    name: "dns.update_soa_info",
    url: "/domains/{dns-domain}/soa",
    request_type: RequestType::Patch,
    api_key_required: true,
    parameters: &[
        Parameter::new("dns-domain", ValueKind::String)
            .path()
            .required(),
        Parameter::new("nsprimary", ValueKind::String),
        Parameter::new("email", ValueKind::String),
    ],
};

/// Get the DNSSEC records of a domain.
///
/// <https://www.vultr.com/api/#operation/get-dns-domain-dnssec>
pub static GET_DNS_SEC_INFO: Endpoint = Endpoint {
    name: "dns.get_dns_sec_info",
    url: "/domains/{dns-domain}/dnssec",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("dns-domain", ValueKind::String)
        .path()
        .required()],
};

/// Create a record in a domain.
///
/// <https://www.vultr.com/api/#operation/create-dns-domain-record>
pub static CREATE_RECORD: Endpoint = Endpoint {
    name: "dns.create_record",
    url: "/domains/{dns-domain}/records",
    request_type: RequestType::Post,
    api_key_required: true,
    parameters: &[
        Parameter::new("dns-domain", ValueKind::String)
            .path()
            .required(),
        Parameter::new("name", ValueKind::String).required(),
        Parameter::new("type", ValueKind::String).required(),
        Parameter::new("data", ValueKind::String).required(),
        Parameter::new("ttl", ValueKind::Number),
        Parameter::new("priority", ValueKind::Number),
    ],
};

/// List the records of a domain.
///
/// <https://www.vultr.com/api/#operation/list-dns-domain-records>
pub static LIST_RECORDS: Endpoint = Endpoint {
    name: "dns.list_records",
    url: "/domains/{dns-domain}/records",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("dns-domain", ValueKind::String)
            .path()
            .required(),
        Parameter::new("per_page", ValueKind::Number),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Get one record of a domain.
///
/// <https://www.vultr.com/api/#operation/get-dns-domain-record>
pub static GET_RECORD: Endpoint = Endpoint {
    name: "dns.get_record",
    url: "/domains/{dns-domain}/records/{record-id}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("dns-domain", ValueKind::String)
            .path()
            .required(),
        Parameter::new("record-id", ValueKind::String)
            .path()
            .required(),
    ],
};

/// Update one record of a domain.
///
/// <https://www.vultr.com/api/#operation/update-dns-domain-record>
pub static UPDATE_RECORD: Endpoint = Endpoint {
    name: "dns.update_record",
    url: "/domains/{dns-domain}/records/{record-id}",
    request_type: RequestType::Patch,
    api_key_required: true,
    parameters: &[
        Parameter::new("dns-domain", ValueKind::String)
            .path()
            .required(),
        Parameter::new("record-id", ValueKind::String)
            .path()
            .required(),
        Parameter::new("name", ValueKind::String),
        Parameter::new("data", ValueKind::String),
        Parameter::new("ttl", ValueKind::String),
        Parameter::new("priority", ValueKind::String),
    ],
};

/// Delete one record of a domain.
///
/// <https://www.vultr.com/api/#operation/delete-dns-domain-record>
pub static DELETE_RECORD: Endpoint = Endpoint {
    name: "dns.delete_record",
    url: "/domains/{dns-domain}/records/{record-id}",
    request_type: RequestType::Delete,
    api_key_required: true,
    parameters: &[
        Parameter::new("dns-domain", ValueKind::String)
            .path()
            .required(),
        Parameter::new("record-id", ValueKind::String)
            .path()
            .required(),
    ],
};
