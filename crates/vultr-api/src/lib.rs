//! # vultr-api
//!
//! Endpoint catalog for the Vultr v2 API.
//!
//! Each module holds the descriptors of one resource group as immutable
//! statics. Pass a descriptor and its parameters to
//! [`VultrClient::execute`](vultr_core::VultrClient::execute):
//!
//! ```no_run
//! use serde_json::json;
//! use vultr_api::{dns, VultrClient};
//!
//! # async fn example() -> vultr_core::Result<()> {
//! let client = VultrClient::builder().with_api_key("my-key").build()?;
//! let params = json!({"domain": "example.com", "ip": "192.0.2.10"});
//! let created = client.execute(&dns::CREATE_DOMAIN, params.as_object()).await?;
//! # let _ = created;
//! # Ok(())
//! # }
//! ```
//!
//! The registry functions [`all`], [`lookup`] and [`group`] enumerate the
//! catalog by logical name (`"<group>.<operation>"`).

#![deny(missing_docs)]

pub mod backups;
pub mod block_storage;
pub mod dns;
pub mod load_balancers;
pub mod registries;
pub mod reserved_ips;
pub mod startup_scripts;

pub use vultr_core::{
    Endpoint, Error, Outcome, Params, RequestType, Result, VultrClient, VultrConfig,
};

static CATALOG: [&Endpoint; 59] = [
    &backups::LIST,
    &backups::GET,
    &block_storage::LIST_STORAGES,
    &block_storage::CREATE_STORAGE,
    &block_storage::GET_STORAGE,
    &block_storage::DELETE_STORAGE,
    &block_storage::UPDATE_STORAGE,
    &block_storage::ATTACH_STORAGE,
    &block_storage::DETACH_STORAGE,
    &dns::LIST_DOMAINS,
    &dns::CREATE_DOMAIN,
    &dns::GET_DOMAIN,
    &dns::DELETE_DOMAIN,
    &dns::UPDATE_DOMAIN,
    &dns::GET_SOA_INFO,
    &dns::UPDATE_SOA_INFO,
    &dns::GET_DNS_SEC_INFO,
    &dns::CREATE_RECORD,
    &dns::LIST_RECORDS,
    &dns::GET_RECORD,
    &dns::UPDATE_RECORD,
    &dns::DELETE_RECORD,
    &load_balancers::LIST_LOAD_BALANCERS,
    &load_balancers::CREATE_LOAD_BALANCER,
    &load_balancers::GET_LOAD_BALANCER,
    &load_balancers::UPDATE_LOAD_BALANCER,
    &load_balancers::DELETE_LOAD_BALANCER,
    &load_balancers::LIST_FORWARDING_RULES,
    &load_balancers::CREATE_FORWARDING_RULE,
    &load_balancers::GET_FORWARDING_RULE,
    &load_balancers::DELETE_FORWARDING_RULE,
    &load_balancers::LIST_FIREWALL_RULES,
    &load_balancers::GET_FIREWALL_RULE,
    &registries::LIST_REGISTRIES,
    &registries::CREATE_REGISTRY,
    &registries::READ_REGISTRY,
    &registries::UPDATE_REGISTRY,
    &registries::DELETE_REGISTRY,
    &registries::LIST_REPOSITORIES,
    &registries::READ_REPOSITORY,
    &registries::UPDATE_REPOSITORY,
    &registries::DELETE_REPOSITORY,
    &registries::CREATE_REGISTRY_DOCKER_CREDENTIALS,
    &registries::CREATE_REGISTRY_DOCKER_CREDENTIALS_KUBERNETES,
    &registries::LIST_REGISTRY_REGIONS,
    &registries::LIST_REGISTRY_PLANS,
    &reserved_ips::GET_RESERVED_IP,
    &reserved_ips::DELETE_RESERVED_IP,
    &reserved_ips::UPDATE_RESERVED_IP,
    &reserved_ips::LIST_RESERVED_IPS,
    &reserved_ips::CREATE_RESERVED_IP,
    &reserved_ips::ATTACH_RESERVED_IP,
    &reserved_ips::DETACH_RESERVED_IP,
    &reserved_ips::CONVERT_INSTANCE_IP_TO_RESERVED_IP,
    &startup_scripts::GET_STARTUP_SCRIPT,
    &startup_scripts::DELETE_STARTUP_SCRIPT,
    &startup_scripts::UPDATE_STARTUP_SCRIPT,
    &startup_scripts::LIST_STARTUP_SCRIPTS,
    &startup_scripts::CREATE_STARTUP_SCRIPT,
];

/// Every descriptor in the catalog, grouped by resource.
#[must_use]
pub fn all() -> &'static [&'static Endpoint] {
    &CATALOG
}

/// Find a descriptor by its logical name, e.g. `"dns.create_record"`.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static Endpoint> {
    CATALOG.iter().copied().find(|endpoint| endpoint.name == name)
}

/// Descriptors of one resource group, e.g. `"reserved_ips"`.
pub fn group(group: &str) -> impl Iterator<Item = &'static Endpoint> + '_ {
    CATALOG.iter().copied().filter(move |endpoint| {
        endpoint
            .name
            .split_once('.')
            .is_some_and(|(prefix, _)| prefix == group)
    })
}
