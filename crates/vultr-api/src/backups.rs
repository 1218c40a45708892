//! Backup endpoints.
//!
//! Backups are read-only snapshots of instances; these endpoints list and inspect them.
//!
//! <https://www.vultr.com/api/#tag/backup>

use vultr_core::{Endpoint, Parameter, RequestType, ValueKind};

/// List backups in the account.
///
/// <https://www.vultr.com/api/#operation/list-backups>
pub static LIST: Endpoint = Endpoint {
    name: "backups.list",
    url: "/backups",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[
        Parameter::new("instance_id", ValueKind::String),
        Parameter::new("per_page", ValueKind::Number),
        Parameter::new("cursor", ValueKind::String),
    ],
};

/// Get one backup.
///
/// <https://www.vultr.com/api/#operation/get-backup>
pub static GET: Endpoint = Endpoint {
    name: "backups.get",
    url: "/backups/{backup-id}",
    request_type: RequestType::Get,
    api_key_required: true,
    parameters: &[Parameter::new("backup-id", ValueKind::String)
        .path()
        .required()],
};
