use serde::{de::DeserializeOwned, Serialize};

use crate::error::{RecordError, Result};

use self::models::{VmInfo, VmInfoWithSrc};

pub mod models;

fn decode<T: DeserializeOwned>(kind: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|err| {
        tracing::debug!(%err, kind, "rejected record");
        RecordError::InvalidRecord(format!("{kind}: {err}"))
    })
}

pub fn parse_vm_info(json: &str) -> Result<VmInfo> {
    let vm: VmInfo = decode("VmInfo", json)?;
    tracing::trace!(name = %vm.name, containers = vm.container.len(), "decoded VmInfo");
    Ok(vm)
}

pub fn parse_vm_info_with_src(json: &str) -> Result<VmInfoWithSrc> {
    let vm: VmInfoWithSrc = decode("VmInfoWithSrc", json)?;
    tracing::trace!(name = %vm.name, src = %vm.src, "decoded VmInfoWithSrc");
    Ok(vm)
}

/// Decodes a JSON array of sourced records. One bad entry rejects the whole
/// inventory; the error names its index.
pub fn parse_vm_inventory(json: &str) -> Result<Vec<VmInfoWithSrc>> {
    let entries: Vec<serde_json::Value> = decode("inventory", json)?;

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value(entry).map_err(|err| {
                tracing::debug!(%err, index, "rejected inventory entry");
                RecordError::InvalidRecord(format!("inventory[{index}]: {err}"))
            })
        })
        .collect()
}

/// Encodes a record as JSON. Generic so a whole inventory
/// (`Vec<VmInfoWithSrc>`) encodes through the same call.
pub fn to_json<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string(record).map_err(RecordError::Encode)
}
