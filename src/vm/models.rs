use std::{fmt, ops::Deref, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// Who created the VM: contrabass itself, or an external client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Creator {
    Contrabass,
    Client,
}

impl Creator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Contrabass => "contrabass",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for Creator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Creator {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "contrabass" => Ok(Self::Contrabass),
            "client" => Ok(Self::Client),
            other => Err(RecordError::InvalidRecord(format!(
                "creator must be one of contrabass, client; got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VmStatus {
    Active,
    Stopped,
    Error,
}

impl VmStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Stopped => "stopped",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for VmStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for VmStatus {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "stopped" => Ok(Self::Stopped),
            "error" => Ok(Self::Error),
            other => Err(RecordError::InvalidRecord(format!(
                "status must be one of active, stopped, error; got {other:?}"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContainerInfo {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmInfo {
    pub name: String,
    pub creator: Creator,
    pub status: VmStatus,
    /// Containers in declaration order. May be empty.
    pub container: Vec<ContainerInfo>,
}

impl VmInfo {
    pub fn new(name: impl Into<String>, creator: Creator, status: VmStatus) -> Self {
        Self {
            name: name.into(),
            creator,
            status,
            container: Vec::new(),
        }
    }

    pub fn with_container(mut self, name: impl Into<String>) -> Self {
        self.container.push(ContainerInfo { name: name.into() });
        self
    }

    pub fn with_src(self, src: impl Into<String>) -> VmInfoWithSrc {
        VmInfoWithSrc {
            vm: self,
            src: src.into(),
        }
    }

    pub fn container_names(&self) -> impl Iterator<Item = &str> {
        self.container.iter().map(|c| c.name.as_str())
    }
}

/// A [`VmInfo`] tagged with where the record came from, e.g. a file path.
///
/// Serialized flat: the VM fields sit next to `src` rather than under a
/// nested key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmInfoWithSrc {
    #[serde(flatten)]
    pub vm: VmInfo,
    pub src: String,
}

impl VmInfoWithSrc {
    pub fn into_parts(self) -> (VmInfo, String) {
        (self.vm, self.src)
    }
}

impl Deref for VmInfoWithSrc {
    type Target = VmInfo;

    fn deref(&self) -> &Self::Target {
        &self.vm
    }
}
