use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A platform resource the console can summarize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resource {
    /// Message store / data store entries
    DataStores,
    Queues,
    Variables,
}

impl Resource {
    pub const ALL: [Resource; 3] = [Resource::DataStores, Resource::Queues, Resource::Variables];

    /// Route the console serves this resource under
    pub fn route(self) -> &'static str {
        match self {
            Resource::DataStores => "/api/message-store",
            Resource::Queues => "/api/queues",
            Resource::Variables => "/api/variables",
        }
    }

    /// Upstream API path used when the environment does not override it
    pub fn default_path(self) -> &'static str {
        match self {
            Resource::DataStores => "/MessageStore",
            Resource::Queues => "/Queues",
            Resource::Variables => "/Variables",
        }
    }

    /// Environment variable that overrides the upstream path
    pub fn path_variable(self) -> &'static str {
        match self {
            Resource::DataStores => "CPI_MESSAGE_STORE_PATH",
            Resource::Queues => "CPI_QUEUES_PATH",
            Resource::Variables => "CPI_VARIABLES_PATH",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Resource::DataStores => "data-stores",
            Resource::Queues => "queues",
            Resource::Variables => "variables",
        }
    }

    pub fn from_route(route: &str) -> Option<Resource> {
        Resource::ALL.into_iter().find(|r| r.route() == route)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "data-stores" | "datastores" | "message-store" => Ok(Resource::DataStores),
            "queues" => Ok(Resource::Queues),
            "variables" => Ok(Resource::Variables),
            other => Resource::from_route(other).ok_or_else(|| format!("unknown resource: {}", s)),
        }
    }
}
