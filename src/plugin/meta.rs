//! Plugin identity and encoded versions, computed once at startup

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::{DEFAULT_VERSION, HOST_API_DEPENDENCY, PLUGIN_ID, UNKNOWN};
use crate::plugin::container::{PluginContainer, PluginDependency, PluginManager};
use crate::plugin::error::MetaError;
use crate::version::{ComparableVersion, encode};

/// Values stamped in at build time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInfo {
    /// Version of the foundations API
    pub api: String,
    pub discord_url: String,
    pub github_repo_url: String,
    /// Commit the plugin was built from
    pub git_hash: String,
}

impl BuildInfo {
    /// Read build values from `FOUNDATIONS_*` variables present at compile time
    pub fn current() -> Self {
        Self {
            api: option_env!("FOUNDATIONS_API")
                .unwrap_or(env!("CARGO_PKG_VERSION"))
                .to_string(),
            discord_url: option_env!("FOUNDATIONS_DISCORD_URL")
                .unwrap_or(UNKNOWN)
                .to_string(),
            github_repo_url: option_env!("FOUNDATIONS_GITHUB_REPO_URL")
                .unwrap_or(env!("CARGO_PKG_REPOSITORY"))
                .to_string(),
            git_hash: option_env!("FOUNDATIONS_GIT_HASH")
                .unwrap_or(UNKNOWN)
                .to_string(),
        }
    }
}

/// Immutable plugin metadata bundle
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginMeta {
    id: String,
    name: String,
    description: String,
    authors: Vec<String>,
    dependencies: BTreeSet<PluginDependency>,
    url: String,
    doc_url: String,
    discord_url: String,
    github_repo_url: String,
    github_repo_issues_url: String,
    git_hash: String,
    api: String,
    api_incremental: ComparableVersion,
    version: String,
    version_incremental: ComparableVersion,
    host_api_version: String,
    host_api_version_incremental: ComparableVersion,
}

fn encode_field(field: &'static str, raw: &str) -> Result<ComparableVersion, MetaError> {
    encode(raw).map_err(|source| MetaError::Version { field, source })
}

impl PluginMeta {
    /// Look up the foundations container and build its metadata
    pub fn load(manager: &dyn PluginManager, build: BuildInfo) -> Result<Self, MetaError> {
        let container = manager
            .plugin(PLUGIN_ID)
            .ok_or_else(|| MetaError::PluginNotFound(PLUGIN_ID.to_string()))?;
        Self::from_container(&*container, build)
    }

    /// Build metadata from a container.
    ///
    /// Fails if the host API dependency is not declared with a version or any
    /// of the three versions cannot be encoded.
    pub fn from_container(
        container: &dyn PluginContainer,
        build: BuildInfo,
    ) -> Result<Self, MetaError> {
        let version = container
            .version()
            .unwrap_or_else(|| DEFAULT_VERSION.to_string());
        let host_api_version = container
            .dependency(HOST_API_DEPENDENCY)
            .and_then(|d| d.version)
            .ok_or_else(|| MetaError::MissingHostDependency(HOST_API_DEPENDENCY.to_string()))?;

        let api_incremental = encode_field("api", &build.api)?;
        let version_incremental = encode_field("plugin", &version)?;
        let host_api_version_incremental = encode_field("host api", &host_api_version)?;

        let url = container.url().unwrap_or_else(|| UNKNOWN.to_string());
        let meta = Self {
            id: PLUGIN_ID.to_string(),
            name: container.name(),
            description: container
                .description()
                .unwrap_or_else(|| UNKNOWN.to_string()),
            authors: container.authors(),
            dependencies: container.dependencies().into_iter().collect(),
            doc_url: format!("{url}/{PLUGIN_ID}"),
            url,
            discord_url: build.discord_url,
            github_repo_issues_url: format!("{}/issues", build.github_repo_url),
            github_repo_url: build.github_repo_url,
            git_hash: build.git_hash,
            api: build.api,
            api_incremental,
            version,
            version_incremental,
            host_api_version,
            host_api_version_incremental,
        };

        debug!(?meta, "Plugin metadata computed");
        info!(
            "{} {} (api {}, host api {})",
            meta.name, meta.version, meta.api, meta.host_api_version
        );
        Ok(meta)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    pub fn dependencies(&self) -> &BTreeSet<PluginDependency> {
        &self.dependencies
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Documentation site, `<url>/<id>`
    pub fn doc_url(&self) -> &str {
        &self.doc_url
    }

    pub fn discord_url(&self) -> &str {
        &self.discord_url
    }

    pub fn github_repo_url(&self) -> &str {
        &self.github_repo_url
    }

    pub fn github_repo_issues_url(&self) -> &str {
        &self.github_repo_issues_url
    }

    pub fn git_hash(&self) -> &str {
        &self.git_hash
    }

    pub fn api(&self) -> &str {
        &self.api
    }

    pub fn api_incremental(&self) -> ComparableVersion {
        self.api_incremental
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn version_incremental(&self) -> ComparableVersion {
        self.version_incremental
    }

    /// Version of the host framework API this plugin was built against
    pub fn host_api_version(&self) -> &str {
        &self.host_api_version
    }

    pub fn host_api_version_incremental(&self) -> ComparableVersion {
        self.host_api_version_incremental
    }
}
