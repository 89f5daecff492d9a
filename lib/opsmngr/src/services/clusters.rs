//! Cluster operations.

use serde::Deserialize;

use opsmngr_core::{CancellationToken, Link, ListOptions, Page, Result, Template, Transport};

use crate::client::Client;
use crate::walker::PageWalker;

/// A monitored cluster within a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cluster {
    /// Unique identifier.
    pub id: String,
    /// Owning project.
    pub group_id: String,
    /// Display name of the cluster.
    #[serde(default)]
    pub cluster_name: Option<String>,
    /// Topology: `REPLICA_SET`, `SHARDED`, ...
    #[serde(default)]
    pub type_name: Option<String>,
    /// Replica set name, for replica-set members.
    #[serde(default)]
    pub replica_set_name: Option<String>,
    /// Shard name, for sharded-cluster members.
    #[serde(default)]
    pub shard_name: Option<String>,
    /// Timestamp of the last agent ping, RFC 3339.
    #[serde(default)]
    pub last_heartbeat: Option<String>,
    /// Navigation links.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Operations on `groups/{groupId}/clusters` resources.
pub struct Clusters<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Clusters<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// One page of the clusters in a project.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn list(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Page<Cluster>> {
        let path = Template::new("groups/{groupId}/clusters")
            .bind("groupId", group_id)
            .render()?;
        self.client.list(cancel, &path, options).await
    }

    /// Walk every cluster page of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing URL cannot be built.
    pub fn walk(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<PageWalker<'a, T, Cluster>> {
        let path = Template::new("groups/{groupId}/clusters")
            .bind("groupId", group_id)
            .render()?;
        self.client.walk(cancel, &path, options)
    }

    /// Fetch one cluster by id.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn get(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
        cluster_id: &str,
    ) -> Result<Cluster> {
        let path = Template::new("groups/{groupId}/clusters/{clusterId}")
            .bind("groupId", group_id)
            .bind("clusterId", cluster_id)
            .render()?;
        self.client.get(cancel, &path).await
    }
}
