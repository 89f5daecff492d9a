//! Project ("group") operations.
//!
//! The API predates the project terminology and still calls these resources
//! `groups` on the wire.

use serde::{Deserialize, Serialize};

use opsmngr_core::{CancellationToken, Link, ListOptions, Page, Result, Template, Transport};

use crate::client::Client;
use crate::walker::PageWalker;

/// A project: one monitored deployment, owned by an organization.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Owning organization.
    #[serde(default)]
    pub org_id: Option<String>,
    /// Number of clusters in the project.
    #[serde(default)]
    pub cluster_count: Option<u64>,
    /// Number of active monitoring agents.
    #[serde(default)]
    pub active_agent_count: Option<u64>,
    /// Number of replica sets.
    #[serde(default)]
    pub replica_set_count: Option<u64>,
    /// Creation timestamp, RFC 3339.
    #[serde(default)]
    pub created: Option<String>,
    /// Navigation links.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Payload for [`Projects::create`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProject {
    /// Name of the new project.
    pub name: String,
    /// Organization to create the project in; the server picks the
    /// credentials' organization when omitted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub org_id: Option<String>,
}

/// Operations on `groups` resources.
pub struct Projects<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Projects<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// One page of the projects the credentials can access.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn list(
        &self,
        cancel: &CancellationToken,
        options: Option<&ListOptions>,
    ) -> Result<Page<Project>> {
        self.client.list(cancel, "groups", options).await
    }

    /// Walk every project page.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing URL cannot be built.
    pub fn walk(
        &self,
        cancel: &CancellationToken,
        options: Option<&ListOptions>,
    ) -> Result<PageWalker<'a, T, Project>> {
        self.client.walk(cancel, "groups", options)
    }

    /// Fetch one project by id.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn get(&self, cancel: &CancellationToken, group_id: &str) -> Result<Project> {
        let path = Template::new("groups/{groupId}")
            .bind("groupId", group_id)
            .render()?;
        self.client.get(cancel, &path).await
    }

    /// Fetch one project by name.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn get_by_name(&self, cancel: &CancellationToken, name: &str) -> Result<Project> {
        let path = Template::new("groups/byName/{groupName}")
            .bind("groupName", name)
            .render()?;
        self.client.get(cancel, &path).await
    }

    /// Create a project.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        project: &CreateProject,
    ) -> Result<Project> {
        self.client.post(cancel, "groups", project).await
    }

    /// Delete a project.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn delete(&self, cancel: &CancellationToken, group_id: &str) -> Result<()> {
        let path = Template::new("groups/{groupId}")
            .bind("groupId", group_id)
            .render()?;
        self.client.delete(cancel, &path).await
    }
}
