//! Organization operations.

use serde::{Deserialize, Serialize};

use opsmngr_core::{CancellationToken, Link, ListOptions, Page, Result, Template, Transport};

use crate::client::Client;
use crate::walker::PageWalker;

use super::Project;

/// An organization: the top-level grouping of projects.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    /// Unique identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Soft-deletion marker.
    #[serde(default)]
    pub is_deleted: Option<bool>,
    /// Navigation links.
    #[serde(default)]
    pub links: Vec<Link>,
}

/// Payload for [`Organizations::create`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganization {
    /// Name of the new organization.
    pub name: String,
}

/// Operations on `orgs` resources.
pub struct Organizations<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Organizations<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// One page of the organizations the credentials can access.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn list(
        &self,
        cancel: &CancellationToken,
        options: Option<&ListOptions>,
    ) -> Result<Page<Organization>> {
        self.client.list(cancel, "orgs", options).await
    }

    /// Walk every organization page.
    ///
    /// # Errors
    ///
    /// Returns an error if the listing URL cannot be built.
    pub fn walk(
        &self,
        cancel: &CancellationToken,
        options: Option<&ListOptions>,
    ) -> Result<PageWalker<'a, T, Organization>> {
        self.client.walk(cancel, "orgs", options)
    }

    /// Fetch one organization by id.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn get(&self, cancel: &CancellationToken, org_id: &str) -> Result<Organization> {
        let path = Template::new("orgs/{orgId}").bind("orgId", org_id).render()?;
        self.client.get(cancel, &path).await
    }

    /// Create an organization.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn create(
        &self,
        cancel: &CancellationToken,
        organization: &CreateOrganization,
    ) -> Result<Organization> {
        self.client.post(cancel, "orgs", organization).await
    }

    /// Delete an organization.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn delete(&self, cancel: &CancellationToken, org_id: &str) -> Result<()> {
        let path = Template::new("orgs/{orgId}").bind("orgId", org_id).render()?;
        self.client.delete(cancel, &path).await
    }

    /// One page of the projects that belong to an organization.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn projects(
        &self,
        cancel: &CancellationToken,
        org_id: &str,
        options: Option<&ListOptions>,
    ) -> Result<Page<Project>> {
        let path = Template::new("orgs/{orgId}/groups")
            .bind("orgId", org_id)
            .render()?;
        self.client.list(cancel, &path, options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn organization_decodes_from_wire() {
        let body = br#"{
            "id": "5991",
            "name": "acme",
            "isDeleted": false,
            "links": [{"rel": "self", "href": "https://ops.example.com/api/public/v1.0/orgs/5991"}]
        }"#;

        let org: Organization = opsmngr_core::from_json(body).expect("decode");
        assert_eq!(org.id, "5991");
        assert_eq!(org.name, "acme");
        assert_eq!(org.is_deleted, Some(false));
        assert_eq!(org.links.len(), 1);
    }

    #[test]
    fn create_payload_wire_shape() {
        let payload = CreateOrganization {
            name: "acme".to_owned(),
        };
        let bytes = opsmngr_core::to_json(&payload).expect("encode");
        assert_eq!(bytes.as_ref(), br#"{"name":"acme"}"#);
    }
}
