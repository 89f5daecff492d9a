//! Automation configuration operations.
//!
//! The automation config is a large, evolving document. Only the fields this
//! client interprets are modeled; everything else is preserved verbatim in a
//! flattened map so a get-modify-update cycle never drops server-side keys.

use serde::{Deserialize, Serialize};

use opsmngr_core::{CancellationToken, Result, Template, Transport};

use crate::client::Client;

/// Deployment topology managed by a project's automation agents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationConfig {
    /// Config version, incremented by the server on every publish.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    /// Managed server processes.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub processes: Vec<AutomationProcess>,
    /// Every other key of the document, preserved for round-tripping.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// One managed process in the automation config.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationProcess {
    /// Process name, unique within the config.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Process type: `mongod` or `mongos`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_type: Option<String>,
    /// Server version the process should run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Whether the process is administratively disabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    /// Host the process runs on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Every other key of the process document.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Agent convergence status of a project.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutomationStatus {
    /// Config version the agents are converging towards.
    pub goal_version: u64,
    /// Per-process convergence state.
    #[serde(default)]
    pub processes: Vec<ProcessStatus>,
}

/// Convergence state of one managed process.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatus {
    /// Host the process runs on.
    #[serde(default)]
    pub hostname: String,
    /// Process name.
    #[serde(default)]
    pub name: String,
    /// Last config version this process finished applying.
    #[serde(default)]
    pub last_goal_version_achieved: u64,
    /// Remaining plan steps, empty once converged.
    #[serde(default)]
    pub plan: Vec<String>,
}

/// Operations on a project's automation configuration.
pub struct Automation<'a, T> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> Automation<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    /// Fetch the current automation config of a project.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn config(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
    ) -> Result<AutomationConfig> {
        let path = Template::new("groups/{groupId}/automationConfig")
            .bind("groupId", group_id)
            .render()?;
        self.client.get(cancel, &path).await
    }

    /// Publish a new automation config for a project.
    ///
    /// The server bumps the config version and starts converging the agents
    /// towards the submitted document.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn update_config(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
        config: &AutomationConfig,
    ) -> Result<AutomationConfig> {
        let path = Template::new("groups/{groupId}/automationConfig")
            .bind("groupId", group_id)
            .render()?;
        self.client.put(cancel, &path, config).await
    }

    /// Fetch the agent convergence status of a project.
    ///
    /// # Errors
    ///
    /// Any [`opsmngr_core::Error`] from the request pipeline.
    pub async fn status(
        &self,
        cancel: &CancellationToken,
        group_id: &str,
    ) -> Result<AutomationStatus> {
        let path = Template::new("groups/{groupId}/automationStatus")
            .bind("groupId", group_id)
            .render()?;
        self.client.get(cancel, &path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trip_preserves_unknown_keys() {
        let body = br#"{
            "version": 7,
            "processes": [
                {"name": "shard_0", "processType": "mongod", "args2_6": {"net": {"port": 27017}}}
            ],
            "auth": {"disabled": true},
            "monitoringVersions": []
        }"#;

        let config: AutomationConfig = opsmngr_core::from_json(body).expect("decode");
        assert_eq!(config.version, Some(7));
        assert_eq!(config.processes.len(), 1);
        assert!(config.extra.contains_key("auth"));

        let process = config.processes.first().expect("process");
        assert_eq!(process.name.as_deref(), Some("shard_0"));
        assert!(process.extra.contains_key("args2_6"));

        // Unknown keys survive a get-modify-update cycle.
        let encoded = opsmngr_core::to_json(&config).expect("encode");
        let again: AutomationConfig = opsmngr_core::from_json(&encoded).expect("decode");
        assert_eq!(again, config);
    }

    #[test]
    fn status_decodes_from_wire() {
        let body = br#"{
            "goalVersion": 7,
            "processes": [
                {"hostname": "db1.example.com", "name": "shard_0", "lastGoalVersionAchieved": 6, "plan": ["Download", "Start"]}
            ]
        }"#;

        let status: AutomationStatus = opsmngr_core::from_json(body).expect("decode");
        assert_eq!(status.goal_version, 7);
        let process = status.processes.first().expect("process");
        assert_eq!(process.last_goal_version_achieved, 6);
        assert_eq!(process.plan, ["Download", "Start"]);
    }
}
