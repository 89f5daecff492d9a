//! Domain services: thin typed layers over the client's request and list
//! primitives.
//!
//! Each service borrows the [`Client`](crate::Client) by composition and
//! contributes only its paths and payload shapes; request building,
//! classification, decoding, and pagination all happen in the shared
//! pipeline.

mod automation;
mod clusters;
mod organizations;
mod projects;

pub use automation::{Automation, AutomationConfig, AutomationProcess, AutomationStatus, ProcessStatus};
pub use clusters::{Cluster, Clusters};
pub use organizations::{CreateOrganization, Organization, Organizations};
pub use projects::{CreateProject, Project, Projects};
