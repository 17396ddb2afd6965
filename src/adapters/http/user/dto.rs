//! Data transfer objects for user endpoints.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::domain::foundation::{Timestamp, ValidationError};
use crate::domain::user::{Contact, ContactPatch, NewContact};

/// Contact fields as sent by clients. Which ones are required depends on the route.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactBody {
    pub name: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
}

impl ContactBody {
    pub fn into_new_contact(self) -> Result<NewContact, ValidationError> {
        NewContact::new(self.name, self.address, self.note)
    }

    pub fn into_patch(self) -> ContactPatch {
        ContactPatch {
            name: self.name,
            address: self.address,
            note: self.note,
        }
    }
}

/// Body of `PUT /config`. Absent sections are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateConfigRequest {
    #[serde(default)]
    pub settings: Option<Map<String, Value>>,
    #[serde(default)]
    pub contacts: Option<Vec<ContactBody>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigResponse {
    pub contacts: Vec<Contact>,
    pub settings: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactsResponse {
    pub total: usize,
    pub contacts: Vec<Contact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ContactCommandResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_contact: Option<Contact>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigUpdatedResponse {
    pub success: bool,
    pub message: String,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsUpdatedResponse {
    pub success: bool,
    pub message: String,
    pub settings: Map<String, Value>,
}
