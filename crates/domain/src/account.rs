use crate::shared::entity::{Entity, ID};

/// Business fields of an `Account`. They are not interpreted by this server,
/// only stored and handed back as they were received.
pub type AccountFields = serde_json::Map<String, serde_json::Value>;

/// The single resource managed by this server.
///
/// An `Account` gets its `id` from the repository the first time it is saved,
/// after that it always has one.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Account {
    pub id: Option<ID>,
    pub fields: AccountFields,
}

impl Account {
    pub fn new(fields: AccountFields) -> Self {
        Self { id: None, fields }
    }

    pub fn with_id(id: ID, fields: AccountFields) -> Self {
        Self {
            id: Some(id),
            fields,
        }
    }
}

impl Entity for Account {
    fn id(&self) -> Option<&ID> {
        self.id.as_ref()
    }

    fn set_id(&mut self, id: ID) {
        self.id = Some(id);
    }
}
