use restapi_domain::{Account, AccountFields, ID};
use serde::{Deserialize, Serialize};

/// Wire shape of an `Account`: the `id` next to whatever business
/// fields the client sent.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AccountDTO {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ID>,
    #[serde(flatten)]
    pub fields: AccountFields,
}

impl AccountDTO {
    pub fn new(account: Account) -> Self {
        Self {
            id: account.id,
            fields: account.fields,
        }
    }

    pub fn into_account(self) -> Account {
        Account {
            id: self.id,
            fields: self.fields,
        }
    }
}
