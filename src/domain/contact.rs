use serde::{Deserialize, Serialize};

/// A single entry in the contact book. `name` is the primary key; the other
/// fields are free-form and never validated.
///
/// Field order matches the persisted row layout `name;phone;email;address`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    pub fn new(name: String, phone: String, email: String, address: String) -> Self {
        Contact {
            name,
            phone,
            email,
            address,
        }
    }
}
