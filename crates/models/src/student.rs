use serde::{Deserialize, Serialize};

/// Student record as exchanged on the wire. The `id` comes from the caller.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub age: i64,
    pub city: String,
}
