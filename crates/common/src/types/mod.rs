use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Greeting payload served at the API root.
#[derive(Serialize, Debug)]
pub struct Welcome {
    pub message: &'static str,
}
