use service::roster::{ClassStore, RegistrationIndex, StudentStore};

/// Shared application state: one handle per store, constructed at startup and
/// cloned into every handler. Tests build a fresh one per server instance.
#[derive(Clone)]
pub struct ServerState {
    pub students: StudentStore,
    pub classes: ClassStore,
    pub registrations: RegistrationIndex,
}

impl ServerState {
    pub fn new() -> Self {
        let students = StudentStore::new();
        let classes = ClassStore::new();
        let registrations = RegistrationIndex::new(students.clone(), classes.clone());
        Self { students, classes, registrations }
    }
}

impl Default for ServerState {
    fn default() -> Self {
        Self::new()
    }
}
