mod model;
mod pending_changes;

pub use model::Model;
pub use pending_changes::PendingChanges;
