mod jobnimbus_contact_repository;
mod traits;

pub use jobnimbus_contact_repository::JobNimbusContactRepository;
pub use traits::ContactRepository;
