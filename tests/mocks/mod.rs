mod mock_contact_repository;

#[allow(unused_imports)]
pub use mock_contact_repository::{classify, MockContactRepository};
