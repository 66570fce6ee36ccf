use async_trait::async_trait;

use crate::domain::{error::RepositoryError, models::user::NewUser};

/// Repository that persists a newly registered user into the table owned by its user type
#[async_trait]
pub trait UserRegistrationRepository {
    /// Insert exactly one row for `new_user`
    async fn insert_user(&self, new_user: &NewUser) -> Result<(), RepositoryError>;
}
