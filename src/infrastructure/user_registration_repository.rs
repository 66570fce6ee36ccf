use async_trait::async_trait;
use sea_orm::{
    ActiveValue::{NotSet, Set},
    ConnectionTrait, DbErr, EntityTrait,
};
use tracing::warn;

use crate::{
    domain::{
        error::RepositoryError,
        models::user::{NewUser, UserType},
        repositories::user_registration_repository::UserRegistrationRepository,
    },
    infrastructure::connector::Connector,
};
use entity::{admins, clients, drivers, prelude::*};

#[derive(Clone)]
pub struct MySqlUserRegistrationRepository<C: Connector> {
    connector: C,
}

impl<C: Connector> MySqlUserRegistrationRepository<C> {
    pub fn new(connector: C) -> Self {
        Self { connector }
    }
}

#[async_trait]
impl<C: Connector> UserRegistrationRepository for MySqlUserRegistrationRepository<C> {
    async fn insert_user(&self, new_user: &NewUser) -> Result<(), RepositoryError> {
        let db = self.connector.connect().await.map_err(database_error)?;

        // The handle goes back on every path, including a failed insert
        let inserted = insert_row(&db, new_user).await;
        if let Err(e) = self.connector.release(db).await {
            warn!(error = %e, "failed to close database connection");
        }

        let rows_affected = inserted.map_err(database_error)?;
        if rows_affected != 1 {
            return Err(RepositoryError::DatabaseError(format!(
                "expected 1 row inserted into {}, got {}",
                new_user.user_type().table_name(),
                rows_affected
            )));
        }

        Ok(())
    }
}

async fn insert_row<D: ConnectionTrait>(db: &D, new_user: &NewUser) -> Result<u64, DbErr> {
    let name = new_user.name().to_string();
    let email = new_user.email().to_string();
    let password = new_user.password_hash().as_str().to_string();
    let phone = new_user.phone().to_string();

    match new_user.user_type() {
        UserType::Admin => {
            let model = admins::ActiveModel {
                id: NotSet,
                name: Set(name),
                email: Set(email),
                password: Set(password),
                phone: Set(phone),
            };
            Admins::insert(model).exec_without_returning(db).await
        }
        UserType::Client => {
            let model = clients::ActiveModel {
                id: NotSet,
                name: Set(name),
                email: Set(email),
                password: Set(password),
                phone: Set(phone),
            };
            Clients::insert(model).exec_without_returning(db).await
        }
        UserType::Driver => {
            let model = drivers::ActiveModel {
                id: NotSet,
                name: Set(name),
                email: Set(email),
                password: Set(password),
                phone: Set(phone),
            };
            Drivers::insert(model).exec_without_returning(db).await
        }
    }
}

fn database_error(e: DbErr) -> RepositoryError {
    RepositoryError::DatabaseError(e.to_string())
}
