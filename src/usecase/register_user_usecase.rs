use tracing::{info, warn};

use crate::domain::{
    error::DomainError,
    models::user::{NewUser, RegistrationRequest, UserType},
    repositories::user_registration_repository::UserRegistrationRepository,
    services::password_service::PasswordHasher,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub user_type: UserType,
}

pub struct RegisterUserUsecase<R: UserRegistrationRepository, P: PasswordHasher> {
    registration_repository: R,
    password_hasher: P,
}

impl<R: UserRegistrationRepository, P: PasswordHasher> RegisterUserUsecase<R, P> {
    pub fn new(registration_repository: R, password_hasher: P) -> Self {
        Self {
            registration_repository,
            password_hasher,
        }
    }

    pub async fn register_user(
        &self,
        name: String,
        email: String,
        password: String,
        phone: String,
        user_type: String,
    ) -> Result<RegistrationOutcome, DomainError>
    where
        R: Send + Sync,
        P: Send + Sync,
    {
        let request = RegistrationRequest {
            name,
            email,
            password,
            phone,
            user_type,
        };

        // Nothing reaches the database until the request is known to be valid
        let user_type = request.validate().inspect_err(|e| {
            warn!(error = %e, "registration rejected");
        })?;

        let password_hash = self.password_hasher.hash(&request.password)?;

        let new_user = NewUser::new(
            request.name,
            request.email,
            request.phone,
            password_hash,
            user_type,
        );

        self.registration_repository.insert_user(&new_user).await?;

        info!(user_type = %user_type, "user registered");
        Ok(RegistrationOutcome { user_type })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use rstest::*;

    use super::*;
    use crate::domain::{error::RepositoryError, models::credential::HashedPassword};

    #[derive(Clone, Default)]
    struct RecordingRepository {
        inserted: Arc<Mutex<Vec<NewUser>>>,
    }

    #[async_trait]
    impl UserRegistrationRepository for RecordingRepository {
        async fn insert_user(&self, new_user: &NewUser) -> Result<(), RepositoryError> {
            if new_user.email().contains("duplicated") {
                return Err(RepositoryError::DatabaseError(
                    "Duplicate entry for key 'email'".to_string(),
                ));
            }
            self.inserted.lock().unwrap().push(new_user.clone());
            Ok(())
        }
    }

    #[derive(Clone)]
    struct PrefixHasher;

    impl PasswordHasher for PrefixHasher {
        fn hash(&self, plain_password: &str) -> Result<HashedPassword, DomainError> {
            Ok(HashedPassword::new(format!("hashed:{}", plain_password)))
        }
    }

    #[derive(Clone)]
    struct FailingHasher;

    impl PasswordHasher for FailingHasher {
        fn hash(&self, _plain_password: &str) -> Result<HashedPassword, DomainError> {
            Err(DomainError::PasswordHashing)
        }
    }

    #[fixture]
    fn repository() -> RecordingRepository {
        RecordingRepository::default()
    }

    async fn register(
        usecase: &RegisterUserUsecase<RecordingRepository, impl PasswordHasher + Send + Sync>,
        email: &str,
        user_type: &str,
    ) -> Result<RegistrationOutcome, DomainError> {
        usecase
            .register_user(
                "Ana".to_string(),
                email.to_string(),
                "secret".to_string(),
                "5551234".to_string(),
                user_type.to_string(),
            )
            .await
    }

    #[rstest]
    #[tokio::test]
    async fn registers_client_with_hashed_password(repository: RecordingRepository) {
        let usecase = RegisterUserUsecase::new(repository.clone(), PrefixHasher);

        let outcome = register(&usecase, "ana@example.com", "client").await.unwrap();

        assert_eq!(outcome.user_type, UserType::Client);
        let inserted = repository.inserted.lock().unwrap();
        assert_eq!(
            *inserted,
            vec![NewUser::new(
                "Ana".to_string(),
                "ana@example.com".to_string(),
                "5551234".to_string(),
                HashedPassword::new("hashed:secret".to_string()),
                UserType::Client,
            )]
        );
    }

    #[rstest]
    #[case("clients; DROP TABLE clients;--")]
    #[case("motorista")]
    #[case("")]
    #[tokio::test]
    async fn unknown_user_type_never_reaches_repository(
        repository: RecordingRepository,
        #[case] user_type: &str,
    ) {
        let usecase = RegisterUserUsecase::new(repository.clone(), PrefixHasher);

        let err = register(&usecase, "ana@example.com", user_type)
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::UnknownUserType(_)));
        assert_eq!(err.code(), "VALIDATION_ERROR");
        assert!(repository.inserted.lock().unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn missing_email_never_reaches_repository(repository: RecordingRepository) {
        let usecase = RegisterUserUsecase::new(repository.clone(), PrefixHasher);

        let err = register(&usecase, "  ", "driver").await.unwrap_err();

        assert!(matches!(err, DomainError::MissingField("email")));
        assert!(repository.inserted.lock().unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn database_failure_is_reported_as_repository_error(repository: RecordingRepository) {
        let usecase = RegisterUserUsecase::new(repository.clone(), PrefixHasher);

        let err = register(&usecase, "duplicated@example.com", "client")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "DATABASE_ERROR");
        assert!(err.to_string().contains("Duplicate entry"));
        assert!(repository.inserted.lock().unwrap().is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn hashing_failure_stops_registration(repository: RecordingRepository) {
        let usecase = RegisterUserUsecase::new(repository.clone(), FailingHasher);

        let err = register(&usecase, "ana@example.com", "admin")
            .await
            .unwrap_err();

        assert!(matches!(err, DomainError::PasswordHashing));
        assert!(repository.inserted.lock().unwrap().is_empty());
    }
}
