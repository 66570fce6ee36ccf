use std::sync::Arc;

use crate::{
    domain::{
        error::{DomainError, RepositoryError},
        models::user::UserType,
        repositories::user_registration_repository::UserRegistrationRepository,
        services::password_service::PasswordHasher,
    },
    usecase::register_user_usecase::RegisterUserUsecase,
};
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use tracing::error;

// Request

/// json for register request
#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub phone: String,
    #[serde(rename = "type")]
    pub user_type: String,
}

// Response

/// json for register response
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub success: bool,
    pub user_type: UserType,
}

/// json for every failed request
#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub code: String,
    pub message: String,
}

impl From<&DomainError> for ErrorResponse {
    fn from(err: &DomainError) -> Self {
        let message = match err {
            DomainError::Repository(RepositoryError::DatabaseError(detail)) => {
                format!("Failed to register user: {}", detail)
            }
            other => other.to_string(),
        };

        Self {
            success: false,
            code: err.code().to_string(),
            message,
        }
    }
}

fn error_response(err: DomainError) -> Response {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ErrorResponse::from(&err))).into_response()
}

/* Router Function and Handler Function */

// User Router

/// function return Router object
/// Suppose to be nested by main router

pub fn create_user_router<
    R: UserRegistrationRepository + Send + Sync + 'static + Clone,
    P: PasswordHasher + Send + Sync + 'static + Clone,
>(
    register_service: RegisterUserUsecase<R, P>,
) -> Router {
    let state = AppState {
        register_service: Arc::new(register_service),
    };

    Router::new()
        .route("/register", post(register::<R, P>))
        .with_state(state)
}

pub struct AppState<R: UserRegistrationRepository, P: PasswordHasher> {
    pub register_service: Arc<RegisterUserUsecase<R, P>>,
}

impl<R: UserRegistrationRepository, P: PasswordHasher> Clone for AppState<R, P> {
    fn clone(&self) -> Self {
        Self {
            register_service: Arc::clone(&self.register_service),
        }
    }
}

// handler function

/// handler function for register
async fn register<
    R: UserRegistrationRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
>(
    State(state): State<AppState<R, P>>,
    Json(payload): Json<RegisterRequest>,
) -> Response {
    match state
        .register_service
        .register_user(
            payload.name,
            payload.email,
            payload.password,
            payload.phone,
            payload.user_type,
        )
        .await
    {
        Ok(outcome) => {
            let response = RegisterResponse {
                success: true,
                user_type: outcome.user_type,
            };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => {
            if !err.is_validation() {
                error!(error = %err, "registration failed");
            }
            error_response(err)
        }
    }
}
