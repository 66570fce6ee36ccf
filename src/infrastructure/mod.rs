pub mod argon2_password_hasher;
pub mod connector;
pub mod user_registration_repository;
