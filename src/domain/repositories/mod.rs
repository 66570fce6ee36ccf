pub mod user_registration_repository;
