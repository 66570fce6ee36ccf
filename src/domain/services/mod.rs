pub mod password_service;
