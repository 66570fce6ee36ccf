pub use super::admins::Entity as Admins;
pub use super::clients::Entity as Clients;
pub use super::drivers::Entity as Drivers;
