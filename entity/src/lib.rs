pub mod prelude;

pub mod admins;
pub mod clients;
pub mod drivers;
