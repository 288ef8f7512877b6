pub mod animals;
pub mod app;
pub mod change_password;
pub mod dashboard;
pub mod iatf;
pub mod login;
pub mod prediction;
pub mod reports;
pub mod shared;
pub mod sign_up;

pub use app::App;
