//! Page Components

mod login;

pub use login::LoginPage;
