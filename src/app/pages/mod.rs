//! Route targets.

pub mod api_reference;
pub mod careers;
pub mod help;
pub mod home;
pub mod legal;
pub mod login;
pub mod not_found;

pub use api_reference::{ApiIndex, ApiReference};
pub use careers::Careers;
pub use help::{HelpCenter, HelpIndex};
pub use home::Home;
pub use legal::{PrivacyPolicy, TermsOfUse};
pub use login::Login;
pub use not_found::NotFound;
