//! Home page sections, top to bottom.

pub mod about;
pub mod cta;
pub mod features;
pub mod hero;
pub mod products;
pub mod vision;

pub use about::About;
pub use cta::Cta;
pub use features::Features;
pub use hero::Hero;
pub use products::Products;
pub use vision::Vision;
