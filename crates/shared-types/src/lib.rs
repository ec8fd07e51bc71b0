pub mod access;
pub mod config;
pub mod department;
pub mod error;
pub mod preferences;
pub mod session;

// Hospital records and sample data
pub mod hospital;

pub use access::*;
pub use config::*;
pub use department::*;
pub use error::*;
pub use hospital::*;
pub use preferences::*;
pub use session::*;
