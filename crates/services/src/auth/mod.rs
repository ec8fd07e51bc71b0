pub mod credentials;
pub mod gate;
pub mod session;

pub use credentials::{CredentialVerifier, StaticCredentials};
pub use gate::{GateState, SecondaryGate};
pub use session::SessionStore;
