//! Authentication-related domain constants.

/// Provider discriminator for password credentials.
///
/// The accounts table supports one credential row per (user, provider)
/// pair; password login is the only provider currently implemented.
pub const PROVIDER_CREDENTIALS: &str = "credentials";
