// Tab module registry.
// - Each tab module owns only its own rendering behavior.
// - Encrypt and encode share one renderer; analysis has its own.
pub mod analyze;
pub mod transform;
