// handlers/mod.rs - Two-tier handler layout
//
// Public (no token) → Protected (bearer token)
//
// The tier a handler lives in decides whether `app::routes` wraps it in the
// token gate; handlers never check credentials themselves.

pub mod protected; // /api/<resource>/*, token required
pub mod public; // /, /health, /api/login
