// handlers/public/mod.rs - Public handlers (no authentication required)
//
// Service discovery, health and token acquisition. Everything else lives in
// `handlers::protected`.

pub mod login;
pub mod root;

pub use login::login;
pub use root::{health, root};
