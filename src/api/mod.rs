pub mod envelope;
pub mod format;
pub mod join;

pub use envelope::Envelope;
pub use join::nest;
