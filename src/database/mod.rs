pub mod decode;
pub mod manager;
pub mod models;
pub mod mysql;
pub mod procedures;
pub mod scalar;

pub use manager::{DatabaseError, DatabaseManager};
pub use mysql::MySqlProcedures;
pub use procedures::{prepend_id, Call, KasirHistory, LoginOutcome, Procedures, ResultShape};
pub use scalar::Scalar;
