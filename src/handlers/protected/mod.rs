// handlers/protected/mod.rs - Protected handlers (token required)
//
// Every route in this module sits behind `middleware::require_token`. A
// handler only runs once the `Authorization` header carried a valid token, so
// none of them look at credentials themselves.
//
// Security Level: Bearer token required
// Route Prefix: /api/<resource>/*
// Middleware: require_token (route layer)

pub mod dashboard;
pub mod kategori;
pub mod laporan_stok;
pub mod log_aktifitas;
pub mod pemasok;
pub mod pengguna;
pub mod produk;
pub mod subkategori;
pub mod transaksi;

/*
PROTECTED HANDLER SHAPE:

Each handler follows the same four steps:

1. Parse the JSON body into a struct of `Option<Scalar>` fields. A body that
   fails to parse becomes the resource's "Gagal ..." failure envelope.
2. Validate: "add" needs every required field filled, "update" and "delete"
   need the id. Failures answer 400 before any procedure runs.
3. Call the stored procedure(s) through `state.procedures`. Mutations commit
   before the handler returns.
4. Wrap the mapped rows in an `Envelope`.

Listing handlers skip steps 1 and 2.
*/
