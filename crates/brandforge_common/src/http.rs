// --- File: crates/brandforge_common/src/http.rs ---

pub mod client;
