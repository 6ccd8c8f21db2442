// Candidate screening view: filter parsing, read-only record store, and the
// server-rendered listing/viewer pages. Records are written by the external
// ingestion/scoring pipeline; nothing in this module mutates them.

pub mod filter;
pub mod handlers;
pub mod store;
pub mod view;
