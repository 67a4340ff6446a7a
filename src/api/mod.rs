//! Per-entity endpoint mappings. Every method here shapes one request
//! (path/query assembly plus enum-code translation) and calls a dispatch
//! primitive; none of them inspect request or response payloads.

mod characters;
mod collections;
mod episodes;
mod indices;
mod persons;
mod revisions;
mod subjects;
mod users;
