//! Hand-carried translations of the Google descriptor and annotation protos.
//!
//! Only the subset of fields the translator populates is carried; extension
//! fields are declared with their real extension numbers so the encoded bytes
//! match what `protoc` would produce for the extended options.

pub mod api;
pub mod protobuf;
