// Domain entities.

pub mod client_record;

pub use client_record::ClientRecord;
