pub mod ballot;
pub mod candidate;
pub mod redaction;
