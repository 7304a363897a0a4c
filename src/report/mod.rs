//! Snapshot-to-wire translation and delivery.
//!
//! One report cycle pulls a registry snapshot, translates every instrument
//! into its JSON wire shape, assembles the document and POSTs it to the
//! collector. Faults inside a cycle are logged and swallowed; the next cycle
//! retries naturally.

pub mod assemble;
pub mod reporter;
pub mod sanitize;
pub mod translate;
pub mod transport;

pub use reporter::JsonReporter;
