pub mod escrow_entry;

pub use escrow_entry::*;
