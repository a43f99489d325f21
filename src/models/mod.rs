mod client;
mod phone;

pub use client::{Client, ClientFilter, ClientMatch, ClientUpdate};
pub use phone::Phone;
