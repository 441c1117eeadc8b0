pub mod account;
pub mod library;
pub mod profile;

pub use account::Account;
pub use library::{WatchHistoryItem, WatchlistItem};
pub use profile::Profile;
