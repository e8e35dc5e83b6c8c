mod entry;
mod listing;

pub use entry::{Entry, EntryKind};
pub use listing::{DirectoryListing, INDEX_FILE_NAME};
