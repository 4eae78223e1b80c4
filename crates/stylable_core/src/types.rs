pub use artifact::*;
pub use entry::*;
pub use options::*;
pub use sheet::*;

mod artifact;
mod entry;
mod options;
mod sheet;
