//! Ownership resolution — `OWNERS` declaration files and the upward walk.
//!
//! A [`DeclarationStore`] parses and memoizes declaration files; an
//! [`OwnerResolver`] owns one store for the whole run and maps a
//! repository-relative path to the owner set of its nearest `OWNERS` file.

pub mod resolver;
pub mod store;
pub mod types;

pub use resolver::OwnerResolver;
pub use store::DeclarationStore;
pub use types::{OwnershipDeclaration, ResolutionResult};
