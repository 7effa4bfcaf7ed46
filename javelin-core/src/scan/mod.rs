//! Java declaration scanning
//!
//! One shallow pass over a source text recovers everything the
//! bookkeeping layer needs: the `package` header, the top-level type
//! declarations in textual order, and the primary (main) type. The
//! compiler emits class files in its own order, so this index is what
//! later restores source-declaration order.

mod cursor;
mod decl;

pub use decl::{scan, DeclarationIndex, ScanError, TypeDecl};
