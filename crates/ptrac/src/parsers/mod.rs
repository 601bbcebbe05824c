// All nom parsers split amoung files for organisation
mod header;
mod number;

// Internal re-exports for convenience
pub(crate) use header::*;
pub(crate) use number::*;
