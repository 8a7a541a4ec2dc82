//! Static validation of a parsed stylesheet.
//!
//! The checker walks the tree once, maintaining a stack of variable-type
//! scopes, and flags every violation in place. It never restructures the
//! tree and never stops at the first error: all failures are recorded as
//! node-local annotations so a caller can enumerate every problem before
//! deciding whether to continue the pipeline.

pub mod checker;
