//! Evaluation of a checked stylesheet down to its printable form.
//!
//! The evaluator folds every expression to a single literal, resolves and
//! discards variable assignments, flattens if clauses into the surrounding
//! rule body, and keeps only the last declaration per property name. It
//! assumes a tree with no error annotations; running it on an unchecked tree
//! gives undefined output, not a panic.

pub mod evaluator;
