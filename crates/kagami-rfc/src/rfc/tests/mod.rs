//! Cross-layer tests: round-trip fidelity over realistic documents.

mod fixtures;
