//! Integration tests for the acat crates.
//!
//! End-to-end decoding of realistic catalog documents, exercising the
//! decoder surface the way downstream rendering code would.
