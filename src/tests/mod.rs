//! Cross-module tests for the viewer.
//!
//! These drive a full `Lightbox` through realistic input sequences, either
//! directly or through replay scripts.

mod replay_tests;
