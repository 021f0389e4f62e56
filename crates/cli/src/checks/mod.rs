// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-file and per-diff checks.
//!
//! - `leftover`: the other environment's tag appearing in a file
//! - `image_tag`: floating vs pinned image tag policy
//! - `suspicious`: non-environment diffs likely to be mistakes

pub mod image_tag;
pub mod leftover;
pub mod suspicious;

pub use image_tag::TagPolicyCheck;
pub use leftover::LeftoverCheck;
pub use suspicious::{Suspicion, SuspicionHeuristic};

use crate::finding::Finding;
use crate::pairing::EnvFile;

/// A check that inspects one file's raw content on its own.
///
/// File checks run on every readable file of a complete pair, whatever the
/// pair's diff classification.
pub trait FileCheck {
    /// Unique identifier for this check.
    fn name(&self) -> &'static str;

    /// Human-readable description.
    fn description(&self) -> &'static str;

    /// Findings for `file`, in line order.
    fn check(&self, file: &EnvFile, content: &str) -> Vec<Finding>;
}
