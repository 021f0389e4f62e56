// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Image tag policy.
//!
//! Floating environment files must reference every registry image with the
//! floating tag. Pinned environment files must never use it.

use super::FileCheck;
use crate::config::{EnvRole, Environments};
use crate::finding::{Finding, PolicyReason};
use crate::image::{ImageReference, extract_images};
use crate::pairing::EnvFile;

/// Tag policy check implementation.
pub struct TagPolicyCheck {
    floating_tag: String,
}

impl TagPolicyCheck {
    pub fn new(envs: &Environments) -> Self {
        Self {
            floating_tag: envs.floating_tag.clone(),
        }
    }

    /// The policy verdict for one reference.
    pub fn evaluate(&self, role: EnvRole, image: &ImageReference) -> Option<PolicyReason> {
        let is_floating = image.tag == self.floating_tag;
        match role {
            EnvRole::Floating if !is_floating => Some(PolicyReason::FloatingTagRequired {
                expected: self.floating_tag.clone(),
            }),
            EnvRole::Pinned if is_floating => Some(PolicyReason::FloatingTagForbidden {
                forbidden: self.floating_tag.clone(),
            }),
            _ => None,
        }
    }
}

impl FileCheck for TagPolicyCheck {
    fn name(&self) -> &'static str {
        "image-tag"
    }

    fn description(&self) -> &'static str {
        "Floating/pinned image tag policy"
    }

    fn check(&self, file: &EnvFile, content: &str) -> Vec<Finding> {
        extract_images(content)
            .into_iter()
            .filter_map(|image| {
                let reason = self.evaluate(file.role, &image)?;
                Some(Finding::PolicyViolation {
                    file: file.path.clone(),
                    line: image.line,
                    image: image.image(),
                    tag: image.tag,
                    reason,
                })
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "image_tag_tests.rs"]
mod tests;
