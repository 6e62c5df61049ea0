use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizePolicy {
    #[serde(default = "default_compact_breakpoint")]
    pub compact_breakpoint: f32,
    #[serde(default = "default_compact_size")]
    pub compact_size: f32,
    #[serde(default = "default_regular_size")]
    pub regular_size: f32,
}

fn default_compact_breakpoint() -> f32 {
    640.0
}

fn default_compact_size() -> f32 {
    250.0
}

fn default_regular_size() -> f32 {
    300.0
}

impl Default for SizePolicy {
    fn default() -> Self {
        Self {
            compact_breakpoint: default_compact_breakpoint(),
            compact_size: default_compact_size(),
            regular_size: default_regular_size(),
        }
    }
}

impl SizePolicy {
    pub fn size_for(&self, viewport_width: f32) -> f32 {
        if viewport_width < self.compact_breakpoint {
            self.compact_size
        } else {
            self.regular_size
        }
    }
}

/// Canvas edge length derived from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeTracker {
    policy: SizePolicy,
    size: f32,
}

impl SizeTracker {
    pub fn new(policy: SizePolicy) -> Self {
        Self {
            size: policy.regular_size,
            policy,
        }
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn policy(&self) -> SizePolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: SizePolicy) {
        self.policy = policy;
    }

    /// Returns the new size when the viewport crossed into a different size.
    pub fn observe(&mut self, viewport_width: f32) -> Option<f32> {
        let size = self.policy.size_for(viewport_width);
        if size == self.size {
            return None;
        }
        self.size = size;
        Some(size)
    }
}

impl Default for SizeTracker {
    fn default() -> Self {
        Self::new(SizePolicy::default())
    }
}
