//! Tracking categories
//!
//! The sender splits its data into two independently-present categories.
//! Each category has its own activation latch and its own mapping pass.

/// Tracking data category
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    /// Gaze, pupil, eyelid and squint data
    Eye,
    /// Cheek, lip, mouth, jaw and tongue data
    Expression,
}

impl Category {
    /// Human-readable label used in activation log messages
    pub fn label(self) -> &'static str {
        match self {
            Category::Eye => "eye tracking",
            Category::Expression => "facial expression tracking",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Category::Eye.label(), "eye tracking");
        assert_eq!(Category::Expression.label(), "facial expression tracking");
    }
}
