/// Fenced code block delimiter.
///
/// A fence line both opens and closes a block; the info string after the
/// backticks is ignored.
pub struct CodeFence;

impl CodeFence {
    /// Three backticks.
    pub const BACKTICKS: &'static str = "```";

    pub fn is_fence(trimmed: &str) -> bool {
        trimmed.starts_with(Self::BACKTICKS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_with_and_without_info() {
        assert!(CodeFence::is_fence("```"));
        assert!(CodeFence::is_fence("```rust"));
        assert!(!CodeFence::is_fence("``"));
        assert!(!CodeFence::is_fence("~~~"));
    }
}
