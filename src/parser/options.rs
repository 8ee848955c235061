//! Tree builder options

use text_size::TextSize;

/// Options for building a syntax tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Stop before the first token that starts after this offset.
    ///
    /// Used to get the syntactic context at an editor cursor without parsing
    /// the (possibly broken) rest of the buffer.
    pub target_offset: Option<TextSize>,
}

impl BuildOptions {
    pub fn with_target_offset(mut self, offset: impl Into<TextSize>) -> Self {
        self.target_offset = Some(offset.into());
        self
    }

    /// Whether a token starting at `start` is within the build window
    pub fn accepts(&self, start: TextSize) -> bool {
        self.target_offset.is_none_or(|target| start <= target)
    }
}
