// SPDX-License-Identifier: Apache-2.0

/// Default limit on container nesting.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// What to do with a bare word that is not `true`, `false` or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LiteralPolicy {
    /// Treat the word as `null` and keep going.
    #[default]
    NullFallback,
    /// Fail with [`ParseError::UnrecognizedLiteral`](crate::ParseError::UnrecognizedLiteral).
    Reject,
}

/// Configuration options for [`JsonParser`](crate::JsonParser).
///
/// # Examples
///
/// ```
/// use jsontree::{LiteralPolicy, ParserOptions};
///
/// let options = ParserOptions::default()
///     .with_max_depth(16)
///     .with_literal_policy(LiteralPolicy::Reject);
/// assert_eq!(options.max_depth, 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParserOptions {
    /// Log the printed tree at `info` level once parsing completes.
    ///
    /// # Default
    ///
    /// `false`
    pub verbose: bool,

    /// Maximum number of nested objects/arrays. Opening a container beyond
    /// this fails with [`ParseError::MaxDepthReached`](crate::ParseError::MaxDepthReached).
    ///
    /// # Default
    ///
    /// [`DEFAULT_MAX_DEPTH`]
    pub max_depth: usize,

    /// Handling of unrecognized bare words.
    ///
    /// # Default
    ///
    /// [`LiteralPolicy::NullFallback`]
    pub literal_policy: LiteralPolicy,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            max_depth: DEFAULT_MAX_DEPTH,
            literal_policy: LiteralPolicy::default(),
        }
    }
}

impl ParserOptions {
    /// Sets [`ParserOptions::verbose`].
    pub const fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Sets [`ParserOptions::max_depth`].
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets [`ParserOptions::literal_policy`].
    pub const fn with_literal_policy(mut self, literal_policy: LiteralPolicy) -> Self {
        self.literal_policy = literal_policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ParserOptions::default();
        assert!(!options.verbose);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.literal_policy, LiteralPolicy::NullFallback);
    }

    #[test]
    fn test_builders_chain() {
        let options = ParserOptions::default()
            .with_verbose(true)
            .with_max_depth(3)
            .with_literal_policy(LiteralPolicy::Reject);
        assert!(options.verbose);
        assert_eq!(options.max_depth, 3);
        assert_eq!(options.literal_policy, LiteralPolicy::Reject);
    }
}
