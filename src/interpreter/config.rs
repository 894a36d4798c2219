/// Default bound on nested parentheses and nested polynomial calls.
///
/// Chosen so that parsing and evaluating at the limit fits in a 2 MiB thread
/// stack, including unoptimized builds.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Settings that shape a single run.
///
/// The command line builds one of these from its flags; library users can
/// start from [`Config::default`] and adjust fields.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Config {
    /// Maximum nesting of parentheses and polynomial calls.
    ///
    /// The parser allows up to `max_depth` levels of parentheses inside a
    /// body and, separately, up to `max_depth` levels of calls nested in
    /// arguments. The evaluator counts both together: a top-level call is
    /// level 0, and every nested call or parenthesis it passes through adds
    /// one. A program can therefore parse and still fail at run time when a
    /// nested call reaches a parenthesized body.
    pub max_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH }
    }
}

impl Config {
    /// Returns a copy with a different depth limit.
    ///
    /// # Examples
    /// ```
    /// use polyrun::interpreter::config::Config;
    ///
    /// let config = Config::default().with_max_depth(8);
    /// assert_eq!(config.max_depth, 8);
    /// ```
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}
