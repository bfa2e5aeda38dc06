/// Knobs shared by the tokenizer and the parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Emit comments as `Remark` tokens and statements instead of dropping them.
    pub keep_remarks: bool,
    /// Deepest nesting of expressions and statement bodies the parser accepts.
    pub max_depth: usize,
}

impl Options {
    pub const DEFAULT_MAX_DEPTH: usize = 128;

    pub fn keep_remarks(mut self, keep: bool) -> Options {
        self.keep_remarks = keep;
        self
    }

    pub fn max_depth(mut self, depth: usize) -> Options {
        self.max_depth = depth;
        self
    }
}

impl Default for Options {
    fn default() -> Options {
        Options {
            keep_remarks: false,
            max_depth: Options::DEFAULT_MAX_DEPTH,
        }
    }
}
