/// Default number of tokens an expression buffer can hold.
pub const DEFAULT_CAPACITY: usize = 256;

/// Evaluation settings chosen by the host.
///
/// The capacity bounds the expression buffer as well as the auxiliary
/// operator and value stacks used while converting and evaluating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }
}
