//! Two-operand integer arithmetic that remembers its last result

/// Calculator that keeps the most recent result in `memory`.
///
/// `add` and `multiply` both overwrite the stored value; neither reads it.
/// Arithmetic wraps on overflow in every build profile.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Accumulator {
    memory: i32,
}

impl Accumulator {
    /// Create an accumulator with memory set to zero
    pub fn new() -> Self {
        Self { memory: 0 }
    }

    /// Add two numbers, store the sum and return it
    pub fn add(&mut self, a: i32, b: i32) -> i32 {
        self.store(a.wrapping_add(b))
    }

    /// Multiply two numbers, store the product and return it
    pub fn multiply(&mut self, a: i32, b: i32) -> i32 {
        self.store(a.wrapping_mul(b))
    }

    /// Subtract `b` from `a`.
    ///
    /// Associated function: no instance is involved, so no memory is touched.
    pub fn subtract(a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    /// Last computed value, or zero if nothing was computed yet
    pub fn memory(&self) -> i32 {
        self.memory
    }

    fn store(&mut self, value: i32) -> i32 {
        tracing::trace!(previous = self.memory, value, "storing result");
        self.memory = value;
        value
    }
}
