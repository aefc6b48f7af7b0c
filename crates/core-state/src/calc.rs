//! Numeric stack for the calculator mode.

/// Default maximum stack depth.
pub const DEFAULT_STACK_LIMIT: usize = 32;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RpnStack {
    values: Vec<u32>,
    limit: usize,
}

impl Default for RpnStack {
    fn default() -> Self {
        Self::new(DEFAULT_STACK_LIMIT)
    }
}

impl RpnStack {
    pub fn new(limit: usize) -> Self {
        Self {
            values: Vec::with_capacity(limit),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Push unless the stack is full. Returns whether the value was pushed.
    pub fn push(&mut self, value: u32) -> bool {
        if self.values.len() >= self.limit {
            return false;
        }
        self.values.push(value);
        true
    }

    pub fn pop(&mut self) -> Option<u32> {
        self.values.pop()
    }

    /// Replace the top two values with their wrapping sum.
    pub fn add(&mut self) -> bool {
        self.combine(u32::wrapping_add)
    }

    /// Replace the top two values with their wrapping product.
    pub fn multiply(&mut self) -> bool {
        self.combine(u32::wrapping_mul)
    }

    fn combine(&mut self, op: fn(u32, u32) -> u32) -> bool {
        if self.values.len() < 2 {
            return false;
        }
        let top = self.values.len() - 1;
        let result = op(self.values[top - 1], self.values[top]);
        self.values.truncate(top);
        self.values[top - 1] = result;
        true
    }

    /// Text form printed after each operation: every value followed by a space, then `\n`.
    pub fn render(&self) -> Vec<u8> {
        let mut out = Vec::new();
        for v in &self.values {
            out.extend_from_slice(v.to_string().as_bytes());
            out.push(b' ');
        }
        out.push(b'\n');
        out
    }
}
