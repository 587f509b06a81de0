//! FILENAME: engine/src/memory.rs
//! PURPOSE: The calculator's single persistent memory register (M+, M-, MR, MS, MC).
//! CONTEXT: Independent of evaluation: neither the error slot nor the bound
//! variable ever touches it.

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Memory {
    value: f64,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&mut self, value: f64) {
        self.value = value;
    }

    pub fn recall(&self) -> f64 {
        self.value
    }

    pub fn add(&mut self, value: f64) {
        self.value += value;
    }

    pub fn subtract(&mut self, value: f64) {
        self.value -= value;
    }

    pub fn clear(&mut self) {
        self.value = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_operations() {
        let mut memory = Memory::new();
        assert_eq!(memory.recall(), 0.0);

        memory.store(7.0);
        memory.add(3.0);
        assert_eq!(memory.recall(), 10.0);

        memory.subtract(4.5);
        assert_eq!(memory.recall(), 5.5);

        memory.clear();
        assert_eq!(memory.recall(), 0.0);
    }
}
