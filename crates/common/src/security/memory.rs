//! Constant-time comparison and memory ordering helpers

use subtle::{Choice, ConstantTimeEq};

/// Trait for types that can be securely compared
///
/// Comparison time depends only on the lengths involved, never on the
/// position of the first differing byte.
pub trait SecureCompare {
    /// Compare two values in constant time
    fn secure_eq(&self, other: &Self) -> bool {
        bool::from(self.secure_cmp(other))
    }

    /// Compare two values and return a constant-time choice
    fn secure_cmp(&self, other: &Self) -> Choice;
}

impl<const N: usize> SecureCompare for [u8; N] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        self.ct_eq(other)
    }
}

impl SecureCompare for [u8] {
    fn secure_cmp(&self, other: &Self) -> Choice {
        // `subtle` returns 0 for slices of different lengths
        self.ct_eq(other)
    }
}

/// Memory barrier utilities
pub mod barrier {
    use core::sync::atomic::{compiler_fence, Ordering};

    /// Insert a compiler fence to prevent reordering
    #[inline(always)]
    pub fn compiler_fence_seq_cst() {
        compiler_fence(Ordering::SeqCst);
    }

    /// Execute a closure with memory barriers before and after
    #[inline(always)]
    pub fn with_barriers<T, F: FnOnce() -> T>(f: F) -> T {
        compiler_fence_seq_cst();
        let result = f();
        compiler_fence_seq_cst();
        result
    }
}
