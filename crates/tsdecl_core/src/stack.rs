//! Stack growth for deeply nested input.
//!
//! Parsing, encoding and decoding all recurse once per nesting level. Each
//! recursive step runs through [`ensure_sufficient_stack`], which moves onto a
//! fresh heap-allocated stack segment when the current one runs low, so depth
//! is bounded by the configured limits rather than by the thread's stack size.

/// Grow when less than this much stack remains.
pub const RED_ZONE: usize = 256 * 1024;

/// Size of each newly allocated stack segment.
pub const STACK_SEGMENT: usize = 4 * 1024 * 1024;

#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_SEGMENT, f)
}

/// Run `f` on a freshly allocated stack of `size` bytes.
pub fn with_stack<R>(size: usize, f: impl FnOnce() -> R) -> R {
    stacker::grow(size, f)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: u32) -> u32 {
        // A large frame so that the thread's own stack cannot hold the
        // whole recursion.
        let pad = std::hint::black_box([1u8; 4096]);
        if n == 0 {
            return 0;
        }
        ensure_sufficient_stack(|| depth(n - 1)) + u32::from(pad[n as usize % pad.len()])
    }

    #[test]
    fn test_deep_recursion_on_small_thread() {
        let handle = std::thread::Builder::new()
            .stack_size(256 * 1024)
            .spawn(|| depth(2_000))
            .expect("spawn");
        assert_eq!(handle.join().expect("join"), 2_000);
    }

    #[test]
    fn test_with_stack_returns_value() {
        assert_eq!(with_stack(1024 * 1024, || depth(10)), 10);
    }
}
