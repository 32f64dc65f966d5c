//! Zero-Cost Safety Macros
//!
//! Stencil rows only ever reference indices produced by `Grid::for_each_neighbor`,
//! so the solver and RHS loops can drop bounds checks in release builds.
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use wavefront_engine::fast;
//!
//! let row = 2;
//!
//! let x = vec![0.5, 1.0, 1.5, 2.0];
//! // Read: fast!(slice, [index])
//! let value = *fast!(x, [row]);
//! assert_eq!(value, 1.5);
//!
//! let mut rhs = vec![0.0; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(rhs, [row] = -0.25);
//! assert_eq!(rhs[row], -0.25);
//! ```

/// Bounds checking that disappears in release builds
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
///
/// Only use with indices that come from the grid topology.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}

#[cfg(test)]
mod tests {
    #[test]
    fn fast_read_matches_indexing() {
        let x = vec![0.0, 0.25, 0.5];
        assert_eq!(*fast!(x, [1]), x[1]);
    }

    #[test]
    fn fast_write_updates_slot() {
        let mut x = vec![0.0; 3];
        fast!(x, [2] = 4.0);
        assert_eq!(x, vec![0.0, 0.0, 4.0]);
    }

    #[test]
    #[should_panic]
    #[cfg(debug_assertions)]
    fn fast_bounds_check_in_debug() {
        let x = vec![1.0, 2.0];
        let _ = *fast!(x, [5]);
    }
}
