//! Field - one f64 sample per grid cell
//!
//! Allocated once at construction; `reset` zeroes in place.

use std::ops::{Index, IndexMut};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    values: Vec<f64>,
}

impl Field {
    pub fn zeros(len: usize) -> Self {
        Self { values: vec![0.0; len] }
    }

    #[inline]
    pub fn len(&self) -> usize { self.values.len() }

    #[inline]
    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    #[inline]
    pub fn as_slice(&self) -> &[f64] { &self.values }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f64] { &mut self.values }

    /// Pointer to the samples (for JS typed-array views)
    pub fn as_ptr(&self) -> *const f64 { self.values.as_ptr() }

    /// Zero every sample without reallocating
    /// Parallel fill with Rayon when the feature is enabled
    pub fn reset(&mut self) {
        #[cfg(feature = "parallel")]
        {
            self.values.par_iter_mut().for_each(|v| *v = 0.0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            self.values.fill(0.0);
        }
    }

    /// Sum of squared samples
    pub fn norm_squared(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }
}

impl Index<usize> for Field {
    type Output = f64;

    #[inline]
    fn index(&self, idx: usize) -> &f64 {
        &self.values[idx]
    }
}

impl IndexMut<usize> for Field {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut f64 {
        &mut self.values[idx]
    }
}
