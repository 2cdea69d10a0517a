//! Canonical five-axis dimension order

use std::fmt;

use super::label::Axis;

/// A permutation of `XYZCT` with one length per position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanonicalOrder {
    order: [Axis; 5],
    lengths: [u64; 5],
}

impl CanonicalOrder {
    /// Build an order, checking that every axis appears once and no length is zero
    pub fn new(order: [Axis; 5], lengths: [u64; 5]) -> Option<Self> {
        let mut seen = [false; 5];
        for axis in order {
            if std::mem::replace(&mut seen[axis.index()], true) {
                return None;
            }
        }
        if lengths.contains(&0) {
            return None;
        }
        Some(CanonicalOrder { order, lengths })
    }

    /// `XYZCT` with the given sizes
    pub fn xyzct(size_x: u64, size_y: u64, size_z: u64, size_c: u64, size_t: u64) -> Option<Self> {
        CanonicalOrder::new(Axis::ALL, [size_x, size_y, size_z, size_c, size_t])
    }

    pub fn order(&self) -> &[Axis; 5] {
        &self.order
    }

    /// Lengths aligned with `order`
    pub fn lengths(&self) -> &[u64; 5] {
        &self.lengths
    }

    /// Dimension order as a five-letter string such as `"XYZCT"`
    pub fn dimension_order(&self) -> String {
        self.order.iter().map(Axis::letter).collect()
    }

    /// Length assigned to `axis`
    pub fn length_of(&self, axis: Axis) -> u64 {
        self.order
            .iter()
            .zip(self.lengths.iter())
            .find(|(a, _)| **a == axis)
            .map(|(_, &len)| len)
            .unwrap_or(1)
    }

    pub fn size_x(&self) -> u64 {
        self.length_of(Axis::X)
    }

    pub fn size_y(&self) -> u64 {
        self.length_of(Axis::Y)
    }

    pub fn size_z(&self) -> u64 {
        self.length_of(Axis::Z)
    }

    pub fn size_c(&self) -> u64 {
        self.length_of(Axis::Channel)
    }

    pub fn size_t(&self) -> u64 {
        self.length_of(Axis::Time)
    }

    /// Product of all lengths
    pub fn element_count(&self) -> u128 {
        self.lengths.iter().map(|&l| l as u128).product()
    }
}

impl fmt::Display for CanonicalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dimension_order())
    }
}
