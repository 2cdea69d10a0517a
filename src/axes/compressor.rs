//! Axis layout compression
//!
//! Writers accept at most five axes, X, Y, Z, Channel and Time. A dataset
//! with extra unknown axes can still be written when every contiguous run
//! of unknown axes can be folded into a canonical axis the dataset does not
//! use. For example `X Y Z U C U T` cannot be written, because both unknown
//! runs would need a free slot and none is left, while `X Y U U C T` can:
//! the run `U U` becomes Z with the product of its lengths.
//!
//! Unknown axes of length 1 carry no data. They are dropped unless a free
//! slot is left over for them, in which case they claim it so that the
//! written order keeps their position.

use log::debug;

use crate::plane::{PlaneError, PlaneResult};

use super::canonical::CanonicalOrder;
use super::label::{Axis, AxisLabel};

/// Fold `axes` into a canonical five-axis order
///
/// `lengths[i]` is the length of `axes[i]`. Returns `None` when no valid
/// order exists: more unknown runs than free canonical slots, a canonical
/// axis given twice, mismatched slices, a zero length, or a length product
/// that does not fit in `u64`.
pub fn compress(axes: &[AxisLabel], lengths: &[u64]) -> Option<CanonicalOrder> {
    if axes.len() != lengths.len() || lengths.contains(&0) {
        return None;
    }

    // Pass 1: which canonical slots are taken, and how many runs of
    // unknown axes longer than 1 need a slot of their own
    let mut have = [false; 5];
    let mut blocks = 0usize;
    let mut in_block = false;

    for (label, &len) in axes.iter().zip(lengths) {
        match label.canonical() {
            Some(axis) => {
                if std::mem::replace(&mut have[axis.index()], true) {
                    return None;
                }
                in_block = false;
            }
            None => {
                if len > 1 && !in_block {
                    in_block = true;
                    blocks += 1;
                }
            }
        }
    }

    let missing = have.iter().filter(|&&h| !h).count();
    if blocks > missing {
        debug!("{} unknown axis runs but only {} free slots", blocks, missing);
        return None;
    }

    // Pass 2: assign slots. `claimed` counts the slots promised to unknown
    // runs, including runs opened by a length-1 axis.
    let mut order: Vec<Axis> = Vec::with_capacity(5);
    let mut folded: Vec<u64> = Vec::with_capacity(5);
    let mut claimed = blocks;
    let mut open: Option<usize> = None;
    let mut opened_by_unit = false;

    for (label, &len) in axes.iter().zip(lengths) {
        match label.canonical() {
            Some(axis) => {
                open = None;
                opened_by_unit = false;
                order.push(axis);
                folded.push(len);
            }
            None if len > 1 || claimed < missing => match open {
                None => {
                    if len == 1 {
                        claimed += 1;
                        opened_by_unit = true;
                    }
                    let slot = next_free(&mut have)?;
                    order.push(slot);
                    folded.push(len);
                    open = Some(folded.len() - 1);
                }
                Some(at) => {
                    // A run opened by a length-1 axis that turns out to hold
                    // real data was already counted in pass 1
                    if len > 1 && opened_by_unit {
                        opened_by_unit = false;
                        claimed -= 1;
                    }
                    folded[at] = folded[at].checked_mul(len)?;
                }
            },
            // Length-1 unknown with no spare slot: dropped
            None => {}
        }
    }

    // Tail fill in canonical order
    for axis in Axis::ALL {
        if !have[axis.index()] {
            have[axis.index()] = true;
            order.push(axis);
            folded.push(1);
        }
    }

    let order: [Axis; 5] = order.try_into().ok()?;
    let folded: [u64; 5] = folded.try_into().ok()?;
    CanonicalOrder::new(order, folded)
}

fn next_free(have: &mut [bool; 5]) -> Option<Axis> {
    let axis = Axis::ALL.into_iter().find(|axis| !have[axis.index()])?;
    have[axis.index()] = true;
    Some(axis)
}

/// Like `compress`, but reports failure as `UncompressibleAxes`
pub fn compress_axes(axes: &[AxisLabel], lengths: &[u64]) -> PlaneResult<CanonicalOrder> {
    compress(axes, lengths).ok_or_else(|| PlaneError::UncompressibleAxes(describe(axes, lengths)))
}

/// Whether any unknown axis carries data
pub fn needs_compression(axes: &[AxisLabel], lengths: &[u64]) -> bool {
    axes.iter()
        .zip(lengths)
        .any(|(label, &len)| label.is_unknown() && len > 1)
}

/// Whether the layout needs compression and compression succeeds
pub fn is_compressible(axes: &[AxisLabel], lengths: &[u64]) -> bool {
    needs_compression(axes, lengths) && compress(axes, lengths).is_some()
}

/// Render a layout as `X(512) Y(512) U(5)`
pub fn describe(axes: &[AxisLabel], lengths: &[u64]) -> String {
    axes.iter()
        .zip(lengths)
        .map(|(label, len)| format!("{}({})", label, len))
        .collect::<Vec<_>>()
        .join(" ")
}
