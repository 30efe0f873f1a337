//! Final placement of a measured element inside its constraint box.
//!
//! With zero bias the element sits flush against the lead edge (left/top).
//! With a positive bias and room to spare, the lead edge moves by the biased
//! share of the slack. The placed extent is always the element's own
//! measured size; the constraint box only bounds measurement.

use anchora_core::{Rect, Size};

use crate::constraint::ConstraintBox;

/// Compute the final frame of an element measured at `measured`.
///
/// `nudge` is added to the lead edge whenever the bias actually shifts it.
#[must_use]
pub fn distribute(state: &ConstraintBox, measured: Size, nudge: i32) -> Rect {
    let left = place_lead(
        state.left,
        state.right,
        state.horizontal_bias(),
        measured.width,
        nudge,
    );
    let top = place_lead(
        state.top,
        state.bottom,
        state.vertical_bias(),
        measured.height,
        nudge,
    );
    Rect::from_origin_size(left, top, measured)
}

/// Lead edge of one placed axis.
fn place_lead(lead: i32, trail: i32, bias: f32, natural: i32, nudge: i32) -> i32 {
    if bias == 0.0 {
        return lead;
    }

    let slack = trail.wrapping_sub(lead).wrapping_sub(natural);
    if slack > 0 {
        // Truncation toward zero, then the nudge
        ((lead as f32 + bias * slack as f32) as i32).wrapping_add(nudge)
    } else {
        lead
    }
}
