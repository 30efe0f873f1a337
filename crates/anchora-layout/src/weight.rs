//! Weighted sizing: a share of the container's extent proportional to a weight.

use anchora_core::Axis;

use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::provider::GeometryProvider;

/// Extent for `weight` parts out of `total`, after removing `used` pixels
/// from the container's extent along `axis`.
///
/// The cell is `usable / total` with truncating division. On the vertical
/// axis each cell gets `config.vertical_weight_nudge` extra pixels.
/// Overflow wraps.
pub fn weighted_extent(
    provider: &dyn GeometryProvider,
    axis: Axis,
    total: i32,
    weight: i32,
    used: i32,
    config: &LayoutConfig,
) -> Result<i32, LayoutError> {
    let (lead, trail) = match axis {
        Axis::Horizontal => (provider.parent_left(), provider.parent_right()),
        Axis::Vertical => (provider.parent_top(), provider.parent_bottom()),
    };
    let trail = trail.ok_or(LayoutError::AmbiguousContainerExtent { axis, child: None })?;

    if total <= 0 {
        return Err(LayoutError::InvalidWeight { total });
    }

    let usable = trail.wrapping_sub(lead).wrapping_sub(used);
    let cell = match axis {
        Axis::Horizontal => usable / total,
        Axis::Vertical => (usable / total).wrapping_add(config.vertical_weight_nudge),
    };
    Ok(weight.wrapping_mul(cell))
}
