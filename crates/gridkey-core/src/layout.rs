//! Axis layout combination.
//!
//! Every axis gets an implicit positional spec in front of the declared ones,
//! so an axis with no declared headers still keys each position by number.

use gridkey_model::{Axis, AxisFragment, GridSnapshot, HeaderLayout, HeaderSpec, KeyMap};
use tracing::{debug, debug_span, warn};

use crate::axis::resolve_axis;

/// The spec list actually resolved for `axis`: positional spec first.
pub fn effective_specs(axis: Axis, specs: &[HeaderSpec]) -> Vec<HeaderSpec> {
    let mut effective = Vec::with_capacity(specs.len() + 1);
    effective.push(HeaderSpec::new(axis.position_label()));
    effective.extend(specs.iter().cloned());
    effective
}

/// Every position along `axis` with its combined keys and completeness,
/// including incomplete positions.
pub fn combine_layouts(grid: &GridSnapshot, axis: Axis, specs: &[HeaderSpec]) -> Vec<HeaderLayout> {
    let resolved: Vec<Vec<AxisFragment>> = effective_specs(axis, specs)
        .iter()
        .map(|spec| resolve_axis(grid, axis, spec))
        .collect();
    (0..grid.axis_len(axis))
        .map(|position| {
            let group: Vec<&AxisFragment> = resolved
                .iter()
                .filter_map(|fragments| fragments.get(position))
                .collect();
            build_layout(position, &group)
        })
        .collect()
}

fn build_layout(position: usize, group: &[&AxisFragment]) -> HeaderLayout {
    let excluded = group.iter().any(|fragment| fragment.exclude);
    let mut keys = KeyMap::with_capacity(group.len());
    for fragment in group {
        // Last write wins on label collision.
        keys.insert(fragment.header.clone(), fragment.value.clone());
    }
    let complete = !excluded && keys.values().all(|value| !value.is_empty());
    HeaderLayout {
        position,
        keys,
        complete,
    }
}

/// Complete layouts only, in axis order.
pub fn axis_layout(grid: &GridSnapshot, axis: Axis, specs: &[HeaderSpec]) -> Vec<HeaderLayout> {
    let span = debug_span!("axis_layout", %axis, specs = specs.len());
    let _guard = span.enter();
    let positions = grid.axis_len(axis);
    let layouts: Vec<HeaderLayout> = combine_layouts(grid, axis, specs)
        .into_iter()
        .filter(HeaderLayout::is_complete)
        .collect();
    debug!(positions, kept = layouts.len(), "axis layout resolved");
    if layouts.is_empty() && positions > 0 {
        let labels: Vec<&str> = specs.iter().map(|spec| spec.label.as_str()).collect();
        warn!(
            %axis,
            positions,
            labels = ?labels,
            "no complete header positions; header specs may not match this grid"
        );
    }
    layouts
}
