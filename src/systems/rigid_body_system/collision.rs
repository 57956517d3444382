use crate::core::Rect;
use crate::rigid_body::Body;

/// Boundary margin around the tested body so exactly touching edges still
/// become candidates (rect intersection is strict).
pub(super) const BOUNDARY_MARGIN: f32 = 1.0;

/// Collect every body after `index` whose rect intersects `boundary`.
///
/// Only higher indices are scanned, so each unordered pair is seen once with
/// the lower index as the initiator.
pub(super) fn collect_candidates(
    slots: &[Option<Body>],
    index: usize,
    boundary: &Rect,
    out: &mut Vec<usize>,
) {
    out.clear();
    for (j, slot) in slots.iter().enumerate().skip(index + 1) {
        if let Some(other) = slot {
            if boundary.intersects(&other.rect()) {
                out.push(j);
            }
        }
    }
}

/// Borrow two distinct live slots mutably, `i < j`.
pub(super) fn pair_mut(slots: &mut [Option<Body>], i: usize, j: usize) -> Option<(&mut Body, &mut Body)> {
    if i >= j || j >= slots.len() {
        return None;
    }
    let (head, tail) = slots.split_at_mut(j);
    match (head[i].as_mut(), tail[0].as_mut()) {
        (Some(a), Some(b)) => Some((a, b)),
        _ => None,
    }
}
