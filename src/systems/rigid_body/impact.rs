use super::body::{Body, BodyKind};

/// Impact dispatch table: how `source` reacts onto `target` once a
/// collision between them has been detected.
///
/// | source kind | effect on target                                     |
/// |-------------|------------------------------------------------------|
/// | `Plain`     | receives `source.velocity` as a force                |
/// | `Surface`   | overlap fix, restituted normal, then friction        |
///
/// The transfer is one-directional. The controller calls it once per
/// direction for every colliding pair.
pub fn resolve_impact(source: &Body, target: &mut Body) {
    match source.kind() {
        BodyKind::Plain => target.apply_force(source.velocity()),
        BodyKind::Surface(props) => props.impact(&source.rect(), target),
    }
}
