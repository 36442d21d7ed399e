use crate::foundation::core::{Canvas, Rect};
use crate::geometry::PercentPoint;
use crate::model::{GroupId, ModelUpdate, TextGroup, TextPosition};
use serde::Serialize;

/// Pointer-to-anchor distance (percentage units) below which a custom text is grabbed.
pub const TEXT_HIT_THRESHOLD: f64 = 15.0;

/// At most one entity is dragged at a time; the enum makes that unrepresentable otherwise.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DragState {
    #[default]
    Idle,
    DraggingText {
        group: GroupId,
        last: Option<PercentPoint>,
    },
    DraggingButton {
        last: Option<PercentPoint>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Text(GroupId),
    Button,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    #[default]
    Default,
    Move,
    Grabbing,
}

/// Pick what a pointer-down at `point` grabs.
///
/// The CTA button box (pixels, inclusive edges) wins; otherwise the nearest `custom` text group
/// closer than [`TEXT_HIT_THRESHOLD`], ties going to the earlier group.
pub fn hit_test(
    point: PercentPoint,
    canvas: Canvas,
    button: Option<Rect>,
    groups: &[TextGroup],
) -> Option<DragTarget> {
    if let Some(r) = button {
        let p = point.to_px(canvas.width_f64(), canvas.height_f64());
        if p.x >= r.x0 && p.x <= r.x1 && p.y >= r.y0 && p.y <= r.y1 {
            return Some(DragTarget::Button);
        }
    }

    let mut best: Option<(GroupId, f64)> = None;
    for g in groups
        .iter()
        .filter(|g| g.style.position == TextPosition::Custom)
    {
        let d = point.distance(g.style.hit_anchor());
        let limit = best.map_or(TEXT_HIT_THRESHOLD, |(_, b)| b);
        if d < limit {
            best = Some((g.id, d));
        }
    }
    best.map(|(id, _)| DragTarget::Text(id))
}

/// The drag protocol as a small state machine. Each transition returns the model edit the caller
/// should apply, so the preview never mutates the option model behind its owner's back.
#[derive(Clone, Copy, Debug, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        self.state != DragState::Idle
    }

    /// Start dragging `target`. Ignored (returns `false`) while another drag is active.
    pub fn begin(&mut self, target: DragTarget) -> bool {
        if self.is_dragging() {
            return false;
        }
        self.state = match target {
            DragTarget::Text(group) => DragState::DraggingText { group, last: None },
            DragTarget::Button => DragState::DraggingButton { last: None },
        };
        true
    }

    /// Track the pointer; `point` is clamped to `[0, 100]` before it is stored.
    pub fn update(&mut self, point: PercentPoint) -> Option<ModelUpdate> {
        let p = point.clamped();
        match &mut self.state {
            DragState::Idle => None,
            DragState::DraggingText { group, last } => {
                *last = Some(p);
                Some(ModelUpdate::SetTextPosition(*group, p))
            }
            DragState::DraggingButton { last } => {
                *last = Some(p);
                Some(ModelUpdate::SetButtonPosition(p))
            }
        }
    }

    /// Finish the drag at the last tracked position and return to idle.
    ///
    /// Also used for pointer-leave. A drag that never moved produces no edit.
    pub fn end(&mut self) -> Option<ModelUpdate> {
        match std::mem::take(&mut self.state) {
            DragState::Idle => None,
            DragState::DraggingText { group, last } => {
                last.map(|p| ModelUpdate::SetTextPosition(group, p))
            }
            DragState::DraggingButton { last } => last.map(ModelUpdate::SetButtonPosition),
        }
    }

    pub fn cursor(&self, groups: &[TextGroup]) -> Cursor {
        if self.is_dragging() {
            Cursor::Grabbing
        } else if groups
            .iter()
            .any(|g| g.style.position == TextPosition::Custom)
        {
            Cursor::Move
        } else {
            Cursor::Default
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/preview/drag.rs"]
mod tests;
