//! Sequencer behind the projects carousel.
//!
//! Every move plays the same four phases: the current item shrinks, the
//! target item grows, the track slides the target into the middle, then the
//! item list is rotated so the target sits at the centre index again and the
//! track offset snaps back to zero. The view only renders this state and
//! calls [`Carousel::advance`] when the delay of the current phase elapses.

use std::time::Duration;

pub const COPIES: usize = 5;
pub const DRAG_THRESHOLD_PX: f64 = 50.0;
pub const CENTER_SCALE: f64 = 1.0;
pub const SIDE_SCALE: f64 = 0.8;
pub const STAGGER_MS: u64 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    ScaleDown,
    ScaleUp,
    Translating,
}

impl Phase {
    /// How long the phase lasts before [`Carousel::advance`] is due.
    pub fn delay(self) -> Option<Duration> {
        match self {
            Self::Idle => None,
            Self::ScaleDown | Self::ScaleUp => Some(Duration::from_millis(150)),
            Self::Translating => Some(Duration::from_millis(800)),
        }
    }
}

/// One slot of the track: which project it shows and which copy it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub index: usize,
    pub copy: usize,
}

impl Slot {
    pub fn key(&self) -> String {
        format!("{}-{}", self.index, self.copy)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pending {
    steps: isize,
    spacing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Drag {
    start_x: f64,
    offset: f64,
    held: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slots: Vec<Slot>,
    phase: Phase,
    virtual_center: usize,
    translate_x: f64,
    drag: Option<Drag>,
    pending: Option<Pending>,
}

/// Converts a released drag into a signed step count: positive moves to
/// the next item, negative to the previous one (dragging right).
///
/// `None` means the drag stayed within the threshold and nothing moves.
pub fn drag_steps(offset: f64, spacing: f64) -> Option<isize> {
    let distance = offset.abs();
    if distance <= DRAG_THRESHOLD_PX {
        return None;
    }
    let spacing = if spacing > 0.0 { spacing } else { 1.0 };
    let steps = ((distance / spacing).round() as isize).max(1);
    Some(if offset > 0.0 { -steps } else { steps })
}

impl Carousel {
    pub fn new(items: usize, copies: usize) -> Self {
        let slots = (0..copies)
            .flat_map(|copy| (0..items).map(move |index| Slot { index, copy }))
            .collect::<Vec<_>>();
        let virtual_center = slots.len() / 2;
        Self {
            slots,
            phase: Phase::Idle,
            virtual_center,
            translate_x: 0.0,
            drag: None,
            pending: None,
        }
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn center_index(&self) -> usize {
        self.slots.len() / 2
    }

    pub fn virtual_center(&self) -> usize {
        self.virtual_center
    }

    /// Project index of the item currently promoted to the centre.
    pub fn current(&self) -> Option<usize> {
        self.slots.get(self.virtual_center).map(|s| s.index)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_idle(&self) -> bool {
        self.phase == Phase::Idle
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some_and(|d| d.held)
    }

    pub fn translate_x(&self) -> f64 {
        self.translate_x
    }

    pub fn drag_offset(&self) -> f64 {
        self.drag.map(|d| d.offset).unwrap_or_default()
    }

    /// Scale of the slot at `position` for the current phase.
    pub fn scale_at(&self, position: usize) -> f64 {
        if position == self.virtual_center && self.phase != Phase::ScaleDown {
            CENTER_SCALE
        } else {
            SIDE_SCALE
        }
    }

    /// Entrance animation delay for the slot at `position`.
    pub fn stagger_at(&self, position: usize) -> Duration {
        let distance = position.abs_diff(self.virtual_center) as u64;
        Duration::from_millis(distance * STAGGER_MS)
    }

    pub fn next(&mut self, spacing: f64) -> Option<Phase> {
        self.move_by(1, spacing)
    }

    pub fn prev(&mut self, spacing: f64) -> Option<Phase> {
        self.move_by(-1, spacing)
    }

    /// Starts a move of `steps` items. Returns the phase entered, whose
    /// delay the caller must wait before calling [`Carousel::advance`], or
    /// `None` when the move is ignored because another one is running.
    pub fn move_by(&mut self, steps: isize, spacing: f64) -> Option<Phase> {
        if steps == 0 || !self.is_idle() {
            return None;
        }
        self.pending = Some(Pending {
            steps: self.clamp_steps(steps),
            spacing,
        });
        self.phase = Phase::ScaleDown;
        Some(self.phase)
    }

    /// Moves to the phase after the current one. Returns the new phase when
    /// it needs another timed [`Carousel::advance`].
    pub fn advance(&mut self) -> Option<Phase> {
        let pending = self.pending?;
        match self.phase {
            Phase::Idle => None,
            Phase::ScaleDown => {
                let target = self.center_index() as isize + pending.steps;
                self.virtual_center = target as usize;
                self.phase = Phase::ScaleUp;
                Some(self.phase)
            }
            Phase::ScaleUp => {
                if let Some(drag) = self.drag.as_mut() {
                    drag.offset = 0.0;
                }
                self.translate_x -= pending.steps as f64 * pending.spacing;
                self.phase = Phase::Translating;
                Some(self.phase)
            }
            Phase::Translating => {
                self.rotate(pending.steps);
                self.translate_x = 0.0;
                self.virtual_center = self.center_index();
                self.pending = None;
                self.drag = None;
                self.phase = Phase::Idle;
                None
            }
        }
    }

    /// Mouse went down on the track: shrink the current item as feedback.
    pub fn drag_start(&mut self, x: f64) -> bool {
        if !self.is_idle() {
            return false;
        }
        self.drag = Some(Drag {
            start_x: x,
            offset: 0.0,
            held: true,
        });
        self.phase = Phase::ScaleDown;
        true
    }

    pub fn drag_move(&mut self, x: f64) {
        if let Some(drag) = self.drag.as_mut().filter(|d| d.held) {
            drag.offset = x - drag.start_x;
        }
    }

    /// Mouse released. Either snaps back to idle or starts a move by the
    /// quantized drag distance; the return value follows
    /// [`Carousel::move_by`].
    pub fn drag_end(&mut self, spacing: f64) -> Option<Phase> {
        let drag = self.drag.filter(|d| d.held)?;
        let Some(steps) = drag_steps(drag.offset, spacing) else {
            self.drag = None;
            if self.pending.is_none() {
                self.phase = Phase::Idle;
            }
            return None;
        };
        if self.phase != Phase::ScaleDown || self.pending.is_some() {
            self.drag = None;
            return None;
        }
        self.drag = Some(Drag {
            held: false,
            ..drag
        });
        self.pending = Some(Pending {
            steps: self.clamp_steps(steps),
            spacing,
        });
        Some(self.phase)
    }

    /// Keeps the target slot inside the track on both sides of the centre.
    fn clamp_steps(&self, steps: isize) -> isize {
        let center = self.center_index() as isize;
        let ahead = (self.slots.len() as isize - 1 - center).max(0);
        steps.clamp(-center, ahead)
    }

    fn rotate(&mut self, steps: isize) {
        if self.slots.is_empty() {
            return;
        }
        let n = steps.unsigned_abs() % self.slots.len();
        if steps > 0 {
            self.slots.rotate_left(n);
        } else {
            self.slots.rotate_right(n);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(carousel: &mut Carousel, first: Option<Phase>) -> Vec<Phase> {
        let mut seen = Vec::new();
        let mut phase = first;
        while let Some(p) = phase {
            seen.push(p);
            phase = carousel.advance();
        }
        seen
    }

    #[test]
    fn test_layout() {
        let c = Carousel::new(3, COPIES);
        assert_eq!(c.slots().len(), 15);
        assert_eq!(c.center_index(), 7);
        assert_eq!(c.current(), Some(1));
        assert_eq!(c.slots()[7].key(), "1-2");
    }

    #[test]
    fn test_next_plays_all_phases_and_rotates() {
        let mut c = Carousel::new(3, COPIES);
        let first = c.next(100.0);
        assert_eq!(first, Some(Phase::ScaleDown));
        assert_eq!(c.scale_at(7), SIDE_SCALE);

        assert_eq!(c.advance(), Some(Phase::ScaleUp));
        assert_eq!(c.virtual_center(), 8);
        assert_eq!(c.scale_at(8), CENTER_SCALE);

        assert_eq!(c.advance(), Some(Phase::Translating));
        assert_eq!(c.translate_x(), -100.0);

        assert_eq!(c.advance(), None);
        assert!(c.is_idle());
        assert_eq!(c.translate_x(), 0.0);
        assert_eq!(c.virtual_center(), 7);
        assert_eq!(c.current(), Some(2));
        assert_eq!(c.slots()[14], Slot { index: 0, copy: 0 });
    }

    #[test]
    fn test_prev_rotates_back_to_front() {
        let mut c = Carousel::new(3, COPIES);
        let first = c.prev(100.0);
        let phases = run(&mut c, first);
        assert_eq!(
            phases,
            vec![Phase::ScaleDown, Phase::ScaleUp, Phase::Translating]
        );
        assert_eq!(c.current(), Some(0));
        assert_eq!(c.slots()[0], Slot { index: 2, copy: 4 });
    }

    #[test]
    fn test_moves_ignored_while_animating() {
        let mut c = Carousel::new(3, COPIES);
        c.next(100.0);
        assert_eq!(c.next(100.0), None);
        assert_eq!(c.move_by(3, 100.0), None);
        assert!(!c.drag_start(0.0));
        assert_eq!(c.move_by(0, 100.0), None);
    }

    #[test]
    fn test_move_by_jumps_several() {
        let mut c = Carousel::new(3, COPIES);
        assert_eq!(c.move_by(-2, 50.0), Some(Phase::ScaleDown));
        c.advance();
        assert_eq!(c.virtual_center(), 5);
        c.advance();
        assert_eq!(c.translate_x(), 100.0);
        assert_eq!(c.advance(), None);
        assert!(c.is_idle());
        assert_eq!(c.current(), Some(2));
    }

    #[test]
    fn test_drag_steps_quantization() {
        assert_eq!(drag_steps(50.0, 100.0), None);
        assert_eq!(drag_steps(-30.0, 100.0), None);
        // minimum one step past the threshold
        assert_eq!(drag_steps(-60.0, 200.0), Some(1));
        assert_eq!(drag_steps(-120.0, 100.0), Some(1));
        assert_eq!(drag_steps(-160.0, 100.0), Some(2));
        // dragging right goes to the previous item
        assert_eq!(drag_steps(260.0, 100.0), Some(-3));
        // unmeasured spacing counts as one pixel
        assert_eq!(drag_steps(-51.0, 0.0), Some(51));
    }

    #[test]
    fn test_short_drag_snaps_back() {
        let mut c = Carousel::new(3, COPIES);
        assert!(c.drag_start(400.0));
        assert_eq!(c.phase(), Phase::ScaleDown);
        assert_eq!(c.advance(), None);
        c.drag_move(430.0);
        assert_eq!(c.drag_offset(), 30.0);
        assert_eq!(c.drag_end(100.0), None);
        assert!(c.is_idle());
        assert_eq!(c.drag_offset(), 0.0);
    }

    #[test]
    fn test_long_drag_moves_and_clamps() {
        let mut c = Carousel::new(3, COPIES);
        c.drag_start(0.0);
        c.drag_move(-2000.0);
        let first = c.drag_end(100.0);
        assert_eq!(first, Some(Phase::ScaleDown));
        assert!(!c.is_dragging());
        c.drag_move(-5000.0);
        assert_eq!(c.drag_offset(), -2000.0);

        assert_eq!(c.advance(), Some(Phase::ScaleUp));
        assert_eq!(c.virtual_center(), 14);
        assert_eq!(c.advance(), Some(Phase::Translating));
        assert_eq!(c.drag_offset(), 0.0);
        assert_eq!(c.advance(), None);
        assert!(c.is_idle());
        assert_eq!(c.current(), Some(2));
    }

    #[test]
    fn test_clamp_with_even_slot_count() {
        let mut c = Carousel::new(2, 2);
        assert_eq!(c.center_index(), 2);
        c.move_by(10, 100.0);
        c.advance();
        assert_eq!(c.virtual_center(), 3);
        c.advance();
        c.advance();
        assert!(c.is_idle());

        let mut c = Carousel::new(2, 2);
        c.move_by(-10, 100.0);
        c.advance();
        assert_eq!(c.virtual_center(), 0);
    }

    #[test]
    fn test_stagger() {
        let c = Carousel::new(3, COPIES);
        assert_eq!(c.stagger_at(7), Duration::ZERO);
        assert_eq!(c.stagger_at(4), Duration::from_millis(300));
        assert_eq!(Phase::Translating.delay(), Some(Duration::from_millis(800)));
        assert_eq!(Phase::Idle.delay(), None);
    }
}
