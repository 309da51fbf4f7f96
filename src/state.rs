use crate::schedule::Event;

/// Spin direction of the quad, as the sign of the Z rotation.
///
/// GL clip space is Y-up, so [`Direction::Positive`] turns the quad
/// counter-clockwise on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Positive,
    Negative,
}

impl Direction {
    /// +1 for [`Direction::Positive`], -1 otherwise.
    pub fn sign(self) -> f32 {
        match self {
            Direction::Positive => 1.0,
            Direction::Negative => -1.0,
        }
    }

    pub fn flip(self) -> Self {
        match self {
            Direction::Positive => Direction::Negative,
            Direction::Negative => Direction::Positive,
        }
    }
}

/// Flags read by the render loop every tick and written only by timer
/// events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameState {
    pub direction: Direction,
    pub filled: bool,
}

impl Default for FrameState {
    fn default() -> Self {
        Self {
            direction: Direction::Positive,
            filled: true,
        }
    }
}

impl FrameState {
    pub fn apply(&mut self, event: Event) {
        match event {
            Event::FlipDirection => self.direction = self.direction.flip(),
            Event::ToggleFill => self.filled = !self.filled,
        }
        log::debug!("{event:?} -> {self:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScaleMode;
    use crate::transform::Transform;
    use glam::Vec4;

    #[test]
    fn events_touch_only_their_flag() {
        let mut state = FrameState::default();
        state.apply(Event::FlipDirection);
        assert_eq!(state.direction, Direction::Negative);
        assert!(state.filled);

        state.apply(Event::ToggleFill);
        assert_eq!(state.direction, Direction::Negative);
        assert!(!state.filled);

        state.apply(Event::FlipDirection);
        assert_eq!(state.direction.sign(), 1.0);
    }

    #[test]
    fn positive_direction_turns_counter_clockwise_on_screen() {
        let mut transform = Transform::new(ScaleMode::Compounding);
        transform.rotate_z(0.01 * Direction::Positive.sign());
        let moved = *transform.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(moved.y > 0.0);

        let mut transform = Transform::new(ScaleMode::Compounding);
        transform.rotate_z(0.01 * Direction::Negative.sign());
        let moved = *transform.matrix() * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(moved.y < 0.0);
    }
}
