use crate::core::geometry::Position;

pub const DEFAULT_CYCLE_LENGTH: u32 = 50;

/// A single firefly: fixed position, integer phase, derived on/off state.
#[derive(Clone, Debug, PartialEq)]
pub struct Oscillator {
    position: Position,
    phase: u32,
    on: bool,
    cycle_length: u32,
    neighbors: Box<[usize]>,
}

impl Oscillator {
    /// `phase` must already lie in `[0, cycle_length)` and `cycle_length` must be
    /// at least 2; `Population` validates both before building oscillators.
    pub(crate) fn new(
        position: Position,
        phase: u32,
        cycle_length: u32,
        neighbors: Vec<usize>,
    ) -> Self {
        debug_assert!(cycle_length >= 2);
        debug_assert!(phase < cycle_length);
        Self {
            position,
            phase,
            on: lit_at(phase, cycle_length),
            cycle_length,
            neighbors: neighbors.into_boxed_slice(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn phase(&self) -> u32 {
        self.phase
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn cycle_length(&self) -> u32 {
        self.cycle_length
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// True when at least half of the neighbors are on in `snapshot`.
    /// An isolated oscillator never has a majority.
    pub fn neighbors_majority_on(&self, snapshot: &[bool]) -> bool {
        if self.neighbors.is_empty() {
            return false;
        }
        let lit = self.neighbors.iter().filter(|&&j| snapshot[j]).count();
        2 * lit >= self.neighbors.len()
    }

    /// Advance pass. `snapshot` holds every oscillator's on state from the
    /// previous commit. Returns whether the coupling boost fired.
    ///
    /// The boost only fires on the wrap to phase 0, so the result is at most 1
    /// and the phase never leaves `[0, cycle_length)`.
    pub fn advance(&mut self, snapshot: &[bool]) -> bool {
        self.phase = (self.phase + 1) % self.cycle_length;
        if self.phase == 0 && self.neighbors_majority_on(snapshot) {
            self.phase += 1;
            return true;
        }
        false
    }

    /// Commit pass.
    pub fn refresh(&mut self) {
        self.on = lit_at(self.phase, self.cycle_length);
    }
}

#[inline]
pub fn lit_at(phase: u32, cycle_length: u32) -> bool {
    phase < cycle_length / 2
}
