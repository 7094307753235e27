use smallvec::SmallVec;

/// A physical input that can hold the blow button down.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PressSource {
    Mouse,
    Touch(i32),
    Pointer(i32),
    Keyboard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatchEdge {
    Pressed,
    Released,
}

/// Collapses concurrent press sources into one logical press.
///
/// The first source down yields `Pressed`; the last source up yields
/// `Released`. Repeats and unknown releases yield nothing.
#[derive(Clone, Debug, Default)]
pub struct PressLatch {
    held: SmallVec<[PressSource; 4]>,
}

impl PressLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_held(&self) -> bool {
        !self.held.is_empty()
    }

    pub fn held_count(&self) -> usize {
        self.held.len()
    }

    pub fn press(&mut self, source: PressSource) -> Option<LatchEdge> {
        if self.held.contains(&source) {
            return None;
        }
        self.held.push(source);
        (self.held.len() == 1).then_some(LatchEdge::Pressed)
    }

    pub fn release(&mut self, source: PressSource) -> Option<LatchEdge> {
        let idx = self.held.iter().position(|s| *s == source)?;
        self.held.swap_remove(idx);
        self.held.is_empty().then_some(LatchEdge::Released)
    }

    /// Release every source at once (pointer left the button, cancel, blur).
    pub fn release_all(&mut self) -> Option<LatchEdge> {
        if self.held.is_empty() {
            return None;
        }
        self.held.clear();
        Some(LatchEdge::Released)
    }
}
