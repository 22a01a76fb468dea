/// Global cap on outer transitions plus loop-body node visits for one run.
pub const MAX_STEPS: u32 = 500;

/// Cap on body node visits within a single `for` iteration.
pub const MAX_BODY_STEPS: u32 = 50;

/// Bounds executed steps to contain runaway graphs.
///
/// One guard instance with cap [`MAX_STEPS`] lives for the whole run; a
/// fresh instance with cap [`MAX_BODY_STEPS`] is created per `for`
/// iteration to truncate pathological loop bodies without aborting the run.
#[derive(Debug, Clone)]
pub struct StepGuard {
    steps: u32,
    cap: u32,
}

impl StepGuard {
    pub fn new(cap: u32) -> Self {
        Self { steps: 0, cap }
    }

    /// Records one step. Returns `false` once the cap is exceeded.
    pub fn tick(&mut self) -> bool {
        self.steps += 1;
        self.steps <= self.cap
    }

    pub fn exhausted(&self) -> bool {
        self.steps > self.cap
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn cap(&self) -> u32 {
        self.cap
    }
}
