//=========================================================================
// Game Loop
//
// Fixed-update / variable-render pacing with two independent
// accumulators.
//
// Each call to `tick(now)` converts elapsed wall time into fractional
// "owed" simulation and render steps. Whole owed steps are paid out and
// subtracted; fractions carry over, so step counts over any window are
// exact regardless of how irregularly `tick` is called.
//
// Catch-up policy:
// After a stall (debugger, slow render), the physics accumulator may owe
// many steps at once. Draining it fully would freeze the loop further,
// so catch-up is capped per tick; debt beyond the cap is dropped,
// counted, and reported. Render debt is clamped to one owed frame so a
// stall never schedules a render burst.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::{Duration, Instant};

//=== External Crates =====================================================

use log::{debug, warn};

//=== Constants ===========================================================

/// Default bound on simulation catch-up per tick.
const DEFAULT_MAX_CATCHUP: u32 = 5;

/// Diagnostics latch window.
const RATE_WINDOW: Duration = Duration::from_secs(1);

//=== Tick ================================================================

/// What one pacing step owes the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tick {
    /// Simulation updates to perform now (bounded by the catch-up cap).
    pub updates: u32,

    /// Whether a render pass is due.
    pub render: bool,

    /// Simulation steps dropped because the catch-up cap was hit.
    /// Non-zero only after a stall; an observable loss, not a fault.
    pub dropped_updates: u32,
}

//=== GameLoop ============================================================

/// Accumulator-based pacing for decoupled simulation and render rates.
///
/// The loop never blocks or sleeps itself; callers feed it monotonic
/// instants and act on the returned [`Tick`]. `run` style drivers use
/// [`Self::time_until_next_step`] to size their waits.
pub struct GameLoop {
    /// Nanoseconds per simulation step.
    physics_ns: f64,

    /// Nanoseconds per render pass.
    render_ns: f64,

    physics_debt: f64,
    render_debt: f64,
    last_tick: Option<Instant>,
    max_catchup: u32,

    //--- Diagnostics (latched once per second) ---------------------------
    window_start: Option<Instant>,
    updates_in_window: u32,
    renders_in_window: u32,
    real_physics_rate: u32,
    real_render_rate: u32,
    dropped_total: u64,
}

impl GameLoop {
    //--- Construction -----------------------------------------------------

    /// Creates a loop targeting the given step rates.
    ///
    /// # Panics
    ///
    /// Panics if either rate is not positive.
    pub fn new(physics_hz: f64, render_hz: f64) -> Self {
        let mut game_loop = Self {
            physics_ns: 0.0,
            render_ns: 0.0,
            physics_debt: 0.0,
            render_debt: 0.0,
            last_tick: None,
            max_catchup: DEFAULT_MAX_CATCHUP,
            window_start: None,
            updates_in_window: 0,
            renders_in_window: 0,
            real_physics_rate: 0,
            real_render_rate: 0,
            dropped_total: 0,
        };
        game_loop.set_physics_hz(physics_hz);
        game_loop.set_render_hz(render_hz);
        game_loop
    }

    //--- Configuration ----------------------------------------------------

    /// Sets the simulation step rate.
    ///
    /// # Panics
    ///
    /// Panics if `hz <= 0.0`.
    pub fn set_physics_hz(&mut self, hz: f64) {
        assert!(hz > 0.0, "Physics rate must be positive, got {}", hz);
        self.physics_ns = 1e9 / hz;
    }

    /// Sets the render pass rate.
    ///
    /// # Panics
    ///
    /// Panics if `hz <= 0.0`.
    pub fn set_render_hz(&mut self, hz: f64) {
        assert!(hz > 0.0, "Render rate must be positive, got {}", hz);
        self.render_ns = 1e9 / hz;
    }

    /// Bounds simulation catch-up per tick.
    ///
    /// # Panics
    ///
    /// Panics if `cap == 0`.
    pub fn set_max_catchup(&mut self, cap: u32) {
        assert!(cap > 0, "Catch-up cap must be at least 1");
        self.max_catchup = cap;
    }

    //--- Pacing -----------------------------------------------------------

    /// Advances the accumulators to `now` and returns the owed work.
    ///
    /// The first call only anchors the clock and owes nothing.
    pub fn tick(&mut self, now: Instant) -> Tick {
        let Some(last) = self.last_tick.replace(now) else {
            self.window_start = Some(now);
            return Tick::default();
        };

        let elapsed_ns = now.saturating_duration_since(last).as_nanos() as f64;
        self.physics_debt += elapsed_ns / self.physics_ns;
        self.render_debt += elapsed_ns / self.render_ns;

        //--- Simulation steps, capped catch-up ---------------------------
        let mut updates = 0u32;
        while self.physics_debt >= 1.0 && updates < self.max_catchup {
            self.physics_debt -= 1.0;
            updates += 1;
        }

        let mut dropped = 0u32;
        if self.physics_debt >= 1.0 {
            dropped = self.physics_debt as u32;
            self.physics_debt -= dropped as f64;
            self.dropped_total += dropped as u64;
            warn!(
                target: "timing",
                "Simulation stalled: dropped {} step(s) past the {}-step catch-up cap",
                dropped,
                self.max_catchup
            );
        }

        //--- Render pass, at most one per tick ---------------------------
        let render = self.render_debt >= 1.0;
        if render {
            self.render_debt -= 1.0;
            if self.render_debt > 1.0 {
                self.render_debt = 1.0;
            }
        }

        //--- Diagnostics latch -------------------------------------------
        self.updates_in_window += updates;
        self.renders_in_window += render as u32;
        if let Some(window_start) = self.window_start {
            if now.saturating_duration_since(window_start) >= RATE_WINDOW {
                self.real_physics_rate = self.updates_in_window;
                self.real_render_rate = self.renders_in_window;
                self.updates_in_window = 0;
                self.renders_in_window = 0;
                self.window_start = Some(now);
                debug!(
                    target: "timing",
                    "Achieved rates: {} updates/s, {} renders/s",
                    self.real_physics_rate,
                    self.real_render_rate
                );
            }
        }

        Tick { updates, render, dropped_updates: dropped }
    }

    /// Time until the next simulation or render step falls due, for
    /// sizing the driver's wait. Zero if work is already owed.
    pub fn time_until_next_step(&self) -> Duration {
        if self.last_tick.is_none() || self.physics_debt >= 1.0 || self.render_debt >= 1.0 {
            return Duration::ZERO;
        }
        let physics_wait = (1.0 - self.physics_debt) * self.physics_ns;
        let render_wait = (1.0 - self.render_debt) * self.render_ns;
        Duration::from_nanos(physics_wait.min(render_wait) as u64)
    }

    //--- Diagnostics ------------------------------------------------------

    /// Updates performed in the last completed one-second window.
    pub fn real_physics_rate(&self) -> u32 {
        self.real_physics_rate
    }

    /// Render passes performed in the last completed one-second window.
    pub fn real_render_rate(&self) -> u32 {
        self.real_render_rate
    }

    /// Total simulation steps dropped to the catch-up cap since creation.
    pub fn dropped_updates_total(&self) -> u64 {
        self.dropped_total
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
