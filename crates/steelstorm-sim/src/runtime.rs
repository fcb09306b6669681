//! Loop drivers for hosts.
//!
//! Two ways to drive the engine: `FrameGovernor` for hosts that call
//! into the sim from a display-refresh callback (tick only when enough
//! wall time has passed), and `spawn_game_loop` for native hosts that
//! want a dedicated 60 Hz thread. Commands arrive via an `mpsc`
//! channel; the latest snapshot is published through a shared slot the
//! host polls.

use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use steelstorm_core::constants::{MIN_TICK_INTERVAL_MS, TICK_RATE};
use steelstorm_core::enums::PlayerId;
use steelstorm_core::input::InputSnapshot;
use steelstorm_core::state::GameSnapshot;

use crate::engine::{GameEngine, SimConfig};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// Frame-rate governor for callback-driven hosts.
///
/// The host calls `should_tick` with its current timestamp on every
/// frame callback; a tick is processed only when at least the minimum
/// interval has elapsed since the last processed tick. This caps the
/// update rate — it is not fixed-timestep accumulation, so simulation
/// speed follows the achieved frame rate.
#[derive(Debug, Clone)]
pub struct FrameGovernor {
    min_interval_ms: f64,
    last_tick_ms: Option<f64>,
}

impl FrameGovernor {
    pub fn new() -> Self {
        Self::with_interval(MIN_TICK_INTERVAL_MS)
    }

    pub fn with_interval(min_interval_ms: f64) -> Self {
        Self {
            min_interval_ms,
            last_tick_ms: None,
        }
    }

    /// Whether a tick should be processed at `now_ms`. Advances the
    /// internal stamp when it returns true.
    pub fn should_tick(&mut self, now_ms: f64) -> bool {
        match self.last_tick_ms {
            Some(last) if now_ms - last < self.min_interval_ms => false,
            _ => {
                self.last_tick_ms = Some(now_ms);
                true
            }
        }
    }
}

impl Default for FrameGovernor {
    fn default() -> Self {
        Self::new()
    }
}

/// Commands accepted by the threaded game loop.
#[derive(Debug, Clone)]
pub enum LoopCommand {
    /// Replace one slot's input snapshot.
    Input {
        player: PlayerId,
        input: InputSnapshot,
    },
    TogglePause,
    Reset,
    Shutdown,
}

/// Spawn the game loop in a new thread.
///
/// The loop ticks at 60 Hz, stores the latest snapshot into
/// `latest_snapshot` for the host to poll, and stops on `Shutdown` or
/// when the command channel disconnects. Returns the command sender.
pub fn spawn_game_loop(
    config: SimConfig,
    latest_snapshot: Arc<Mutex<Option<GameSnapshot>>>,
) -> mpsc::Sender<LoopCommand> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<LoopCommand>();

    std::thread::Builder::new()
        .name("steelstorm-game-loop".into())
        .spawn(move || {
            run_game_loop(config, cmd_rx, &latest_snapshot);
        })
        .expect("Failed to spawn game loop thread");

    cmd_tx
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    cmd_rx: mpsc::Receiver<LoopCommand>,
    latest_snapshot: &Mutex<Option<GameSnapshot>>,
) {
    let mut engine = GameEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(LoopCommand::Input { player, input }) => engine.set_input(player, input),
                Ok(LoopCommand::TogglePause) => engine.toggle_pause(),
                Ok(LoopCommand::Reset) => engine.reset(),
                Ok(LoopCommand::Shutdown) => return,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return,
            }
        }

        // 2. Advance one tick (engine handles pause semantics internally)
        let snapshot = engine.tick();

        // 3. Store latest snapshot for the host to poll
        if let Ok(mut lock) = latest_snapshot.lock() {
            *lock = Some(snapshot);
        }

        // 4. Sleep until the next tick boundary
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Too far behind — reset to avoid catch-up spiral
            next_tick_time = now;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_channel_round_trip() {
        let (tx, rx) = mpsc::channel::<LoopCommand>();

        tx.send(LoopCommand::TogglePause).unwrap();
        tx.send(LoopCommand::Reset).unwrap();
        tx.send(LoopCommand::Shutdown).unwrap();

        let mut commands = Vec::new();
        while let Ok(cmd) = rx.try_recv() {
            commands.push(cmd);
        }

        assert_eq!(commands.len(), 3);
        assert!(matches!(commands[0], LoopCommand::TogglePause));
        assert!(matches!(commands[1], LoopCommand::Reset));
        assert!(matches!(commands[2], LoopCommand::Shutdown));
    }

    #[test]
    fn test_frame_governor_gates_fast_frames() {
        let mut governor = FrameGovernor::new();

        assert!(governor.should_tick(0.0), "First frame always ticks");
        assert!(!governor.should_tick(8.0), "8ms later: below the gate");
        assert!(!governor.should_tick(15.9));
        assert!(governor.should_tick(16.5), "Past the gate: tick");
        assert!(!governor.should_tick(30.0), "Stamp advanced on last tick");
        assert!(governor.should_tick(33.0));
    }

    #[test]
    fn test_frame_governor_slow_frames_always_tick() {
        let mut governor = FrameGovernor::new();
        let mut processed = 0;
        // 30 FPS host: every callback clears the 16ms gate.
        for frame in 0..10 {
            if governor.should_tick(frame as f64 * 33.3) {
                processed += 1;
            }
        }
        assert_eq!(processed, 10);
    }

    #[test]
    fn test_game_loop_thread_produces_snapshots() {
        let latest: Arc<Mutex<Option<GameSnapshot>>> = Arc::new(Mutex::new(None));
        let tx = spawn_game_loop(SimConfig::default(), Arc::clone(&latest));

        // Give the loop a few ticks to publish.
        std::thread::sleep(Duration::from_millis(100));

        let snapshot = latest.lock().unwrap().clone();
        let snapshot = snapshot.expect("Loop should have published a snapshot");
        assert!(snapshot.time.tick > 0, "Simulation should be advancing");
        assert_eq!(snapshot.players.len(), 1);

        tx.send(LoopCommand::Shutdown).unwrap();
    }

    #[test]
    fn test_tick_duration_constant() {
        // 60Hz = 16.667ms per tick
        let expected_nanos = 1_000_000_000u64 / 60;
        assert_eq!(TICK_DURATION.as_nanos(), expected_nanos as u128);
    }
}
