use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::time::Instant;

use crate::models::error::RecorderError;
use crate::models::state::{SeekDirection, TransportSnapshot, TransportState};
use crate::traits::playback_engine::PlaybackEngine;

/// Fixed step for the skip-forward/skip-back buttons.
pub const SKIP_STEP_MS: u64 = 5000;

/// Internal mutable transport state, protected by `parking_lot::Mutex`.
///
/// The lock is never held across an await; engine calls happen between
/// lock scopes and their completions are re-validated against
/// `generation` before being applied.
struct TransportShared {
    state: TransportState,
    location: Option<String>,
    duration_ms: u64,
    /// Position at the last pause/seek boundary.
    elapsed_ms: u64,
    /// Set while playing; live position is `elapsed_ms` plus this.
    playing_since: Option<Instant>,
    has_started: bool,
    /// Bumped by every load and by release. A completion carrying a
    /// stale generation is discarded (last-writer-wins).
    generation: u64,
}

impl TransportShared {
    fn new() -> Self {
        Self {
            state: TransportState::Empty,
            location: None,
            duration_ms: 0,
            elapsed_ms: 0,
            playing_since: None,
            has_started: false,
            generation: 0,
        }
    }

    fn reset_to_empty(&mut self) {
        self.state = TransportState::Empty;
        self.location = None;
        self.duration_ms = 0;
        self.elapsed_ms = 0;
        self.playing_since = None;
        self.has_started = false;
    }

    /// Live elapsed position, clamped to the resource duration.
    fn live_elapsed_ms(&self) -> u64 {
        let mut elapsed = self.elapsed_ms;
        if let Some(since) = self.playing_since {
            elapsed += since.elapsed().as_millis() as u64;
        }
        elapsed.min(self.duration_ms)
    }
}

/// Owns playback of a single audio resource.
///
/// One controller instance is scoped to the view that renders the
/// player; `release` must be called when that view becomes invisible so
/// audio never continues off-screen. Operations are serialized by the
/// caller's event loop; a new `load` supersedes any in-flight one.
pub struct TransportController<E: PlaybackEngine + 'static> {
    engine: Arc<E>,
    shared: Arc<Mutex<TransportShared>>,
}

impl<E: PlaybackEngine + 'static> TransportController<E> {
    pub fn new(engine: Arc<E>) -> Self {
        Self {
            engine,
            shared: Arc::new(Mutex::new(TransportShared::new())),
        }
    }

    /// Read-only snapshot for the presentation layer.
    pub fn snapshot(&self) -> TransportSnapshot {
        let s = self.shared.lock();
        TransportSnapshot {
            state: s.state,
            location: s.location.clone(),
            elapsed_ms: s.live_elapsed_ms(),
            duration_ms: s.duration_ms,
            has_started: s.has_started,
        }
    }

    /// Load `location` (releasing any different prior resource) and
    /// begin playback from `start_ms`.
    ///
    /// `start_ms` defaults to the last known position when re-loading
    /// the same resource, 0 otherwise. Both the manual slider and the
    /// skip buttons funnel through this same path.
    pub async fn load(&self, location: &str, start_ms: Option<u64>) -> Result<(), RecorderError> {
        let (generation, resume_from, same_resource) = {
            let mut s = self.shared.lock();
            s.generation += 1;
            let same = s.location.as_deref() == Some(location);
            let resume = start_ms.unwrap_or(if same { s.live_elapsed_ms() } else { 0 });
            s.state = TransportState::Loading;
            s.playing_since = None;
            (s.generation, resume, same)
        };

        if !same_resource {
            self.engine.unload().await;
        }

        let duration_ms = match self.engine.load(location).await {
            Ok(d) => d,
            Err(e) => {
                log::warn!("failed to load audio resource {location}: {e}");
                self.fail_if_current(generation);
                return Err(e);
            }
        };
        if self.superseded(generation) {
            return Ok(());
        }

        let start = resume_from.min(duration_ms);
        if let Err(e) = self.engine.play(start).await {
            log::warn!("playback engine refused to start {location}: {e}");
            self.fail_if_current(generation);
            return Err(e);
        }

        let remaining_ms = {
            let mut s = self.shared.lock();
            if s.generation != generation {
                return Ok(());
            }
            s.state = TransportState::Playing;
            s.location = Some(location.to_string());
            s.duration_ms = duration_ms;
            s.elapsed_ms = start;
            s.playing_since = Some(Instant::now());
            s.has_started = true;
            duration_ms - start
        };
        self.spawn_completion_watch(generation, remaining_ms);
        Ok(())
    }

    /// Pause if playing, resume if paused, restart if completed.
    ///
    /// Fails with `NoActiveResource` when nothing is loaded.
    pub async fn toggle_play_pause(&self) -> Result<(), RecorderError> {
        let (generation, state) = {
            let s = self.shared.lock();
            (s.generation, s.state)
        };

        match state {
            TransportState::Playing => {
                self.engine.pause().await?;
                let mut s = self.shared.lock();
                if s.generation == generation && s.state == TransportState::Playing {
                    s.elapsed_ms = s.live_elapsed_ms();
                    s.playing_since = None;
                    s.state = TransportState::Paused;
                }
                Ok(())
            }
            TransportState::Paused => {
                self.engine.resume().await?;
                let remaining_ms = {
                    let mut s = self.shared.lock();
                    if s.generation != generation || s.state != TransportState::Paused {
                        return Ok(());
                    }
                    s.playing_since = Some(Instant::now());
                    s.state = TransportState::Playing;
                    s.duration_ms - s.elapsed_ms
                };
                self.spawn_completion_watch(generation, remaining_ms);
                Ok(())
            }
            TransportState::Completed => {
                // Replay the retained resource from the top.
                self.engine.play(0).await?;
                let remaining_ms = {
                    let mut s = self.shared.lock();
                    if s.generation != generation || s.state != TransportState::Completed {
                        return Ok(());
                    }
                    s.elapsed_ms = 0;
                    s.playing_since = Some(Instant::now());
                    s.state = TransportState::Playing;
                    s.duration_ms
                };
                self.spawn_completion_watch(generation, remaining_ms);
                Ok(())
            }
            TransportState::Empty | TransportState::Loading => {
                Err(RecorderError::NoActiveResource)
            }
        }
    }

    /// Skip forward/back by [`SKIP_STEP_MS`], clamped to `[0, duration]`,
    /// and continue playing from there.
    pub async fn seek_relative(&self, direction: SeekDirection) -> Result<(), RecorderError> {
        let (location, target_ms) = {
            let s = self.shared.lock();
            let location = s
                .location
                .clone()
                .ok_or(RecorderError::NoActiveResource)?;
            let position = s.live_elapsed_ms();
            let target = match direction {
                SeekDirection::Forward => (position + SKIP_STEP_MS).min(s.duration_ms),
                SeekDirection::Backward => position.saturating_sub(SKIP_STEP_MS),
            };
            (location, target)
        };
        self.load(&location, Some(target_ms)).await
    }

    /// Seek to an absolute position (slider drag), clamped to duration.
    pub async fn seek_to(&self, position_ms: u64) -> Result<(), RecorderError> {
        let (location, target_ms) = {
            let s = self.shared.lock();
            let location = s
                .location
                .clone()
                .ok_or(RecorderError::NoActiveResource)?;
            (location, position_ms.min(s.duration_ms))
        };
        self.load(&location, Some(target_ms)).await
    }

    /// Stop and discard the current resource. Idempotent.
    ///
    /// Any in-flight load or pending completion carries a now-stale
    /// generation and will be ignored when it lands.
    pub async fn release(&self) {
        {
            let mut s = self.shared.lock();
            s.generation += 1;
            s.reset_to_empty();
        }
        self.engine.unload().await;
    }

    fn superseded(&self, generation: u64) -> bool {
        self.shared.lock().generation != generation
    }

    /// Drop back to empty after an engine fault, unless a newer load
    /// already took over.
    fn fail_if_current(&self, generation: u64) {
        let mut s = self.shared.lock();
        if s.generation == generation {
            s.reset_to_empty();
        }
    }

    /// Watch for playback reaching the end of the resource.
    ///
    /// When it does, the transport drops to `Completed` and position
    /// tracking resets, but the resource stays loaded: replay takes a
    /// fresh toggle, there is no automatic loop.
    fn spawn_completion_watch(&self, generation: u64, remaining_ms: u64) {
        let shared = Arc::clone(&self.shared);
        let engine = Arc::clone(&self.engine);
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(remaining_ms)).await;
            let finished = {
                let mut s = shared.lock();
                if s.generation == generation
                    && s.state == TransportState::Playing
                    && s.live_elapsed_ms() >= s.duration_ms
                {
                    s.state = TransportState::Completed;
                    s.elapsed_ms = 0;
                    s.playing_since = None;
                    true
                } else {
                    false
                }
            };
            if finished {
                let _ = engine.pause().await;
            }
        });
    }
}
