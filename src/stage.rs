use instant::{Duration, Instant};
use log::{info, warn};

use crate::audio::AudioSink;
use crate::cast;
use crate::error::RigError;
use crate::figure::Figure;
use crate::pointer::Pointer;
use crate::renderer::Renderer;
use crate::Viewport;

/// Logical tick: sixty steps per second.
pub const TICK: Duration = Duration::from_micros(16_667);

/// Distance between the reference nodes maps to hertz through this factor.
const EFFECT_DISTANCE_FACTOR: f32 = 0.5;
/// Base frequency offset by which figure is being dragged.
const EFFECT_BASE_HZ: [f32; 2] = [500.0, 100.0];
/// Both reference nodes are the figures' necks.
const EFFECT_REFERENCE_NODE: usize = 0;

/// Fixed-step gate. A step runs only once a full tick has elapsed; an early
/// invocation is skipped, never accumulated, and the remainder carries as
/// phase so the long-term rate stays locked to the tick.
pub struct Ticker {
    interval: Duration,
    then: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            then: None,
        }
    }

    pub fn due(&mut self, now: Instant) -> bool {
        let Some(then) = self.then else {
            self.then = Some(now);
            return false;
        };
        let elapsed = now.duration_since(then);
        if elapsed < self.interval {
            return false;
        }
        let phase =
            Duration::from_nanos((elapsed.as_nanos() % self.interval.as_nanos()) as u64);
        self.then = Some(now - phase);
        true
    }
}

/// Readiness gate in front of the first step. The external frame driver
/// polls by calling `tick`; once every image is ready, or the deadline has
/// passed and placeholders are substituted, the curtain goes up for good.
enum Curtain {
    Loading { deadline: Instant },
    Up,
}

/// The simulation loop: owns both figures and the viewport, advances them at
/// a fixed logical tick, relays pointer state, and feeds the audio
/// collaborator while a drag is active.
pub struct Stage {
    figures: Vec<Figure>,
    viewport: Viewport,
    ticker: Ticker,
    curtain: Curtain,
    was_pressed: bool,
}

impl Stage {
    /// Build the two-robot cast and start loading its textures. The stage
    /// will not step until the curtain is up.
    pub fn new(
        viewport: Viewport,
        asset_timeout: Duration,
        now: Instant,
        renderer: &mut dyn Renderer,
    ) -> Result<Self, RigError> {
        let mut figures = Vec::new();
        for (index, (fraction, skeleton)) in cast::lineup().into_iter().enumerate() {
            figures.push(Figure::new(index, fraction, &skeleton, viewport, renderer)?);
        }
        Ok(Self {
            figures,
            viewport,
            ticker: Ticker::new(TICK),
            curtain: Curtain::Loading {
                deadline: now + asset_timeout,
            },
            was_pressed: false,
        })
    }

    /// Called by the external frame driver once per display refresh.
    /// Returns true when a simulation step actually ran.
    pub fn tick(
        &mut self,
        now: Instant,
        pointer: &mut Pointer,
        renderer: &mut dyn Renderer,
        audio: &mut dyn AudioSink,
    ) -> bool {
        if let Curtain::Loading { deadline } = self.curtain {
            let ready = self
                .figures
                .iter()
                .all(|figure| figure.images_ready(renderer));
            if ready {
                self.raise_curtain(renderer);
            } else if now >= deadline {
                warn!("texture preparation timed out, substituting placeholders");
                for figure in &self.figures {
                    figure.substitute_pending(renderer);
                }
                self.raise_curtain(renderer);
            } else {
                return false;
            }
        }

        // Press/release edges must not be lost to skipped frames.
        if pointer.pressed != self.was_pressed {
            self.was_pressed = pointer.pressed;
            if pointer.pressed {
                audio.play();
            } else {
                audio.stop();
            }
            for figure in &mut self.figures {
                figure.set_engaged(pointer.pressed);
            }
        }

        if !self.ticker.due(now) {
            return false;
        }

        renderer.clear_frame();
        for figure in &mut self.figures {
            figure.step(self.viewport, pointer, renderer);
        }
        if let Some(drag) = pointer.drag {
            audio.set_effect(self.effect_frequency(drag.figure));
        }
        true
    }

    fn raise_curtain(&mut self, renderer: &mut dyn Renderer) {
        info!("all figures ready, curtain up");
        let viewport = self.viewport;
        for figure in &mut self.figures {
            figure.resize(viewport, renderer);
        }
        self.curtain = Curtain::Up;
    }

    /// Distance between the two reference necks mapped to a frequency,
    /// offset according to which figure is being dragged.
    fn effect_frequency(&self, dragged: usize) -> f32 {
        let alpha = self.figures[0].nodes[EFFECT_REFERENCE_NODE].position;
        let omega = self.figures[1].nodes[EFFECT_REFERENCE_NODE].position;
        let base = EFFECT_BASE_HZ[dragged.min(EFFECT_BASE_HZ.len() - 1)];
        (alpha.distance(omega) * EFFECT_DISTANCE_FACTOR + base).round()
    }

    /// Viewport change: recompute the scale and every figure's anchor, and
    /// regenerate scale-dependent caches. Safe before the first step.
    pub fn resize(&mut self, width: f32, height: f32, renderer: &mut dyn Renderer) {
        self.viewport = Viewport::new(width, height);
        for figure in &mut self.figures {
            figure.resize(self.viewport, renderer);
        }
    }

    pub fn is_running(&self) -> bool {
        matches!(self.curtain, Curtain::Up)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn figures(&self) -> &[Figure] {
        &self.figures
    }
}
