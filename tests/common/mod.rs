#![allow(dead_code)]

use ragdoll_lab::audio::AudioSink;
use ragdoll_lab::renderer::{ImageHandle, Renderer, Segment};

/// Renderer double that records every call. Readiness is a switch so tests
/// can exercise the startup gate.
pub struct RecordingRenderer {
    pub ready: bool,
    pub prepared: Vec<String>,
    pub placeholders: Vec<ImageHandle>,
    pub cache_scales: Vec<(ImageHandle, f32)>,
    pub segments: Vec<Segment>,
    pub clears: usize,
}

impl RecordingRenderer {
    pub fn new(ready: bool) -> Self {
        Self {
            ready,
            prepared: Vec::new(),
            placeholders: Vec::new(),
            cache_scales: Vec::new(),
            segments: Vec::new(),
            clears: 0,
        }
    }
}

impl Renderer for RecordingRenderer {
    fn prepare_image(&mut self, source: &str) -> ImageHandle {
        self.prepared.push(source.to_string());
        ImageHandle(self.prepared.len() - 1)
    }

    fn is_ready(&self, image: ImageHandle) -> bool {
        self.ready || self.placeholders.contains(&image)
    }

    fn use_placeholder(&mut self, image: ImageHandle) {
        self.placeholders.push(image);
    }

    fn regenerate_cache(&mut self, image: ImageHandle, scale: f32) {
        self.cache_scales.push((image, scale));
    }

    fn clear_frame(&mut self) {
        self.clears += 1;
    }

    fn draw_segment(&mut self, segment: &Segment) {
        self.segments.push(*segment);
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub plays: usize,
    pub stops: usize,
    pub effects: Vec<f32>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self) {
        self.plays += 1;
    }

    fn stop(&mut self) {
        self.stops += 1;
    }

    fn set_effect(&mut self, frequency_hz: f32) {
        self.effects.push(frequency_hz);
    }
}
