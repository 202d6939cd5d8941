/// The audio collaborator. Signal routing is its business; the core only
/// starts and stops the drone and retunes it while a drag is active.
pub trait AudioSink {
    fn play(&mut self);

    fn stop(&mut self);

    /// Retune the effect oscillator. Called once per stepped frame while a
    /// drag is active.
    fn set_effect(&mut self, frequency_hz: f32);
}
