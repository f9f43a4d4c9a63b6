use super::scene_sink::SceneSink;

/// Lifecycle hooks driven by the host engine.
pub trait Behavior {
    /// Called once before the first frame
    fn start(&mut self, sink: &mut dyn SceneSink);

    /// Called every frame
    fn update(&mut self, sink: &mut dyn SceneSink);
}
