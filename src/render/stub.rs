use super::Renderer;

/// Renderer that ignores every call
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn present(&mut self, _pattern_id: &str, _step: usize) {}
}

/// Renderer that records each `present` call in order
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    calls: Vec<(String, usize)>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[(String, usize)] {
        &self.calls
    }

    pub fn last(&self) -> Option<(&str, usize)> {
        self.calls.last().map(|(id, step)| (id.as_str(), *step))
    }
}

impl Renderer for RecordingRenderer {
    fn present(&mut self, pattern_id: &str, step: usize) {
        self.calls.push((pattern_id.to_string(), step));
    }
}
