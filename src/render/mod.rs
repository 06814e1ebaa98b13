//! Visual presentation of the current step
//!
//! The viewer drives a [`Renderer`] and imposes nothing beyond the single
//! [`Renderer::present`] call. Concrete renderers own all visual state:
//!
//! - [`model`]: a rotating paper-sheet placeholder seen through a perspective camera
//! - [`diagram`]: a static crease diagram that grows with each step
//! - [`stub`]: a no-op renderer and a call-recording renderer for tests
//!
//! [`SceneRenderer`] bundles the visual renderers behind one type so the
//! binary can pick one from configuration.

pub mod diagram;
pub mod model;
pub mod stub;

pub use diagram::{Crease, DiagramRenderer, FoldKind};
pub use model::{ModelRenderer, Segment};
pub use stub::{NullRenderer, RecordingRenderer};

/// Sink that reflects the viewer's current step.
///
/// Presentation problems stay inside the renderer; nothing is reported back.
pub trait Renderer {
    fn present(&mut self, pattern_id: &str, step: usize);
}

impl<R: Renderer + ?Sized> Renderer for &mut R {
    fn present(&mut self, pattern_id: &str, step: usize) {
        (**self).present(pattern_id, step);
    }
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn present(&mut self, pattern_id: &str, step: usize) {
        (**self).present(pattern_id, step);
    }
}

/// Which renderer the preview pane uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum RendererKind {
    /// Rotating 3D sheet
    #[default]
    Model,
    /// Static crease diagram
    Diagram,
    /// No preview
    None,
}

impl RendererKind {
    /// Next kind in preview toggle order
    pub fn cycle(self) -> Self {
        match self {
            RendererKind::Model => RendererKind::Diagram,
            RendererKind::Diagram => RendererKind::None,
            RendererKind::None => RendererKind::Model,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RendererKind::Model => "3D model",
            RendererKind::Diagram => "crease diagram",
            RendererKind::None => "no preview",
        }
    }
}

/// One of the visual renderers, chosen at startup or toggled from the UI
#[derive(Debug, Clone)]
pub enum SceneRenderer {
    Model(ModelRenderer),
    Diagram(DiagramRenderer),
    Blank(NullRenderer),
}

impl SceneRenderer {
    pub fn from_kind(kind: RendererKind) -> Self {
        match kind {
            RendererKind::Model => SceneRenderer::Model(ModelRenderer::new()),
            RendererKind::Diagram => SceneRenderer::Diagram(DiagramRenderer::new()),
            RendererKind::None => SceneRenderer::Blank(NullRenderer),
        }
    }

    pub fn kind(&self) -> RendererKind {
        match self {
            SceneRenderer::Model(_) => RendererKind::Model,
            SceneRenderer::Diagram(_) => RendererKind::Diagram,
            SceneRenderer::Blank(_) => RendererKind::None,
        }
    }

    /// Advance any running animation by `dt` seconds
    pub fn tick(&mut self, dt: f64) {
        if let SceneRenderer::Model(model) = self {
            model.tick(dt);
        }
    }
}

impl Renderer for SceneRenderer {
    fn present(&mut self, pattern_id: &str, step: usize) {
        match self {
            SceneRenderer::Model(model) => model.present(pattern_id, step),
            SceneRenderer::Diagram(diagram) => diagram.present(pattern_id, step),
            SceneRenderer::Blank(blank) => blank.present(pattern_id, step),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_round_trips() {
        for kind in [RendererKind::Model, RendererKind::Diagram, RendererKind::None] {
            assert_eq!(SceneRenderer::from_kind(kind).kind(), kind);
        }
    }

    #[test]
    fn test_cycle_visits_every_kind() {
        let mut kind = RendererKind::Model;
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.push(kind);
            kind = kind.cycle();
        }
        assert_eq!(kind, RendererKind::Model);
        assert_eq!(
            seen,
            vec![RendererKind::Model, RendererKind::Diagram, RendererKind::None]
        );
    }

    #[test]
    fn test_boxed_and_borrowed_renderers_forward() {
        let mut recorder = RecordingRenderer::new();
        {
            let mut borrowed: &mut RecordingRenderer = &mut recorder;
            Renderer::present(&mut borrowed, "a", 1);
        }
        let mut boxed = Box::new(RecordingRenderer::new());
        Renderer::present(&mut boxed, "b", 2);
        assert_eq!(recorder.calls(), &[("a".to_string(), 1)]);
        assert_eq!(boxed.last(), Some(("b", 2)));
    }

    #[test]
    fn test_scene_forwards_to_diagram() {
        let mut scene = SceneRenderer::from_kind(RendererKind::Diagram);
        scene.present("waterbomb", 2);
        match &scene {
            SceneRenderer::Diagram(diagram) => {
                assert_eq!(diagram.pattern_id(), Some("waterbomb"));
                assert_eq!(diagram.step(), 2);
            }
            other => panic!("unexpected renderer {:?}", other.kind()),
        }
    }
}
