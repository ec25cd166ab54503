// SPDX-License-Identifier: MPL-2.0
//! Adapter around the externally rendered preview content.
//!
//! The panel never inspects pixels: it only sizes and positions the frame
//! the embedder renders the preview camera into.

use iced::widget::image;

/// Which kind of camera feeds the preview.
///
/// Reserved: stored and reported in `Debug` output, never branched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraKind {
    TwoD,
    ThreeD,
}

/// Opaque handle to the editor camera rendered into the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CameraRef {
    id: u64,
    kind: CameraKind,
}

impl CameraRef {
    #[must_use]
    pub fn new(id: u64, kind: CameraKind) -> Self {
        Self { id, kind }
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn kind(self) -> CameraKind {
        self.kind
    }
}

/// Rectangular region displaying externally-rendered camera content.
#[derive(Debug, Clone, Default)]
pub struct PreviewSurface {
    frame: Option<image::Handle>,
    camera: Option<CameraRef>,
}

impl PreviewSurface {
    /// Swaps the displayed frame.
    pub fn set_frame(&mut self, handle: image::Handle) {
        self.frame = Some(handle);
    }

    /// Drops the current frame and releases its memory.
    pub fn clear(&mut self) {
        self.frame = None;
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn frame(&self) -> Option<&image::Handle> {
        self.frame.as_ref()
    }

    pub fn set_camera(&mut self, camera: CameraRef) {
        self.camera = Some(camera);
    }

    #[must_use]
    pub fn camera(&self) -> Option<CameraRef> {
        self.camera
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_has_no_frame() {
        let surface = PreviewSurface::default();
        assert!(!surface.has_frame());
        assert!(surface.camera().is_none());
    }

    #[test]
    fn set_and_clear_frame() {
        let mut surface = PreviewSurface::default();
        surface.set_frame(image::Handle::from_rgba(2, 2, vec![0u8; 16]));
        assert!(surface.has_frame());

        surface.clear();
        assert!(!surface.has_frame());
    }

    #[test]
    fn camera_ref_is_an_opaque_passthrough() {
        let mut surface = PreviewSurface::default();
        let camera = CameraRef::new(7, CameraKind::ThreeD);
        surface.set_camera(camera);

        assert_eq!(surface.camera(), Some(camera));
        assert_eq!(camera.id(), 7);
        assert_eq!(camera.kind(), CameraKind::ThreeD);
    }
}
