use crate::style::ResizeMode;
use crate::surface::{SurfaceHeight, TextSurface};

/// Keeps the surface's explicit height consistent with the resize mode.
#[derive(Debug)]
pub struct SizingController<S> {
    surface: S,
    mode: ResizeMode,
}

impl<S: TextSurface> SizingController<S> {
    pub fn new(surface: S, mode: ResizeMode) -> Self {
        Self { surface, mode }
    }

    pub fn mode(&self) -> ResizeMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ResizeMode) {
        self.mode = mode;
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn recompute_height(&mut self) {
        match self.mode {
            ResizeMode::Auto => {
                self.surface.set_height(SurfaceHeight::Unconstrained);
                let measured = self.surface.scroll_height();
                self.surface.set_height(SurfaceHeight::Px(measured));
                log::trace!("auto-sized textarea to {measured}px");
            }
            ResizeMode::Vertical | ResizeMode::None => {
                if self.surface.height() != SurfaceHeight::Unset {
                    self.surface.set_height(SurfaceHeight::Unset);
                    log::trace!("cleared explicit textarea height");
                }
            }
        }
    }
}
