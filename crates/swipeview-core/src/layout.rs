/// Last width reported by the layout system.
///
/// Starts `Unknown`. Any distance comparison against an unknown width is
/// false, so before the first layout report only velocity can commit a swipe.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum SurfaceWidth {
    #[default]
    Unknown,
    Measured(f32),
}

impl SurfaceWidth {
    /// Accepts only finite, positive widths.
    pub fn measured(width: f32) -> Option<Self> {
        (width.is_finite() && width > 0.0).then_some(SurfaceWidth::Measured(width))
    }

    pub fn get(self) -> Option<f32> {
        match self {
            SurfaceWidth::Unknown => None,
            SurfaceWidth::Measured(width) => Some(width),
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, SurfaceWidth::Measured(_))
    }

    /// `true` when `distance` is strictly beyond `fraction` of the width.
    pub fn exceeded_by(self, distance: f32, fraction: f32) -> bool {
        match self {
            SurfaceWidth::Unknown => false,
            SurfaceWidth::Measured(width) => distance > fraction * width,
        }
    }

    /// `offset / width`, or 0 while the width is unknown.
    pub fn normalize(self, offset: f32) -> f32 {
        match self {
            SurfaceWidth::Unknown => 0.0,
            SurfaceWidth::Measured(width) => offset / width,
        }
    }
}
