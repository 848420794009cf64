/// Initialization parameters for the GPU layer.
#[derive(Debug, Clone)]
pub struct GpuInit {
    /// Prefer an sRGB surface format when available; `false` prefers a non-sRGB one.
    pub prefer_srgb: bool,

    /// Present mode (swap behavior).
    ///
    /// Defaults to `AutoNoVsync` so the frame-time readout reflects actual
    /// render cost; see [`GpuInit::with_vsync`].
    pub present_mode: wgpu::PresentMode,

    /// Optional alpha mode preference; falls back to a supported one.
    pub alpha_mode: Option<wgpu::CompositeAlphaMode>,

    pub required_features: wgpu::Features,

    pub required_limits: wgpu::Limits,

    /// Hint only; support depends on platform/backend.
    pub desired_maximum_frame_latency: u32,
}

impl GpuInit {
    /// Selects `AutoVsync` or `AutoNoVsync`.
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };
        self
    }
}

impl Default for GpuInit {
    fn default() -> Self {
        Self {
            prefer_srgb: true,
            present_mode: wgpu::PresentMode::AutoNoVsync,
            alpha_mode: None,
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::default(),
            desired_maximum_frame_latency: 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vsync_toggle_selects_present_mode() {
        assert_eq!(GpuInit::default().present_mode, wgpu::PresentMode::AutoNoVsync);
        assert_eq!(GpuInit::default().with_vsync(true).present_mode, wgpu::PresentMode::AutoVsync);
        assert_eq!(
            GpuInit::default().with_vsync(true).with_vsync(false).present_mode,
            wgpu::PresentMode::AutoNoVsync
        );
    }
}
