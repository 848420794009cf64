use bytemuck::{Pod, Zeroable};

use crate::paint::Color;
use crate::render::{RenderCtx, RenderTarget};

use super::shapes::common::{
    PipelineDesc, create_pipeline, grown_capacity, uniform_bind_group_layout, uniform_binding,
};

/// Draws a closed polyline given in NDC with one flat color.
///
/// wgpu has no line-loop topology, so the loop is drawn as a line strip with
/// the first vertex repeated at the end. Vertex data is only uploaded when the
/// caller's `revision` changes; an unchanged revision redraws the resident
/// buffer.
#[derive(Default)]
pub struct LineLoopRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    style_ubo: Option<wgpu::Buffer>,
    style: Option<LineStyle>,

    vbo: Option<wgpu::Buffer>,
    /// Capacity of `vbo` in vertices, including the closing one.
    capacity: usize,

    uploaded: Option<u64>,
    vertex_count: u32,
}

impl LineLoopRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws the loop through `vertices` over the target.
    ///
    /// Fewer than two vertices draw nothing.
    pub fn render(
        &mut self,
        ctx: &RenderCtx<'_>,
        target: &mut RenderTarget<'_>,
        revision: u64,
        vertices: &[[f32; 2]],
        color: Color,
    ) {
        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_style(ctx, color);

        if needs_upload(self.uploaded, revision) {
            self.upload(ctx, revision, vertices);
        }
        if self.vertex_count < 3 {
            return;
        }

        let (Some(pipeline), Some(bind_group), Some(vbo)) =
            (self.pipeline.as_ref(), self.bind_group.as_ref(), self.vbo.as_ref())
        else {
            return;
        };

        let mut rpass = target.begin_load_pass("koch line loop pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertex_count, 0..1);
    }

    fn upload(&mut self, ctx: &RenderCtx<'_>, revision: u64, vertices: &[[f32; 2]]) {
        self.uploaded = Some(revision);
        if vertices.len() < 2 {
            self.vertex_count = 0;
            return;
        }

        let closed_len = vertices.len() + 1;
        if closed_len > self.capacity || self.vbo.is_none() {
            let new_cap = grown_capacity(closed_len, 256);
            self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("koch line loop vbo"),
                size: (new_cap * VERTEX_SIZE) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = new_cap;
            log::debug!("line loop buffer grown to {new_cap} vertices");
        }
        let Some(vbo) = self.vbo.as_ref() else { return };

        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(vertices));
        ctx.queue.write_buffer(
            vbo,
            (vertices.len() * VERTEX_SIZE) as u64,
            bytemuck::cast_slice(&vertices[..1]),
        );
        self.vertex_count = closed_len as u32;
    }

    fn write_style(&mut self, ctx: &RenderCtx<'_>, color: Color) {
        let style = LineStyle { color: color.to_array() };
        if self.style == Some(style) {
            return;
        }
        let Some(ubo) = self.style_ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&style));
        self.style = Some(style);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let bind_group_layout = uniform_bind_group_layout(
            ctx.device,
            "koch line loop bgl",
            wgpu::ShaderStages::FRAGMENT,
            std::mem::size_of::<LineStyle>(),
        );

        let pipeline = create_pipeline(
            ctx.device,
            ctx.surface_format,
            PipelineDesc {
                label: "koch line loop pipeline",
                shader_src: include_str!("shaders/line_loop.wgsl"),
                bind_group_layout: &bind_group_layout,
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: VERTEX_SIZE as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::LineStrip,
            },
        );

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);

        self.bind_group = None;
        self.style_ubo = None;
        self.style = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.style_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let (ubo, bind_group) = uniform_binding(
            ctx.device,
            bgl,
            "koch line loop style ubo",
            std::mem::size_of::<LineStyle>(),
        );
        self.style_ubo = Some(ubo);
        self.bind_group = Some(bind_group);
        self.style = None;
    }
}

const VERTEX_SIZE: usize = std::mem::size_of::<[f32; 2]>();
const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

#[inline]
fn needs_upload(uploaded: Option<u64>, revision: u64) -> bool {
    uploaded != Some(revision)
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct LineStyle {
    color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uploads_only_on_new_revision() {
        assert!(needs_upload(None, 0));
        assert!(!needs_upload(Some(0), 0));
        assert!(needs_upload(Some(0), 1));
        assert!(needs_upload(Some(u64::MAX), 0));
    }

    #[test]
    fn fresh_renderer_has_nothing_resident() {
        let r = LineLoopRenderer::new();
        assert_eq!(r.uploaded, None);
        assert_eq!(r.vertex_count, 0);
    }

    #[test]
    fn line_style_matches_uniform_layout() {
        assert_eq!(std::mem::size_of::<LineStyle>(), 16);
        assert_eq!(VERTEX_SIZE, 8);
    }
}
