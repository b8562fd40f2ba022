use super::helpers::{self, MeshBuffers};
use crate::constants::FALLBACK_PANORAMA_RGBA;
use crate::error::AssetError;
use crate::geometry;
use web_sys as web;

pub static PANORAMA_WGSL: &str = include_str!("../../shaders/panorama.wgsl");

const PANORAMA_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// The textured inside of the panorama sphere.
pub(crate) struct PanoramaPass {
    pipeline: wgpu::RenderPipeline,
    mesh: MeshBuffers,
    texture_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl PanoramaPass {
    pub(crate) fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        camera_layout: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("panorama_shader"),
            source: wgpu::ShaderSource::Wgsl(PANORAMA_WGSL.into()),
        });
        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("panorama_texture_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("panorama_pl"),
            bind_group_layouts: &[camera_layout, &texture_layout],
            push_constant_ranges: &[],
        });
        // The camera always sits inside the sphere, so only the inner faces
        // are ever on screen; no culling needed.
        let pipeline = helpers::make_mesh_pipeline(
            device,
            "panorama_pipeline",
            &layout,
            &shader,
            &[helpers::mesh_vertex_layout()],
            color_format,
            Some(wgpu::BlendState::REPLACE),
            None,
        );
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("panorama_sampler"),
            // wrap horizontally across the 0/360° seam
            address_mode_u: wgpu::AddressMode::Repeat,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });
        let mesh = helpers::upload_mesh(device, "panorama", &geometry::panorama_sphere());
        let (texture, bind_group) =
            Self::fallback_texture(device, queue, &texture_layout, &sampler);
        Self {
            pipeline,
            mesh,
            texture_layout,
            sampler,
            texture,
            bind_group,
        }
    }

    fn bind(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        view: &wgpu::TextureView,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("panorama_bg"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    /// One neutral texel, shown while loading and when the image is broken.
    fn fallback_texture(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
    ) -> (wgpu::Texture, wgpu::BindGroup) {
        let (texture, view) = helpers::create_color_texture(
            device,
            "panorama_fallback",
            1,
            1,
            PANORAMA_FORMAT,
            wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        );
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &FALLBACK_PANORAMA_RGBA,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width: 1,
                height: 1,
                depth_or_array_layers: 1,
            },
        );
        let bind_group = Self::bind(device, layout, sampler, &view);
        (texture, bind_group)
    }

    /// Copy a decoded image into the panorama texture, growing a new one when
    /// the size changes.
    pub(crate) fn upload_image(
        &mut self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        image: &web::HtmlImageElement,
    ) -> Result<(u32, u32), AssetError> {
        let width = image.natural_width();
        let height = image.natural_height();
        let limit = device.limits().max_texture_dimension_2d;
        if width == 0 || height == 0 {
            return Err(AssetError::Decode {
                url: image.src(),
                reason: "image has no pixels".into(),
            });
        }
        if width > limit || height > limit {
            return Err(AssetError::TooLarge {
                width,
                height,
                limit,
            });
        }
        // same-sized reloads write into the current image texture
        let reuse = self.texture.width() == width
            && self.texture.height() == height
            && self
                .texture
                .usage()
                .contains(wgpu::TextureUsages::RENDER_ATTACHMENT);
        if reuse {
            Self::copy_image(queue, image, &self.texture, width, height);
            return Ok((width, height));
        }
        let (texture, view) = helpers::create_color_texture(
            device,
            "panorama_image",
            width,
            height,
            PANORAMA_FORMAT,
            wgpu::TextureUsages::TEXTURE_BINDING
                | wgpu::TextureUsages::COPY_DST
                | wgpu::TextureUsages::RENDER_ATTACHMENT,
        );
        Self::copy_image(queue, image, &texture, width, height);
        let bind_group = Self::bind(device, &self.texture_layout, &self.sampler, &view);
        self.texture = texture;
        self.bind_group = bind_group;
        Ok((width, height))
    }

    fn copy_image(
        queue: &wgpu::Queue,
        image: &web::HtmlImageElement,
        texture: &wgpu::Texture,
        width: u32,
        height: u32,
    ) {
        queue.copy_external_image_to_texture(
            &wgpu::CopyExternalImageSourceInfo {
                source: wgpu::ExternalImageSource::HTMLImageElement(image.clone()),
                origin: wgpu::Origin2d::ZERO,
                flip_y: false,
            },
            wgpu::CopyExternalImageDestInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
                color_space: wgpu::PredefinedColorSpace::Srgb,
                premultiplied_alpha: false,
            },
            wgpu::Extent3d {
                width,
                height,
                depth_or_array_layers: 1,
            },
        );
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, camera: &wgpu::BindGroup) {
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, camera, &[]);
        rpass.set_bind_group(1, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.mesh.vertices.slice(..));
        rpass.set_index_buffer(self.mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.mesh.index_count, 0, 0..1);
    }
}
