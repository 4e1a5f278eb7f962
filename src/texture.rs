use glam::*;

use crate::ScalarField;

/// A rendering backend mirroring a [`ScalarField`].
///
/// The mirror is read-only for the backend and is not authoritative, [`FieldSync::sync`]
/// overwrites it with the current samples.
pub trait FieldSync {
    /// Upload the samples of the field.
    fn sync(&mut self, field: &ScalarField);
}

impl<F: FieldSync + ?Sized> FieldSync for Box<F> {
    fn sync(&mut self, field: &ScalarField) {
        (**self).sync(field)
    }
}

/// A texture, including its view.
pub trait Texture {
    /// The texture.
    fn texture(&self) -> &wgpu::Texture;

    /// The view of the texture.
    fn view(&self) -> &wgpu::TextureView;
}

/// A single channel texture mirroring a [`ScalarField`].
#[derive(Debug, Clone)]
pub struct FieldTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
    queue: wgpu::Queue,
}

impl FieldTexture {
    /// The texture format.
    pub const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::R8Unorm;

    /// The default usages.
    pub const DEFAULT_USAGES: wgpu::TextureUsages =
        wgpu::TextureUsages::TEXTURE_BINDING.union(wgpu::TextureUsages::COPY_DST);

    /// Create a new field texture and upload the field.
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue, field: &ScalarField) -> Self {
        Self::new_with(device, queue, Self::DEFAULT_USAGES, field)
    }

    /// Create a new field texture with all options.
    pub fn new_with(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        usage: wgpu::TextureUsages,
        field: &ScalarField,
    ) -> Self {
        log::debug!("Creating field texture of size {}", field.size());
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Field Texture"),
            size: Self::extent(field.size()),
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            view_formats: &[],
            format: Self::FORMAT,
            usage: usage | wgpu::TextureUsages::COPY_DST,
        });

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut this = Self {
            texture,
            view,
            queue: queue.clone(),
        };

        this.upload(field);

        log::info!("Field texture created");

        this
    }

    /// Get the size of the texture.
    pub fn size(&self) -> UVec2 {
        uvec2(self.texture.width(), self.texture.height())
    }

    /// Write all samples of the field to the texture.
    fn upload(&mut self, field: &ScalarField) {
        if field.size() != self.size() {
            log::error!(
                "Field size mismatch, texture has {}, but {} was provided",
                self.size(),
                field.size()
            );
            return;
        }

        self.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &self.texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            field.samples(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(field.width()),
                rows_per_image: Some(field.height()),
            },
            Self::extent(field.size()),
        );
    }

    fn extent(size: UVec2) -> wgpu::Extent3d {
        wgpu::Extent3d {
            width: size.x,
            height: size.y,
            depth_or_array_layers: 1,
        }
    }
}

impl FieldSync for FieldTexture {
    fn sync(&mut self, field: &ScalarField) {
        self.upload(field);
    }
}

impl Texture for FieldTexture {
    fn texture(&self) -> &wgpu::Texture {
        &self.texture
    }

    fn view(&self) -> &wgpu::TextureView {
        &self.view
    }
}
