use clap::Parser;
use glam::*;

use wgpu_data_canvas::{self as dc, FieldSync, Texture};

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "\
    Mirrors a data field and a mask field into GPU textures.\n\
    \n\
    A circular stroke is painted into the mask, and the mask texture is only re-uploaded when \
    the field has changed since the last sync.\n\
    "
)]
struct Args {
    /// The width of the data field.
    #[arg(long, default_value_t = 320)]
    width: u32,

    /// The height of the data field.
    #[arg(long, default_value_t = 240)]
    height: u32,

    /// The number of stroke steps.
    #[arg(short, long, default_value_t = 32)]
    steps: u32,
}

/// A [`dc::FieldTexture`] counting its uploads.
#[derive(Debug)]
struct CountedTexture {
    texture: dc::FieldTexture,
    uploads: usize,
}

impl FieldSync for CountedTexture {
    fn sync(&mut self, field: &dc::ScalarField) {
        self.texture.sync(field);
        self.uploads += 1;
    }
}

fn main() -> Result<(), dc::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let (device, queue) = pollster::block_on(async {
        log::debug!("Creating wgpu instance");
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());

        log::debug!("Requesting adapter");
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions::default())
            .await
            .expect("adapter");

        log::debug!("Requesting device");
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Device"),
                required_limits: adapter.limits(),
                ..Default::default()
            })
            .await
            .expect("device")
    });

    log::debug!("Creating fields");
    let data = dc::ScalarField::from_fn(args.width, args.height, |x, y| (x ^ y) as u8)?;
    let mut mask = dc::ScalarField::new(args.width, args.height)?;

    log::debug!("Creating textures");
    let data_texture = dc::FieldTexture::new(&device, &queue, &data);
    let mut mask_texture = CountedTexture {
        texture: dc::FieldTexture::new(&device, &queue, &mask),
        uploads: 0,
    };
    mask.sync_to(&mut mask_texture);

    log::info!(
        "Data texture {} and mask texture {} created",
        data_texture.size(),
        mask_texture.texture.size()
    );

    let brush = dc::Brush::new_with(12.0, dc::BrushMode::Add);
    let center = mask.size().as_vec2() / 2.0;
    let radius = center.min_element() * 0.6;

    for step in 0..args.steps {
        let angle = step as f32 / args.steps.max(1) as f32 * std::f32::consts::TAU;
        let written = brush.apply(&mut mask, center + Vec2::from_angle(angle) * radius);

        // An idle frame, nothing to upload.
        mask.sync_to(&mut mask_texture);
        mask.sync_to(&mut mask_texture);

        log::debug!("Step {step} wrote {written} samples");
    }

    let stats = dc::RegionStats::compute(&data, &mask)?;

    log::info!("{} uploads for {} steps", mask_texture.uploads, args.steps);
    println!("texture: {:?}", mask_texture.texture.texture().size());
    println!("uploads: {}", mask_texture.uploads);
    println!("count:   {}", stats.count);
    println!("mean:    {:.3}", stats.mean);

    queue.submit([]);
    if let Err(e) = device.poll(wgpu::PollType::wait_indefinitely()) {
        log::error!("Failed to poll device: {e}");
    }

    Ok(())
}
