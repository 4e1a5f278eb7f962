use clap::{Parser, ValueEnum};
use glam::*;

use wgpu_data_canvas as dc;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "\
    A headless segmentation session over a synthetic data field.\n\
    \n\
    The stroke is replayed from the given points, in field coordinates with the origin at the \
    top left, and the region statistics of the mask are printed afterwards.\n\
    "
)]
struct Args {
    /// The size of the square data field.
    #[arg(short, long, default_value_t = 256)]
    field_size: u32,

    /// The size of the square canvas in pixels.
    #[arg(short, long, default_value_t = 512.0)]
    canvas_size: f32,

    /// The brush size in pixels.
    #[arg(short, long, default_value_t = dc::Brush::DEFAULT_SIZE)]
    brush_size: f32,

    /// The brush mode.
    #[arg(short, long, value_enum, default_value_t = Mode::Add)]
    mode: Mode,

    /// The stroke points as `x,y`.
    #[arg(short, long = "point", value_parser = parse_point)]
    points: Vec<UVec2>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Mode {
    Add,
    Remove,
}

impl From<Mode> for dc::BrushMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Add => dc::BrushMode::Add,
            Mode::Remove => dc::BrushMode::Remove,
        }
    }
}

fn parse_point(s: &str) -> Result<UVec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x = x.trim().parse().map_err(|e| format!("invalid x: {e}"))?;
    let y = y.trim().parse().map_err(|e| format!("invalid y: {e}"))?;
    Ok(uvec2(x, y))
}

/// Logs every session callback.
#[derive(Debug)]
struct Printer;

impl dc::SessionObserver for Printer {
    fn on_pick(&mut self, pick: Option<dc::PickResult>) {
        match pick {
            Some(pick) => log::debug!("Picked {} at {}", pick.value, pick.pos()),
            None => log::debug!("Nothing under the pointer"),
        }
    }

    fn on_mask_update(&mut self, mask: dc::MaskId, stats: &dc::RegionStats) {
        log::info!(
            "Mask {mask} updated: {} samples, mean {:.3}",
            stats.count,
            stats.mean
        );
    }

    fn on_pointer_leave(&mut self) {
        log::debug!("Pointer left the canvas");
    }
}

fn main() -> Result<(), dc::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let size = args.field_size.max(1);

    log::debug!("Creating data field");
    let center = Vec2::splat((size - 1) as f32 / 2.0);
    let data = dc::ScalarField::from_fn(size, size, |x, y| {
        let d = uvec2(x, y).as_vec2().distance(center) / center.length().max(1.0);
        ((1.0 - d).clamp(0.0, 1.0) * 255.0) as u8
    })?;

    log::debug!("Creating camera and surfaces");
    let camera = dc::OrthographicCamera::from_aspect(1.0, 0.1..1e3);
    let surfaces = [dc::Surface::plane(2.0, 2.0)];
    let canvas = dc::CanvasRect::from_size(Vec2::splat(args.canvas_size));
    let viewport = dc::Viewport::new(&camera, canvas, &surfaces);

    log::debug!("Creating session");
    let brush = dc::Brush::new_with(args.brush_size, args.mode.into());
    let mut session = dc::SegmentationSession::new_with(data, None, brush);
    let mask = session.add_mask_layer(None);

    let to_client = |pos: UVec2| {
        let scale = args.canvas_size / (size.max(2) - 1) as f32;
        dc::PointerEvent::new(pos.x as f32 * scale, pos.y as f32 * scale)
    };

    let mut printer = Printer;
    let mut points = args.points.iter().copied();

    match points.next() {
        Some(first) => {
            session.pointer_down(&viewport, &to_client(first), &mut printer);
            for point in points {
                session.pointer_move(&viewport, &to_client(point), &mut printer);
            }
            session.pointer_up();
        }
        None => log::warn!("No stroke points given, the mask stays empty"),
    }
    session.pointer_leave(&mut printer);

    let layer = session.mask_layer(mask)?;
    let stats = layer.stats();

    println!("mask:    {}", layer.id());
    println!("brush:   {} {}", session.brush().mode, session.brush().size());
    println!("count:   {}", stats.count);
    println!("mean:    {:.3}", stats.mean);
    println!("min:     {:.3}", stats.min);
    println!("max:     {:.3}", stats.max);
    println!("std dev: {:.3}", stats.std_dev);

    Ok(())
}
