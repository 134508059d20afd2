use std::error::Error;
use std::fs;
use std::path::PathBuf;

use image::{Rgb, RgbImage};
use rand::Rng;

use traffic_router::util::cli_args::{parse_arg_optional, parse_arg_required};

/// Generates a synthetic frame-sequence directory so the monitor can run
/// without camera footage: a flat asphalt background with a random number of
/// bright vehicle-sized rectangles per frame.
///
/// Usage: generate_frames <output-dir> [num-frames] [width] [height]
fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let output_dir: PathBuf = parse_arg_required(&mut args, "output-dir")?;
    let num_frames: usize = parse_arg_optional(&mut args, 60);
    let width: u32 = parse_arg_optional(&mut args, 320);
    let height: u32 = parse_arg_optional(&mut args, 240);

    fs::create_dir_all(&output_dir)?;
    let mut rng = rand::thread_rng();

    for frame in 0..num_frames {
        let mut img = RgbImage::from_pixel(width, height, Rgb([90, 90, 90]));

        let vehicles = rng.gen_range(0..12);
        for _ in 0..vehicles {
            let vehicle_width = rng.gen_range(16..32).min(width - 1);
            let vehicle_height = rng.gen_range(8..16).min(height - 1);
            let x0 = rng.gen_range(0..width - vehicle_width);
            let y0 = rng.gen_range(0..height - vehicle_height);
            let color = Rgb([rng.gen_range(160..=255), rng.gen_range(160..=255), rng.gen_range(160..=255)]);

            for y in y0..y0 + vehicle_height {
                for x in x0..x0 + vehicle_width {
                    img.put_pixel(x, y, color);
                }
            }
        }

        let path = output_dir.join(format!("frame_{:04}.png", frame));
        img.save(&path)?;
    }

    println!("Wrote {} frames to {}", num_frames, output_dir.display());
    Ok(())
}
