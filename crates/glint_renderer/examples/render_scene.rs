//! Render one built-in scene with every tracer.
//!
//! Usage: cargo run --example render_scene -- [scene]
//!
//! Writes `<scene>_<tracer>.ppm` next to the working directory.

use glint_core::SceneKind;
use glint_renderer::{
    color_to_rgba, render, CameraConfig, ImageBuffer, RenderConfig, TracerKind, Vec3,
};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Glint - Scene Render Example");
    println!("============================");

    let name = std::env::args().nth(1).unwrap_or_else(|| "cornell-box".to_string());
    let kind: SceneKind = match name.parse() {
        Ok(kind) => kind,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let start = std::time::Instant::now();
    let scene = kind.build();
    println!(
        "Built '{}' in {:?}: {} objects, {} lights",
        kind,
        start.elapsed(),
        scene.object_count(),
        scene.light_count()
    );

    // The fixtures are authored around a camera at the origin looking down -Z
    let camera = CameraConfig {
        position: Vec3::ZERO,
        fov_y: 60.0,
        ..Default::default()
    };

    for tracer in TracerKind::ALL {
        let config = RenderConfig {
            width: 400,
            height: 300,
            samples_per_pixel: 4,
            max_depth: 5,
            tracer,
            camera: camera.clone(),
            ..Default::default()
        };

        println!("Rendering {}x{} with {} tracer...", config.width, config.height, tracer);
        let start = std::time::Instant::now();
        let image = render(&scene, &config).expect("Failed to render");
        println!("Rendered in {:?}", start.elapsed());

        let filename = format!("{}_{}.ppm", kind, tracer);
        save_ppm(&image, &filename).expect("Failed to save image");
        println!("Saved to {}", filename);
    }
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for y in 0..image.height {
        for x in 0..image.width {
            let rgba = color_to_rgba(image.get(x, y));
            writeln!(writer, "{} {} {}", rgba[0], rgba[1], rgba[2])?;
        }
    }

    Ok(())
}
