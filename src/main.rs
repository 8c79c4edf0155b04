//! Webcam-sim binary running the demo script.
//!
//! Usage: `webcam-sim [CONFIG.toml]`

use log::info;
use webcam_sim::{demo, WebcamConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> webcam_sim::traits::Result<()> {
    let config = match std::env::args_os().nth(1) {
        Some(path) => WebcamConfig::load_from_file(path)?,
        None => WebcamConfig::default(),
    };

    let mut camera = config.build()?;
    info!("Webcam: {} @ {} fps", camera.resolution(), camera.fps());

    let report = demo::run(&mut camera);

    println!("{}", report.first_capture);
    println!("{}", report.second_capture);
    println!("Camera is {}", camera.state());

    Ok(())
}
