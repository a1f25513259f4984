use clap::Parser;

use startscreen::Options;

/// A procedurally built start screen: main menu and settings page.
#[derive(Parser, Debug)]
#[command(name = "startscreen", about = "Start screen for the game")]
struct Args {
    /// Open the window in fullscreen
    #[arg(long)]
    fullscreen: bool,

    /// Frame rate limit
    #[arg(long, default_value_t = 60)]
    fps: i32,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    startscreen::run(&Options {
        fullscreen: args.fullscreen,
        fps: args.fps,
    });
}
