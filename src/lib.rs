//! Architecture
//! ============
//!
//! Game Loop
//! ---------
//!
//! ```text
//!     +---> P ---> A ---> I ---> U ---+
//!     |                               |
//!     ^          GAME LOOP            v
//!     |                               |
//!     +---------| running? |----------+
//! ```
//!
//! * `Present` the scene to the user
//! * `Accept` input from the user.
//! * `Interpret` the input of the user and determine what should happen
//!   and determines the next scene
//! * `Update` the widget tree based on the interpretation
//!
//! Screens
//! -------
//! The start screen is a fixed widget tree with two pages that are
//! never both visible at the same time:
//!
//! * Main menu (title, credit, Start/Settings/Exit buttons)
//! * Settings page (heading, info labels, Back button)
//!
//! The pages live on the engine's scene stack. Pressing Settings pushes
//! the settings scene and flips the tree's visibility flags; pressing
//! Back pops it and flips them back. Exit empties the stack, which ends
//! the process.
//!
//! ```text
//!     |> Main Menu ! START (no-op)
//!     => Main Menu ! SETTINGS
//!     => Main Menu -> Settings ! BACK
//!     => Main Menu ! EXIT
//!     <| OS
//! ```

pub use buehne::colors::{self, Color};
pub use buehne::console::{BackgroundFlag, Console, Offscreen, TextAlignment};
pub use buehne::geometry::{Dimension, Location, Rect};
pub use buehne::input::{self, Key, KeyCode};
pub use buehne::{draw, Draw, Event, State, Transition};

// Internal
pub mod screen;
mod scenes;

use crate::screen::StartScreen;

/// Width of the screen in console cells
const SCREEN_WIDTH: i32 = 1920 / 10 / 2;
/// Height of the screen in console cells
const SCREEN_HEIGHT: i32 = SCREEN_WIDTH / 16 * 9;
/// Title of the game window
const TITLE: &str = "Welcome to the Game";

/// Startup options, parsed from the command line
#[derive(Debug)]
pub struct Options {
    pub fullscreen: bool,
    pub fps: i32,
}

/// Main entry point
pub fn run(options: &Options) {
    let mut engine = buehne::Engine::new(TITLE, SCREEN_WIDTH, SCREEN_HEIGHT, options.fps);
    if options.fullscreen {
        engine.toggle_fullscreen();
    }

    let screen = StartScreen::build(Dimension(SCREEN_WIDTH, SCREEN_HEIGHT));

    engine.run(screen, scenes::start_screen());

    engine.exit();
}
