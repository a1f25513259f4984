use crate::screen::{Press, StartScreen};
use crate::{draw, Location, Offscreen};
use crate::{Event, Key, KeyCode, State, Transition};

mod menu;

pub fn start_screen() -> menu::Screen {
    menu::Screen::MainMenu
}
