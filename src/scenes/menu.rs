use super::*;

use log::info;

/// The two pages of the start screen, mutually exclusive
#[derive(Debug)]
pub enum Screen {
    MainMenu,
    Settings,
}

#[derive(Debug)]
pub enum Action {
    StartGame,
    OpenSettings,
    CloseSettings,
    Quit,
    Nothing,
}

impl State for Screen {
    type World = StartScreen;
    type Action = Action;

    fn render(&self, con: &mut Offscreen, screen: &Self::World) {
        // The tree's visibility flags decide what shows up, so both
        // pages render the same way.
        draw(screen, con, &Location(0, 0));
    }

    fn interpret(&self, event: &Event, screen: &Self::World) -> Self::Action {
        use Action::*;
        use Event::*;
        use KeyCode::{Enter, Escape};
        use Screen::*;

        match event {
            KeyEvent(Key { code: Escape, .. }) => match self {
                MainMenu => Quit,
                Settings => CloseSettings,
            },
            KeyEvent(Key { code: Enter, .. }) => match self {
                MainMenu => StartGame,
                Settings => Nothing,
            },
            KeyEvent(_) => Nothing,
            MouseEvent(mouse) => screen
                .hit(&Location(mouse.cx as i32, mouse.cy as i32))
                .map(press_action)
                .unwrap_or(Nothing),
        }
    }

    fn update(&mut self, action: Self::Action, screen: &mut Self::World) -> Transition<Self> {
        use Action::*;
        use Screen::*;

        match self {
            MainMenu => match action {
                StartGame => {
                    // Placeholder: loading the first level starts here
                    // once there is a level to load.
                    info!("Start pressed");
                    Transition::Continue
                }
                OpenSettings => {
                    info!("Settings pressed");
                    screen.toggle_settings(true);
                    Transition::Next(Settings)
                }
                Quit => {
                    info!("Exit pressed");
                    Transition::Exit
                }
                CloseSettings | Nothing => Transition::Continue,
            },
            Settings => match action {
                CloseSettings => {
                    screen.toggle_settings(false);
                    Transition::Exit
                }
                StartGame | OpenSettings | Quit | Nothing => Transition::Continue,
            },
        }
    }
}

fn press_action(press: Press) -> Action {
    match press {
        Press::Start => Action::StartGame,
        Press::OpenSettings => Action::OpenSettings,
        Press::Exit => Action::Quit,
        Press::Back => Action::CloseSettings,
    }
}
