//! A small console engine: a window, a scene stack and an input loop.
//!
//! The engine owns the root console and drives a loop of
//! render / poll / interpret / update over a stack of [`State`]s.
//! Everything the application knows about (its widgets, its screens)
//! lives in the `World` and `State` types it provides.

use log::debug;

use tcod::console::{Console, Offscreen, Root};

// Re-export libtcod modules
pub use tcod::colors;
pub use tcod::console;
pub use tcod::input;
pub use tcod::system;

// Internal
pub mod geometry;
pub mod ui;

pub use ui::{draw, Draw};

pub struct Engine {
    running: bool,
    root: Root,
}

/// A scene on the engine's stack.
///
/// Each state defines how the world is presented, how raw input is
/// interpreted into an action, and how an action updates the world
/// and moves between scenes.
pub trait State: std::marker::Sized {
    type World;
    type Action;

    fn render(&self, con: &mut Offscreen, world: &Self::World);

    fn interpret(&self, event: &Event, world: &Self::World) -> Self::Action;

    fn update(&mut self, action: Self::Action, world: &mut Self::World) -> Transition<Self>;
}

/// Scene transitions
///
/// Exit: Exit the current scene
/// Continue: Remain in the current scene
/// Next: Push another scene on top of the current one
/// Replace: Swap the current scene for another one
#[derive(Debug)]
pub enum Transition<S: State> {
    Exit,
    Continue,
    Next(S),
    Replace(S),
}

#[derive(Debug)]
pub enum Event {
    KeyEvent(input::Key),
    MouseEvent(input::Mouse),
}

impl Engine {
    pub fn new(title: &str, screen_width: i32, screen_height: i32, limit_fps: i32) -> Self {
        system::set_fps(limit_fps);
        let mut root = Root::initializer()
            .size(screen_width, screen_height)
            .title(title)
            .init();
        root.set_fullscreen(false);

        Engine {
            running: true,
            root: root,
        }
    }

    pub fn run<S, W, A>(&mut self, mut world: W, start: S) -> W
    where
        A: std::fmt::Debug,
        S: std::fmt::Debug,
        S: State<World = W, Action = A>,
    {
        let mut scenes = vec![start];

        while self.running() {
            let scene = match scenes.last_mut() {
                Some(scene) => scene,
                None => break,
            };

            self.render(&*scene, &world);

            let event = match self.next_event() {
                Some(event) => event,
                None => continue,
            };
            debug!("scene = {:?}, event = {:?}", scene, event);

            let action = scene.interpret(&event, &world);
            debug!("action = {:?}", action);

            let transition = scene.update(action, &mut world);
            debug!("transition = {:?}", transition);

            match transition {
                Transition::Continue => {}
                Transition::Exit => {
                    scenes.pop();
                }
                Transition::Next(s) => scenes.push(s),
                Transition::Replace(s) => {
                    scenes.pop();
                    scenes.push(s);
                }
            }
        }

        world
    }

    pub fn exit(&mut self) {
        // Toggle off fullscreen to avoid messing up the resolution
        self.root.set_fullscreen(false);
        self.running = false;
    }

    pub fn toggle_fullscreen(&mut self) {
        let fullscreen = self.root.is_fullscreen();
        self.root.set_fullscreen(!fullscreen);
    }
}

impl Engine {
    fn render<S, W>(&mut self, scene: &S, world: &W)
    where
        S: State<World = W>,
    {
        self.root.set_default_background(colors::BLACK);

        let mut con = Offscreen::new(self.root.width(), self.root.height());

        scene.render(&mut con, world);

        console::blit(
            &con,
            (0, 0),
            (con.width(), con.height()),
            &mut self.root,
            (0, 0),
            1.0,
            1.0,
        );

        self.root.flush();
    }

    fn running(&self) -> bool {
        !self.root.window_closed() && self.running
    }

    fn next_event(&mut self) -> Option<Event> {
        use input::{Key, KeyCode};
        use Event::*;

        match input::check_for_event(input::KEY_PRESS | input::MOUSE) {
            Some((_, input::Event::Key(key))) => match key {
                Key {
                    code: KeyCode::Enter,
                    alt: true,
                    ..
                } => {
                    debug!("Toggle fullscreen");
                    self.toggle_fullscreen();
                    None
                }
                Key {
                    code: KeyCode::Char,
                    left_ctrl: true,
                    printable: 'c',
                    ..
                } => {
                    debug!("CTRL-C received -> Exit!");
                    self.exit();
                    None
                }
                _ => Some(KeyEvent(key)),
            },
            Some((_, input::Event::Mouse(mouse))) => {
                // Only button presses reach the scenes, not every move
                if mouse.lbutton_pressed {
                    Some(MouseEvent(mouse))
                } else {
                    None
                }
            }
            None => None,
        }
    }
}
