//! The start screen: a fixed widget tree built once at startup.
//!
//! The tree has the main-menu widgets as direct children and the
//! settings page as a separate, initially hidden group. Nothing is
//! created or destroyed after [`StartScreen::build`]; the only
//! mutation is the visibility toggle between the two pages.

use crate::colors::{self, Color};
use crate::{BackgroundFlag, Console, Offscreen, TextAlignment};
use crate::{Dimension, Draw, Location, Rect};

/// Background color of the whole screen
const COLOR_BACKGROUND: Color = Color { r: 13, g: 13, b: 13 };
/// Color of the title text and the Start button
const COLOR_TITLE: Color = Color { r: 0, g: 204, b: 0 };
/// Color of the Back button
const COLOR_BACK: Color = Color {
    r: 153,
    g: 153,
    b: 153,
};

/// Width of a menu button
const BUTTON_WIDTH: i32 = 20;
/// Height of a menu button
const BUTTON_HEIGHT: i32 = 3;

/// What pressing a button means
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Press {
    Start,
    OpenSettings,
    Exit,
    Back,
}

#[derive(Debug)]
pub enum Kind {
    Text,
    Button(Press),
}

/// A single visual element: a text label or a button.
///
/// Everything except `visible` is set at construction and never
/// changes afterwards.
#[derive(Debug)]
pub struct Widget {
    pub label: String,
    pub rect: Rect,
    pub color: Color,
    pub kind: Kind,
    pub visible: bool,
}

impl Widget {
    fn text(label: &str, rect: Rect, color: Color) -> Self {
        Widget {
            label: label.into(),
            rect: rect,
            color: color,
            kind: Kind::Text,
            visible: true,
        }
    }

    fn button(label: &str, rect: Rect, press: Press) -> Self {
        Widget {
            label: label.into(),
            rect: rect,
            color: button_color(label),
            kind: Kind::Button(press),
            visible: true,
        }
    }
}

/// The settings page container. Its flag gates all of its widgets.
#[derive(Debug)]
pub struct Group {
    pub visible: bool,
    pub widgets: Vec<Widget>,
}

/// The whole UI tree
#[derive(Debug)]
pub struct StartScreen {
    pub background: Color,
    pub children: Vec<Widget>,
    pub settings: Group,
}

impl StartScreen {
    /// Build the complete start screen for the given screen size.
    ///
    /// A centered column: title in the upper part, the button stack
    /// below the middle. The settings page occupies the same column
    /// and starts hidden.
    pub fn build(screen: Dimension) -> Self {
        let Dimension(width, height) = screen;

        let center = width / 2;

        let title_y = height / 6;
        let credit_y = title_y + 5;

        let start_y = height / 2 + 2;
        let settings_y = start_y + BUTTON_HEIGHT + 1;
        let exit_y = settings_y + BUTTON_HEIGHT + 1;

        let volume_y = height / 3;

        let children = vec![
            Widget::text(
                "WELCOME TO THE GAME",
                Rect::centered(center, title_y, 60, 3),
                COLOR_TITLE,
            ),
            Widget::text(
                "Ben Armour",
                Rect::centered(center, credit_y, 40, 1),
                colors::CYAN,
            ),
            Widget::button(
                "Start",
                Rect::centered(center, start_y, BUTTON_WIDTH, BUTTON_HEIGHT),
                Press::Start,
            ),
            Widget::button(
                "Settings",
                Rect::centered(center, settings_y, BUTTON_WIDTH, BUTTON_HEIGHT),
                Press::OpenSettings,
            ),
            Widget::button(
                "Exit",
                Rect::centered(center, exit_y, BUTTON_WIDTH, BUTTON_HEIGHT),
                Press::Exit,
            ),
        ];

        let settings = Group {
            visible: false,
            widgets: vec![
                Widget::text(
                    "Settings",
                    Rect::centered(center, title_y, 40, 3),
                    colors::WHITE,
                ),
                Widget::text(
                    "Volume",
                    Rect::centered(center, volume_y, 12, 1),
                    colors::WHITE,
                ),
                Widget::text(
                    "Resolution",
                    Rect::centered(center, volume_y + 3, 12, 1),
                    colors::WHITE,
                ),
                Widget::text(
                    "Fullscreen",
                    Rect::centered(center, volume_y + 6, 12, 1),
                    colors::WHITE,
                ),
                // The Back button takes the Exit button's place
                Widget::button(
                    "Back",
                    Rect::centered(center, exit_y, BUTTON_WIDTH, BUTTON_HEIGHT),
                    Press::Back,
                ),
            ],
        };

        StartScreen {
            background: COLOR_BACKGROUND,
            children: children,
            settings: settings,
        }
    }

    /// Show or hide the settings page.
    ///
    /// The settings group gets the requested visibility; every other
    /// direct child of the screen gets the opposite. This is the only
    /// state transition on the tree.
    pub fn toggle_settings(&mut self, show: bool) {
        self.settings.visible = show;
        for child in &mut self.children {
            child.visible = !show;
        }
    }

    /// The button under the given cell, if any. Hidden buttons are
    /// never hit.
    pub fn hit(&self, loc: &Location) -> Option<Press> {
        self.visible_widgets().find_map(|widget| match widget.kind {
            Kind::Button(press) if widget.rect.contains(loc) => Some(press),
            _ => None,
        })
    }

    fn visible_widgets(&self) -> impl Iterator<Item = &Widget> {
        let show_settings = self.settings.visible;
        self.children
            .iter()
            .filter(|w| w.visible)
            .chain(self.settings.widgets.iter().filter(move |_| show_settings))
    }
}

/// Fixed button fill colors, looked up by label
pub fn button_color(label: &str) -> Color {
    match label {
        "Start" => COLOR_TITLE,
        "Settings" => colors::YELLOW,
        "Exit" => colors::RED,
        "Back" => COLOR_BACK,
        _ => colors::WHITE,
    }
}

impl Draw for StartScreen {
    fn draw(&self, layer: &mut Offscreen, loc: &Location) {
        layer.set_default_background(self.background);
        layer.clear();

        for widget in self.visible_widgets() {
            widget.draw(layer, loc);
        }
    }
}

impl Draw for Widget {
    /// Draw the widget at its own position, centered in its rectangle
    fn draw(&self, layer: &mut Offscreen, _loc: &Location) {
        let Location(x, y) = self.rect.center();

        match self.kind {
            Kind::Text => {
                layer.set_default_foreground(self.color);
                layer.print_ex(x, y, BackgroundFlag::None, TextAlignment::Center, &self.label);
            }
            Kind::Button(_) => {
                layer.set_default_background(self.color);
                layer.rect(
                    self.rect.x(),
                    self.rect.y(),
                    self.rect.width(),
                    self.rect.height(),
                    false,
                    BackgroundFlag::Set,
                );
                layer.set_default_foreground(colors::BLACK);
                layer.print_ex(x, y, BackgroundFlag::None, TextAlignment::Center, &self.label);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCREEN: Dimension = Dimension(96, 54);

    fn visible_labels(screen: &StartScreen) -> Vec<&str> {
        screen
            .visible_widgets()
            .map(|w| w.label.as_str())
            .collect()
    }

    fn widget_center(screen: &StartScreen, label: &str) -> Location {
        screen
            .children
            .iter()
            .chain(screen.settings.widgets.iter())
            .find(|w| w.label == label)
            .map(|w| w.rect.center())
            .unwrap()
    }

    #[test]
    fn build_shows_exactly_the_main_menu() {
        let screen = StartScreen::build(SCREEN);

        assert_eq!(
            visible_labels(&screen),
            vec!["WELCOME TO THE GAME", "Ben Armour", "Start", "Settings", "Exit"]
        );
        assert!(!screen.settings.visible);
    }

    #[test]
    fn toggle_shows_only_the_settings_page() {
        let mut screen = StartScreen::build(SCREEN);

        screen.toggle_settings(true);

        assert_eq!(
            visible_labels(&screen),
            vec!["Settings", "Volume", "Resolution", "Fullscreen", "Back"]
        );
        assert!(screen.children.iter().all(|w| !w.visible));
    }

    #[test]
    fn toggle_back_restores_the_startup_state() {
        let mut screen = StartScreen::build(SCREEN);
        let at_startup = visible_labels(&StartScreen::build(SCREEN))
            .into_iter()
            .map(String::from)
            .collect::<Vec<_>>();

        screen.toggle_settings(true);
        screen.toggle_settings(false);

        assert_eq!(visible_labels(&screen), at_startup);
    }

    #[test]
    fn button_colors_are_a_fixed_lookup() {
        assert_eq!(button_color("Start"), Color { r: 0, g: 204, b: 0 });
        assert_eq!(button_color("Settings"), colors::YELLOW);
        assert_eq!(button_color("Exit"), colors::RED);
        assert_eq!(
            button_color("Back"),
            Color {
                r: 153,
                g: 153,
                b: 153
            }
        );
        assert_eq!(button_color("Load"), colors::WHITE);
    }

    #[test]
    fn hit_finds_the_button_under_the_cell() {
        let screen = StartScreen::build(SCREEN);

        assert_eq!(screen.hit(&widget_center(&screen, "Start")), Some(Press::Start));
        assert_eq!(
            screen.hit(&widget_center(&screen, "Settings")),
            Some(Press::OpenSettings)
        );
        assert_eq!(screen.hit(&widget_center(&screen, "Exit")), Some(Press::Exit));
    }

    #[test]
    fn hit_misses_texts_and_empty_cells() {
        let screen = StartScreen::build(SCREEN);

        assert_eq!(screen.hit(&Location(0, 0)), None);
        assert_eq!(screen.hit(&widget_center(&screen, "Ben Armour")), None);
    }

    #[test]
    fn hidden_buttons_are_never_hit() {
        let mut screen = StartScreen::build(SCREEN);
        let start = widget_center(&screen, "Start");

        // Back sits on the Exit button's cells; visibility decides
        // which of the two a click lands on.
        let shared = widget_center(&screen, "Exit");
        assert_eq!(screen.hit(&shared), Some(Press::Exit));

        screen.toggle_settings(true);
        assert_eq!(screen.hit(&start), None);
        assert_eq!(screen.hit(&shared), Some(Press::Back));
    }
}
