use crate::console::Offscreen;
use crate::geometry::Location;

/// Draw an object on a console layer
pub trait Draw {
    fn draw(&self, layer: &mut Offscreen, loc: &Location);
}

pub fn draw(item: &impl Draw, layer: &mut Offscreen, loc: &Location) {
    item.draw(layer, loc)
}
