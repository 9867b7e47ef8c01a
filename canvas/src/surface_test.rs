use super::*;

#[test]
fn new_surface_is_uniform() {
    let surface = Surface::new(4, 3, Rgba::WHITE);
    assert_eq!(surface.width(), 4);
    assert_eq!(surface.height(), 3);
    assert_eq!(surface.as_bytes().len(), 4 * 3 * 4);
    assert_eq!(surface.count_rgb(Rgba::WHITE), 12);
}

#[test]
fn pixel_outside_is_none() {
    let surface = Surface::new(4, 3, Rgba::WHITE);
    assert_eq!(surface.pixel(3, 2), Some(Rgba::WHITE));
    assert_eq!(surface.pixel(4, 0), None);
    assert_eq!(surface.pixel(0, 3), None);
}

#[test]
fn set_writes_single_cell() {
    let mut surface = Surface::new(4, 3, Rgba::WHITE);
    surface.set(1, 2, Rgba::BLACK);
    assert_eq!(surface.pixel(1, 2), Some(Rgba::BLACK));
    assert_eq!(surface.count_rgb(Rgba::BLACK), 1);
}

#[test]
fn set_outside_is_ignored() {
    let mut surface = Surface::new(4, 3, Rgba::WHITE);
    let before = surface.clone();
    surface.set(9, 9, Rgba::BLACK);
    assert_eq!(surface, before);
}

#[test]
fn set_rgb_keeps_alpha() {
    let clear = Rgba { a: 0, ..Rgba::WHITE };
    let mut surface = Surface::new(2, 2, clear);
    surface.set_rgb(0, 0, Rgba::BLACK);
    assert_eq!(surface.pixel(0, 0), Some(Rgba { r: 0, g: 0, b: 0, a: 0 }));
}

#[test]
fn fill_all_replaces_every_cell() {
    let mut surface = Surface::new(3, 3, Rgba::WHITE);
    surface.set(1, 1, Rgba::BLACK);
    surface.fill_all(Rgba::WHITE);
    assert_eq!(surface.count_rgb(Rgba::WHITE), 9);
}

#[test]
fn cell_at_floors_and_bounds() {
    let surface = Surface::new(10, 5, Rgba::WHITE);
    assert_eq!(surface.cell_at(Point::new(2.9, 4.99)), Some((2, 4)));
    assert_eq!(surface.cell_at(Point::new(10.0, 0.0)), None);
    assert_eq!(surface.cell_at(Point::new(-0.5, 0.0)), None);
    assert_eq!(surface.cell_at(Point::new(f64::NAN, 0.0)), None);
}
