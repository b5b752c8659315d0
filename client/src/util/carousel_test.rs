use super::*;

#[test]
fn new_starts_at_zero_with_autoplay() {
    let c = Carousel::new(4);
    assert_eq!(c.index(), 0);
    assert_eq!(c.len(), 4);
    assert!(c.autoplay());
}

#[test]
fn forward_wraps_to_first() {
    let mut c = Carousel::new(3);
    c.forward();
    c.forward();
    assert_eq!(c.index(), 2);
    c.forward();
    assert_eq!(c.index(), 0);
}

#[test]
fn back_wraps_to_last() {
    let mut c = Carousel::new(4);
    c.back();
    assert_eq!(c.index(), 3);
    c.back();
    assert_eq!(c.index(), 2);
}

#[test]
fn empty_carousel_never_moves() {
    let mut c = Carousel::new(0);
    assert!(c.is_empty());
    c.forward();
    c.back();
    c.tick();
    assert_eq!(c.index(), 0);
}

#[test]
fn select_ignores_out_of_range() {
    let mut c = Carousel::new(2);
    c.select(1);
    assert_eq!(c.index(), 1);
    c.select(5);
    assert_eq!(c.index(), 1);
}

#[test]
fn tick_advances_while_autoplaying() {
    let mut c = Carousel::new(4);
    c.tick();
    assert_eq!(c.index(), 1);
}

#[test]
fn navigate_stops_autoplay() {
    let mut c = Carousel::new(4);
    c.navigate(Direction::Next);
    assert_eq!(c.index(), 1);
    assert!(!c.autoplay());
    c.tick();
    assert_eq!(c.index(), 1);
    c.navigate(Direction::Prev);
    c.navigate(Direction::Prev);
    assert_eq!(c.index(), 3);
}

#[test]
fn jump_stops_autoplay() {
    let mut c = Carousel::new(4);
    c.jump(2);
    assert_eq!(c.index(), 2);
    assert!(!c.autoplay());
}

#[test]
fn single_slide_stays_put() {
    let mut c = Carousel::new(1);
    c.forward();
    c.back();
    assert_eq!(c.index(), 0);
}
