use super::*;

#[test]
fn starts_on_the_first_slide() {
    let carousel = Carousel::new(4);
    assert_eq!(carousel.current(), 0);
    assert_eq!(carousel.len(), 4);
}

#[test]
fn next_advances_and_wraps() {
    let mut carousel = Carousel::new(3);
    carousel.next();
    assert_eq!(carousel.current(), 1);
    carousel.next();
    carousel.next();
    assert_eq!(carousel.current(), 0);
}

#[test]
fn prev_wraps_to_the_last_slide() {
    let mut carousel = Carousel::new(3);
    carousel.prev();
    assert_eq!(carousel.current(), 2);
    carousel.prev();
    assert_eq!(carousel.current(), 1);
}

#[test]
fn go_to_jumps_to_a_dot() {
    let mut carousel = Carousel::new(5);
    carousel.go_to(3);
    assert_eq!(carousel.current(), 3);
}

#[test]
fn go_to_ignores_out_of_range_indices() {
    let mut carousel = Carousel::new(3);
    carousel.go_to(7);
    assert_eq!(carousel.current(), 0);
}

#[test]
fn empty_carousel_ignores_navigation() {
    let mut carousel = Carousel::new(0);
    assert!(carousel.is_empty());
    carousel.next();
    carousel.prev();
    carousel.go_to(0);
    assert_eq!(carousel.current(), 0);
}

#[test]
fn single_slide_carousel_stays_put() {
    let mut carousel = Carousel::new(1);
    carousel.next();
    carousel.prev();
    assert_eq!(carousel.current(), 0);
}

// =============================================================
// Swipe
// =============================================================

#[test]
fn left_swipe_advances() {
    let mut carousel = Carousel::new(3);
    assert!(carousel.swipe(200.0, 100.0));
    assert_eq!(carousel.current(), 1);
}

#[test]
fn right_swipe_goes_back() {
    let mut carousel = Carousel::new(3);
    assert!(carousel.swipe(100.0, 200.0));
    assert_eq!(carousel.current(), 2);
}

#[test]
fn short_travel_is_not_a_swipe() {
    let mut carousel = Carousel::new(3);
    assert!(!carousel.swipe(120.0, 100.0));
    assert!(!carousel.swipe(100.0, 150.0));
    assert_eq!(carousel.current(), 0);
}

#[test]
fn threshold_is_exclusive() {
    let mut carousel = Carousel::new(3);
    assert!(!carousel.swipe(150.0, 100.0));
    assert!(carousel.swipe(151.0, 100.0));
}

// =============================================================
// Keyboard
// =============================================================

#[test]
fn arrow_keys_navigate() {
    let mut carousel = Carousel::new(3);
    assert!(carousel.key("ArrowRight"));
    assert_eq!(carousel.current(), 1);
    assert!(carousel.key("ArrowLeft"));
    assert_eq!(carousel.current(), 0);
}

#[test]
fn other_keys_are_ignored() {
    let mut carousel = Carousel::new(3);
    assert!(!carousel.key("Enter"));
    assert!(!carousel.key("ArrowUp"));
    assert_eq!(carousel.current(), 0);
}
