use super::*;

// =============================================================
// Thresholds
// =============================================================

#[test]
fn header_shadow_appears_at_50() {
    assert!(!header_has_shadow(0.0));
    assert!(!header_has_shadow(49.9));
    assert!(header_has_shadow(50.0));
    assert!(header_has_shadow(800.0));
}

#[test]
fn scroll_up_appears_at_350() {
    assert!(!show_scroll_up(0.0));
    assert!(!show_scroll_up(349.0));
    assert!(show_scroll_up(350.0));
    assert!(show_scroll_up(5000.0));
}

// =============================================================
// Active section
// =============================================================

fn page() -> Vec<Section> {
    vec![
        Section::new("home", 0.0, 600.0),
        Section::new("about", 600.0, 500.0),
        Section::new("projects", 1100.0, 900.0),
        Section::new("contact", 2000.0, 400.0),
    ]
}

#[test]
fn top_of_page_activates_the_first_section() {
    assert_eq!(active_section(10.0, &page()), Some("home"));
}

#[test]
fn detection_leads_the_section_top() {
    // about starts at 600; with the 200px lead it activates from 401.
    assert_eq!(active_section(400.0, &page()), Some("home"));
    assert_eq!(active_section(401.0, &page()), Some("about"));
}

#[test]
fn section_stays_active_through_its_height() {
    assert_eq!(active_section(900.0, &page()), Some("about"));
    assert_eq!(active_section(901.0, &page()), Some("projects"));
}

#[test]
fn bottom_section_activates_near_the_end() {
    assert_eq!(active_section(2100.0, &page()), Some("contact"));
}

#[test]
fn past_every_section_nothing_is_active() {
    assert_eq!(active_section(9999.0, &page()), None);
}

#[test]
fn empty_section_list_yields_none() {
    assert_eq!(active_section(100.0, &[]), None);
}

#[test]
fn overlapping_sections_prefer_the_later_one() {
    let sections = vec![
        Section::new("a", 0.0, 1000.0),
        Section::new("b", 300.0, 400.0),
    ];
    assert_eq!(active_section(200.0, &sections), Some("b"));
}
