use super::*;

fn hrefs(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

const SECTIONS: [(&str, f64); 4] = [("home", 0.0), ("about", 700.0), ("projects", 1500.0), ("contact", 2600.0)];

// =============================================================
// Fragments and scroll targets
// =============================================================

#[test]
fn fragment_id_strips_hash() {
    assert_eq!(fragment_id("#projects"), Some("projects"));
    assert_eq!(fragment_id("index.html#about"), Some("about"));
}

#[test]
fn bare_hash_and_plain_links_have_no_fragment() {
    assert_eq!(fragment_id("#"), None);
    assert_eq!(fragment_id("/resume.pdf"), None);
    assert_eq!(fragment_id(""), None);
}

#[test]
fn projects_link_scrolls_below_header() {
    let top = SECTIONS[2].1;
    assert_eq!(scroll_target(top, 80.0), 1420.0);
}

// =============================================================
// Current section
// =============================================================

#[test]
fn top_of_page_is_first_section() {
    assert_eq!(current_section(SECTIONS, 0.0, 150.0), Some("home"));
}

#[test]
fn section_becomes_current_within_threshold() {
    assert_eq!(current_section(SECTIONS, 549.0, 150.0), Some("home"));
    assert_eq!(current_section(SECTIONS, 550.0, 150.0), Some("about"));
}

#[test]
fn last_qualifying_section_wins() {
    assert_eq!(current_section(SECTIONS, 5000.0, 150.0), Some("contact"));
}

#[test]
fn no_section_above_scroll_position() {
    let sections = [("about", 700.0)];
    assert_eq!(current_section(sections, 0.0, 150.0), None);
}

#[test]
fn back_to_top_shows_past_threshold() {
    assert!(!back_to_top_visible(0.0, 300.0));
    assert!(!back_to_top_visible(300.0, 300.0));
    assert!(back_to_top_visible(301.0, 300.0));
}

// =============================================================
// Link groups
// =============================================================

#[test]
fn new_group_has_no_active_link() {
    let group = LinkGroup::new(hrefs(&["#home", "#about"]));
    assert_eq!(group.active(), None);
    assert_eq!(group.len(), 2);
    assert!(!group.is_empty());
}

#[test]
fn click_activation_is_exclusive() {
    let mut group = LinkGroup::new(hrefs(&["#home", "#about", "#projects"]));
    group.activate(0);
    group.activate(2);
    let active: Vec<usize> = (0..group.len()).filter(|i| group.is_active(*i)).collect();
    assert_eq!(active, vec![2]);
}

#[test]
fn out_of_range_click_is_ignored() {
    let mut group = LinkGroup::new(hrefs(&["#home"]));
    group.activate(0);
    group.activate(5);
    assert_eq!(group.active(), Some(0));
}

#[test]
fn section_activation_matches_href() {
    let mut group = LinkGroup::new(hrefs(&["#home", "#projects", "#projects"]));
    group.activate_section(Some("projects"));
    assert_eq!(group.active(), Some(1));
    assert!(!group.is_active(2));
}

#[test]
fn unmatched_section_clears_group() {
    let mut group = LinkGroup::new(hrefs(&["#home", "#about"]));
    group.activate(1);
    group.activate_section(Some("blog"));
    assert_eq!(group.active(), None);
}

#[test]
fn groups_are_tracked_separately_on_click() {
    let mut nav = NavState::new(hrefs(&["#home", "#about"]), hrefs(&["#home", "#about"]));
    nav.mobile.activate(1);
    assert_eq!(nav.desktop.active(), None);
    assert_eq!(nav.mobile.active(), Some(1));
}

#[test]
fn scroll_sync_updates_both_groups() {
    let mut nav = NavState::new(hrefs(&["#home", "#projects"]), hrefs(&["#projects", "#home"]));
    let current = current_section(SECTIONS, 1400.0, 150.0);
    nav.sync_to_section(current);
    assert_eq!(nav.desktop.active(), Some(1));
    assert_eq!(nav.mobile.active(), Some(0));
}

#[test]
fn click_then_scroll_leaves_one_active_per_group() {
    let links = hrefs(&["#home", "#about", "#projects", "#contact"]);
    let mut nav = NavState::new(links.clone(), links);
    nav.desktop.activate(2);
    assert_eq!(nav.desktop.active(), Some(2));

    let target = scroll_target(SECTIONS[2].1, 80.0);
    nav.sync_to_section(current_section(SECTIONS, target, 150.0));

    for group in [&nav.desktop, &nav.mobile] {
        let active: Vec<usize> = (0..group.len()).filter(|i| group.is_active(*i)).collect();
        assert_eq!(active, vec![2]);
    }
}

#[test]
fn current_section_reads_offsets_lazily_from_borrowed_ids() {
    let ids: Vec<String> = SECTIONS.iter().map(|(id, _)| (*id).to_owned()).collect();
    let offsets = SECTIONS.map(|(_, top)| top);
    let tops = ids.iter().zip(offsets).map(|(id, top)| (id.as_str(), top));
    assert_eq!(current_section(tops, 1420.0, 150.0), Some("projects"));
}
