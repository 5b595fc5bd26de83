use super::*;

fn animator(strings: &[&str]) -> TypedText {
    TypedText::new(strings.iter().map(|s| (*s).to_owned()).collect(), TypingTiming::default())
        .expect("non-empty strings")
}

// =============================================================
// Construction
// =============================================================

#[test]
fn empty_list_has_no_animator() {
    assert!(TypedText::new(Vec::new(), TypingTiming::default()).is_none());
    assert!(TypedText::new(vec![String::new()], TypingTiming::default()).is_none());
}

#[test]
fn starts_typing_first_string() {
    let typed = animator(&["ab", "c"]);
    assert_eq!(typed.string_index(), 0);
    assert_eq!(typed.char_index(), 0);
    assert!(!typed.is_deleting());
    assert_eq!(typed.current_string(), "ab");
}

// =============================================================
// Phases
// =============================================================

#[test]
fn types_then_pauses_then_deletes() {
    let mut typed = animator(&["ab", "c"]);

    let steps: Vec<TypedStep> = (0..4).map(|_| typed.tick()).collect();
    let texts: Vec<&str> = steps.iter().map(|s| s.text.as_str()).collect();
    let delays: Vec<u32> = steps.iter().map(|s| s.next_delay_ms).collect();

    assert_eq!(texts, vec!["a", "ab", "a", ""]);
    assert_eq!(delays, vec![100, 1500, 50, 500]);
    assert_eq!(typed.string_index(), 1);
    assert!(!typed.is_deleting());
}

#[test]
fn switches_to_deleting_when_string_complete() {
    let mut typed = animator(&["hi"]);
    typed.tick();
    assert!(!typed.is_deleting());
    typed.tick();
    assert!(typed.is_deleting());
    assert_eq!(typed.char_index(), 2);
}

#[test]
fn cycle_returns_to_first_string() {
    let strings = ["Full-Stack MERN Developer", "Blockchain Developer", "React Specialist", "Web Developer"];
    let mut typed = animator(&strings);

    let ticks_per_cycle: usize = strings.iter().map(|s| s.chars().count() * 2).sum();
    let mut seen = Vec::new();
    for _ in 0..ticks_per_cycle {
        if seen.last() != Some(&typed.string_index()) {
            seen.push(typed.string_index());
        }
        typed.tick();
    }

    assert_eq!(seen, vec![0, 1, 2, 3]);
    assert_eq!(typed.string_index(), 0);
    assert_eq!(typed.char_index(), 0);
    assert!(!typed.is_deleting());
}

#[test]
fn single_string_wraps_to_itself() {
    let mut typed = animator(&["x"]);
    assert_eq!(typed.tick(), TypedStep { text: "x".to_owned(), next_delay_ms: 1500 });
    assert_eq!(typed.tick(), TypedStep { text: String::new(), next_delay_ms: 500 });
    assert_eq!(typed.string_index(), 0);
    assert_eq!(typed.tick().text, "x");
}

#[test]
fn multibyte_strings_advance_by_character() {
    let mut typed = animator(&["né"]);
    assert_eq!(typed.tick().text, "n");
    assert_eq!(typed.tick().text, "né");
    assert_eq!(typed.tick().text, "n");
}

#[test]
fn custom_timing_is_used() {
    let timing = TypingTiming { typing_ms: 7, deleting_ms: 3, typed_pause_ms: 11, next_string_pause_ms: 13 };
    let mut typed = TypedText::new(vec!["ab".to_owned()], timing).expect("non-empty");
    let delays: Vec<u32> = (0..4).map(|_| typed.tick().next_delay_ms).collect();
    assert_eq!(delays, vec![7, 11, 3, 13]);
}
