use super::*;

#[test]
fn theme_row_matches_requested_mode() {
    for mode in Mode::ALL {
        assert_eq!(theme(mode).mode, mode);
    }
}

#[test]
fn root_classes_are_distinct_and_non_empty() {
    let classes: Vec<&str> = Mode::ALL.iter().map(|m| theme(*m).root_class).collect();
    assert_eq!(classes, vec!["ui-mode", "ux-mode", "balanced-mode"]);
}

#[test]
fn rows_differ_pairwise() {
    for a in Mode::ALL {
        for b in Mode::ALL {
            if a != b {
                assert_ne!(theme(a), theme(b), "{a} and {b} share a row");
                assert_ne!(theme(a).button_class, theme(b).button_class);
                assert_ne!(theme(a).projects.title, theme(b).projects.title);
                assert_ne!(theme(a).contact.title, theme(b).contact.title);
            }
        }
    }
}

#[test]
fn copy_fields_are_non_empty() {
    for mode in Mode::ALL {
        let t = theme(mode);
        for copy in [t.hero, t.about, t.projects, t.skills, t.contact] {
            assert!(!copy.title.is_empty(), "{mode}");
            assert!(!copy.subtitle.is_empty(), "{mode}");
        }
        for text in [t.labels.name, t.labels.email, t.labels.message, t.submit_label, t.form_title] {
            assert!(!text.is_empty(), "{mode}");
        }
    }
}

#[test]
fn section_titles_follow_mode() {
    assert_eq!(theme(Mode::Ui).projects.title, "Stunning Creations");
    assert_eq!(theme(Mode::Ux).projects.title, "Project Experience");
    assert_eq!(theme(Mode::Balanced).projects.title, "Featured Projects");
    assert_eq!(theme(Mode::Ui).contact.title, "Connect & Collaborate");
    assert_eq!(theme(Mode::Ux).contact.title, "Contact Information");
    assert_eq!(theme(Mode::Balanced).contact.title, "Get in Touch");
}

#[test]
fn only_ux_marks_required_fields() {
    assert!(theme(Mode::Ux).required_hint.is_some());
    assert!(theme(Mode::Ux).labels.name.ends_with('*'));
    assert!(theme(Mode::Ui).required_hint.is_none());
    assert!(theme(Mode::Balanced).required_hint.is_none());
}

#[test]
fn only_ui_is_decorative() {
    assert!(theme(Mode::Ui).decorative);
    assert!(!theme(Mode::Ux).decorative);
    assert!(!theme(Mode::Balanced).decorative);
    assert_eq!(theme(Mode::Ux).hover_lift_px, 0);
}

#[test]
fn one_philosophy_card_per_mode() {
    for mode in Mode::ALL {
        assert_eq!(PHILOSOPHIES.iter().filter(|p| p.mode == mode).count(), 1, "{mode}");
    }
}
