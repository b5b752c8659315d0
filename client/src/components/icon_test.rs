use super::*;
use crate::catalog::showcase::CONTACT_INFO;

#[test]
fn contact_cards_use_distinct_glyphs() {
    let kinds: Vec<IconKind> = CONTACT_INFO.iter().map(|info| info.icon).collect();
    assert_eq!(kinds, [IconKind::Pin, IconKind::Phone, IconKind::Mail, IconKind::Clock]);
}

#[test]
fn footer_contact_lines_skip_only_opening_hours() {
    let shown = CONTACT_INFO.iter().filter(|info| info.icon != IconKind::Clock).count();
    assert_eq!(shown, CONTACT_INFO.len() - 1);
}

#[test]
fn every_path_is_non_empty() {
    for kind in [IconKind::Cart, IconKind::Star, IconKind::Trash, IconKind::Quote, IconKind::Zap, IconKind::Pin] {
        assert!(!kind.path().is_empty());
    }
}
