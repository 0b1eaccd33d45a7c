use folio_gallery::{FilterController, FilterStep};
use folio_kernel::domain::categories::CategorySet;
use folio_kernel::domain::config::GalleryConfig;
use folio_kernel::domain::content::Category;
use folio_kernel::dom::ids::ACTIVE_CLASS;
use folio_kernel::prelude::*;
use proptest::prelude::*;
use std::time::Duration;

const CARDS: [(u32, &str); 6] =
    [(1, "art"), (2, "ui"), (3, "web"), (4, "game"), (5, "web"), (6, "ui")];
const FILTERS: [&str; 5] = ["all", "art", "ui", "web", "game"];

fn page() -> MemoryDocument {
    let buttons = FILTERS
        .iter()
        .map(|f| Element::new("button").id(format!("filter-{f}")).class("filter-btn").data("filter", *f));
    let cards = CARDS.iter().map(|(id, category)| {
        Element::new("div").id(format!("project-{id}")).class("project-card").data("category", *category)
    });
    MemoryDocument::new(
        Element::new("body")
            .child(Element::new("div").children(buttons))
            .child(Element::new("div").id("portfolio-grid").children(cards)),
    )
}

fn settle_all(controller: &FilterController, doc: &mut MemoryDocument, steps: &[Deferred<FilterStep>]) {
    for step in steps {
        controller.settle(doc, &step.action);
    }
}

fn shown(doc: &MemoryDocument) -> Vec<u32> {
    CARDS
        .iter()
        .map(|(id, _)| *id)
        .filter(|id| doc.style(&format!("project-{id}"), "display").as_deref() == Some("block"))
        .collect()
}

#[test]
fn filtering_updates_cards_in_two_phases() {
    let mut doc = page();
    let mut gallery = FilterController::new(GalleryConfig::default());

    let pass = gallery.filter_by_category(&mut doc, "web").unwrap();

    assert_eq!(pass.filter, CategorySet::WEB);
    assert_eq!(pass.cue, Cue::Click);
    assert_eq!(doc.style("project-3", "display").as_deref(), Some("block"));
    assert_eq!(doc.style("project-3", "opacity"), None);
    assert_eq!(doc.style("project-1", "opacity").as_deref(), Some("0"));
    assert_eq!(doc.style("project-1", "transform").as_deref(), Some("translateY(20px)"));
    assert_eq!(doc.style("project-1", "display"), None);

    let delays: Vec<_> = pass.steps.iter().map(|s| s.delay).collect();
    assert!(delays.contains(&Duration::from_millis(100)));
    assert!(delays.contains(&Duration::from_millis(300)));

    settle_all(&gallery, &mut doc, &pass.steps);

    assert_eq!(doc.style("project-3", "opacity").as_deref(), Some("1"));
    assert_eq!(doc.style("project-3", "transform").as_deref(), Some("translateY(0)"));
    assert_eq!(doc.style("project-1", "display").as_deref(), Some("none"));
}

#[test]
fn the_matching_button_is_the_only_active_one() {
    let mut doc = page();
    let mut gallery = FilterController::new(GalleryConfig::default());

    gallery.filter_by_category(&mut doc, "game").unwrap();
    gallery.filter_by_category(&mut doc, "ui").unwrap();

    let active: Vec<_> = FILTERS
        .into_iter()
        .filter(|f| doc.has_class(&format!("filter-{f}"), ACTIVE_CLASS))
        .collect();
    assert_eq!(active, ["ui"]);
}

#[test]
fn unknown_categories_are_ignored() {
    let mut doc = page();
    let mut gallery = FilterController::new(GalleryConfig::default());
    let before = doc.body().clone();

    assert!(gallery.filter_by_category(&mut doc, "music").is_none());

    assert_eq!(doc.body(), &before);
    assert_eq!(gallery.generation(), 0);
    assert_eq!(gallery.active(), CategorySet::ALL);
}

#[test]
fn late_hide_from_an_older_pass_is_discarded() {
    let mut doc = page();
    let mut gallery = FilterController::new(GalleryConfig::default());

    let art = gallery.filter_by_category(&mut doc, "art").unwrap();
    let all = gallery.filter_by_category(&mut doc, "all").unwrap();

    // the newer pass settles first, then the old hide timers fire
    settle_all(&gallery, &mut doc, &all.steps);
    for step in &art.steps {
        if matches!(step.action, FilterStep::Hide { .. }) {
            assert!(!gallery.settle(&mut doc, &step.action));
        }
    }

    assert_eq!(shown(&doc), [1, 2, 3, 4, 5, 6]);
}

#[test]
fn custom_delays_are_used() {
    let mut doc = page();
    let config = GalleryConfig { reveal_delay_ms: 10, hide_delay_ms: 20 };
    let mut gallery = FilterController::new(config);

    let pass = gallery.filter_by_category(&mut doc, "art").unwrap();

    for step in pass.steps {
        let expected = match step.action {
            FilterStep::Reveal { .. } => 10,
            FilterStep::Hide { .. } => 20,
        };
        assert_eq!(step.delay, Duration::from_millis(expected));
    }
}

proptest! {
    #[test]
    fn after_settling_exactly_the_matching_cards_are_visible(
        passes in proptest::collection::vec(0..FILTERS.len(), 1..8)
    ) {
        let mut doc = page();
        let mut gallery = FilterController::new(GalleryConfig::default());

        for index in passes {
            let filter = FILTERS[index];
            let pass = gallery.filter_by_category(&mut doc, filter).unwrap();
            settle_all(&gallery, &mut doc, &pass.steps);

            let expected: Vec<u32> = CARDS
                .iter()
                .filter(|(_, c)| filter == "all" || Category::parse(c).map(Category::as_str) == Some(filter))
                .map(|(id, _)| *id)
                .collect();
            let hidden: Vec<u32> = CARDS
                .iter()
                .map(|(id, _)| *id)
                .filter(|id| doc.style(&format!("project-{id}"), "display").as_deref() == Some("none"))
                .collect();

            prop_assert_eq!(shown(&doc), expected.clone());
            prop_assert_eq!(hidden.len() + expected.len(), CARDS.len());
        }
    }
}
