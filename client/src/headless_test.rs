use super::*;
use canvas::doc::Card;
use canvas::render::Appearance;

fn view(id: CardId) -> CardView {
    let card = Card {
        id,
        title: "T".into(),
        message: "M".into(),
        sender: "S".into(),
        recipient: "R".into(),
        date: "1/1/2026".into(),
        position: None,
    };
    CardView::new(&card, Point::new(20.0, 20.0), 100, Appearance::staggered(0))
}

#[test]
fn updates_apply_to_mounted_cards_only() {
    let mut surface = HeadlessSurface::new();
    surface.mount(&view(1));
    surface.set_origin(1, Point::new(300.0, 40.0));
    surface.set_z_index(1, 105);
    surface.set_dragging(1, true);
    surface.set_origin(2, Point::new(1.0, 1.0));

    let drawn = surface.view(1).unwrap();
    assert_eq!(drawn.origin, Point::new(300.0, 40.0));
    assert_eq!(drawn.z_index, 105);
    assert!(drawn.dragging);
    assert!(surface.view(2).is_none());
}

#[test]
fn clear_wipes_views_and_counts() {
    let mut surface = HeadlessSurface::new();
    surface.mount(&view(1));
    surface.set_opening(1, true);
    assert!(surface.is_opening(1));
    surface.clear();
    assert_eq!(surface.views().count(), 0);
    assert!(!surface.is_opening(1));
    assert_eq!(surface.clears(), 1);
}
