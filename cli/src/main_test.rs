use super::*;
use canvas::geometry::Point;
use canvas::render::Appearance;
use clap::CommandFactory;

fn card() -> Card {
    Card {
        id: 9,
        title: "Hola".into(),
        message: "Besos".into(),
        sender: "Ana".into(),
        recipient: "Luis".into(),
        date: "17/10/2026".into(),
        position: None,
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn layout_defaults_to_configured_container() {
    let cli = Cli::try_parse_from(["postcards-cli", "layout", "--seed", "4"]).unwrap();
    let (width, height) = match cli.command {
        Command::Layout { width, height, seed } => {
            assert_eq!(seed, Some(4));
            (width, height)
        }
        other => panic!("unexpected command: {other:?}"),
    };

    let config = ClientConfig { container: Size::new(900.0, 600.0), ..ClientConfig::default() };
    assert_eq!(layout_container(&config, width, height), Size::new(900.0, 600.0));
    assert_eq!(layout_container(&ClientConfig::default(), width, height), Size::new(1200.0, 800.0));
}

#[test]
fn layout_flags_override_container() {
    let config = ClientConfig::default();
    assert_eq!(layout_container(&config, Some(1600.0), None), Size::new(1600.0, 800.0));
}

#[test]
fn card_line_lists_addresses() {
    assert_eq!(card_line(&card()), "9\t17/10/2026\tHola\tDe: Ana\tPara: Luis");
}

#[test]
fn layout_line_rounds_origin() {
    let view = CardView::new(&card(), Point::new(20.4, 310.6), 101, Appearance::staggered(0));
    assert_eq!(layout_line(&view), "9\t(20, 311)\tz=101\tHola");
}

#[test]
fn every_subcommand_has_help_text() {
    for sub in Cli::command().get_subcommands() {
        assert!(sub.get_about().is_some(), "`{}` has no description", sub.get_name());
    }
}
