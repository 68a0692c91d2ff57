use crate::colors::{Colors, Role};

#[test]
fn disabled_is_plain() {
    let c = Colors::OFF;
    assert_eq!(c.paint(Role::Name, "vs15").to_string(), "vs15");
    assert_eq!(format!("{:>4}", c.paint(Role::Meta, 7)), "   7");
}

#[test]
fn enabled_wraps_each_role() {
    let c = Colors::new(true);
    assert_eq!(c.paint(Role::Name, "zwj").to_string(), "\x1b[36mzwj\x1b[0m");
    assert_eq!(c.paint(Role::Literal, "1f600").to_string(), "\x1b[33m1f600\x1b[0m");
    assert_eq!(c.paint(Role::Meta, 12).to_string(), "\x1b[2m12\x1b[0m");
}

#[test]
fn default_is_off() {
    assert_eq!(Colors::default(), Colors::OFF);
}
