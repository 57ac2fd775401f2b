use magickwand::{ErrorKind, PixelPacket, PixelWand};

mod utils;

use utils::*;

#[test]
fn named_color() {
    init();

    let pixel = PixelWand::from_color("red").unwrap();
    assert_close(pixel.red(), 1.);
    assert_close(pixel.green(), 0.);
    assert_close(pixel.blue(), 0.);
    assert_close(pixel.alpha(), 1.);
}

#[test]
fn unknown_color() {
    init();

    let mut pixel = PixelWand::new().unwrap();
    let err = pixel.set_color("notacolor").unwrap_err();

    assert_eq!(err.operation(), Some("PixelSetColor"));
    assert!(matches!(
        err.kind(),
        ErrorKind::Native(_) | ErrorKind::OperationFailed
    ));

    // The wand stays usable
    pixel.set_color("blue").unwrap();
    assert_close(pixel.blue(), 1.);
}

#[test]
fn channel_setters() {
    init();

    let mut pixel = PixelWand::new().unwrap();
    pixel.set_red(0.5);
    pixel.set_green(0.25);
    pixel.set_blue(1.);
    pixel.set_alpha(0.75);

    assert_close(pixel.red(), 0.5);
    assert_close(pixel.green(), 0.25);
    assert_close(pixel.blue(), 1.);
    assert_close(pixel.alpha(), 0.75);
    assert_close(pixel.opacity(), 0.25);
}

#[test]
fn quantum_color() {
    init();

    let source = PixelWand::from_color("rgb(255,128,0)").unwrap();
    let packet = source.quantum_color();
    assert!(packet.red > packet.green);
    assert!(packet.green > packet.blue);

    let mut target = PixelWand::new().unwrap();
    target.set_quantum_color(&packet);
    assert_eq!(target.quantum_color(), packet);

    target.set_quantum_color(&PixelPacket::default());
    assert_close(target.red(), 0.);
}

#[test]
fn clone_is_independent() {
    init();

    let mut pixel = PixelWand::from_color("white").unwrap();
    let copy = pixel.try_clone().unwrap();
    pixel.set_color("black").unwrap();

    assert_close(pixel.red(), 0.);
    assert_close(copy.red(), 1.);
    assert!(!copy.color_as_string().is_empty());
}

#[test]
fn pixel_of_image() {
    init();

    let wand = solid(2, 2, "lime");
    let color = wand.image_pixel_color(1, 1).unwrap();
    assert_close(color.green(), 1.);
    assert_close(color.red(), 0.);
}
