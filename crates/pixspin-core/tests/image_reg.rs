//! Image buffer regression test
//!
//! Art literal round trips of the built-in sprites, copy-on-write
//! behavior of shared images and the geometry used by the sampler.

use pixspin_core::{Coordinate, Image, PolarVector, TRANSPARENT};
use pixspin_test::{RegParams, TURTLE_ART, checkerboard_image, load_test_image};
use std::f64::consts::FRAC_PI_2;

#[test]
fn image_reg() {
    let mut rp = RegParams::new("image");

    for name in ["turtle", "arrow", "diamond"] {
        let image = load_test_image(name).expect("load image");
        test_art_roundtrip(&mut rp, &image);
    }
    test_turtle(&mut rp);
    test_sharing(&mut rp);
    test_geometry(&mut rp);

    assert!(rp.cleanup(), "image regression test failed");
}

fn test_art_roundtrip(rp: &mut RegParams, image: &Image) {
    let art = image.to_art();
    let parsed = Image::from_art(&art).expect("parse art");
    rp.compare_pix(image, &parsed);
    rp.compare_strings(art.as_bytes(), parsed.to_art().as_bytes());
}

fn test_turtle(rp: &mut RegParams) {
    let turtle = Image::from_art(TURTLE_ART).expect("parse turtle");
    rp.compare_values(16.0, turtle.width() as f64, 0.0);
    rp.compare_values(16.0, turtle.height() as f64, 0.0);
    rp.compare_values(49.0, turtle.count_opaque() as f64, 0.0);
    rp.compare_values(1.0, turtle.count_index(0xf) as f64, 0.0);
    rp.compare_values(TRANSPARENT as f64, turtle.sample(-1, 8) as f64, 0.0);
    rp.compare_values(0xe as f64, turtle.sample(6, 5) as f64, 0.0);
}

fn test_sharing(rp: &mut RegParams) {
    let board = checkerboard_image(4, 4, 1, 2).expect("checkerboard");
    let shared = board.clone();
    rp.compare_values(2.0, board.ref_count() as f64, 0.0);

    // A shared image cannot be taken over for writing
    let shared = match shared.try_into_mut() {
        Ok(_) => {
            rp.compare_bool(false, true);
            board.clone()
        }
        Err(image) => image,
    };

    let mut copy = shared.to_mut();
    copy.set_pixel(0, 0, 9).expect("set pixel");
    let copy: Image = copy.into();
    rp.compare_values(1.0, board.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);
    rp.compare_values(1.0, copy.count_pixel_diffs(&board).expect("same size") as f64, 0.0);

    let deep = board.deep_clone();
    rp.compare_values(1.0, deep.ref_count() as f64, 0.0);
    rp.compare_pix(&board, &deep);
}

fn test_geometry(rp: &mut RegParams) {
    let center = Coordinate::new(8, 8);
    let (dx, dy) = Coordinate::new(11, 12).offset_from(center);
    let v = PolarVector::from_offset(dx, dy);
    rp.compare_values(5.0, v.magnitude(), 1e-12);

    // A quarter turn back maps "below" onto "right"
    let below = PolarVector::from_offset(0.0, 3.0);
    let (x, y) = below.rotated(FRAC_PI_2).to_offset();
    rp.compare_values(3.0, x, 1e-9);
    rp.compare_values(0.0, y, 1e-9);

    let flipped = PolarVector::new(-2.0, 0.0);
    rp.compare_values(2.0, flipped.magnitude(), 0.0);
    let (x, _) = flipped.to_offset();
    rp.compare_values(-2.0, x, 1e-9);
}
