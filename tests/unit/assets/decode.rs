use std::io::Cursor;

use super::*;

fn png_bytes(w: u32, h: u32, rgba: [u8; 4]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn png_is_reencoded_as_jpeg() {
    let frame = encode_frame("frame-1.png", &png_bytes(4, 3, [200, 10, 10, 128]), 90).unwrap();
    assert_eq!(frame.name, "frame-1.png");
    assert_eq!((frame.width, frame.height), (4, 3));
    assert_eq!(&frame.jpeg[..2], &[0xFF, 0xD8]);

    let back = image::load_from_memory(&frame.jpeg).unwrap();
    assert_eq!(back.width(), 4);
    assert_eq!(back.height(), 3);
}

#[test]
fn garbage_bytes_fail_to_decode() {
    let err = encode_frame("frame-1.jpg", b"not an image", 90).unwrap_err();
    assert!(format!("{err:#}").contains("decode image"));
}
