#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let width = data[0] as u32 % 64;
    let height = data[1] as u32 % 64;
    let pixels = &data[2..];

    match sb3kit_backend_image::encode_image(pixels, width, height) {
        Ok(png) => {
            assert_eq!(pixels.len(), (width * height * 4) as usize);
            assert!(png.starts_with(&[0x89, b'P', b'N', b'G']));
        }
        Err(_) => assert_ne!(pixels.len(), (width * height * 4) as usize),
    }
});
