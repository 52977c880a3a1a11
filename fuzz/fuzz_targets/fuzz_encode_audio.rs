#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (rate, body) = data.split_at(8);
    let rate = f64::from_le_bytes(rate.try_into().unwrap());
    let samples: Vec<f32> = body
        .chunks_exact(4)
        .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]]))
        .collect();

    let wav = sb3kit_backend_audio::encode_audio(&samples, rate).unwrap();
    assert_eq!(wav.len(), 44 + 2 * samples.len());
    assert_ne!(&wav[24..28], &[0, 0, 0, 0]);
});
