use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use stegobmp_core::carrier::Carrier;
use stegobmp_core::codec::Decoder;
use stegobmp_core::payload::FabPlain;
use stegobmp_core::{Algorithm, Message};

pub fn bmp_decoding(c: &mut Criterion) {
    for (algorithm, image) in [
        (Algorithm::Lsb1, "tests/images/lsb1/hello_world.bmp"),
        (Algorithm::Lsb4, "tests/images/lsb4/hello_world.bmp"),
        (Algorithm::Lsbi, "tests/images/lsbi/hello_world.bmp"),
    ] {
        let stego = std::fs::read(image).expect("Stego image is not readable.");

        c.bench_function(&format!("BMP Decoding {algorithm}"), |b| {
            b.iter(|| {
                let mut carrier =
                    Carrier::from_reader(Cursor::new(&stego[..])).expect("Invalid carrier");
                let max_size = algorithm.max_payload_len(carrier.pixel_count());
                let mut decoder = Decoder::new(carrier.pixels(), algorithm.unveiler());
                Message::from_raw_data(&mut decoder, &FabPlain, max_size)
                    .expect("Cannot unveil secret message");
            })
        });
    }
}

criterion_group!(benches, bmp_decoding);
criterion_main!(benches);
