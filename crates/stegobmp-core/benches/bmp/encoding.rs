use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};
use stegobmp_core::carrier::Carrier;
use stegobmp_core::codec::hide;
use stegobmp_core::payload::FabPlain;
use stegobmp_core::{Algorithm, Message};

pub fn bmp_encoding(c: &mut Criterion) {
    let carrier = std::fs::read("tests/images/plain/carrier.bmp").expect("Carrier is not readable.");
    let payload = Message::new(b"Hello World!".to_vec(), ".txt")
        .to_raw_data(&FabPlain)
        .expect("Cannot frame secret message");

    for algorithm in Algorithm::ALL {
        c.bench_function(&format!("BMP Encoding {algorithm}"), |b| {
            b.iter(|| {
                let mut carrier =
                    Carrier::from_reader(Cursor::new(&carrier[..])).expect("Invalid carrier");
                let mut sink = Vec::with_capacity(carrier.header().file_size as usize);
                hide(&mut carrier, &mut sink, algorithm, payload.clone())
                    .expect("Cannot hide secret message");
            })
        });
    }
}

criterion_group!(benches, bmp_encoding);
criterion_main!(benches);
