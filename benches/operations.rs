use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dyn_arr::DynArr;
use dyn_arr::types::ArrDesc;

const ELEM: usize = 16;

fn record(i: usize) -> [u8; ELEM] {
    let mut out = [0u8; ELEM];
    out[..8].copy_from_slice(&(i as u64).to_le_bytes());
    return out;
}

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [100, 1000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("from_one_slot", size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynArr::new(ArrDesc::new(ELEM, 1, ELEM * size)).unwrap();
                for i in 0..size {
                    black_box(arr.append(&record(i)).unwrap());
                }
                black_box(arr.len())
            });
        });
    }
    group.finish();
}

fn bench_prepend(c: &mut Criterion) {
    let mut group = c.benchmark_group("prepend");

    for size in [100, 1000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::new("shift_all", size), size, |b, &size| {
            b.iter(|| {
                let mut arr = DynArr::new(ArrDesc::new(ELEM, size, ELEM * size)).unwrap();
                for i in 0..size {
                    black_box(arr.prepend(&record(i)).unwrap());
                }
                black_box(arr.len())
            });
        });
    }
    group.finish();
}

fn bench_removal(c: &mut Criterion) {
    let mut group = c.benchmark_group("removal");
    let size = 1000;

    group.bench_function("remove_front", |b| {
        b.iter(|| {
            let mut arr = DynArr::new(ArrDesc::new(ELEM, size, ELEM * size)).unwrap();
            for i in 0..size {
                arr.append(&record(i)).unwrap();
            }
            while !arr.is_empty() {
                arr.remove(0).unwrap();
            }
        });
    });

    group.bench_function("remove_dirty_front", |b| {
        b.iter(|| {
            let mut arr = DynArr::new(ArrDesc::new(ELEM, size, ELEM * size)).unwrap();
            for i in 0..size {
                arr.append(&record(i)).unwrap();
            }
            while !arr.is_empty() {
                arr.remove_dirty(0).unwrap();
            }
        });
    });
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in [100, 1000].iter() {
        let mut arr = DynArr::new(ArrDesc::new(ELEM, *size, ELEM * size)).unwrap();
        for i in 0..*size {
            arr.append(&record(i)).unwrap();
        }
        let last = record(size - 1);

        group.bench_with_input(BenchmarkId::new("index_of_last", size), size, |b, _| {
            b.iter(|| black_box(arr.index_of(black_box(&last)).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("last_index_of_last", size), size, |b, _| {
            b.iter(|| black_box(arr.last_index_of(black_box(&last)).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_append, bench_prepend, bench_removal, bench_search);
criterion_main!(benches);
