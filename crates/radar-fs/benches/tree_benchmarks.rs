use criterion::{Criterion, black_box, criterion_group, criterion_main};
use radar_fs::{io, tree};
use std::fs;
use tempfile::tempdir;

fn tree_render_benchmark(c: &mut Criterion) {
    c.bench_function("tree::render_tree (3 levels x 8)", |b| {
        let dir = tempdir().unwrap();
        for i in 0..8 {
            for j in 0..8 {
                let nested = dir.path().join(format!("d{i}/e{j}"));
                fs::create_dir_all(&nested).unwrap();
                for k in 0..8 {
                    fs::write(nested.join(format!("f{k}.txt")), "").unwrap();
                }
            }
        }

        b.iter(|| {
            tree::render_tree(black_box(dir.path())).unwrap();
        })
    });
}

fn read_truncated_benchmark(c: &mut Criterion) {
    c.bench_function("io::read_truncated (64 KiB, 5000 chars)", |b| {
        let dir = tempdir().unwrap();
        let path = dir.path().join("large.txt");
        fs::write(&path, "x".repeat(64 * 1024)).unwrap();

        b.iter(|| {
            io::read_truncated(black_box(&path), io::DEFAULT_MAX_CHARS).unwrap();
        })
    });
}

criterion_group!(benches, tree_render_benchmark, read_truncated_benchmark);
criterion_main!(benches);
