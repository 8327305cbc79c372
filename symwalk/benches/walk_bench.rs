use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::fs;
use std::path::{Path, PathBuf};
use symwalk::path::normalize::{collapse_parent, split_path};
use symwalk::{resolve_path, ExcludeFilter, PathEntity, ResolveOptions, SymlinkWalk};
use tempfile::TempDir;

/// Build a tree `width` directories wide and `depth` levels deep, with one
/// file per directory. With `up_links`, every directory also holds a link to
/// its parent (on unix).
fn build_tree(width: usize, depth: usize, up_links: bool) -> (TempDir, PathBuf) {
    let temp = tempfile::tempdir().unwrap();
    let root = fs::canonicalize(temp.path()).unwrap();
    populate(&root, width, depth, up_links);
    (temp, root)
}

fn populate(dir: &Path, width: usize, depth: usize, up_links: bool) {
    fs::write(dir.join("file.txt"), "x").unwrap();
    if depth == 0 {
        return;
    }
    for i in 0..width {
        let child = dir.join(format!("d{i}"));
        fs::create_dir(&child).unwrap();
        #[cfg(unix)]
        if up_links {
            std::os::unix::fs::symlink("..", child.join("up")).unwrap();
        }
        populate(&child, width, depth - 1, up_links);
    }
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");

    group.bench_function("split_path", |b| {
        b.iter(|| split_path(black_box(Path::new("/a/./b/../c/d/e/f"))));
    });

    group.bench_function("collapse_parent", |b| {
        b.iter(|| collapse_parent(black_box(Path::new("/a/b/c/.."))));
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    let (_temp, root) = build_tree(2, 3, true);

    let deep = root.join("d0/d1/d0/file.txt");
    group.bench_function("plain", |b| {
        b.iter(|| resolve_path(black_box(&deep), ResolveOptions::default()));
    });

    let through_links = root.join("d0/up/d1/up/d0/file.txt");
    group.bench_function("through_links", |b| {
        b.iter(|| resolve_path(black_box(&through_links), ResolveOptions::default()));
    });

    let missing = root.join("d0/nope/a/b/c");
    group.bench_function("missing", |b| {
        b.iter(|| resolve_path(black_box(&missing), ResolveOptions::default()));
    });

    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("walk");

    for (width, depth) in [(2, 3), (4, 3), (3, 5)] {
        let (_temp, root) = build_tree(width, depth, false);
        #[cfg(unix)]
        std::os::unix::fs::symlink("d0", root.join("alias")).unwrap();
        let label = format!("{width}x{depth}");

        group.bench_with_input(BenchmarkId::new("iter_tree", &label), &root, |b, root| {
            b.iter(|| {
                let mut walker = SymlinkWalk::new();
                walker.iter_tree(root).unwrap().count()
            });
        });

        group.bench_with_input(BenchmarkId::new("iter_tree_unique", &label), &root, |b, root| {
            b.iter(|| {
                let mut walker = SymlinkWalk::new().with_unique_paths(true);
                walker.iter_tree(root).unwrap().count()
            });
        });

        group.bench_with_input(BenchmarkId::new("iter_tree_filtered", &label), &root, |b, root| {
            b.iter(|| {
                let filter = ExcludeFilter::new(["*/d1", "*.txt"]).unwrap();
                let mut walker = SymlinkWalk::new().with_filter(filter.into_predicate());
                walker.iter_tree(root).unwrap().count()
            });
        });
    }

    group.finish();
}

fn bench_entity(c: &mut Criterion) {
    let mut group = c.benchmark_group("entity");

    let mut paths: Vec<PathEntity> = (0..1000)
        .map(|i| PathEntity::from(format!("/Some/Path/{}/Entry{i}", i % 17)))
        .collect();
    group.bench_function("sort_1000", |b| {
        b.iter(|| {
            paths.reverse();
            let mut sorted = paths.clone();
            sorted.sort();
            sorted
        });
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_resolve, bench_walk, bench_entity);
criterion_main!(benches);
