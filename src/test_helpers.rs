use rand::Rng;
use std::path::PathBuf;

pub fn make_tmp_dir() -> PathBuf {
    let mut rng = rand::rng();
    let n = rng.random_range(0..100_000);
    let root = std::env::temp_dir().join(format!("lcd-cli-test-{n}"));
    _ = std::fs::remove_dir_all(&root);
    std::fs::create_dir_all(&root).unwrap();
    root
}
