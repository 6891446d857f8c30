//! Recognize every stroke under `tests/fixtures/queries` against the
//! templates under `tests/fixtures/templates`.
//!
//! Fixture format, one item per line:
//!
//! ```text
//! # comment
//! expect <template name> <minimum score>   (queries only)
//! <x> <y>
//! ```
//!
//! Templates are named after their file stem.

use camino::{Utf8Path, Utf8PathBuf};
use unistroke::{Matcher, Point, TemplateStore, pt};

const TEMPLATES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/templates");

#[derive(Debug, Default)]
struct Fixture {
    expect: Option<(String, f64)>,
    points: Vec<Point>,
}

fn parse_fixture(path: &Utf8Path, source: &str) -> datatest_stable::Result<Fixture> {
    let mut fixture = Fixture::default();
    for (number, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields.as_slice() {
            ["expect", name, score] => {
                fixture.expect = Some((name.to_string(), score.parse()?));
            }
            [x, y] => fixture.points.push(pt(x.parse()?, y.parse()?)),
            _ => return Err(format!("{path}:{}: cannot parse {line:?}", number + 1).into()),
        }
    }
    Ok(fixture)
}

fn load_templates() -> datatest_stable::Result<TemplateStore> {
    let mut paths: Vec<Utf8PathBuf> = Utf8Path::new(TEMPLATES_DIR)
        .read_dir_utf8()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension() == Some("gesture"))
        .collect();
    paths.sort();

    let mut store = TemplateStore::new();
    for path in &paths {
        let source = std::fs::read_to_string(path)?;
        let fixture = parse_fixture(path, &source)?;
        let name = path.file_stem().ok_or("template file has no name")?;
        store.add_template(name, &fixture.points)?;
    }
    Ok(store)
}

fn test_gesture_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let fixture = parse_fixture(path, &source)?;
    let (expected, min_score) = fixture
        .expect
        .ok_or_else(|| format!("{path}: missing `expect` line"))?;

    let store = load_templates()?;
    let ranked = Matcher::new().rank(&fixture.points, &store, 2)?;
    let best = &ranked[0];

    if best.name() != expected {
        return Err(format!(
            "{path}: expected {expected}, recognized {} (score {:.3})",
            best.name(),
            best.score()
        )
        .into());
    }
    if best.score() < min_score {
        return Err(format!(
            "{path}: {expected} scored {:.3}, below {min_score}",
            best.score()
        )
        .into());
    }
    if let Some(runner_up) = ranked.get(1) {
        assert!(
            runner_up.score() < best.score(),
            "{path}: {} tied with {}",
            runner_up.name(),
            expected
        );
    }
    Ok(())
}

datatest_stable::harness! {
    { test = test_gesture_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/queries"), pattern = r"\.gesture$" },
}
