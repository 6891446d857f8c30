//! Rank every template for a stroke given on the command line as `x,y`
//! pairs, e.g. `cargo run --example rank -- 0,0 40,80 80,0`.

use unistroke::{Matcher, Point, TemplateStore, pt};

fn parse_point(arg: &str) -> miette::Result<Point> {
    let (x, y) = arg
        .split_once(',')
        .ok_or_else(|| miette::miette!("expected x,y but got {arg:?}"))?;
    let x = x.trim().parse::<f64>().map_err(|e| miette::miette!("bad x in {arg:?}: {e}"))?;
    let y = y.trim().parse::<f64>().map_err(|e| miette::miette!("bad y in {arg:?}: {e}"))?;
    Ok(pt(x, y))
}

fn main() -> miette::Result<()> {
    let stroke = std::env::args()
        .skip(1)
        .map(|arg| parse_point(&arg))
        .collect::<miette::Result<Vec<Point>>>()?;

    let mut store = TemplateStore::new();
    store.add_template("line", &[pt(0.0, 0.0), pt(100.0, 0.0)])?;
    store.add_template("caret", &[pt(0.0, 100.0), pt(50.0, 0.0), pt(100.0, 100.0)])?;
    store.add_template("check", &[pt(0.0, 50.0), pt(30.0, 100.0), pt(100.0, 0.0)])?;
    store.add_template(
        "square",
        &[pt(0.0, 0.0), pt(100.0, 0.0), pt(100.0, 100.0), pt(0.0, 100.0), pt(0.0, 0.0)],
    )?;

    // A single point or an empty stroke renders as a diagnostic with help text
    for found in Matcher::new().rank(&stroke, &store, store.len())? {
        println!("{:>8}  {:.3}", found.name(), found.score());
    }
    Ok(())
}
