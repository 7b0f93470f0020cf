//! Projects a handful of job postings to 2D and lists each one's nearest
//! neighbours, the way the people-vector scatter plot and detail panel do.
//!
//! Run with `RUST_LOG=debug cargo run --example people_vector`.

use log::info;

use vecscope::core::LabeledItem;
use vecscope::keywords::{KeywordVocabulary, VISUAL_DIMS};
use vecscope::reduction::Projector;
use vecscope::similarity::Ranker;
use vecscope::Result;

const POSTINGS: &[(&str, &str, &str)] = &[
    ("Transmission Planner", "MISO", "energy, grid, transmission, FERC"),
    ("Hydrogen Project Lead", "Plug", "hydrogen, renewable, energy"),
    ("Regulatory Analyst", "Xcel", "regulatory, PUC, compliance"),
    ("Nuclear Engineer", "Constellation", "nuclear, energy, DOE"),
    ("Carbon Accountant", "Deloitte", "carbon, EPA, compliance"),
    ("Renewables Developer", "NextEra", "renewable, energy, grid"),
    ("Office Manager", "Acme", ""),
];

fn main() -> Result<()> {
    env_logger::init();

    let vocab = KeywordVocabulary::energy();
    let items: Vec<LabeledItem> = POSTINGS
        .iter()
        .map(|(title, company, kw)| vocab.posting_item(title, company, kw, VISUAL_DIMS))
        .collect();
    let vectors: Vec<&[f64]> = items.iter().map(|it| it.vector.as_slice()).collect();

    let projector = Projector::new();
    let axes = projector.fit(&vectors)?;
    let (r1, r2) = axes.explained_variance();
    info!("Explained variance: PC1 {:.1}%, PC2 {:.1}%", r1 * 100.0, r2 * 100.0);

    let layout = projector.project(&vectors)?;
    println!("=== 2D LAYOUT ===");
    for (item, p) in items.iter().zip(layout.iter()) {
        println!("{:<40} ({:>7.3}, {:>7.3})", item.label, p.x, p.y);
    }

    let ranker = Ranker::new();
    println!("\n=== RELATED POSTINGS ===");
    for (i, item) in items.iter().enumerate() {
        let related = ranker.rank(&items, i)?;
        let names: Vec<String> = related
            .iter()
            .map(|r| format!("{} ({:.3})", r.label, r.score))
            .collect();
        println!("{}: {}", item.label, names.join(", "));
    }

    Ok(())
}
