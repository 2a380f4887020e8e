//! Random smoothie selections for trying the machine out.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use orders::menu::{BASES, EXTRAS, FRUITS, SWEETENERS};
use orders::{OrderSelection, SmoothieSize};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const CUSTOMERS: &[&str] = &["Ada", "Bo", "Chen", "Dara", "Eli"];
const NOTES: &[&str] = &["extra cold", "no ice", "blend it smooth", "to go"];

/// Chance that a required field is left out, so some samples exercise the
/// incomplete-order prompt.
const SKIP_REQUIRED_PROBABILITY: f64 = 0.1;

/// Draws one selection from the menu.
pub fn random_selection<G: Rng + ?Sized>(rng: &mut G) -> OrderSelection {
    let mut selection = OrderSelection::new();

    if !rng.gen_bool(SKIP_REQUIRED_PROBABILITY) {
        if let Some(size) = SmoothieSize::values().choose(rng) {
            selection = selection.with_size(size.label());
        }
    }
    if !rng.gen_bool(SKIP_REQUIRED_PROBABILITY) {
        if let Some(base) = BASES.choose(rng) {
            selection = selection.with_base(*base);
        }
    }

    let number_of_fruits = if rng.gen_bool(SKIP_REQUIRED_PROBABILITY) {
        0
    } else {
        rng.gen_range(1..=3)
    };
    selection = selection.with_fruits(FRUITS.choose_multiple(rng, number_of_fruits).copied());

    let number_of_extras = rng.gen_range(0..=2);
    selection = selection.with_extras(EXTRAS.choose_multiple(rng, number_of_extras).copied());

    if let Some(sweetener) = SWEETENERS.choose(rng) {
        selection = selection.with_sweetener(*sweetener);
    }
    if rng.gen_bool(0.5) {
        if let Some(name) = CUSTOMERS.choose(rng) {
            selection = selection.with_customer_name(*name);
        }
    }
    if rng.gen_bool(0.2) {
        if let Some(notes) = NOTES.choose(rng) {
            selection = selection.with_notes(*notes);
        }
    }
    selection
}

/// Writes `count` random selections to `writer` as JSON Lines.
pub fn write_orders<W: Write, G: Rng + ?Sized>(
    writer: &mut W,
    count: usize,
    rng: &mut G,
) -> Result<()> {
    for _ in 0..count {
        let selection = random_selection(rng);
        serde_json::to_writer(&mut *writer, &selection)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Creates a file of simulated orders. A seed makes the file reproducible.
pub fn generate_orders(path: &Path, count: usize, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_orders(&mut writer, count, &mut rng)
        .with_context(|| format!("writing orders to {}", path.display()))
}
