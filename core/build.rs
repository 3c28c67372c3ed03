use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_relic_items_map(&out_dir);
    generate_bonus_light_duties_map(&out_dir);

    println!("cargo:rerun-if-changed=data/relic_items.csv");
    println!("cargo:rerun-if-changed=data/bonus_light_duties.csv");
}

/// Parse a CSV file with a header row, skipping rows with too few fields.
fn read_rows(path: &str, min_fields: usize) -> Vec<Vec<String>> {
    let csv = fs::read_to_string(path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    csv.lines()
        .skip(1)
        .map(|line| line.split(',').map(|f| f.trim().to_string()).collect::<Vec<_>>())
        .filter(|fields| fields.len() >= min_fields && !fields[0].is_empty())
        .collect()
}

fn generate_relic_items_map(out_dir: &str) {
    let path = Path::new(out_dir).join("relic_items.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    // BTreeMap dedupes ids (first row wins) and keeps the output sorted
    let mut entries = BTreeMap::new();
    for fields in read_rows("data/relic_items.csv", 3) {
        let id: u32 = fields[0].parse().expect("relic item id must be numeric");
        let slot = match fields[2].as_str() {
            "mainhand" => "EquipSlot::MainHand",
            "offhand" => "EquipSlot::OffHand",
            other => panic!("unknown equip slot {other:?} for relic item {id}"),
        };
        entries.entry(id).or_insert(format!(
            "RelicItem {{ name: Cow::Borrowed({:?}), slot: {} }}",
            fields[1], slot
        ));
    }

    let mut builder = phf_codegen::Map::new();
    for (id, value) in &entries {
        builder.entry(*id, value);
    }

    writeln!(file, "pub static RELIC_ITEMS: phf::Map<u32, RelicItem> = {};", builder.build()).unwrap();
}

fn generate_bonus_light_duties_map(out_dir: &str) {
    let path = Path::new(out_dir).join("bonus_light_duties.rs");
    let mut file = BufWriter::new(fs::File::create(&path).unwrap());

    let mut entries = BTreeMap::new();
    for fields in read_rows("data/bonus_light_duties.csv", 3) {
        let id: u16 = fields[0].parse().expect("territory id must be numeric");
        let intensity: u32 = fields[2].parse().expect("light intensity must be numeric");
        entries.entry(id).or_insert(format!(
            "BonusLightDuty {{ name: Cow::Borrowed({:?}), default_light_intensity: {} }}",
            fields[1], intensity
        ));
    }

    let mut builder = phf_codegen::Map::new();
    for (id, value) in &entries {
        builder.entry(*id, value);
    }

    writeln!(
        file,
        "pub static BONUS_LIGHT_DUTIES: phf::Map<u16, BonusLightDuty> = {};",
        builder.build()
    )
    .unwrap();
}
