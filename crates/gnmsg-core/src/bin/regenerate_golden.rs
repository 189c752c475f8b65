use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use gnmsg_core::{PartKind, decode_hex_dump_file};

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        return ExitCode::from(1);
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), String> {
    let root = PathBuf::from("tests").join("golden");
    let entries =
        fs::read_dir(&root).map_err(|err| format!("failed to read {}: {}", root.display(), err))?;

    for entry in entries {
        let entry = entry.map_err(|err| format!("failed to read entry: {}", err))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let input = path.join("input.hex");
        if !input.exists() {
            continue;
        }
        let kinds = read_part_kinds(&path.join("parts.txt"))?;
        let output = path.join("expected_report.json");
        regenerate_one(&input, &kinds, &output)?;
    }

    Ok(())
}

fn read_part_kinds(path: &Path) -> Result<Vec<PartKind>, String> {
    let text = fs::read_to_string(path)
        .map_err(|err| format!("failed to read {}: {}", path.display(), err))?;
    text.split(',')
        .filter(|name| !name.trim().is_empty())
        .map(|name| name.parse::<PartKind>().map_err(|err| err.to_string()))
        .collect()
}

fn regenerate_one(input: &Path, kinds: &[PartKind], output: &Path) -> Result<(), String> {
    let report = decode_hex_dump_file(input, kinds)
        .map_err(|err| format!("decode failed for {}: {}", input.display(), err))?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|err| format!("JSON serialization failed: {}", err))?;
    fs::write(output, json)
        .map_err(|err| format!("failed to write {}: {}", output.display(), err))?;
    Ok(())
}
