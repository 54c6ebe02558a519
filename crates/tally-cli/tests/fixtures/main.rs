use std::{io::BufReader, path::PathBuf};

use clap::Parser;
use tally_cli::{run, Args};
use tally_macros::fixture_test;

fixture_test!(diagonal, 1);
fixture_test!(diagonal, 2);
fixture_test!(diagonal, 3);
fixture_test!(diagonal, 4);
fixture_test!(diagonal, 5);
fixture_test!(resonance, 1);
fixture_test!(resonance, 2);
fixture_test!(resonance, 3);
fixture_test!(resonance, 4);
fixture_test!(dot_product, 1);
fixture_test!(dot_product, 2);
fixture_test!(dot_product, 3);
fixture_test!(dot_product, 4);
fixture_test!(divisors, 1);
fixture_test!(divisors, 2);
fixture_test!(divisors, 3);

fn fixture_dir() -> PathBuf {
    let manifest_dir = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").unwrap());
    manifest_dir.join("tests").join("fixtures")
}

fn run_fixture(args: &[&str], subcommand: &str, test_index: u32) {
    let fixture_dir = fixture_dir();
    let input_path = fixture_dir.join(format!("{subcommand}_input_{test_index}.txt"));
    let golden_path = fixture_dir.join(format!("{subcommand}_golden_{test_index}.txt"));
    let input = std::fs::File::open(input_path).unwrap();
    let golden_contents = std::fs::read_to_string(golden_path).unwrap();

    let args = Args::parse_from(args);
    let mut output = Vec::new();
    run(args.command, BufReader::new(input), &mut output, args.modulus).unwrap();
    let output_contents = String::from_utf8(output).unwrap();
    assert_eq!(
        output_contents, golden_contents,
        "Fixture {subcommand} #{} failed",
        test_index
    );
}

fn fixture_test(subcommand: &str, test_index: u32) {
    run_fixture(&["tally", subcommand], subcommand, test_index);
}

#[test]
fn resonance_blocked_matches_goldens() {
    for test_index in 1..=4 {
        run_fixture(&["tally", "resonance", "--blocked"], "resonance", test_index);
    }
}
