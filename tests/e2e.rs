use pretty_assertions::assert_eq;
use proptable::ParsedFormula;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

fn file_assert_tautology<P: AsRef<Path>>(file: P) {
    let f = File::open(file).unwrap();

    let input_parsed =
        ParsedFormula::new(&mut BufReader::new(f)).expect("Could not parse input file");

    let table = input_parsed
        .truth_table()
        .expect("Could not evaluate input file");

    assert!(table.is_tautology(), "{}", table);
}

#[test]
fn test_files_tautology() {
    let mut count = 0;

    for file in glob::glob("tests/data/*_is_tautology.txt").unwrap() {
        let f = file.unwrap();
        println!("testing {}", f.display());
        file_assert_tautology(f);
        count += 1;
    }

    assert!(count > 0, "no tautology files found");
}

#[test]
fn test_equivalent_formulas() {
    let pairs = [
        ("A → B", "~A v B"),
        ("A ↔ B", "(A → B) ∧ (B → A)"),
        ("A ⊻ B", "(A ∧ ~B) v (~A ∧ B)"),
        ("A ∧ B v C", "(A ∧ B) v C"),
        ("A v B ⊻ C", "(A v B) ⊻ C"),
    ];

    for (left, right) in pairs {
        let l = ParsedFormula::parse(left).unwrap().truth_table().unwrap();
        let r = ParsedFormula::parse(right).unwrap().truth_table().unwrap();

        assert_eq!(l.variables(), r.variables(), "{left} / {right}");
        assert_eq!(
            l.results().collect::<Vec<_>>(),
            r.results().collect::<Vec<_>>(),
            "{left} / {right}"
        );
    }
}
