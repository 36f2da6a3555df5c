#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Runs the ribofold binary over a tree and returns captured stdout.
pub fn run_ribofold(input: &Path, output: &Path, extra_args: &[&str]) -> String {
    let mut cmd = Command::cargo_bin("ribofold").unwrap();
    cmd.arg("-i")
        .arg(input)
        .arg("-o")
        .arg(output)
        .args(extra_args);

    let assert = cmd.assert().success();
    String::from_utf8(assert.get_output().stdout.clone()).unwrap()
}

/// Builds a small two-category sequence-data tree.
///
/// `a.1/1ABC/cds.fna` holds a valid record followed by one with a
/// disallowed residue; `b.2/2XYZ/rna.fna` holds a single DNA-alphabet
/// record that normalization must rewrite.
pub fn write_sequence_tree(root: &Path) {
    fs::create_dir_all(root.join("a.1/1ABC")).unwrap();
    fs::create_dir_all(root.join("b.2/2XYZ")).unwrap();
    fs::write(
        root.join("a.1/1ABC/cds.fna"),
        ">r0 hairpin fragment\nGGUCCAC\n>r1 broken\nGGXCCAC\n",
    )
    .unwrap();
    fs::write(root.join("b.2/2XYZ/rna.fna"), ">r0\nggtccac\n").unwrap();
}
