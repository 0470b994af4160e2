//! Transpiler behaviour over short sources and over the sample scripts in tests/fixtures

use hwk2lua::hwk::Location;
use hwk2lua::{transpile, TranspileError, TranspileOptions, Transpiler};
use rstest::rstest;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[rstest]
#[case::line_form("down + key \"a\" => say \"hi\"\n", "__match[down + key \"a\"] = say \"hi\"\n")]
#[case::no_trailing_newline("a => b", "__match[a] = b")]
#[case::indent_kept("    a => b\n", "    __match[a] = b\n")]
#[case::crlf("a => b\r\nc => d\r\n", "__match[a] = b\r\n__match[c] = d\r\n")]
#[case::literal_table("t = { 1 }\n", "t = { 1 }\n")]
#[case::brace_after_arrow_only("a => {\n}\n", "__match[a] = MatchScope.new(function (__match)\nend)\n")]
#[case::arrow_in_string("s = \"a => {\"\n", "s = \"a => {\"\n")]
#[case::arrow_in_single_quotes("s = 'x => }'\n", "s = 'x => }'\n")]
#[case::arrow_in_comment("-- a => {\n", "-- a => {\n")]
#[case::long_string("s = [[ } ]]\n", "s = [[ } ]]\n")]
#[case::empty("", "")]
#[case::apostrophe_in_long_string(
    "s = [[it's]] .. 'x'\nk => go()\n",
    "s = [[it's]] .. 'x'\n__match[k] = go()\n"
)]
#[case::apostrophe_in_long_comment(
    "--[[ don't ]] key 'a' => go()\n",
    "__match[--[[ don't ]] key 'a'] = go()\n"
)]
#[case::escape_at_end_of_line_comment(
    "-- don't use \\\nkey 'a' => go()\n",
    "-- don't use \\\n__match[key 'a'] = go()\n"
)]
fn transpiles(#[case] source: &str, #[case] expected: &str) {
    assert_eq!(transpile(source).unwrap(), expected);
}

#[rstest]
#[case::keys("keys")]
#[case::comments("comments")]
#[case::modes("modes")]
fn transpiles_fixture(#[case] name: &str) {
    let source = fs::read_to_string(fixture_path(&format!("{name}.hwk"))).unwrap();
    let expected = fs::read_to_string(fixture_path(&format!("{name}.lua"))).unwrap();
    assert_eq!(transpile(&source).unwrap(), expected);
}

#[rstest]
#[case::stray_close("}\n", TranspileError::UnbalancedClose { location: Location::new(1, 1) })]
#[case::close_after_scope(
    "a => {\n}\n}",
    TranspileError::UnbalancedClose { location: Location::new(3, 1) }
)]
#[case::unclosed_match(
    "a => {\n  b => {\n  }\n",
    TranspileError::UnbalancedOpen { location: Location::new(1, 6) }
)]
#[case::innermost_reported(
    "{\n  t = {\n",
    TranspileError::UnbalancedOpen { location: Location::new(2, 7) }
)]
fn rejects_unbalanced_braces(#[case] source: &str, #[case] expected: TranspileError) {
    assert_eq!(transpile(source).unwrap_err(), expected);
}

#[test]
fn rejects_unterminated_long_comment() {
    let err = transpile("a => b\n--[[ never closed\n").unwrap_err();
    assert!(matches!(
        err,
        TranspileError::UnterminatedLongBracket { location, .. } if location == Location::new(2, 1)
    ));
}

#[test]
fn lenient_mode_accepts_unterminated_long_comment() {
    let transpiler = Transpiler::new(TranspileOptions {
        reject_unterminated: false,
        ..TranspileOptions::default()
    });
    let source = "a => b\n--[[ { never closed\n";
    assert_eq!(
        transpiler.transpile(source).unwrap(),
        "__match[a] = b\n--[[ { never closed\n"
    );
}

#[test]
fn error_messages_carry_positions() {
    let err = transpile("x = 1\n  }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "too many closing braces: `}` at line 2, column 3"
    );
}

#[test]
fn snapshot_line_form() {
    let lua = transpile("a => b").unwrap();
    insta::assert_snapshot!(lua, @"__match[a] = b");
}

#[test]
fn snapshot_block_form() {
    let lua = transpile("k => {\n  go()\n}").unwrap();
    insta::assert_snapshot!(lua, @r###"
    __match[k] = MatchScope.new(function (__match)
      go()
    end)
    "###);
}
