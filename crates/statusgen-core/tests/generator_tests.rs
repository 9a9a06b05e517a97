//! Tests for code generation from registries.

use pretty_assertions::assert_eq;
use statusgen_core::{EnumerationSource, GeneratorStyle, StatusEntry, StatusRegistry, generate};

#[test]
fn test_builtin_declarations_snapshot() {
    let entries = StatusRegistry::builtin().entries().unwrap();
    let code = generate(&entries, &GeneratorStyle::flush());

    insta::assert_snapshot!(code.declarations.concat(), @r"
    BLOCKED = 0x2,  // blocked
    BUILDING = 0x9,  // building
    BUILD_PENDING = 0x19,  // build pending
    CRASHED = 0x6,  // crashed
    DELETED = 0x5,  // deleted
    FAILED = 0x8,  // failed to spawn
    FAILED_TIMEOUT_GUESTAGENT = 0x18,  // guestagent error
    NEW = 0x17,  // new
    PAUSED = 0x3,  // paused
    RUNNING = 0x1,  // running
    SHUTDOWN = 0x4,  // shutdown
    UNKNOWN = 0x16  // unknown
    ");
}

#[test]
fn test_only_last_declaration_lacks_comma() {
    let entries = StatusRegistry::builtin().entries().unwrap();
    let code = generate(&entries, &GeneratorStyle::default());

    let (last, rest) = code.declarations.split_last().unwrap();
    for line in rest {
        let value = line.split("  //").next().unwrap();
        assert!(value.ends_with(','), "missing comma: {:?}", line);
    }
    assert!(!last.split("  //").next().unwrap().ends_with(','));
}

#[test]
fn test_output_follows_registry_order() {
    let registry = StatusRegistry::new(vec![
        StatusEntry::new("ZULU", 0x3, "z"),
        StatusEntry::new("__hidden", 0x9, "internal"),
        StatusEntry::new("ALPHA", 0x1, "a"),
    ]);
    let code = generate(&registry.entries().unwrap(), &GeneratorStyle::flush());

    assert_eq!(code.declarations, vec!["ZULU = 0x3,  // z\n", "ALPHA = 0x1  // a\n"]);
    assert_eq!(
        code.dispatch,
        vec!["case ZULU:\n", "return \"z\";\n", "case ALPHA:\n", "return \"a\";\n"]
    );
}

#[test]
fn test_every_entry_generates_one_pair() {
    let entries = StatusRegistry::builtin().entries().unwrap();
    let code = generate(&entries, &GeneratorStyle::default());

    assert_eq!(code.declarations.len(), entries.len());
    assert_eq!(code.dispatch.len(), entries.len() * 2);
    for (pair, entry) in code.dispatch.chunks(2).zip(&entries) {
        assert_eq!(pair[0].trim(), format!("case {}:", entry.name));
    }
}
