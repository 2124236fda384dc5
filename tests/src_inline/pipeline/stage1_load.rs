use super::*;
use tempfile::tempdir;

#[test]
fn loads_builtin_and_descriptors() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("mutations.csv");
    std::fs::write(
        &input,
        "type,mutation,exon\nPoint Mutation,L858R,Exon 21\nFusion,ALK,Unknown\n",
    )
    .expect("write");

    let ctx = run_stage1(&input, None).expect("stage1");
    assert_eq!(ctx.descriptors.len(), 2);
    assert_eq!(ctx.unrecognized_categories, 1);
    assert_eq!(ctx.knowledge.mutations.len(), 5);
    assert_eq!(ctx.input_path, input);
}

#[test]
fn bad_knowledge_path_fails() {
    let dir = tempdir().expect("tempdir");
    let input = dir.path().join("mutations.csv");
    std::fs::write(&input, "mutation\nL858R\n").expect("write");
    let kb_path = dir.path().join("kb.toml");
    std::fs::write(&kb_path, "not = [valid").expect("write");

    let err = run_stage1(&input, Some(&kb_path)).expect_err("bad kb");
    assert!(matches!(err, Stage1Error::Knowledge(KnowledgeError::Toml(_))));
}

#[test]
fn missing_input_fails() {
    let dir = tempdir().expect("tempdir");
    let err = run_stage1(&dir.path().join("none.csv"), None).expect_err("missing");
    assert!(matches!(err, Stage1Error::Input(InputError::MissingFile(_))));
}
