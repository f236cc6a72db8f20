//! Template tree rendering against in-memory files.

use super::*;
use crate::blocks::Delimiter;
use crate::lazy_dict::Repeat;

fn case_dict() -> LazyDict {
    let mut dict = LazyDict::new();
    dict.insert("nx", 1);
    dict.insert("ny", 4);
    dict.insert("names", vec!["cylinder0", "cylinder1"]);
    dict.insert_template("regions", "    @names { mode inside; }", Repeat::Broadcast)
        .unwrap();
    dict
}

fn template_files() -> InMemoryFiles {
    let mut files = InMemoryFiles::default();
    files.insert("tmpl/system/decomposeParDict.tmpl", "n (@nx @ny 1);");
    files.insert(
        "tmpl/system/snappyHexMeshDict.tmpl",
        "refinementRegions\n{\nplaceholder\n}\n",
    );
    files
}

#[test]
fn test_render_tree_strips_suffix_and_mirrors_dirs() {
    let dict = case_dict();
    let mut files = template_files();
    let blocks = [BlockRule::new(
        "refinementRegions",
        Delimiter::Brace,
        "@regions",
    )];

    let written = render_tree(
        &dict,
        &mut files,
        Path::new("tmpl"),
        Path::new("case"),
        &["system/decomposeParDict.tmpl", "system/snappyHexMeshDict.tmpl"],
        &blocks,
    )
    .unwrap();

    assert_eq!(
        written,
        vec![
            PathBuf::from("case/system/decomposeParDict"),
            PathBuf::from("case/system/snappyHexMeshDict")
        ]
    );
    assert_eq!(files.get("case/system/decomposeParDict"), Some("n (1 4 1);"));
    assert_eq!(
        files.get("case/system/snappyHexMeshDict"),
        Some(
            "refinementRegions\n{\n    cylinder0 { mode inside; }\n    cylinder1 { mode inside; }\n}\n"
        )
    );
}

#[test]
fn test_render_tree_writes_nothing_on_failure() {
    let dict = case_dict();
    let mut files = template_files();
    files.insert("tmpl/system/blockMeshDict.tmpl", "min @minx;");
    let before = files.len();

    let err = render_tree(
        &dict,
        &mut files,
        Path::new("tmpl"),
        Path::new("case"),
        &["system/decomposeParDict.tmpl", "system/blockMeshDict.tmpl"],
        &[],
    )
    .unwrap_err();

    assert!(matches!(err, TemplateError::InFile { .. }));
    assert!(err.to_string().contains("minx"));
    assert_eq!(files.len(), before);
}

#[test]
fn test_render_tree_reports_missing_template() {
    let mut files = InMemoryFiles::default();
    let err = render_tree(
        &case_dict(),
        &mut files,
        Path::new("tmpl"),
        Path::new("case"),
        &["system/absent.tmpl"],
        &[],
    )
    .unwrap_err();
    assert!(err.to_string().contains("absent.tmpl"));
}

#[test]
fn test_output_path_requires_suffix() {
    assert_eq!(
        output_path(Path::new("constant/dynamicMeshDict.tmpl"), Path::new("/case")).unwrap(),
        PathBuf::from("/case/constant/dynamicMeshDict")
    );
    assert!(output_path(Path::new("system/controlDict"), Path::new("/case")).is_err());
    assert!(output_path(Path::new(".tmpl"), Path::new("/case")).is_err());
}

#[test]
fn test_render_text_replaces_blocks_first() {
    let dict = case_dict();
    let text = render_text(
        &dict,
        "n ( x );",
        &[BlockRule::new("n", Delimiter::Paren, "@nx @ny")],
    )
    .unwrap();
    assert_eq!(text, "n ( 1 4 );");
}

#[test]
fn test_disk_files_create_parent_dirs() {
    let root = std::env::temp_dir().join(format!("case-template-files-{}", std::process::id()));
    let path = root.join("system").join("fvSchemes");

    let mut files = DiskFiles;
    files.write(&path, "ddtSchemes {}").unwrap();
    assert_eq!(files.read_to_string(&path).unwrap(), "ddtSchemes {}");

    std::fs::remove_dir_all(&root).unwrap();
}
