//! Walk, validation and copy behavior against real pack trees

mod common;

use std::fs;
use std::path::Path;

use common::TestTree;
use elgglp::copier::{FileCopier, FileOutcome};
use elgglp::filters::Filters;
use elgglp::module::ModuleDescriptor;
use elgglp::walker::{ModuleOutcome, SkipReason};
use elgglp::{ImportStatus, ModuleVisitor, Result, walk};

fn pack_filters() -> Filters {
    Filters::new().needs_meta_sidecar(true)
}

#[test]
fn test_valid_pack_walks_ok() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.sidecar_module("blog", "blog");
    pack.sidecar_module("groups", "groups");

    let report = walk(pack.root(), &pack_filters(), "1.8.16", None).unwrap();
    assert_eq!(report.status(), ImportStatus::Ok);
    assert_eq!(report.visited().len(), 4);
    assert_eq!(&report.visited()[..2], &["core", "install"]);
}

#[test]
fn test_missing_directories_are_structure_errors() {
    for missing in ["languages", "install/languages", "mod"] {
        let pack = TestTree::pack("1.8.16", "1.0.0");
        fs::remove_dir_all(pack.path.join(missing)).unwrap();

        let err = walk(pack.root(), &pack_filters(), "1.8.16", None).unwrap_err();
        assert_eq!(
            err.import_status(),
            Some(ImportStatus::StructureError),
            "missing {missing}"
        );
    }
}

#[test]
fn test_structure_checked_before_versions() {
    let pack = TestTree::pack("0.1", "0.0.1");
    fs::remove_dir_all(pack.path.join("mod")).unwrap();
    let err = walk(pack.root(), &pack_filters(), "1.8.16", None).unwrap_err();
    assert_eq!(err.import_status(), Some(ImportStatus::StructureError));
}

#[test]
fn test_version_mismatches() {
    let wrong_release = TestTree::pack("1.8.15", "1.0.0");
    let err = walk(wrong_release.root(), &pack_filters(), "1.8.16", None).unwrap_err();
    assert_eq!(err.import_status(), Some(ImportStatus::VersionMismatch));

    let wrong_format = TestTree::pack("1.8.16", "1.0");
    let err = walk(wrong_format.root(), &pack_filters(), "1.8.16", None).unwrap_err();
    assert_eq!(err.import_status(), Some(ImportStatus::VersionMismatch));
}

#[test]
fn test_install_tree_uses_version_php() {
    let install = TestTree::install("1.8.16");
    install.manifest_module("blog", "Blog");

    let filters = Filters::new().return_descriptors(true);
    let report = walk(install.root(), &filters, "1.8.16", None).unwrap();
    let descriptors = report.descriptors.unwrap();
    assert_eq!(descriptors.len(), 3);
    assert_eq!(
        descriptors[2],
        ModuleDescriptor::new("blog", "Blog", "Blog & more", "1.8")
    );

    let err = walk(install.root(), &filters, "1.8.17", None).unwrap_err();
    assert_eq!(err.import_status(), Some(ImportStatus::VersionMismatch));
}

#[test]
fn test_version_php_ignores_commented_release() {
    let install = TestTree::install("1.8.16");
    install.write_file(
        "version.php",
        "<?php\n// $release = '9.9.9';\n# $release = '8.8.8';\n$release = \"1.8.16\";\n",
    );
    walk(install.root(), &Filters::new(), "1.8.16", None).unwrap();
}

#[test]
fn test_mismatched_sidecar_without_manifest_is_skipped() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.sidecar_module("foo", "bar");

    let report = walk(pack.root(), &pack_filters(), "1.8.16", None).unwrap();
    assert_eq!(report.visited(), vec!["core", "install"]);
    let skipped = report.skipped();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].0, "foo");
    assert!(matches!(skipped[0].1, SkipReason::Unresolvable(_)));
}

#[test]
fn test_mismatched_sidecar_falls_back_to_manifest() {
    let install = TestTree::install("1.8.16");
    install.manifest_module("foo", "Foo");
    install.write_file(
        "mod/foo/languages/languagemod.meta",
        r#"{"unique":"bar","name":"Bar","description":"","version":"1"}"#,
    );

    let filters = Filters::new().return_descriptors(true);
    let report = walk(install.root(), &filters, "1.8.16", None).unwrap();
    let descriptors = report.descriptors.unwrap();
    assert_eq!(descriptors[2].unique, "foo");
    assert_eq!(descriptors[2].name, "Foo");
}

#[test]
fn test_install_project_visited_exactly_once() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.sidecar_module("blog", "blog");

    let mut seen = Vec::new();
    let mut visitor = |d: &ModuleDescriptor, dir: &Path, _: &Filters| -> Result<()> {
        seen.push((d.unique.clone(), dir.to_path_buf()));
        Ok(())
    };
    let filters = pack_filters().with_projects(["install"]);
    walk(pack.root(), &filters, "1.8.16", Some(&mut visitor)).unwrap();

    assert_eq!(seen, vec![("install".to_string(), pack.path.join("install"))]);
}

#[test]
fn test_visitor_errors_do_not_stop_walk() {
    struct Failing(usize);
    impl ModuleVisitor for Failing {
        fn visit(&mut self, _: &ModuleDescriptor, _: &Path, _: &Filters) -> Result<()> {
            self.0 += 1;
            Err(elgglp::ElggLpError::NoDestination)
        }
    }

    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.sidecar_module("blog", "blog");
    let mut visitor = Failing(0);
    let report = walk(pack.root(), &pack_filters(), "1.8.16", Some(&mut visitor)).unwrap();

    assert_eq!(visitor.0, 3);
    assert_eq!(report.visit_errors().len(), 3);
}

#[test]
fn test_copier_without_destination_is_visit_error() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.write_file("languages/fr.php", "fr");

    let mut copier = FileCopier::new();
    let report = walk(pack.root(), &pack_filters(), "1.8.16", Some(&mut copier)).unwrap();
    assert!(copier.reports.is_empty());
    assert!(
        report
            .outcomes
            .iter()
            .all(|o| matches!(o, ModuleOutcome::Visited { visit_error: Some(_), .. }))
    );
}

#[test]
fn test_overwrite_false_keeps_existing_files() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.write_file("languages/fr.php", "from pack");
    pack.write_file("languages/de.php", "from pack");
    let dest = TestTree::install("1.8.16");
    dest.write_file("languages/fr.php", "local edit");

    let mut copier = FileCopier::new();
    let filters = pack_filters().with_dest_root(dest.root());
    walk(pack.root(), &filters, "1.8.16", Some(&mut copier)).unwrap();

    assert_eq!(dest.read_file("languages/fr.php"), "local edit");
    assert_eq!(dest.read_file("languages/de.php"), "from pack");
    let core = copier.report_for("core").unwrap();
    assert!(core.files.contains(&("fr.php".to_string(), FileOutcome::AlreadyExists)));
}

#[test]
fn test_overwrite_true_replaces_existing_files() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.write_file("languages/fr.php", "from pack");
    let dest = TestTree::install("1.8.16");
    dest.write_file("languages/fr.php", "local edit");

    let mut copier = FileCopier::new();
    let filters = pack_filters().with_dest_root(dest.root()).overwrite(true);
    walk(pack.root(), &filters, "1.8.16", Some(&mut copier)).unwrap();

    assert_eq!(dest.read_file("languages/fr.php"), "from pack");
}

#[test]
fn test_locale_filter_selects_language_and_regions() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    for file in ["fr.php", "fr_ca.php", "de.php", "en.php", "french.php", "fr.txt"] {
        pack.write_file(&format!("languages/{file}"), file);
    }
    let dest = TestTree::install("1.8.16");

    let mut copier = FileCopier::new();
    let filters = pack_filters()
        .with_dest_root(dest.root())
        .with_locales(["fr", "fr_ca"]);
    walk(pack.root(), &filters, "1.8.16", Some(&mut copier)).unwrap();

    assert_eq!(copier.report_for("core").unwrap().copied(), vec!["fr.php", "fr_ca.php"]);
    assert!(!dest.file_exists("languages/de.php"));
    assert!(!dest.file_exists("languages/french.php"));
}

#[test]
fn test_skip_english() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.write_file("install/languages/en.php", "en");
    pack.write_file("install/languages/es.php", "es");
    let dest = TestTree::install("1.8.16");

    let mut copier = FileCopier::new();
    let filters = pack_filters().with_dest_root(dest.root()).skip_english(true);
    walk(pack.root(), &filters, "1.8.16", Some(&mut copier)).unwrap();

    assert!(!dest.file_exists("install/languages/en.php"));
    assert!(dest.file_exists("install/languages/es.php"));
}

#[test]
fn test_manifest_walk_writes_module_sidecars() {
    let install = TestTree::install("1.8.16");
    install.manifest_module("blog", "Blog");
    install.write_file("mod/blog/languages/fr.php", "fr");
    install.manifest_module("pages", "Pages");
    let dest = TestTree::pack("1.8.16", "1.0.0");

    let mut copier = FileCopier::new();
    let filters = Filters::new()
        .needs_manifest(true)
        .with_dest_root(dest.root());
    walk(install.root(), &filters, "1.8.16", Some(&mut copier)).unwrap();

    let meta: ModuleDescriptor =
        serde_json::from_str(&dest.read_file("mod/blog/languages/languagemod.meta")).unwrap();
    assert_eq!(meta.unique, "blog");
    assert_eq!(meta.version, "1.8");
    assert!(copier.report_for("blog").unwrap().wrote_meta);
    assert!(!dest.file_exists("mod/pages/languages/languagemod.meta"));
}

#[test]
fn test_trailing_separator_on_destination() {
    let pack = TestTree::pack("1.8.16", "1.0.0");
    pack.write_file("languages/it.php", "it");
    let dest = TestTree::install("1.8.16");

    let mut copier = FileCopier::new();
    let filters = pack_filters().with_dest_root(format!("{}/", dest.path.display()));
    walk(pack.root(), &filters, "1.8.16", Some(&mut copier)).unwrap();
    assert_eq!(dest.read_file("languages/it.php"), "it");
}
