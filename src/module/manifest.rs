//! `manifest.xml` reader
//!
//! Only the root element's direct `name`, `version` and `description`
//! children are read. Nested markup inside them is ignored.

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::Event;

use super::{MetadataError, MetadataSource, ModuleDescriptor};
use crate::pack::{LANGUAGES_DIR, MANIFEST_FILE};
use crate::path_utils::base_name;

#[derive(Clone, Copy)]
enum Field {
    Name,
    Version,
    Description,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"name" => Some(Field::Name),
            b"version" => Some(Field::Version),
            b"description" => Some(Field::Description),
            _ => None,
        }
    }
}

#[derive(Default)]
struct ManifestFields {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
}

impl ManifestFields {
    /// Keep the first occurrence of each field
    fn store(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Version => &mut self.version,
            Field::Description => &mut self.description,
        };
        if slot.is_none() {
            *slot = Some(value);
        }
    }
}

/// Read a module descriptor from its plugin manifest.
///
/// The module must also have a `languages/` directory.
pub fn read(module_dir: &Path) -> std::result::Result<ModuleDescriptor, MetadataError> {
    if !module_dir.join(LANGUAGES_DIR).exists() {
        return Err(MetadataError::NoLanguagesDir);
    }
    let unique = base_name(module_dir).ok_or(MetadataError::UndecodableName)?;
    let path = MetadataSource::Manifest.file_path(module_dir);
    if !path.exists() {
        return Err(MetadataError::NotFound(MANIFEST_FILE.to_string()));
    }
    let content = fs::read_to_string(&path).map_err(|e| MetadataError::Invalid {
        file: MANIFEST_FILE.to_string(),
        reason: e.to_string(),
    })?;

    let fields = parse(&content).map_err(|reason| {
        tracing::warn!(manifest = %path.display(), %reason, "manifest is not valid");
        MetadataError::Invalid {
            file: MANIFEST_FILE.to_string(),
            reason,
        }
    })?;

    Ok(ModuleDescriptor {
        unique: unique.to_string(),
        name: fields.name.unwrap_or_default(),
        description: fields.description.unwrap_or_default(),
        version: fields.version.unwrap_or_default(),
    })
}

fn parse(xml: &str) -> std::result::Result<ManifestFields, String> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut fields = ManifestFields::default();
    let mut depth = 0usize;
    let mut root_seen = false;
    // field being filled while inside one of the root's direct children
    let mut current: Option<Field> = None;
    let mut text = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                depth += 1;
                root_seen = true;
                if depth == 2 {
                    current = Field::from_tag(e.local_name().as_ref());
                    text.clear();
                }
            }
            Ok(Event::Empty(e)) => {
                if depth == 0 {
                    root_seen = true;
                } else if depth == 1 {
                    if let Some(field) = Field::from_tag(e.local_name().as_ref()) {
                        fields.store(field, String::new());
                    }
                }
            }
            Ok(Event::End(_)) => {
                if depth == 2 {
                    if let Some(field) = current.take() {
                        fields.store(field, std::mem::take(&mut text));
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Text(t)) => {
                if depth == 2 && current.is_some() {
                    let value = t.unescape().map_err(|e| e.to_string())?;
                    text.push_str(&value);
                }
            }
            Ok(Event::CData(c)) => {
                if depth == 2 && current.is_some() {
                    text.push_str(&String::from_utf8_lossy(&c.into_inner()));
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.to_string()),
            Ok(_) => {}
        }
    }

    if !root_seen {
        return Err("document has no root element".to_string());
    }
    if depth != 0 {
        return Err("unexpected end of document".to_string());
    }
    Ok(fields)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const BLOG_MANIFEST: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<plugin_manifest xmlns="http://www.elgg.org/plugin_manifest/1.8">
    <name>Blog</name>
    <author>Core developers</author>
    <version>1.8</version>
    <description>Blogging &amp; more</description>
    <category>bundled</category>
    <requires>
        <type>elgg_release</type>
        <version>1.8</version>
    </requires>
</plugin_manifest>
"#;

    fn module_with_manifest(temp: &TempDir, slug: &str, manifest: &str) -> std::path::PathBuf {
        let dir = temp.path().join(slug);
        fs::create_dir_all(dir.join("languages")).unwrap();
        fs::write(dir.join(MANIFEST_FILE), manifest).unwrap();
        dir
    }

    #[test]
    fn test_read_manifest_fields() {
        let temp = TempDir::new().unwrap();
        let dir = module_with_manifest(&temp, "blog", BLOG_MANIFEST);

        let descriptor = read(&dir).unwrap();
        assert_eq!(descriptor.unique, "blog");
        assert_eq!(descriptor.name, "Blog");
        assert_eq!(descriptor.version, "1.8");
        assert_eq!(descriptor.description, "Blogging & more");
    }

    #[test]
    fn test_nested_version_does_not_override() {
        let temp = TempDir::new().unwrap();
        let dir = module_with_manifest(
            &temp,
            "pages",
            "<plugin_manifest><requires><version>9.9</version></requires><version>1.2</version></plugin_manifest>",
        );
        assert_eq!(read(&dir).unwrap().version, "1.2");
    }

    #[test]
    fn test_missing_fields_are_empty() {
        let temp = TempDir::new().unwrap();
        let dir = module_with_manifest(&temp, "x", "<plugin_manifest><name/></plugin_manifest>");
        let descriptor = read(&dir).unwrap();
        assert_eq!(descriptor.name, "");
        assert_eq!(descriptor.description, "");
    }

    #[test]
    fn test_cdata_description() {
        let temp = TempDir::new().unwrap();
        let dir = module_with_manifest(
            &temp,
            "x",
            "<plugin_manifest><description><![CDATA[<b>bold</b>]]></description></plugin_manifest>",
        );
        assert_eq!(read(&dir).unwrap().description, "<b>bold</b>");
    }

    #[test]
    fn test_invalid_xml() {
        let temp = TempDir::new().unwrap();
        let dir = module_with_manifest(&temp, "x", "<plugin_manifest><name>Blog</version>");
        assert!(matches!(read(&dir), Err(MetadataError::Invalid { .. })));
    }

    #[test]
    fn test_truncated_xml() {
        let temp = TempDir::new().unwrap();
        let dir = module_with_manifest(&temp, "x", "<plugin_manifest><name>Blog");
        assert!(matches!(read(&dir), Err(MetadataError::Invalid { .. })));
    }

    #[test]
    fn test_requires_languages_dir() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("nolang");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(MANIFEST_FILE), BLOG_MANIFEST).unwrap();
        assert_eq!(read(&dir), Err(MetadataError::NoLanguagesDir));
    }
}
