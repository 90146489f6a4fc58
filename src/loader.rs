//! Reading recipes from disk: title inference and sibling image lookup.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::LoaderOptions;
use crate::error::CookError;
use crate::model::{Recipe, IMAGE_KEY};
use crate::parser::CooklangParser;

/// Image extensions probed next to a recipe file, in order
pub const IMAGE_EXTENSIONS: [&str; 7] = ["webp", "jpg", "jpeg", "png", "bmp", "gif", "heic"];

/// Find an image with the same stem as `path` in the same directory.
pub fn find_related_image(path: &Path) -> Option<PathBuf> {
    let stem = path.file_stem()?;
    let directory = path.parent().unwrap_or_else(|| Path::new(""));

    IMAGE_EXTENSIONS.iter().find_map(|extension| {
        let mut name = stem.to_os_string();
        name.push(".");
        name.push(extension);
        let candidate = directory.join(name);
        candidate.is_file().then_some(candidate)
    })
}

/// Read and parse a `.cook` file with the default parser.
pub fn read_cook(path: impl AsRef<Path>, options: &LoaderOptions) -> Result<Recipe, CookError> {
    read_cook_with(path, options, &CooklangParser::new())
}

/// Read and parse a `.cook` file.
///
/// A missing file is reported as [`CookError::NotFound`]; a parse failure is
/// wrapped in [`CookError::Parse`] with the path.
pub fn read_cook_with(
    path: impl AsRef<Path>,
    options: &LoaderOptions,
    parser: &CooklangParser,
) -> Result<Recipe, CookError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(CookError::NotFound(path.to_path_buf()));
    }

    let text = fs::read_to_string(path)?.replace("\r\n", "\n");
    let mut recipe = parser.parse(&text).map_err(|e| CookError::Parse {
        path: path.to_path_buf(),
        source: Box::new(e),
    })?;

    if options.infer_title && recipe.title.is_none() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            let title = title_from_stem(stem);
            debug!("Inferred title '{}' from {}", title, path.display());
            recipe.title = Some(title);
        }
    }

    if options.search_image {
        if let Some(image) = find_related_image(path) {
            debug!("Found image {}", image.display());
            recipe.metadata.insert(
                IMAGE_KEY.to_string(),
                serde_yaml::Value::String(image.display().to_string()),
            );
        }
    }

    Ok(recipe)
}

/// `green_curry-paste` becomes `Green Curry Paste`
pub fn title_from_stem(stem: &str) -> String {
    title_case(&stem.replace(['_', '-'], " "))
}

/// Uppercase the first letter of every run of letters, lowercase the rest.
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_from_stem() {
        assert_eq!(title_from_stem("green_curry-paste"), "Green Curry Paste");
        assert_eq!(title_from_stem("BANANA bread"), "Banana Bread");
        assert_eq!(title_from_stem("mom's 2nd pie"), "Mom'S 2Nd Pie");
    }

    #[test]
    fn test_missing_file() {
        let err = read_cook("/definitely/not/here.cook", &LoaderOptions::default()).unwrap_err();
        assert!(matches!(err, CookError::NotFound(ref p) if p.ends_with("here.cook")));
    }
}
