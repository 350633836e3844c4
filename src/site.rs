//! Site assembly: static asset copying and page generation.
//!
//! Everything here is file-system glue around [`render_document`] and
//! [`extract_document_title`].

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};
use walkdir::WalkDir;

use crate::config::SiteConfig;
use crate::error::SiteError;
use crate::{extract_document_title, render_document};

const TITLE_PLACEHOLDER: &str = "{{ Title }}";
const CONTENT_PLACEHOLDER: &str = "{{ Content }}";

fn walk_error(root: &Path) -> impl Fn(walkdir::Error) -> SiteError + '_ {
    move |err| SiteError::Io {
        path: err.path().unwrap_or(root).to_path_buf(),
        source: io::Error::from(err),
    }
}

fn create_dir(path: &Path) -> Result<(), SiteError> {
    if path.exists() {
        return Err(SiteError::OutputExists(path.to_path_buf()));
    }
    fs::create_dir(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => SiteError::MissingPath(path.to_path_buf()),
        _ => SiteError::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Mirror `source` into a new `target` directory. `target` must not exist.
pub fn copy_static(source: &Path, target: &Path) -> Result<(), SiteError> {
    if target.exists() {
        return Err(SiteError::OutputExists(target.to_path_buf()));
    }
    if !source.is_dir() {
        return Err(SiteError::MissingPath(source.to_path_buf()));
    }
    create_dir(target)?;

    for entry in WalkDir::new(source).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(walk_error(source))?;
        let Ok(relative) = entry.path().strip_prefix(source) else {
            continue;
        };
        let dest = target.join(relative);
        if entry.file_type().is_dir() {
            create_dir(&dest)?;
        } else {
            debug!("Copying {} to {}", entry.path().display(), dest.display());
            fs::copy(entry.path(), &dest).map_err(SiteError::io(&dest))?;
        }
    }
    Ok(())
}

/// Fill the title and content placeholders, then prefix root-relative links
/// with `base_path`.
pub fn substitute_template(template: &str, title: &str, content: &str, base_path: &str) -> String {
    template
        .replace(TITLE_PLACEHOLDER, title)
        .replace(CONTENT_PLACEHOLDER, content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"))
}

/// Render one markdown file through `template_path` into `dest_path`.
pub fn generate_page(
    from_path: &Path,
    template_path: &Path,
    dest_path: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    for path in [from_path, template_path] {
        if !path.exists() {
            return Err(SiteError::MissingPath(path.to_path_buf()));
        }
    }
    info!(
        "Generating page from {} to {} using template {}",
        from_path.display(),
        dest_path.display(),
        template_path.display()
    );

    let markdown = fs::read_to_string(from_path).map_err(SiteError::io(from_path))?;
    let template = fs::read_to_string(template_path).map_err(SiteError::io(template_path))?;

    let markdown_error = |source| SiteError::Markdown {
        path: from_path.to_path_buf(),
        source,
    };
    let content = render_document(&markdown).map_err(markdown_error)?;
    let title = extract_document_title(&markdown).map_err(markdown_error)?;

    let page = substitute_template(&template, &title, &content, base_path);
    fs::write(dest_path, page).map_err(SiteError::io(dest_path))
}

/// Generate a page for every `.md` file under `content_dir`, mirroring its
/// directory layout under `dest_dir`.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template_path: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    for path in [content_dir, template_path, dest_dir] {
        if !path.exists() {
            return Err(SiteError::MissingPath(path.to_path_buf()));
        }
    }

    for entry in WalkDir::new(content_dir).min_depth(1).sort_by_file_name() {
        let entry = entry.map_err(walk_error(content_dir))?;
        let Ok(relative) = entry.path().strip_prefix(content_dir) else {
            continue;
        };
        let dest = dest_dir.join(relative);

        if entry.file_type().is_dir() {
            create_dir(&dest)?;
        } else if entry.path().extension().is_some_and(|ext| ext == "md") {
            generate_page(
                entry.path(),
                template_path,
                &dest.with_extension("html"),
                base_path,
            )?;
        } else {
            debug!("Skipping non-markdown file {}", entry.path().display());
        }
    }
    Ok(())
}

/// Rebuild the whole site: clear the output directory, copy the static
/// assets into it, then generate every page.
pub fn build(site: &SiteConfig) -> Result<(), SiteError> {
    if site.output_dir.exists() {
        info!("Removing {}", site.output_dir.display());
        fs::remove_dir_all(&site.output_dir).map_err(SiteError::io(&site.output_dir))?;
    }
    if !site.static_dir.is_dir() {
        return Err(SiteError::MissingPath(site.static_dir.clone()));
    }

    copy_static(&site.static_dir, &site.output_dir)?;
    generate_pages_recursive(
        &site.content_dir,
        &site.template,
        &site.output_dir,
        &site.base_path,
    )?;

    info!("Created {}", site.output_dir.display());
    Ok(())
}
