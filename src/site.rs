use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::Config;
use crate::error::MarkdownError;
use crate::html::markdown_to_html;
use crate::parser::extract_title;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("markdown error: {0}")]
    Markdown(#[from] MarkdownError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("content directory not found: {0}")]
    ContentDirNotFound(PathBuf),

    #[error("template not found: {0}")]
    TemplateNotFound(PathBuf),
}

/// Build the whole site: wipe the output directory, mirror the static
/// assets into it, then render every Markdown source through the template.
pub fn build_site(config: &Config) -> Result<(), SiteError> {
    if config.output_dir.exists() {
        println!("Deleting {}...", config.output_dir.display());
        fs::remove_dir_all(&config.output_dir)?;
    }

    println!("Copying static files to {}...", config.output_dir.display());
    copy_dir_recursive(&config.static_dir, &config.output_dir)?;

    println!("Generating pages...");
    generate_pages_recursive(
        &config.content_dir,
        &config.template,
        &config.output_dir,
        &config.base_path,
    )
}

/// Mirror `src` into `dest`, creating directories as needed.
pub fn copy_dir_recursive(src: &Path, dest: &Path) -> Result<(), SiteError> {
    if !dest.exists() {
        fs::create_dir_all(dest)?;
    }

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest.join(entry.file_name());
        println!("{} -> {}", src_path.display(), dest_path.display());
        if src_path.is_file() {
            fs::copy(&src_path, &dest_path)?;
        } else {
            copy_dir_recursive(&src_path, &dest_path)?;
        }
    }
    Ok(())
}

/// Render one Markdown file through the template and write the result.
///
/// `{{ Title }}` and `{{ Content }}` are replaced first; the `href="/` and
/// `src="/` rewrites run on the substituted page, so absolute links inside
/// the rendered content pick up the base path too.
pub fn generate_page(
    source: &Path,
    template: &Path,
    dest: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    println!(
        "Generating {} -> {} using {}",
        source.display(),
        dest.display(),
        template.display()
    );

    let markdown = fs::read_to_string(source)?;
    let template = fs::read_to_string(template)?;

    let content = markdown_to_html(&markdown)?;
    let title = extract_title(&markdown)?;

    let page = template
        .replace("{{ Title }}", &title)
        .replace("{{ Content }}", &content)
        .replace("href=\"/", &format!("href=\"{base_path}"))
        .replace("src=\"/", &format!("src=\"{base_path}"));

    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(dest, page)?;
    Ok(())
}

/// Walk the content tree, rendering every `.md` file to an `.html` file at
/// the mirrored location. Other files are skipped.
pub fn generate_pages_recursive(
    content_dir: &Path,
    template: &Path,
    dest_dir: &Path,
    base_path: &str,
) -> Result<(), SiteError> {
    if !content_dir.exists() {
        return Err(SiteError::ContentDirNotFound(content_dir.to_path_buf()));
    }
    if !template.exists() {
        return Err(SiteError::TemplateNotFound(template.to_path_buf()));
    }

    for entry in fs::read_dir(content_dir)? {
        let entry = entry?;
        let src_path = entry.path();
        let dest_path = dest_dir.join(entry.file_name());
        if src_path.is_dir() {
            generate_pages_recursive(&src_path, template, &dest_path, base_path)?;
        } else if src_path.extension().is_some_and(|ext| ext == "md") {
            generate_page(&src_path, template, &dest_path.with_extension("html"), base_path)?;
        }
    }
    Ok(())
}
