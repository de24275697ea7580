//! Directory listing page for directories without an index file

use std::io;
use std::path::Path;
use tokio::fs;

use super::resolve::{percent_decode, percent_encode_segment};

/// One row of the listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    pub name: String,
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl ListingEntry {
    fn display_name(&self) -> String {
        if self.is_dir {
            format!("{}/", self.name)
        } else if self.is_symlink {
            format!("{}@", self.name)
        } else {
            self.name.clone()
        }
    }

    fn href(&self) -> String {
        let mut href = percent_encode_segment(&self.name);
        if self.is_dir {
            href.push('/');
        }
        href
    }
}

/// Read `dir` and render its listing; `uri_path` is the request path
pub async fn list_directory(dir: &Path, uri_path: &str) -> io::Result<String> {
    let entries = read_entries(dir).await?;
    let title_path = percent_decode(uri_path).unwrap_or_else(|| uri_path.to_string());
    Ok(render(&title_path, &entries))
}

async fn read_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        // Names that are not UTF-8 cannot be linked reliably
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        let file_type = entry.file_type().await?;
        let is_symlink = file_type.is_symlink();
        let is_dir = if is_symlink {
            fs::metadata(entry.path()).await.is_ok_and(|m| m.is_dir())
        } else {
            file_type.is_dir()
        };
        entries.push(ListingEntry {
            name,
            is_dir,
            is_symlink,
        });
    }

    entries.sort_by_key(|e| e.name.to_lowercase());
    Ok(entries)
}

/// Render listing HTML for `title_path` (decoded request path)
pub fn render(title_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", escape_html(title_path));
    let mut html = String::with_capacity(256 + entries.len() * 64);

    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n"));
    html.push_str(&format!("<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for entry in entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            entry.href(),
            escape_html(&entry.display_name())
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}

/// Escape text for inclusion in HTML content or a quoted attribute
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            c => out.push(c),
        }
    }
    out
}
