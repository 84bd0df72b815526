use crate::index::section::Section;
use crate::index::types::PageIndex;
use anyhow::Result;
use std::collections::HashMap;
use std::path::Path;

/// Page counts for one index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub page_count: usize,
    /// Pages per section, catalog order first, then unrecognized codes sorted.
    pub by_section: Vec<(Section, usize)>,
}

impl IndexStats {
    pub fn collect(index: &PageIndex) -> Self {
        let mut counts: HashMap<&Section, usize> = HashMap::new();
        for page in index {
            *counts.entry(&page.section).or_insert(0) += 1;
        }

        let mut by_section: Vec<(Section, usize)> = Vec::new();
        for section in Section::CATALOG.iter() {
            if let Some(count) = counts.remove(section) {
                by_section.push((section.clone(), count));
            }
        }

        let mut rest: Vec<_> = counts
            .into_iter()
            .map(|(section, count)| (section.clone(), count))
            .collect();
        rest.sort_by(|a, b| a.0.code().cmp(b.0.code()));
        by_section.extend(rest);

        Self {
            page_count: index.len(),
            by_section,
        }
    }
}

/// Display index statistics
pub fn show_stats(index: &PageIndex, source: &Path) -> Result<()> {
    let stats = IndexStats::collect(index);

    println!("Index Statistics");
    println!("================");
    println!();
    println!("Source:           {}", source.display());
    println!("Page count:       {}", stats.page_count);

    if let Ok(meta) = std::fs::metadata(source) {
        if meta.is_file() {
            println!("Cache size:       {}", format_size(meta.len()));
        }
    }

    if !stats.by_section.is_empty() {
        println!();
        println!("Pages by section:");
        for (section, count) in &stats.by_section {
            let code = if section.is_none() { "-" } else { section.code() };
            println!("  {:8} {:6}  {}", code, count, section.description());
        }
    }

    Ok(())
}

/// Format byte size to human readable
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::page::Page;

    #[test]
    fn test_collect_orders_by_catalog() {
        let index = PageIndex::new(vec![
            Page::new("ls", Section::Administration, ""),
            Page::new("zz", Section::Other("9x".to_string()), ""),
            Page::new("cat", Section::Command, ""),
            Page::new("ls", Section::Command, ""),
        ]);

        let stats = IndexStats::collect(&index);
        assert_eq!(stats.page_count, 4);
        assert_eq!(
            stats.by_section,
            vec![
                (Section::Command, 2),
                (Section::Administration, 1),
                (Section::Other("9x".to_string()), 1),
            ]
        );
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 bytes");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(3 * 1024 * 1024), "3.00 MB");
    }
}
