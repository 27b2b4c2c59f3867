//! Markdown analysis: plain text, word count and headings

use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use super::post::{TableOfContents, TocItem};

/// What the index needs to know about a post body
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkdownSummary {
    pub plain_text: String,
    pub word_count: usize,
    pub table_of_contents: TableOfContents,
}

/// Markdown analyzer
pub struct MarkdownAnalyzer {
    options: Options,
}

impl MarkdownAnalyzer {
    pub fn new() -> Self {
        // No YAML metadata blocks: front-matter is handled in FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        Self { options }
    }

    /// Walk the document once, collecting text and headings
    pub fn analyze(&self, markdown: &str) -> MarkdownSummary {
        let source = strip_mdx_statements(markdown);
        let parser = Parser::new_ext(&source, self.options);

        let mut plain_text = String::new();
        let mut headings: Vec<(usize, String)> = Vec::new();
        let mut current_heading: Option<(usize, String)> = None;
        let mut in_code_block = false;

        for event in parser {
            match event {
                Event::Start(Tag::Heading { level, .. }) => {
                    current_heading = Some((heading_depth(level), String::new()));
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((depth, title)) = current_heading.take() {
                        let title = title.trim().to_string();
                        if !title.is_empty() {
                            headings.push((depth, title));
                        }
                    }
                    push_separator(&mut plain_text);
                }
                Event::Start(Tag::CodeBlock(_)) => in_code_block = true,
                Event::End(TagEnd::CodeBlock) => in_code_block = false,
                Event::Text(_) if in_code_block => {}
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, title)) = current_heading.as_mut() {
                        title.push_str(&text);
                    }
                    plain_text.push_str(&text);
                }
                Event::SoftBreak | Event::HardBreak => {
                    if let Some((_, title)) = current_heading.as_mut() {
                        title.push(' ');
                    }
                    push_separator(&mut plain_text);
                }
                Event::End(TagEnd::Paragraph)
                | Event::End(TagEnd::Item)
                | Event::End(TagEnd::TableCell) => push_separator(&mut plain_text),
                _ => {}
            }
        }

        let plain_text = plain_text.trim().to_string();
        let word_count = plain_text.split_whitespace().count();

        MarkdownSummary {
            plain_text,
            word_count,
            table_of_contents: build_toc(&headings),
        }
    }
}

impl Default for MarkdownAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

fn heading_depth(level: HeadingLevel) -> usize {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

fn push_separator(text: &mut String) {
    if !text.is_empty() && !text.ends_with(' ') {
        text.push(' ');
    }
}

/// Drop top-level MDX `import`/`export` lines, which are not prose
fn strip_mdx_statements(markdown: &str) -> String {
    markdown
        .lines()
        .filter(|line| !(line.starts_with("import ") || line.starts_with("export ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Nest headings by depth relative to the shallowest one
fn build_toc(headings: &[(usize, String)]) -> TableOfContents {
    let min_depth = headings.iter().map(|(d, _)| *d).min().unwrap_or(1);
    let mut items = Vec::new();

    for (depth, title) in headings {
        let item = TocItem {
            url: format!("#{}", slug::slugify(title)),
            title: title.clone(),
            items: Vec::new(),
        };
        insert_toc_item(&mut items, depth - min_depth, item);
    }

    TableOfContents { items }
}

fn insert_toc_item(items: &mut Vec<TocItem>, depth: usize, item: TocItem) {
    match items.last_mut() {
        Some(last) if depth > 0 => insert_toc_item(&mut last.items, depth - 1, item),
        _ => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text() {
        let analyzer = MarkdownAnalyzer::new();
        let summary = analyzer.analyze("Some *emphasis* and `code`.\n\nSecond [link](/x) here.");
        assert_eq!(summary.plain_text, "Some emphasis and code. Second link here.");
        assert_eq!(summary.word_count, 7);
    }

    #[test]
    fn test_table_of_contents_nesting() {
        let analyzer = MarkdownAnalyzer::new();
        let summary = analyzer.analyze("## Intro\n\ntext\n\n### Details\n\n## Wrap Up\n");
        let items = &summary.table_of_contents.items;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Intro");
        assert_eq!(items[0].url, "#intro");
        assert_eq!(items[0].items.len(), 1);
        assert_eq!(items[0].items[0].title, "Details");
        assert_eq!(items[1].url, "#wrap-up");
    }

    #[test]
    fn test_mdx_imports_are_not_text() {
        let analyzer = MarkdownAnalyzer::new();
        let summary = analyzer.analyze("import Chart from './chart'\n\nActual words.");
        assert_eq!(summary.plain_text, "Actual words.");
    }

    #[test]
    fn test_code_blocks_are_not_text() {
        let analyzer = MarkdownAnalyzer::new();
        let summary = analyzer.analyze("Before.\n\n```js\nconst x = 1\n```\n\nAfter.");
        assert_eq!(summary.plain_text, "Before. After.");
    }

    #[test]
    fn test_empty_body() {
        let summary = MarkdownAnalyzer::new().analyze("");
        assert_eq!(summary.word_count, 0);
        assert!(summary.table_of_contents.items.is_empty());
    }
}
